//! A minimal bot: spawns archers from its start while it has the power,
//! and sends every squad it owns at an enemy token slot.
//!
//! ```text
//! cargo run -p basic-bot -- --port 6370
//! ```

use clap::Parser;
use skybot::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Card templates the deck is built from.
const MASTER_ARCHERS: CardId = 1_012;
const AVATAR_OF_FROST: CardId = 1_160;

/// Power a squad of archers costs.
const SQUAD_POWER: f32 = 50.0;

#[derive(Parser)]
#[command(name = "basic-bot", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port the game host calls.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

// ---------------------------------------------------------------------------
// Bot
// ---------------------------------------------------------------------------

#[derive(Default)]
struct BasicBot {
    my_id: EntityId,
    opponents: Vec<EntityId>,
    start: Position2D,
}

impl BasicBot {
    fn deck() -> Deck {
        Deck::new("RelaxDeck").with_cards(&[
            card_id_with_upgrade(MASTER_ARCHERS, Upgrade::U3),
            card_id_with_upgrade(AVATAR_OF_FROST, Upgrade::U3),
        ])
    }

    /// The last enemy token slot on the map, if any.
    fn target(&self, entities: &MapEntities) -> Option<EntityId> {
        entities
            .token_slots
            .iter()
            .filter(|slot| {
                slot.entity
                    .player_entity_id
                    .is_some_and(|owner| self.opponents.contains(&owner))
            })
            .map(|slot| slot.entity.id)
            .last()
    }
}

impl Bot for BasicBot {
    fn name(&self) -> &str {
        "BasicBot"
    }

    fn decks_for_map(&mut self, map: &MapInfo) -> Vec<Deck> {
        info!(map = map.map.0, "asked for decks");
        vec![Self::deck()]
    }

    fn prepare_for_battle(&mut self, map: &MapInfo, deck: &Deck) {
        info!(map = map.map.0, deck = %deck.name, "preparing");
        self.opponents.clear();
    }

    fn match_start(&mut self, state: &GameStartState) {
        self.my_id = state.your_player_id;
        let Some(me) = state.me() else {
            warn!(id = %self.my_id, "own player missing from start state");
            return;
        };

        let team = me.entity.team;
        self.opponents = state
            .players
            .iter()
            .filter(|p| p.entity.team != team)
            .map(|p| p.entity.id)
            .collect();

        for slot in state.entities.token_slots_of(self.my_id) {
            self.start = slot.entity.position.to_2d();
            info!(slot = %slot.entity.id, x = self.start.x, y = self.start.y, "own token slot");
        }
        info!(id = %self.my_id, opponents = self.opponents.len(), "match started");
    }

    fn tick(&mut self, state: &GameState) -> Vec<Command> {
        let Some(me) = state.player(self.my_id) else {
            warn!(id = %self.my_id, "own player missing from tick state");
            return Vec::new();
        };

        let mut commands = Vec::new();
        if me.power >= SQUAD_POWER {
            commands.push(Command::ProduceSquad(CommandProduceSquad {
                card_position: 0,
                xy: self.start,
            }));
        }

        let army: Vec<EntityId> = state
            .entities
            .squads_of(self.my_id)
            .map(|s| s.entity.id)
            .collect();
        if !army.is_empty() {
            if let Some(target) = self.target(&state.entities) {
                commands.push(Command::GroupAttack(CommandGroupAttack {
                    squads: army,
                    target_entity_id: target,
                    force_attack: false,
                }));
            }
        }

        commands
    }

    fn match_end(&mut self) {
        info!("match over");
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), SkybotError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("basic_bot=info,skybot=info")),
        )
        .init();

    let cli = Cli::parse();

    let server = SkybotServer::builder()
        .bind(&format!("{}:{}", cli.host, cli.port))
        .build(BasicBot::default())
        .await?;

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, shutting down");
            shutdown.shutdown();
        }
    });

    server.run().await
}

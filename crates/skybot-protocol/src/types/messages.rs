//! Top-level request and response bodies, one per route, plus the map and
//! deck records they carry.

use serde::{Deserialize, Serialize};

use super::{
    CardId, EntityId, MapEntities, MapId, PlayerCommand, PlayerEntity, RejectedCommand, Tick,
    NOT_A_CARD,
};
use crate::version::check_version;
use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMapInfo {
    pub name: String,
    /// Checksum of the map file.
    pub crc: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfo {
    pub map: MapId,
    /// Only set for community maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_map_details: Option<CommunityMapInfo>,
}

// ---------------------------------------------------------------------------
// Decks
// ---------------------------------------------------------------------------

/// Number of card slots in every deck.
pub const DECK_SIZE: usize = 20;

/// A named deck of exactly [`DECK_SIZE`] card slots. Unused slots hold
/// [`NOT_A_CARD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cover_card_index: u8,
    pub cards: [CardId; DECK_SIZE],
}

impl Deck {
    /// An empty deck: every slot is [`NOT_A_CARD`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cover_card_index: 0,
            cards: [NOT_A_CARD; DECK_SIZE],
        }
    }

    /// Fills slots in order from `cards`. Extra cards past the last slot
    /// are dropped.
    pub fn with_cards(mut self, cards: &[CardId]) -> Self {
        for (slot, card) in self.cards.iter_mut().zip(cards) {
            *slot = *card;
        }
        self
    }

    /// Number of occupied slots.
    pub fn card_count(&self) -> usize {
        self.cards.iter().filter(|&&c| c != NOT_A_CARD).count()
    }
}

// ---------------------------------------------------------------------------
// Route bodies
// ---------------------------------------------------------------------------

/// Request body of `hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHello {
    /// Protocol version the host speaks.
    pub version: u64,
    /// The map the host is asking about.
    pub map: MapInfo,
}

impl ApiHello {
    /// Fails unless the host speaks [`PROTOCOL_VERSION`](crate::PROTOCOL_VERSION).
    pub fn check_version(&self) -> Result<(), ProtocolError> {
        check_version(self.version)
    }
}

/// Response body of `hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiForMap {
    /// Unique bot name.
    pub name: String,
    /// Decks the bot can use on the map. Empty means the bot cannot play it.
    pub decks: Vec<Deck>,
}

/// Request body of `prepare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prepare {
    /// Name of a deck from the `hello` response.
    pub deck: String,
    pub map_info: MapInfo,
}

/// A participant of the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub name: String,
    /// The host does not always fill this in.
    pub deck: Deck,
    pub entity: PlayerEntity,
}

/// Request body of `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStartState {
    /// Player the bot controls, or spectates for.
    pub your_player_id: EntityId,
    pub players: Vec<MatchPlayer>,
    pub entities: MapEntities,
}

impl GameStartState {
    /// The bot's own player record.
    pub fn me(&self) -> Option<&MatchPlayer> {
        self.players
            .iter()
            .find(|p| p.entity.id == self.your_player_id)
    }
}

/// Request body of `tick`, sent every tick from the second one on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Ticks since the match started (10 per second).
    pub current_tick: Tick,
    /// Commands the host executes this tick.
    pub commands: Vec<PlayerCommand>,
    pub rejected_commands: Vec<RejectedCommand>,
    pub players: Vec<PlayerEntity>,
    pub entities: MapEntities,
}

impl GameState {
    pub fn player(&self, id: EntityId) -> Option<&PlayerEntity> {
        self.players.iter().find(|p| p.id == id)
    }
}

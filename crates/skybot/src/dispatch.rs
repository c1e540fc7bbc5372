//! Route dispatch: request bytes in, bot callback, response bytes out.
//!
//! The dispatcher knows nothing about HTTP. It owns the bot and a codec,
//! decodes the body for the route, calls the matching [`Bot`] method, and
//! encodes whatever the route answers with. Routes that answer with unit
//! produce an empty body.

use skybot_protocol::{
    AiForMap, ApiHello, Codec, GameStartState, GameState, JsonCodec, Prepare, Route,
};
use tracing::{debug, info};

use crate::{Bot, SkybotError};

/// Drives a [`Bot`] from raw request bodies.
///
/// [`SkybotServer`](crate::SkybotServer) wraps one of these behind its
/// HTTP routes. Using it directly is handy for replaying recorded host
/// traffic or for testing a bot without a socket:
///
/// ```rust
/// use skybot::prelude::*;
///
/// struct Idle;
///
/// impl Bot for Idle {
///     fn name(&self) -> &str {
///         "Idle"
///     }
///     fn decks_for_map(&mut self, _map: &MapInfo) -> Vec<Deck> {
///         vec![Deck::new("Main")]
///     }
///     fn prepare_for_battle(&mut self, _map: &MapInfo, _deck: &Deck) {}
///     fn match_start(&mut self, _state: &GameStartState) {}
///     fn tick(&mut self, _state: &GameState) -> Vec<Command> {
///         Vec::new()
///     }
/// }
///
/// let mut dispatcher = Dispatcher::new(Idle);
/// let reply = dispatcher.dispatch(Route::End, b"").unwrap();
/// assert!(reply.is_empty());
/// ```
pub struct Dispatcher<B, C = JsonCodec> {
    bot: B,
    codec: C,
}

impl<B: Bot> Dispatcher<B> {
    /// Creates a dispatcher speaking JSON.
    pub fn new(bot: B) -> Self {
        Self::with_codec(bot, JsonCodec)
    }
}

impl<B: Bot, C: Codec> Dispatcher<B, C> {
    pub fn with_codec(bot: B, codec: C) -> Self {
        Self { bot, codec }
    }

    /// The bot being driven.
    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn bot_mut(&mut self) -> &mut B {
        &mut self.bot
    }

    /// Handles one request for `route`.
    ///
    /// # Errors
    /// Any decode failure of `body`, a host speaking another protocol
    /// version (`hello`), or a deck name the bot never offered
    /// (`prepare`).
    pub fn dispatch(&mut self, route: Route, body: &[u8]) -> Result<Vec<u8>, SkybotError> {
        match route {
            Route::Hello => {
                let hello: ApiHello = self.codec.decode(body)?;
                hello.check_version()?;

                let reply = AiForMap {
                    name: self.bot.name().to_owned(),
                    decks: self.bot.decks_for_map(&hello.map),
                };
                info!(
                    bot = %reply.name,
                    map = hello.map.map.0,
                    decks = reply.decks.len(),
                    "hello"
                );
                Ok(self.codec.encode(&reply)?)
            }

            Route::Prepare => {
                let prepare: Prepare = self.codec.decode(body)?;
                let deck = self
                    .bot
                    .decks_for_map(&prepare.map_info)
                    .into_iter()
                    .find(|deck| deck.name == prepare.deck)
                    .ok_or(SkybotError::DeckNotFound(prepare.deck))?;

                self.bot.prepare_for_battle(&prepare.map_info, &deck);
                info!(deck = %deck.name, "prepared for battle");
                Ok(Vec::new())
            }

            Route::Start => {
                let state: GameStartState = self.codec.decode(body)?;
                self.bot.match_start(&state);
                info!(
                    player = %state.your_player_id,
                    players = state.players.len(),
                    "match started"
                );
                Ok(Vec::new())
            }

            Route::Tick => {
                let state: GameState = self.codec.decode(body)?;
                let commands = self.bot.tick(&state);
                debug!(
                    tick = state.current_tick,
                    rejected = state.rejected_commands.len(),
                    commands = commands.len(),
                    "tick"
                );
                Ok(self.codec.encode(&commands)?)
            }

            // The host sends nothing useful here; the body is not read.
            Route::End => {
                self.bot.match_end();
                info!("match ended");
                Ok(Vec::new())
            }
        }
    }
}

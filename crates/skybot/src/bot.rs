//! The `Bot` trait — the only thing a bot author implements.

use skybot_protocol::{Command, Deck, GameStartState, GameState, MapInfo};

/// Callbacks invoked by the server, one per protocol route.
///
/// Calls arrive in match order: `decks_for_map` (during `hello` and again
/// during `prepare`), `prepare_for_battle`, `match_start`, `tick` once per
/// game tick, then `match_end`. The server never calls two methods at the
/// same time, so implementations can keep plain mutable state.
///
/// Callbacks run on a blocking thread, not on the async runtime. Heavy
/// synchronous work in `tick` is fine, but a tick that overruns the
/// request deadline is answered with 408 and its commands are lost.
///
/// # Example
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
///
///     fn decks_for_map(&mut self, _map: &MapInfo) -> Vec<Deck> {
///         vec![Deck::new("Nothing")]
///     }
///
///     fn prepare_for_battle(&mut self, _map: &MapInfo, _deck: &Deck) {}
///
///     fn match_start(&mut self, _state: &GameStartState) {}
///
///     fn tick(&mut self, _state: &GameState) -> Vec<Command> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Bot: Send + 'static {
    /// Unique name reported in the `hello` response.
    fn name(&self) -> &str;

    /// Decks the bot is willing to play on `map`. An empty list tells the
    /// host the bot cannot play there.
    fn decks_for_map(&mut self, map: &MapInfo) -> Vec<Deck>;

    /// Called with the deck the host picked from [`decks_for_map`](Self::decks_for_map).
    fn prepare_for_battle(&mut self, map: &MapInfo, deck: &Deck);

    /// Called once with the initial state of the match.
    fn match_start(&mut self, state: &GameStartState);

    /// Called every tick. Returned commands are executed by the host.
    fn tick(&mut self, state: &GameState) -> Vec<Command>;

    /// Called when the match is over.
    fn match_end(&mut self) {}
}

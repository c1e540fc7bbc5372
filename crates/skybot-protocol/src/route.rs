//! The five endpoints the host calls, in match order.

use std::fmt;
use std::str::FromStr;

use crate::ProtocolError;

/// An endpoint of the bot protocol.
///
/// | route     | request body     | response body  |
/// |-----------|------------------|----------------|
/// | `hello`   | `ApiHello`       | `AiForMap`     |
/// | `prepare` | `Prepare`        | empty          |
/// | `start`   | `GameStartState` | empty          |
/// | `tick`    | `GameState`      | `[Command]`    |
/// | `end`     | ignored          | empty          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Hello,
    Prepare,
    Start,
    Tick,
    End,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Hello,
        Route::Prepare,
        Route::Start,
        Route::Tick,
        Route::End,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Route::Hello => "hello",
            Route::Prepare => "prepare",
            Route::Start => "start",
            Route::Tick => "tick",
            Route::End => "end",
        }
    }

    /// HTTP path of the route, e.g. `/tick`.
    pub fn path(self) -> String {
        format!("/{}", self.as_str())
    }

    /// Resolves a request path by its last segment.
    ///
    /// `/tick`, `tick` and `/bots/alpha/tick` all resolve to [`Route::Tick`];
    /// `/ticker` does not.
    pub fn from_path(path: &str) -> Result<Self, ProtocolError> {
        let segment = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        segment.parse()
    }
}

impl FromStr for Route {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownRoute(s.to_owned()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

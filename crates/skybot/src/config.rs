//! Server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Port the game host calls bots on unless told otherwise.
pub const DEFAULT_PORT: u16 = 6370;

/// Configuration for the bot HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on, `host:port`. Port 0 picks a free port.
    pub bind_addr: String,

    /// Deadline for reading a request and producing its response.
    /// Requests that take longer are answered with 408.
    ///
    /// Bot callbacks run on a blocking thread, so a callback that
    /// overruns still gets its 408 on time. The callback itself is not
    /// interrupted: it runs to completion, its result is dropped, and the
    /// next request waits for it to release the bot.
    pub request_timeout: Duration,

    /// Largest request body accepted. A full `tick` state on a busy map
    /// runs to a few megabytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("127.0.0.1:{DEFAULT_PORT}"),
            request_timeout: Duration::from_secs(60),
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

//! Unified error type for the bot server.

use skybot_protocol::ProtocolError;

/// Top-level error that wraps the protocol error and adds the server's own
/// failure modes.
#[derive(Debug, thiserror::Error)]
pub enum SkybotError {
    /// Decode, encode, routing, or version failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The request body could not be read (client hung up, or the body
    /// exceeded the configured limit).
    #[error("failed to read request body: {0}")]
    Body(#[source] axum::Error),

    /// A bot callback panicked (or was cancelled at runtime shutdown).
    #[error("bot callback failed: {0}")]
    Callback(#[source] tokio::task::JoinError),

    /// `prepare` named a deck the bot did not offer for the map.
    #[error("deck `{0}` not found")]
    DeckNotFound(String),
}

impl SkybotError {
    /// Errors after which the server must stop serving.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Protocol(ProtocolError::ProtocolVersionMismatch { .. })
        )
    }
}

//! # Skybot
//!
//! HTTP bot server for the skybot protocol.
//!
//! The game host drives a bot through five `POST` routes (`hello`,
//! `prepare`, `start`, `tick`, `end`). Bot authors implement the single
//! [`Bot`] trait and the server handles routing, decoding, encoding, and
//! the protocol version handshake.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skybot::prelude::*;
//!
//! // Implement Bot for your bot, then:
//! // let server = SkybotServer::builder()
//! //     .bind("0.0.0.0:6370")
//! //     .build(MyBot::default())
//! //     .await?;
//! // server.run().await
//! ```

mod bot;
mod config;
mod dispatch;
mod error;
mod handler;
mod server;

pub use bot::Bot;
pub use config::{ServerConfig, DEFAULT_PORT};
pub use dispatch::Dispatcher;
pub use error::SkybotError;
pub use server::{ShutdownHandle, SkybotServer, SkybotServerBuilder};

/// Convenience re-exports for bot authors.
pub mod prelude {
    pub use crate::{
        Bot, Dispatcher, ServerConfig, ShutdownHandle, SkybotError, SkybotServer, DEFAULT_PORT,
    };
    pub use skybot_protocol::*;
}

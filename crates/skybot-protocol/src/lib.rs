//! Wire protocol between the game host and a bot.
//!
//! This crate defines the "language" the two sides speak over HTTP:
//!
//! - **Variants** ([`Variant`], [`VariantCell`]) — closed sum types that
//!   travel as single-key JSON objects (`{"Surrender":{}}`).
//! - **Types** ([`Command`], [`GameState`], [`Deck`], ...) — every record
//!   and variant family of the protocol.
//! - **Catalog** ([`CATALOG`], [`RawVariant`]) — the runtime table of
//!   families and case labels, and an untyped variant form built on it.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — bytes in, typed values
//!   out, with every failure classified as a [`ProtocolError`].
//! - **Routes and version** ([`Route`], [`PROTOCOL_VERSION`]).
//!
//! # Architecture
//!
//! The protocol layer is pure: no I/O, no logging, no shared state. The
//! `skybot` crate puts an HTTP server in front of it.
//!
//! ```text
//! HTTP body (bytes) → Codec → GameState → Bot → Vec<Command> → Codec → bytes
//! ```

mod catalog;
mod codec;
mod error;
mod route;
mod types;
mod variant;
mod version;

pub use catalog::{family, FamilySchema, RawVariant, CATALOG};
pub use codec::{from_value, to_value, Codec, JsonCodec};
pub use error::ProtocolError;
pub use route::Route;
pub use types::*;
pub use variant::{Variant, VariantCell};
pub use version::{check_version, PROTOCOL_VERSION};

//! Every record and variant family that travels on the bot wire.
//!
//! Payload records are named `<Family><Case>`, so the payload of
//! `Command::GroupAttack` is `CommandGroupAttack`.

/// Declares zero-field payload records. They encode as `{}` and accept
/// any object on decode.
macro_rules! marker_payloads {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[allow(clippy::upper_case_acronyms)]
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Default,
                ::serde::Serialize, ::serde::Deserialize,
            )]
            pub struct $name {}
        )+
    };
}

mod ability;
mod aspect;
mod codes;
mod command;
mod entity;
mod geometry;
mod ids;
mod job;
mod messages;
mod target;

pub use ability::*;
pub use aspect::*;
pub use codes::*;
pub use command::*;
pub use entity::*;
pub use geometry::*;
pub use ids::*;
pub use job::*;
pub use messages::*;
pub use target::*;

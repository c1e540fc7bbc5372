//! Identifiers and card-id arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Entity identity
// ---------------------------------------------------------------------------

/// Host-assigned handle of anything that exists on the map: players,
/// squads, figures, buildings, slots, barriers, projectiles.
///
/// Ids are never reused within a match. `#[serde(transparent)]` keeps the
/// wire form a bare integer: `EntityId(42)` is just `42`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E-{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// Plain numeric ids. The host uses separate tables for each but they are
// never mixed with entity ids on the wire.
pub type CardId = u32;
pub type SquadId = u32;
pub type BuildingId = u32;
pub type SpellId = u32;
pub type AbilityId = u32;
pub type ModeId = u32;

/// Absolute tick number. One tick is 100 ms of game time.
pub type Tick = u32;
/// A duration measured in ticks.
pub type TickCount = u32;

/// Reserved card id for an empty deck slot.
pub const NOT_A_CARD: CardId = 0;

// ---------------------------------------------------------------------------
// Card upgrades
// ---------------------------------------------------------------------------

/// Upgrade level of a card.
///
/// An upgraded card's id is its template id plus one million per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Upgrade {
    #[default]
    U0,
    U1,
    U2,
    U3,
}

impl Upgrade {
    const STEP: CardId = 1_000_000;

    /// Id offset added to a card template for this level.
    pub const fn offset(self) -> CardId {
        match self {
            Self::U0 => 0,
            Self::U1 => Self::STEP,
            Self::U2 => 2 * Self::STEP,
            Self::U3 => 3 * Self::STEP,
        }
    }
}

/// Card id of `template` at the given upgrade level.
///
/// ```rust
/// use skybot_protocol::{card_id_with_upgrade, Upgrade};
///
/// assert_eq!(card_id_with_upgrade(1234, Upgrade::U3), 3_001_234);
/// ```
pub const fn card_id_with_upgrade(template: CardId, upgrade: Upgrade) -> CardId {
    template + upgrade.offset()
}

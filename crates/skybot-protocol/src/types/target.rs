//! Targets for spells and attacks.

use serde::{Deserialize, Serialize};

use super::{EntityId, Position2D};
use crate::variant::protocol_variant;

/// Target entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleTargetSingleEntity {
    pub id: EntityId,
}

/// Target location on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleTargetLocation {
    pub xy: Position2D,
}

protocol_variant! {
    /// Either an entity or a point on the ground.
    pub enum SingleTarget {
        SingleEntity(SingleTargetSingleEntity),
        Location(SingleTargetLocation),
    }
}

impl SingleTarget {
    pub fn entity(id: EntityId) -> Self {
        Self::SingleEntity(SingleTargetSingleEntity { id })
    }

    pub fn location(xy: Position2D) -> Self {
        Self::Location(SingleTargetLocation { xy })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSingle {
    pub single: SingleTarget,
}

/// A line on the ground, used by multi-point spells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetMulti {
    pub xy_begin: Position2D,
    pub xy_end: Position2D,
}

protocol_variant! {
    pub enum Target {
        Single(TargetSingle),
        Multi(TargetMulti),
    }
}

impl From<SingleTarget> for Target {
    fn from(single: SingleTarget) -> Self {
        Self::Single(TargetSingle { single })
    }
}

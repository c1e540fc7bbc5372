//! Ability effects attached to entities and the area shapes they use.

use serde::{Deserialize, Serialize};

use super::{AbilityId, AbilityLine, EntityId, Position2D, SpellId, Tick, TickCount};
use crate::variant::protocol_variant;

// ---------------------------------------------------------------------------
// AreaShape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaShapeCircle {
    pub center: Position2D,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaShapeCone {
    pub base: Position2D,
    pub radius: f32,
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaShapeConeCut {
    pub start: Position2D,
    /// End point, possibly a unit direction instead.
    pub end: Position2D,
    pub radius: f32,
    pub width_near: f32,
    pub width_far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaShapeWideLine {
    pub start: Position2D,
    pub end: Position2D,
    pub width: f32,
}

protocol_variant! {
    /// Region of the ground an area effect covers.
    pub enum AreaShape {
        Circle(AreaShapeCircle),
        Cone(AreaShapeCone),
        ConeCut(AreaShapeConeCut),
        WideLine(AreaShapeWideLine),
    }
}

// ---------------------------------------------------------------------------
// AbilityEffectSpecific
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificDamageArea {
    pub progress_current: f32,
    pub progress_delta: f32,
    pub damage_remaining: f32,
    pub shape: AreaShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificDamageOverTime {
    pub tick_wait_duration: TickCount,
    pub ticks_left: TickCount,
    pub tick_damage: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificLinkedFire {
    pub linked: bool,
    pub fighting: bool,
    pub fast_cast: u32,
    pub support_cap: u16,
    pub support_production: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificSpellOnEntityNearby {
    pub spell_on_owner: Vec<SpellId>,
    pub spell_on_source: Vec<SpellId>,
    pub radius: f32,
    pub remaining_targets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificTimedSpell {
    pub spells_to_cast: Vec<SpellId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificCollector {
    pub spell_to_cast: SpellId,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificAura {
    pub spells_to_apply: Vec<SpellId>,
    pub abilities_to_apply: Vec<AbilityId>,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectSpecificMovingIntervalCast {
    pub spell_to_cast: Vec<SpellId>,
    pub direction_step: Position2D,
    pub cast_every_nth_tick: TickCount,
}

/// Any effect without a dedicated payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityEffectSpecificOther {}

protocol_variant! {
    /// Effect-specific state of an [`AbilityEffect`].
    pub enum AbilityEffectSpecific {
        DamageArea(AbilityEffectSpecificDamageArea),
        DamageOverTime(AbilityEffectSpecificDamageOverTime),
        LinkedFire(AbilityEffectSpecificLinkedFire),
        SpellOnEntityNearby(AbilityEffectSpecificSpellOnEntityNearby),
        TimedSpell(AbilityEffectSpecificTimedSpell),
        Collector(AbilityEffectSpecificCollector),
        Aura(AbilityEffectSpecificAura),
        MovingIntervalCast(AbilityEffectSpecificMovingIntervalCast),
        Other(AbilityEffectSpecificOther),
    }
}

/// An ability currently affecting an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffect {
    pub id: AbilityId,
    pub line: AbilityLine,
    pub source: EntityId,
    pub source_team: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tick: Option<Tick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tick: Option<Tick>,
    pub specific: AbilityEffectSpecific,
}

//! Entities on the map and the players that own them.

use serde::{Deserialize, Serialize};

use super::{
    AbilityEffect, Aspect, BuildingId, CardId, EntityId, Job, OrbColor, Position, SquadId,
};

/// Fields shared by every kind of map entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub effects: Vec<AbilityEffect>,
    pub aspects: Vec<Aspect>,
    /// What the entity is doing right now.
    pub job: Job,
    pub position: Position,
    /// Owning player. Absent for neutral entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_entity_id: Option<EntityId>,
}

impl Entity {
    /// Returns `true` if `player` owns this entity.
    pub fn is_owned_by(&self, player: EntityId) -> bool {
        self.player_entity_id == Some(player)
    }

    /// First aspect of the given case, if present.
    pub fn aspect(&self, case: &str) -> Option<&Aspect> {
        use crate::Variant;
        self.aspects.iter().find(|a| a.case() == case)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSlot {
    pub entity: Entity,
    pub res_id: u32,
    pub state: u32,
    pub team: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSlot {
    pub entity: Entity,
    pub color: OrbColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityWorldObject {
    pub entity: Entity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub entity: Entity,
    pub card_id: CardId,
    pub res_squad_id: SquadId,
    pub bound_power: f32,
    pub squad_size: u8,
    /// Figures currently in the squad.
    pub figures: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub entity: Entity,
    pub squad_id: EntityId,
    pub current_speed: f32,
    pub rotation_speed: f32,
    pub unit_size: u8,
    pub move_mode: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub entity: Entity,
    pub building_id: BuildingId,
    pub card_id: CardId,
    pub power_cost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierSet {
    pub entity: Entity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierModule {
    pub entity: Entity,
    pub team: u8,
    pub set: EntityId,
    pub state: u32,
    pub slots: u8,
    pub free_slots: u8,
    pub walkable: bool,
}

/// Every non-player entity on the map, grouped by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapEntities {
    pub projectiles: Vec<Projectile>,
    pub power_slots: Vec<PowerSlot>,
    pub token_slots: Vec<TokenSlot>,
    pub ability_world_objects: Vec<AbilityWorldObject>,
    pub squads: Vec<Squad>,
    pub figures: Vec<Figure>,
    pub buildings: Vec<Building>,
    pub barrier_sets: Vec<BarrierSet>,
    pub barrier_modules: Vec<BarrierModule>,
}

impl MapEntities {
    /// Squads owned by `player`.
    pub fn squads_of(&self, player: EntityId) -> impl Iterator<Item = &Squad> {
        self.squads
            .iter()
            .filter(move |s| s.entity.is_owned_by(player))
    }

    /// Token slots owned by `player`.
    pub fn token_slots_of(&self, player: EntityId) -> impl Iterator<Item = &TokenSlot> {
        self.token_slots
            .iter()
            .filter(move |s| s.entity.is_owned_by(player))
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Orb counts per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Orbs {
    pub shadow: u8,
    pub nature: u8,
    pub frost: u8,
    pub fire: u8,
    /// Usable as any color; becomes the color of the first token it pays for.
    pub starting: u8,
    /// Usable only for colorless tokens.
    pub white: u8,
    /// Usable as any color. Only granted by map scripts.
    pub all: u8,
}

/// A player. Shares the entity id space but carries no position or job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub id: EntityId,
    pub effects: Vec<AbilityEffect>,
    pub aspects: Vec<Aspect>,
    pub team: u8,
    pub power: f32,
    pub void_power: f32,
    pub population_count: u16,
    pub name: String,
    pub orbs: Orbs,
}

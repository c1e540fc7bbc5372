//! Aspects: the component-like capabilities an entity has.

use serde::{Deserialize, Serialize};

use super::{EntityId, ModeId, TickCount};
use crate::variant::protocol_variant;

// ---------------------------------------------------------------------------
// MountState
// ---------------------------------------------------------------------------

marker_payloads! {
    /// Not mounted on any barrier.
    MountStateUnmounted,
}

/// Squad in the process of mounting a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountStateMountingSquad {
    pub barrier: EntityId,
}

/// Figure in the process of mounting a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountStateMountingFigure {
    pub barrier: EntityId,
    pub slot: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountStateMountedSquad {
    pub barrier: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountStateMountedFigure {
    pub barrier: EntityId,
    pub slot: u8,
}

/// Raw host state that did not map onto any known mount state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountStateUnknown {
    pub mount_state: u8,
    pub enter_exit_barrier_module: u32,
    pub target_barrier_module: u32,
    pub current_barrier_module: u32,
    pub slot: u32,
}

protocol_variant! {
    /// Whether (and how) an entity sits on a barrier.
    pub enum MountState {
        Unmounted(MountStateUnmounted),
        MountingSquad(MountStateMountingSquad),
        MountingFigure(MountStateMountingFigure),
        MountedSquad(MountStateMountedSquad),
        MountedFigure(MountStateMountedFigure),
        Unknown(MountStateUnknown),
    }
}

impl MountState {
    /// Barrier the entity is mounted on or heading to, if known.
    pub fn barrier(&self) -> Option<EntityId> {
        match self {
            Self::MountingSquad(s) => Some(s.barrier),
            Self::MountingFigure(s) => Some(s.barrier),
            Self::MountedSquad(s) => Some(s.barrier),
            Self::MountedFigure(s) => Some(s.barrier),
            Self::Unmounted(_) | Self::Unknown(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Aspect
// ---------------------------------------------------------------------------

/// Used mostly by power wells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectPowerProduction {
    /// Power still to be produced.
    pub current_power: f32,
    /// Same as `current_power` before the first build.
    pub power_capacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectHealth {
    /// Hit points left before dying.
    pub current_hp: f32,
    /// Current maximum including buffs and debuffs.
    pub cap_current_max: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectModeChange {
    pub current_mode: ModeId,
    pub all_modes: Vec<ModeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMountBarrier {
    pub state: MountState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectBarrierGate {
    pub open: bool,
}

/// Present while a building or barrier is under construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectConstructionData {
    /// Build ticks until finished.
    pub refresh_count_remaining: TickCount,
    /// Build ticks from start to finish.
    pub refresh_count_total: TickCount,
    pub health_per_build_update_trigger: f32,
    pub remaining_health_to_add: f32,
}

marker_payloads! {
    AspectCombat,
    AspectAmmunition,
    AspectSuperWeaponShadow,
    AspectWormMovement,
    AspectNPCTag,
    AspectPlayerKit,
    AspectLoot,
    AspectImmunity,
    AspectTurret,
    AspectTunnel,
    AspectSpellMemory,
    AspectPortal,
    AspectHate,
    AspectAttackable,
    AspectSquadRefill,
    AspectPortalExit,
    AspectSuperWeaponShadowBomb,
    AspectRepairBarrierSet,
    AspectConstructionRepair,
    AspectFollower,
    AspectCollisionBase,
    AspectEditorUniqueID,
    AspectRoam,
}

protocol_variant! {
    /// A capability of an entity. Most aspects carry no data; their
    /// presence is the information.
    #[allow(clippy::upper_case_acronyms)]
    pub enum Aspect {
        PowerProduction(AspectPowerProduction),
        Health(AspectHealth),
        Combat(AspectCombat),
        ModeChange(AspectModeChange),
        Ammunition(AspectAmmunition),
        SuperWeaponShadow(AspectSuperWeaponShadow),
        WormMovement(AspectWormMovement),
        NPCTag(AspectNPCTag),
        PlayerKit(AspectPlayerKit),
        Loot(AspectLoot),
        Immunity(AspectImmunity),
        Turret(AspectTurret),
        Tunnel(AspectTunnel),
        MountBarrier(AspectMountBarrier),
        SpellMemory(AspectSpellMemory),
        Portal(AspectPortal),
        Hate(AspectHate),
        BarrierGate(AspectBarrierGate),
        Attackable(AspectAttackable),
        SquadRefill(AspectSquadRefill),
        PortalExit(AspectPortalExit),
        ConstructionData(AspectConstructionData),
        SuperWeaponShadowBomb(AspectSuperWeaponShadowBomb),
        RepairBarrierSet(AspectRepairBarrierSet),
        ConstructionRepair(AspectConstructionRepair),
        Follower(AspectFollower),
        CollisionBase(AspectCollisionBase),
        EditorUniqueID(AspectEditorUniqueID),
        Roam(AspectRoam),
    }
}

//! What an entity is doing right now.
//!
//! Job payloads mirror the host's internal job records closely and change
//! more often than anything else in the protocol. Fields the host does not
//! always fill are optional.

use serde::{Deserialize, Serialize};

use super::{
    AbilityId, AbilityLine, EntityId, ModeId, Position2D, Position2DWithOrientation,
    SpellId, Target, Tick, TickCount, WalkMode,
};
use crate::variant::protocol_variant;

marker_payloads! {
    JobNoJob,
    JobIdle,
    JobDie,
    JobCheer,
    JobBarrierCrush,
    JobBarrierGateToggle,
    JobSpawnSquad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobGoto {
    pub waypoints: Vec<Position2DWithOrientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_entity_id: Option<EntityId>,
    pub walk_mode: WalkMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAttackMelee {
    pub target: Target,
    pub use_force_goto: bool,
    pub no_move: bool,
    pub too_close_range: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCastSpell {
    pub target: Target,
    pub spell_id: SpellId,
    pub use_force_goto: bool,
    pub no_move: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTalk {
    pub target: EntityId,
    pub walk_to_target: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobScriptTalk {
    pub hide_weapon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFreeze {
    pub end_step: Tick,
    pub source: EntityId,
    pub spell_id: SpellId,
    pub duration: TickCount,
    pub delay_ability: TickCount,
    pub ability_id_while_frozen: Vec<AbilityId>,
    pub ability_id_delayed: Vec<AbilityId>,
    pub ability_line_id_cancel_on_start: AbilityLine,
    pub pushback_immunity: bool,
    pub mode: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpawn {
    pub duration: TickCount,
    pub end_step: Tick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAttackSquad {
    pub target: Target,
    pub weapon_type: u8,
    pub damage: f32,
    pub range_min: f32,
    pub range_max: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_spell: Option<SpellId>,
    pub use_force_goto: bool,
    pub operation_range: f32,
    pub no_move: bool,
    pub was_in_attack: bool,
    pub melee_attack: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCastSpellSquad {
    pub target: Target,
    pub spell_id: SpellId,
    pub use_force_goto: bool,
    pub spell_fired: bool,
    pub spell_per_source_entity: bool,
    pub was_in_attack: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPushBack {
    pub start_coord: Position2D,
    pub target_coord: Position2D,
    pub speed: f32,
    pub rotation_speed: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStampede {
    pub spell: SpellId,
    pub target: Target,
    pub start_coord: Position2D,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFlameThrower {
    pub target: Target,
    pub spell_id: SpellId,
    pub duration_step_init: TickCount,
    pub duration_step_shut_down: TickCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConstruct {
    pub construction_update_steps: TickCount,
    pub construction_update_count_remaining: TickCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCrush {
    pub crush_steps: TickCount,
    pub entity_update_steps: TickCount,
    pub remaining_crush_steps: TickCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMountBarrierSquad {
    pub barrier_module: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobMountBarrier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_barrier_module: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_barrier_module: Option<EntityId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobModeChangeSquad {
    pub new_mode: ModeId,
    pub mode_change_done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobModeChange {
    pub new_mode: ModeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSacrificeSquad {
    pub target_entity: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUsePortalSquad {
    pub target_entity_id: EntityId,
}

/// A channelled spell. Most of the optional ids depend on whether the
/// channel targets the world or an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobChannel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_squad_id: Option<EntityId>,
    pub mode_target_world: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
    pub spell_id: SpellId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_id_on_target_on_finish: Option<SpellId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_id_on_target_on_start: Option<SpellId>,
    pub step_duration_until_finish: TickCount,
    pub timing_channel_start: u32,
    pub timing_channel_loop: u32,
    pub timing_channel_end: u32,
    pub abort_on_out_of_range_squared: f32,
    pub abort_check_failed: bool,
    pub orientate_to_target: bool,
    pub orientate_to_target_max_step: TickCount,
    pub abort_on_owner_get_damaged: bool,
    pub abort_on_mode_change: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLootTargetSquad {
    pub target_entity_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMorph {
    pub target: Target,
    pub spell: SpellId,
}

/// Host job id that has no mapping yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUnknown {
    pub id: u32,
}

protocol_variant! {
    pub enum Job {
        NoJob(JobNoJob),
        Idle(JobIdle),
        Goto(JobGoto),
        AttackMelee(JobAttackMelee),
        CastSpell(JobCastSpell),
        Die(JobDie),
        Talk(JobTalk),
        ScriptTalk(JobScriptTalk),
        Freeze(JobFreeze),
        Spawn(JobSpawn),
        Cheer(JobCheer),
        AttackSquad(JobAttackSquad),
        CastSpellSquad(JobCastSpellSquad),
        PushBack(JobPushBack),
        Stampede(JobStampede),
        BarrierCrush(JobBarrierCrush),
        BarrierGateToggle(JobBarrierGateToggle),
        FlameThrower(JobFlameThrower),
        Construct(JobConstruct),
        Crush(JobCrush),
        MountBarrierSquad(JobMountBarrierSquad),
        MountBarrier(JobMountBarrier),
        ModeChangeSquad(JobModeChangeSquad),
        ModeChange(JobModeChange),
        SacrificeSquad(JobSacrificeSquad),
        UsePortalSquad(JobUsePortalSquad),
        Channel(JobChannel),
        SpawnSquad(JobSpawnSquad),
        LootTargetSquad(JobLootTargetSquad),
        Morph(JobMorph),
        Unknown(JobUnknown),
    }
}

impl Job {
    /// `true` for the two "doing nothing" cases.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::NoJob(_) | Self::Idle(_))
    }
}

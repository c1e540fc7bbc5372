//! One sample value per case of every variant family.
//!
//! Floats mix exact values with ones like `0.1` that have no exact binary
//! form, so the encoders are checked on the decimal text they write.

#![allow(dead_code)]

use skybot_protocol::*;

pub fn xy(x: f32, y: f32) -> Position2D {
    Position2D { x, y }
}

pub fn single_targets() -> Vec<SingleTarget> {
    vec![
        SingleTarget::entity(EntityId(12)),
        SingleTarget::location(xy(1.0, 2.0)),
    ]
}

pub fn targets() -> Vec<Target> {
    vec![
        Target::Single(TargetSingle {
            single: SingleTarget::location(xy(1.0, 2.0)),
        }),
        Target::Multi(TargetMulti {
            xy_begin: xy(0.1, 0.5),
            xy_end: xy(8.3, 16.25),
        }),
    ]
}

pub fn area_shapes() -> Vec<AreaShape> {
    vec![
        AreaShape::Circle(AreaShapeCircle {
            center: xy(3.0, 4.0),
            radius: 10.0,
        }),
        AreaShape::Cone(AreaShapeCone {
            base: xy(1.0, 1.0),
            radius: 20.0,
            angle: 0.3,
        }),
        AreaShape::ConeCut(AreaShapeConeCut {
            start: xy(0.0, 0.0),
            end: xy(4.0, 0.0),
            radius: 6.5,
            width_near: 1.0,
            width_far: 3.0,
        }),
        AreaShape::WideLine(AreaShapeWideLine {
            start: xy(-2.0, 2.0),
            end: xy(2.0, -2.0),
            width: 1.5,
        }),
    ]
}

pub fn ability_effect_specifics() -> Vec<AbilityEffectSpecific> {
    vec![
        AbilityEffectSpecific::DamageArea(AbilityEffectSpecificDamageArea {
            progress_current: 0.5,
            progress_delta: 0.1,
            damage_remaining: 300.0,
            shape: area_shapes().remove(0),
        }),
        AbilityEffectSpecific::DamageOverTime(AbilityEffectSpecificDamageOverTime {
            tick_wait_duration: 10,
            ticks_left: 3,
            tick_damage: 12.7,
        }),
        AbilityEffectSpecific::LinkedFire(AbilityEffectSpecificLinkedFire {
            linked: true,
            fighting: false,
            fast_cast: 2,
            support_cap: 600,
            support_production: 3,
        }),
        AbilityEffectSpecific::SpellOnEntityNearby(AbilityEffectSpecificSpellOnEntityNearby {
            spell_on_owner: vec![1, 2],
            spell_on_source: vec![],
            radius: 25.0,
            remaining_targets: 4,
        }),
        AbilityEffectSpecific::TimedSpell(AbilityEffectSpecificTimedSpell {
            spells_to_cast: vec![77],
        }),
        AbilityEffectSpecific::Collector(AbilityEffectSpecificCollector {
            spell_to_cast: 5,
            radius: 7.0,
        }),
        AbilityEffectSpecific::Aura(AbilityEffectSpecificAura {
            spells_to_apply: vec![8],
            abilities_to_apply: vec![9, 10],
            radius: 30.0,
        }),
        AbilityEffectSpecific::MovingIntervalCast(AbilityEffectSpecificMovingIntervalCast {
            spell_to_cast: vec![11],
            direction_step: xy(0.25, -0.25),
            cast_every_nth_tick: 5,
        }),
        AbilityEffectSpecific::Other(AbilityEffectSpecificOther {}),
    ]
}

pub fn mount_states() -> Vec<MountState> {
    let barrier = EntityId(40);
    vec![
        MountState::Unmounted(MountStateUnmounted {}),
        MountState::MountingSquad(MountStateMountingSquad { barrier }),
        MountState::MountingFigure(MountStateMountingFigure { barrier, slot: 1 }),
        MountState::MountedSquad(MountStateMountedSquad { barrier }),
        MountState::MountedFigure(MountStateMountedFigure { barrier, slot: 2 }),
        MountState::Unknown(MountStateUnknown {
            mount_state: 6,
            enter_exit_barrier_module: 1,
            target_barrier_module: 2,
            current_barrier_module: 3,
            slot: 4,
        }),
    ]
}

pub fn aspects() -> Vec<Aspect> {
    vec![
        Aspect::PowerProduction(AspectPowerProduction {
            current_power: 1000.0,
            power_capacity: 2000.0,
        }),
        Aspect::Health(AspectHealth {
            current_hp: 500.0,
            cap_current_max: 750.0,
        }),
        Aspect::Combat(AspectCombat {}),
        Aspect::ModeChange(AspectModeChange {
            current_mode: 1,
            all_modes: vec![1, 2],
        }),
        Aspect::Ammunition(AspectAmmunition {}),
        Aspect::SuperWeaponShadow(AspectSuperWeaponShadow {}),
        Aspect::WormMovement(AspectWormMovement {}),
        Aspect::NPCTag(AspectNPCTag {}),
        Aspect::PlayerKit(AspectPlayerKit {}),
        Aspect::Loot(AspectLoot {}),
        Aspect::Immunity(AspectImmunity {}),
        Aspect::Turret(AspectTurret {}),
        Aspect::Tunnel(AspectTunnel {}),
        Aspect::MountBarrier(AspectMountBarrier {
            state: mount_states().remove(4),
        }),
        Aspect::SpellMemory(AspectSpellMemory {}),
        Aspect::Portal(AspectPortal {}),
        Aspect::Hate(AspectHate {}),
        Aspect::BarrierGate(AspectBarrierGate { open: true }),
        Aspect::Attackable(AspectAttackable {}),
        Aspect::SquadRefill(AspectSquadRefill {}),
        Aspect::PortalExit(AspectPortalExit {}),
        Aspect::ConstructionData(AspectConstructionData {
            refresh_count_remaining: 40,
            refresh_count_total: 100,
            health_per_build_update_trigger: 2.5,
            remaining_health_to_add: 100.0,
        }),
        Aspect::SuperWeaponShadowBomb(AspectSuperWeaponShadowBomb {}),
        Aspect::RepairBarrierSet(AspectRepairBarrierSet {}),
        Aspect::ConstructionRepair(AspectConstructionRepair {}),
        Aspect::Follower(AspectFollower {}),
        Aspect::CollisionBase(AspectCollisionBase {}),
        Aspect::EditorUniqueID(AspectEditorUniqueID {}),
        Aspect::Roam(AspectRoam {}),
    ]
}

pub fn jobs() -> Vec<Job> {
    let target = targets().remove(0);
    vec![
        Job::NoJob(JobNoJob {}),
        Job::Idle(JobIdle {}),
        Job::Goto(JobGoto {
            waypoints: vec![Position2DWithOrientation {
                x: 1.0,
                y: 2.0,
                orientation: 0.5,
            }],
            target_entity_id: Some(EntityId(3)),
            walk_mode: WalkMode::CRUSADE,
        }),
        Job::AttackMelee(JobAttackMelee {
            target: target.clone(),
            use_force_goto: false,
            no_move: true,
            too_close_range: 1.5,
        }),
        Job::CastSpell(JobCastSpell {
            target: target.clone(),
            spell_id: 44,
            use_force_goto: true,
            no_move: false,
        }),
        Job::Die(JobDie {}),
        Job::Talk(JobTalk {
            target: EntityId(8),
            walk_to_target: true,
        }),
        Job::ScriptTalk(JobScriptTalk { hide_weapon: false }),
        Job::Freeze(JobFreeze {
            end_step: 500,
            source: EntityId(2),
            spell_id: 91,
            duration: 30,
            delay_ability: 5,
            ability_id_while_frozen: vec![1],
            ability_id_delayed: vec![],
            ability_line_id_cancel_on_start: AbilityLine(0),
            pushback_immunity: true,
            mode: 2,
        }),
        Job::Spawn(JobSpawn {
            duration: 20,
            end_step: 120,
        }),
        Job::Cheer(JobCheer {}),
        Job::AttackSquad(JobAttackSquad {
            target: target.clone(),
            weapon_type: 1,
            damage: 35.0,
            range_min: 0.0,
            range_max: 30.0,
            attack_spell: None,
            use_force_goto: false,
            operation_range: 40.0,
            no_move: false,
            was_in_attack: true,
            melee_attack: false,
        }),
        Job::CastSpellSquad(JobCastSpellSquad {
            target: target.clone(),
            spell_id: 45,
            use_force_goto: false,
            spell_fired: true,
            spell_per_source_entity: false,
            was_in_attack: false,
        }),
        Job::PushBack(JobPushBack {
            start_coord: xy(0.0, 0.0),
            target_coord: xy(5.0, 5.0),
            speed: 4.0,
            rotation_speed: 0.5,
            damage: Some(10.0),
            source: None,
        }),
        Job::Stampede(JobStampede {
            spell: 17,
            target: target.clone(),
            start_coord: xy(9.0, 9.0),
        }),
        Job::BarrierCrush(JobBarrierCrush {}),
        Job::BarrierGateToggle(JobBarrierGateToggle {}),
        Job::FlameThrower(JobFlameThrower {
            target: target.clone(),
            spell_id: 60,
            duration_step_init: 3,
            duration_step_shut_down: 4,
        }),
        Job::Construct(JobConstruct {
            construction_update_steps: 10,
            construction_update_count_remaining: 7,
        }),
        Job::Crush(JobCrush {
            crush_steps: 1,
            entity_update_steps: 2,
            remaining_crush_steps: 3,
        }),
        Job::MountBarrierSquad(JobMountBarrierSquad {
            barrier_module: EntityId(41),
        }),
        Job::MountBarrier(JobMountBarrier {
            current_barrier_module: None,
            goal_barrier_module: Some(EntityId(42)),
        }),
        Job::ModeChangeSquad(JobModeChangeSquad {
            new_mode: 2,
            mode_change_done: false,
        }),
        Job::ModeChange(JobModeChange { new_mode: 3 }),
        Job::SacrificeSquad(JobSacrificeSquad {
            target_entity: EntityId(50),
        }),
        Job::UsePortalSquad(JobUsePortalSquad {
            target_entity_id: EntityId(51),
        }),
        Job::Channel(JobChannel {
            target_squad_id: Some(EntityId(60)),
            mode_target_world: false,
            entity_id: None,
            spell_id: 70,
            spell_id_on_target_on_finish: Some(71),
            spell_id_on_target_on_start: None,
            step_duration_until_finish: 40,
            timing_channel_start: 1,
            timing_channel_loop: 2,
            timing_channel_end: 3,
            abort_on_out_of_range_squared: 900.0,
            abort_check_failed: false,
            orientate_to_target: true,
            orientate_to_target_max_step: 6,
            abort_on_owner_get_damaged: false,
            abort_on_mode_change: true,
        }),
        Job::SpawnSquad(JobSpawnSquad {}),
        Job::LootTargetSquad(JobLootTargetSquad {
            target_entity_id: EntityId(80),
        }),
        Job::Morph(JobMorph {
            target,
            spell: 81,
        }),
        Job::Unknown(JobUnknown { id: 999 }),
    ]
}

pub fn commands() -> Vec<Command> {
    let squads = vec![EntityId(10), EntityId(11)];
    vec![
        Command::BuildHouse(CommandBuildHouse {
            card_position: 3,
            xy: xy(100.0, 200.0),
            angle: 0.5,
        }),
        Command::CastSpellGod(CommandCastSpellGod {
            card_position: 4,
            target: SingleTarget::entity(EntityId(99)),
        }),
        Command::CastSpellGodMulti(CommandCastSpellGodMulti {
            card_position: 5,
            xy1: xy(1.0, 1.0),
            xy2: xy(2.0, 2.0),
        }),
        Command::ProduceSquad(CommandProduceSquad {
            card_position: 0,
            xy: xy(10.0, 20.0),
        }),
        Command::ProduceSquadOnBarrier(CommandProduceSquadOnBarrier {
            card_position: 1,
            xy: xy(10.0, 20.0),
            barrier_to_mount: EntityId(33),
        }),
        Command::CastSpellEntity(CommandCastSpellEntity {
            entity: EntityId(10),
            spell: 123,
            target: SingleTarget::location(xy(5.0, 6.0)),
        }),
        Command::BarrierGateToggle(CommandBarrierGateToggle {
            barrier_id: EntityId(34),
        }),
        Command::BarrierBuild(CommandBarrierBuild {
            barrier_id: EntityId(35),
            inverted_direction: true,
        }),
        Command::BarrierRepair(CommandBarrierRepair {
            barrier_id: EntityId(36),
        }),
        Command::BarrierCancelRepair(CommandBarrierCancelRepair {
            barrier_id: EntityId(37),
        }),
        Command::RepairBuilding(CommandRepairBuilding {
            building_id: EntityId(38),
        }),
        Command::CancelRepairBuilding(CommandCancelRepairBuilding {
            building_id: EntityId(39),
        }),
        Command::GroupAttack(CommandGroupAttack {
            squads: squads.clone(),
            target_entity_id: EntityId(99),
            force_attack: false,
        }),
        Command::GroupEnterWall(CommandGroupEnterWall {
            squads: squads.clone(),
            barrier_id: EntityId(35),
        }),
        Command::GroupExitWall(CommandGroupExitWall {
            squads: squads.clone(),
            barrier_id: EntityId(35),
        }),
        Command::GroupGoto(CommandGroupGoto {
            squads: squads.clone(),
            positions: vec![xy(50.0, 50.0), xy(60.0, 60.0)],
            walk_mode: WalkMode::NORMAL,
            orientation: 1.25,
        }),
        Command::GroupHoldPosition(CommandGroupHoldPosition {
            squads: squads.clone(),
        }),
        Command::GroupStopJob(CommandGroupStopJob {
            squads: squads.clone(),
        }),
        Command::ModeChange(CommandModeChange {
            entity_id: EntityId(10),
            new_mode_id: 2,
        }),
        Command::PowerSlotBuild(CommandPowerSlotBuild {
            slot_id: EntityId(70),
        }),
        Command::TokenSlotBuild(CommandTokenSlotBuild {
            slot_id: EntityId(71),
            color: CreateOrbColor::FIRE,
        }),
        Command::GroupKillEntity(CommandGroupKillEntity {
            entities: vec![EntityId(10)],
        }),
        Command::GroupSacrifice(CommandGroupSacrifice {
            squads: squads.clone(),
            target: EntityId(72),
        }),
        Command::PortalDefineExitPoint(CommandPortalDefineExitPoint {
            portal: EntityId(73),
            xy: xy(7.0, 8.0),
        }),
        Command::PortalRemoveExitPoint(CommandPortalRemoveExitPoint {
            portal: EntityId(73),
        }),
        Command::TunnelMakeExitPoint(CommandTunnelMakeExitPoint {
            portal: EntityId(74),
        }),
        Command::Ping(CommandPing {
            xy: xy(0.0, 0.0),
            ping: Ping::NEED_HELP,
        }),
        Command::Surrender(CommandSurrender {}),
        Command::WhisperToMaster(CommandWhisperToMaster {
            text: "hello there".to_owned(),
        }),
    ]
}

pub fn rejection_reasons() -> Vec<CommandRejectionReason> {
    vec![
        CommandRejectionReason::CardRejected(CommandRejectionReasonCardRejected {
            reason: WhyCanNotPlayCardThere::DOES_NOT_HAVE_ENOUGH_POWER,
            failed_card_conditions: vec![3, 7],
        }),
        CommandRejectionReason::NotEnoughPower(CommandRejectionReasonNotEnoughPower {
            player_power: 12.5,
            required: 50,
        }),
        CommandRejectionReason::SpellDoesNotExist(CommandRejectionReasonSpellDoesNotExist {}),
        CommandRejectionReason::EntityDoesNotExist(CommandRejectionReasonEntityDoesNotExist {}),
        CommandRejectionReason::InvalidEntityType(CommandRejectionReasonInvalidEntityType {
            entity_type: 4,
        }),
        CommandRejectionReason::CanNotCast(CommandRejectionReasonCanNotCast {
            failed_spell_conditions: vec![1],
        }),
        CommandRejectionReason::EntityNotOwned(CommandRejectionReasonEntityNotOwned {}),
        CommandRejectionReason::EntityOwnedBySomeoneElse(
            CommandRejectionReasonEntityOwnedBySomeoneElse {},
        ),
        CommandRejectionReason::NoModeChange(CommandRejectionReasonNoModeChange {}),
        CommandRejectionReason::EntityAlreadyInThisMode(
            CommandRejectionReasonEntityAlreadyInThisMode {},
        ),
        CommandRejectionReason::ModeNotExist(CommandRejectionReasonModeNotExist {}),
        CommandRejectionReason::InvalidCardIndex(CommandRejectionReasonInvalidCardIndex {}),
        CommandRejectionReason::InvalidCard(CommandRejectionReasonInvalidCard {}),
    ]
}

//! Commands a bot issues, and the host's reasons for rejecting them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    CreateOrbColor, EntityId, ModeId, Ping, Position2D, SingleTarget, SpellId, WalkMode,
    WhyCanNotPlayCardThere,
};
use crate::variant::protocol_variant;
use crate::Variant;

// ---------------------------------------------------------------------------
// Card plays
// ---------------------------------------------------------------------------

/// Play a building card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandBuildHouse {
    /// Index into the deck, 0-19. The host reports 0 when echoing another
    /// player's command.
    pub card_position: u8,
    pub xy: Position2D,
    pub angle: f32,
}

/// Play a spell card on a single target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCastSpellGod {
    pub card_position: u8,
    pub target: SingleTarget,
}

/// Play a spell card along a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandCastSpellGodMulti {
    pub card_position: u8,
    pub xy1: Position2D,
    pub xy2: Position2D,
}

/// Play a squad card on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandProduceSquad {
    pub card_position: u8,
    pub xy: Position2D,
}

/// Play a squad card and send it onto a barrier once spawned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandProduceSquadOnBarrier {
    pub card_position: u8,
    pub xy: Position2D,
    pub barrier_to_mount: EntityId,
}

/// Activate a spell or ability of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCastSpellEntity {
    pub entity: EntityId,
    pub spell: SpellId,
    pub target: SingleTarget,
}

// ---------------------------------------------------------------------------
// Barriers and buildings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBarrierGateToggle {
    pub barrier_id: EntityId,
}

/// Same as a repair unless `inverted_direction` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBarrierBuild {
    pub barrier_id: EntityId,
    pub inverted_direction: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBarrierRepair {
    pub barrier_id: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBarrierCancelRepair {
    pub barrier_id: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRepairBuilding {
    pub building_id: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCancelRepairBuilding {
    pub building_id: EntityId,
}

// ---------------------------------------------------------------------------
// Squad groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupAttack {
    pub squads: Vec<EntityId>,
    pub target_entity_id: EntityId,
    pub force_attack: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupEnterWall {
    pub squads: Vec<EntityId>,
    pub barrier_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupExitWall {
    pub squads: Vec<EntityId>,
    pub barrier_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandGroupGoto {
    pub squads: Vec<EntityId>,
    pub positions: Vec<Position2D>,
    pub walk_mode: WalkMode,
    pub orientation: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupHoldPosition {
    pub squads: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupStopJob {
    pub squads: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupKillEntity {
    pub entities: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroupSacrifice {
    pub squads: Vec<EntityId>,
    pub target: EntityId,
}

// ---------------------------------------------------------------------------
// Everything else
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandModeChange {
    pub entity_id: EntityId,
    pub new_mode_id: ModeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPowerSlotBuild {
    pub slot_id: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTokenSlotBuild {
    pub slot_id: EntityId,
    pub color: CreateOrbColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandPortalDefineExitPoint {
    pub portal: EntityId,
    pub xy: Position2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPortalRemoveExitPoint {
    pub portal: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTunnelMakeExitPoint {
    pub portal: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandPing {
    pub xy: Position2D,
    pub ping: Ping,
}

marker_payloads! {
    CommandSurrender,
}

/// Free-form text for the match log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandWhisperToMaster {
    pub text: String,
}

protocol_variant! {
    /// Everything a bot can ask the host to do.
    ///
    /// Spectating bots may only send `Ping` and `WhisperToMaster`; the host
    /// ignores anything else from them.
    pub enum Command {
        BuildHouse(CommandBuildHouse),
        CastSpellGod(CommandCastSpellGod),
        CastSpellGodMulti(CommandCastSpellGodMulti),
        ProduceSquad(CommandProduceSquad),
        ProduceSquadOnBarrier(CommandProduceSquadOnBarrier),
        CastSpellEntity(CommandCastSpellEntity),
        BarrierGateToggle(CommandBarrierGateToggle),
        BarrierBuild(CommandBarrierBuild),
        BarrierRepair(CommandBarrierRepair),
        BarrierCancelRepair(CommandBarrierCancelRepair),
        RepairBuilding(CommandRepairBuilding),
        CancelRepairBuilding(CommandCancelRepairBuilding),
        GroupAttack(CommandGroupAttack),
        GroupEnterWall(CommandGroupEnterWall),
        GroupExitWall(CommandGroupExitWall),
        GroupGoto(CommandGroupGoto),
        GroupHoldPosition(CommandGroupHoldPosition),
        GroupStopJob(CommandGroupStopJob),
        ModeChange(CommandModeChange),
        PowerSlotBuild(CommandPowerSlotBuild),
        TokenSlotBuild(CommandTokenSlotBuild),
        GroupKillEntity(CommandGroupKillEntity),
        GroupSacrifice(CommandGroupSacrifice),
        PortalDefineExitPoint(CommandPortalDefineExitPoint),
        PortalRemoveExitPoint(CommandPortalRemoveExitPoint),
        TunnelMakeExitPoint(CommandTunnelMakeExitPoint),
        Ping(CommandPing),
        Surrender(CommandSurrender),
        WhisperToMaster(CommandWhisperToMaster),
    }
}

/// A command as executed by the host, tagged with who issued it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCommand {
    pub player: EntityId,
    pub command: Command,
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// Rejection of `BuildHouse`, `ProduceSquad` or `ProduceSquadOnBarrier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRejectionReasonCardRejected {
    pub reason: WhyCanNotPlayCardThere,
    pub failed_card_conditions: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandRejectionReasonNotEnoughPower {
    pub player_power: f32,
    pub required: u16,
}

/// The entity exists but is the wrong kind for the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRejectionReasonInvalidEntityType {
    pub entity_type: u32,
}

/// Rejection of `CastSpellEntity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRejectionReasonCanNotCast {
    pub failed_spell_conditions: Vec<u32>,
}

marker_payloads! {
    CommandRejectionReasonSpellDoesNotExist,
    CommandRejectionReasonEntityDoesNotExist,
    /// Command for an entity nobody owns.
    CommandRejectionReasonEntityNotOwned,
    CommandRejectionReasonEntityOwnedBySomeoneElse,
    /// Mode change on an entity without a `ModeChange` aspect.
    CommandRejectionReasonNoModeChange,
    CommandRejectionReasonEntityAlreadyInThisMode,
    CommandRejectionReasonModeNotExist,
    /// Card index outside 0-19.
    CommandRejectionReasonInvalidCardIndex,
    CommandRejectionReasonInvalidCard,
}

protocol_variant! {
    pub enum CommandRejectionReason {
        CardRejected(CommandRejectionReasonCardRejected),
        NotEnoughPower(CommandRejectionReasonNotEnoughPower),
        SpellDoesNotExist(CommandRejectionReasonSpellDoesNotExist),
        EntityDoesNotExist(CommandRejectionReasonEntityDoesNotExist),
        InvalidEntityType(CommandRejectionReasonInvalidEntityType),
        CanNotCast(CommandRejectionReasonCanNotCast),
        EntityNotOwned(CommandRejectionReasonEntityNotOwned),
        EntityOwnedBySomeoneElse(CommandRejectionReasonEntityOwnedBySomeoneElse),
        NoModeChange(CommandRejectionReasonNoModeChange),
        EntityAlreadyInThisMode(CommandRejectionReasonEntityAlreadyInThisMode),
        ModeNotExist(CommandRejectionReasonModeNotExist),
        InvalidCardIndex(CommandRejectionReasonInvalidCardIndex),
        InvalidCard(CommandRejectionReasonInvalidCard),
    }
}

impl fmt::Display for CommandRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardRejected(r) => write!(f, "Can not play card {:x}", r.reason),
            Self::InvalidEntityType(r) => {
                write!(f, "entity_type {} is not valid", r.entity_type)
            }
            other => f.write_str(other.case()),
        }
    }
}

/// A command the host refused, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedCommand {
    pub player: EntityId,
    pub reason: CommandRejectionReason,
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_command_case_counts() {
        assert_eq!(Command::CASES.len(), 29);
        assert_eq!(CommandRejectionReason::CASES.len(), 13);
    }

    #[test]
    fn test_group_attack_wire_shape() {
        let cmd = Command::GroupAttack(CommandGroupAttack {
            squads: vec![EntityId(5), EntityId(6)],
            target_entity_id: EntityId(99),
            force_attack: false,
        });
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"GroupAttack": {"squads": [5, 6], "target_entity_id": 99, "force_attack": false}})
        );
    }

    #[test]
    fn test_player_command_roundtrip() {
        let pc = PlayerCommand {
            player: EntityId(2),
            command: Command::WhisperToMaster(CommandWhisperToMaster {
                text: "gg".into(),
            }),
        };
        let json = serde_json::to_string(&pc).unwrap();
        assert_eq!(json, r#"{"player":2,"command":{"WhisperToMaster":{"text":"gg"}}}"#);
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pc);
    }

    #[test]
    fn test_rejection_display() {
        let card = CommandRejectionReason::CardRejected(CommandRejectionReasonCardRejected {
            reason: WhyCanNotPlayCardThere::DOES_NOT_HAVE_ENOUGH_ORBS,
            failed_card_conditions: vec![],
        });
        assert_eq!(card.to_string(), "Can not play card 400");

        let kind = CommandRejectionReason::InvalidEntityType(
            CommandRejectionReasonInvalidEntityType { entity_type: 3 },
        );
        assert_eq!(kind.to_string(), "entity_type 3 is not valid");

        let plain = CommandRejectionReason::ModeNotExist(CommandRejectionReasonModeNotExist {});
        assert_eq!(plain.to_string(), "ModeNotExist");
    }

    #[test]
    fn test_rejected_command_decodes() {
        let value = json!({
            "player": 4,
            "reason": {"EntityOwnedBySomeoneElse": {}},
            "command": {"GroupStopJob": {"squads": [11]}}
        });
        let rejected: RejectedCommand = serde_json::from_value(value).unwrap();
        assert_eq!(rejected.reason.case(), "EntityOwnedBySomeoneElse");
        assert_eq!(
            rejected.command,
            Command::GroupStopJob(CommandGroupStopJob {
                squads: vec![EntityId(11)]
            })
        );
    }
}

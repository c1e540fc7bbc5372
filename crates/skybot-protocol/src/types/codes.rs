//! Integer-coded enumerations.
//!
//! The host sends these as bare integers and is free to add new codes
//! between releases. Each one is a transparent newtype with named
//! constants for the codes we know about, so an unfamiliar code still
//! decodes and re-encodes unchanged instead of failing the whole message.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$const_meta:meta])*
                $konst:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $konst: Self = Self($value);
            )*
        }

        impl From<u32> for $name {
            fn from(code: u32) -> Self {
                Self(code)
            }
        }
    };
}

wire_code! {
    /// How a squad moves along a path.
    WalkMode {
        PARTIAL_FORCE = 1,
        FORCE = 2,
        /// Attack-move: engage enemies met on the way.
        NORMAL = 4,
        CRUSADE = 5,
        SCOUT = 6,
        PATROL = 7,
    }
}

wire_code! {
    /// Color of an orb.
    OrbColor {
        WHITE = 0,
        SHADOW = 1,
        NATURE = 2,
        FROST = 3,
        FIRE = 4,
        STARTING = 5,
        ALL = 7,
    }
}

wire_code! {
    /// Orb colors a token slot can be built as.
    CreateOrbColor {
        SHADOW = 1,
        NATURE = 2,
        FROST = 3,
        FIRE = 4,
    }
}

wire_code! {
    /// Map marker shown to teammates.
    Ping {
        ATTENTION = 0,
        ATTACK = 1,
        DEFEND = 2,
        NEED_HELP = 4,
        MEET = 5,
    }
}

wire_code! {
    /// Bit flags explaining why a card could not be played.
    WhyCanNotPlayCardThere {
        DOES_NOT_HAVE_ENOUGH_POWER = 0x10,
        /// Too close to the map axes.
        INVALID_POSITION = 0x20,
        CARD_CONDITION = 0x80,
        CONDITION_PREVENT_CARD_PLAY = 0x100,
        DOES_NOT_HAVE_THAT_CARD = 0x200,
        DOES_NOT_HAVE_ENOUGH_ORBS = 0x400,
        CASTING_TOO_OFTEN = 0x10000,
    }
}

impl WhyCanNotPlayCardThere {
    /// Returns `true` if every bit of `flag` is set.
    pub fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

impl fmt::LowerHex for WhyCanNotPlayCardThere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

wire_code! {
    /// Family an ability belongs to. The host knows a few hundred; only
    /// the ones that carry a dedicated effect payload are named here.
    AbilityLine {
        DAMAGE_OVER_TIME = 15,
        AURA = 27,
        COLLECTOR = 50,
        TIMED_SPELL = 80,
        LINKED_FIRE = 83,
        DAMAGE_RADIAL_AREA = 134,
        DAMAGE_CONE_CUT_AREA = 138,
        SPELL_ON_ENTITY_NEARBY = 214,
        MOVING_INTERVAL_CAST = 225,
    }
}

wire_code! {
    /// Identifies a built-in map.
    MapId {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_bare_integers() {
        assert_eq!(serde_json::to_string(&WalkMode::NORMAL).unwrap(), "4");
        let color: OrbColor = serde_json::from_str("3").unwrap();
        assert_eq!(color, OrbColor::FROST);
    }

    #[test]
    fn test_unknown_code_survives_roundtrip() {
        let mode: WalkMode = serde_json::from_str("99").unwrap();
        assert_eq!(mode, WalkMode(99));
        assert_eq!(serde_json::to_string(&mode).unwrap(), "99");
    }

    #[test]
    fn test_card_rejection_flags() {
        let why = WhyCanNotPlayCardThere(0x10 | 0x400);
        assert!(why.contains(WhyCanNotPlayCardThere::DOES_NOT_HAVE_ENOUGH_POWER));
        assert!(why.contains(WhyCanNotPlayCardThere::DOES_NOT_HAVE_ENOUGH_ORBS));
        assert!(!why.contains(WhyCanNotPlayCardThere::INVALID_POSITION));
        assert_eq!(format!("{why:x}"), "410");
    }
}

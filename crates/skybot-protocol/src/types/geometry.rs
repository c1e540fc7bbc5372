//! Map coordinates.
//!
//! The game world is 3D with `y` pointing up. Most commands only care
//! about the ground plane, which the wire calls `x`/`y` in 2D records but
//! which corresponds to `x`/`z` of a 3D [`Position`].

use serde::{Deserialize, Serialize};

/// A point in the 3D world.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Projects onto the ground plane, dropping height.
    pub fn to_2d(self) -> Position2D {
        Position2D {
            x: self.x,
            y: self.z,
        }
    }
}

/// A point on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f32,
    pub y: f32,
}

/// A ground-plane waypoint with a facing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2DWithOrientation {
    pub x: f32,
    pub y: f32,
    pub orientation: f32,
}

impl From<Position2DWithOrientation> for Position2D {
    fn from(p: Position2DWithOrientation) -> Self {
        Self { x: p.x, y: p.y }
    }
}

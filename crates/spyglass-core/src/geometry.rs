//! World geometry primitives shared across the event surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A map coordinate: horizontal tile position plus floor.
///
/// Carried by every world-visible event (movement, effects, tile updates).
/// Plain value type; visibility decisions belong to the connection endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// East-west tile coordinate.
    pub x: u16,
    /// North-south tile coordinate.
    pub y: u16,
    /// Floor index (0 is the highest floor).
    pub z: u8,
}

impl Position {
    /// Construct a position from raw coordinates.
    pub const fn new(x: u16, y: u16, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Whether two positions are on the same floor.
    pub const fn same_floor(&self, other: &Self) -> bool {
        self.z == other.z
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Facing of a creature on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Facing north.
    North,
    /// Facing east.
    East,
    /// Facing south.
    South,
    /// Facing west.
    West,
}

//! Pixel adjacency directions
//!
//! The four canonical co-occurrence offsets at unit distance. The set is
//! closed, so an unsupported angle cannot be expressed.

use std::fmt;

/// Direction of the neighbour pixel relative to the reference pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 0°
    Deg0,
    /// 45°
    Deg45,
    /// 90°
    Deg90,
    /// 135°
    Deg135,
}

impl Direction {
    /// All directions, in the order their statistics are averaged
    pub const ALL: [Direction; 4] = [
        Direction::Deg0,
        Direction::Deg45,
        Direction::Deg90,
        Direction::Deg135,
    ];

    /// Angle in degrees
    pub fn degrees(self) -> u32 {
        match self {
            Direction::Deg0 => 0,
            Direction::Deg45 => 45,
            Direction::Deg90 => 90,
            Direction::Deg135 => 135,
        }
    }

    /// Look up a direction from its angle in degrees
    ///
    /// # Returns
    /// The matching direction, or `None` for any other angle
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.degrees() == degrees)
    }

    /// Offset `(di, dj)` from the reference cell to its neighbour, in grid indices
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Deg0 => (0, 1),
            Direction::Deg45 => (-1, 1),
            Direction::Deg90 => (-1, 0),
            Direction::Deg135 => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

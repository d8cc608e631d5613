//! Grid cells and directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid.
///
/// Coordinates are signed so that a tentative head one step past the edge
/// is representable; such values are classified as wall collisions and are
/// never stored in game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// X coordinate (column).
    pub x: i16,
    /// Y coordinate (row).
    pub y: i16,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The cell one step in the given direction.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check whether this cell lies inside a square grid of the given size.
    #[must_use]
    pub const fn in_bounds(self, grid_size: i16) -> bool {
        self.x >= 0 && self.x < grid_size && self.y >= 0 && self.y < grid_size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four unit directions.
///
/// The idle vector (0, 0) has no letter and is represented as
/// `Option::<Direction>::None` throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up: (0, -1), letter `U`.
    #[serde(rename = "U")]
    Up,
    /// Down: (0, 1), letter `D`.
    #[serde(rename = "D")]
    Down,
    /// Left: (-1, 0), letter `L`.
    #[serde(rename = "L")]
    Left,
    /// Right: (1, 0), letter `R`.
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    /// The unit vector for this direction.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The letter encoding of this direction.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Decode a letter into a direction.
    ///
    /// Unrecognized letters decode to `None` (the idle vector), never an
    /// error.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Check whether this direction moves along the vertical axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Check whether two directions share an axis of motion.
    #[must_use]
    pub const fn same_axis(self, other: Self) -> bool {
        self.is_vertical() == other.is_vertical()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let cell = Cell::new(5, 10);
        assert_eq!(cell.step(Direction::Right), Cell::new(6, 10));
        assert_eq!(cell.step(Direction::Left), Cell::new(4, 10));
        assert_eq!(cell.step(Direction::Up), Cell::new(5, 9));
        assert_eq!(cell.step(Direction::Down), Cell::new(5, 11));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Cell::new(0, 0).in_bounds(20));
        assert!(Cell::new(19, 19).in_bounds(20));
        assert!(!Cell::new(20, 10).in_bounds(20));
        assert!(!Cell::new(10, 20).in_bounds(20));
        assert!(!Cell::new(-1, 10).in_bounds(20));
        assert!(!Cell::new(10, -1).in_bounds(20));
    }

    #[test]
    fn test_letter_roundtrip() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
    }

    #[test]
    fn test_unknown_letter_is_idle() {
        assert_eq!(Direction::from_letter('X'), None);
        assert_eq!(Direction::from_letter('u'), None);
        assert_eq!(Direction::from_letter('-'), None);
    }

    #[test]
    fn test_same_axis() {
        assert!(Direction::Up.same_axis(Direction::Down));
        assert!(Direction::Left.same_axis(Direction::Right));
        assert!(!Direction::Up.same_axis(Direction::Left));
        assert!(!Direction::Right.same_axis(Direction::Down));
    }
}

//! Snake body state.

use serde::{Deserialize, Serialize};

use crate::game::{Cell, Direction};

/// Identifier for one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 1 (starts on the left, steered with WASD in the TUI).
    One,
    /// Player 2 (starts on the right, steered with the arrow keys).
    Two,
}

impl PlayerId {
    /// Both players, in evaluation order (player 1 first).
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Display number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A snake body: an ordered list of cells, head first.
///
/// Invariants (checked by `game::invariants`): length >= 1, and segments
/// are mutually distinct at the start of every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    segments: Vec<Cell>,
}

impl Snake {
    /// Create a single-segment snake at the given cell.
    #[must_use]
    pub fn new(head: Cell) -> Self {
        Self {
            segments: vec![head],
        }
    }

    /// The head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// The tentative head one step in the given direction.
    ///
    /// May lie outside the grid; the engine classifies that as a wall
    /// collision before anything is stored.
    #[must_use]
    pub fn tentative_head(&self, dir: Direction) -> Cell {
        self.head().step(dir)
    }

    /// Body length in segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A snake is never empty; provided to satisfy the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All segments, head first.
    #[must_use]
    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    /// Check whether any segment occupies the given cell.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Move forward: prepend the new head and drop the tail.
    ///
    /// Net length is unchanged.
    pub fn advance(&mut self, new_head: Cell) {
        self.segments.insert(0, new_head);
        self.segments.pop();
    }

    /// Move forward and grow: prepend the new head, keep the tail.
    ///
    /// Net length increases by one.
    pub fn grow(&mut self, new_head: Cell) {
        self.segments.insert(0, new_head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Cell::new(5, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(5, 10));
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 10));
        snake.advance(Cell::new(6, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(6, 10));
        assert!(!snake.occupies(Cell::new(5, 10)));
    }

    #[test]
    fn test_grow_extends() {
        let mut snake = Snake::new(Cell::new(5, 10));
        snake.grow(Cell::new(6, 10));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(6, 10));
        assert!(snake.occupies(Cell::new(5, 10)));
    }

    #[test]
    fn test_advance_after_grow() {
        let mut snake = Snake::new(Cell::new(5, 10));
        snake.grow(Cell::new(6, 10));
        snake.advance(Cell::new(7, 10));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments(), &[Cell::new(7, 10), Cell::new(6, 10)]);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }
}

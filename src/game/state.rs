//! Game state management.

use serde::{Deserialize, Serialize};

use crate::game::{Cell, Direction, PlayerId, Snake};

/// Grid size of the reference game (20x20 cells).
pub const DEFAULT_GRID_SIZE: i16 = 20;

/// Body length that ends the game under the reference rules.
pub const DEFAULT_WIN_LENGTH: usize = 10;

/// How a game can be won.
///
/// Unifies the two observed rule variants behind one engine: pure
/// last-snake-standing, or first to a target body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// Victory only by being the sole surviving snake.
    EliminationOnly,
    /// Victory by elimination or by reaching the given body length first.
    LengthThreshold(usize),
}

/// Static configuration for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: i16,
    /// Win condition in effect.
    pub win: WinCondition,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            win: WinCondition::LengthThreshold(DEFAULT_WIN_LENGTH),
        }
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// The given player won.
    Player(PlayerId),
    /// Both players died on the same tick.
    Tie,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player(id) => write!(f, "player {id}"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// Complete per-tick game state.
///
/// Once `outcome` is `Some`, the state is frozen: snakes, food, and scores
/// no longer change and `advance` returns the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player 1's snake.
    pub snake1: Snake,
    /// Player 2's snake.
    pub snake2: Snake,
    /// Player 1's direction as of the last tick (`None` = idle).
    pub direction1: Option<Direction>,
    /// Player 2's direction as of the last tick (`None` = idle).
    pub direction2: Option<Direction>,
    /// Current food cell.
    pub food: Cell,
    /// Foods eaten by player 1.
    pub score1: u32,
    /// Foods eaten by player 2.
    pub score2: u32,
    /// `None` while the game is ongoing; fixed once set.
    pub outcome: Option<Winner>,
}

impl GameState {
    /// Create the documented initial state for a config.
    ///
    /// Both snakes are single segments on the middle row, a quarter of the
    /// grid in from their side; food starts at the center. On the default
    /// 20-cell grid this is (5, 10), (15, 10), and (10, 10).
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mid = config.grid_size / 2;
        let quarter = config.grid_size / 4;

        Self {
            snake1: Snake::new(Cell::new(quarter, mid)),
            snake2: Snake::new(Cell::new(config.grid_size - quarter, mid)),
            direction1: None,
            direction2: None,
            food: Cell::new(mid, mid),
            score1: 0,
            score2: 0,
            outcome: None,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get a player's snake.
    #[must_use]
    pub fn snake(&self, player: PlayerId) -> &Snake {
        match player {
            PlayerId::One => &self.snake1,
            PlayerId::Two => &self.snake2,
        }
    }

    /// Get a player's stored direction.
    #[must_use]
    pub const fn direction(&self, player: PlayerId) -> Option<Direction> {
        match player {
            PlayerId::One => self.direction1,
            PlayerId::Two => self.direction2,
        }
    }

    /// Get a player's score.
    #[must_use]
    pub const fn score(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.score1,
            PlayerId::Two => self.score2,
        }
    }

    /// Check whether either snake occupies the given cell.
    #[must_use]
    pub fn occupied(&self, cell: Cell) -> bool {
        self.snake1.occupies(cell) || self.snake2.occupies(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_reference_grid() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.snake1.head(), Cell::new(5, 10));
        assert_eq!(state.snake2.head(), Cell::new(15, 10));
        assert_eq!(state.food, Cell::new(10, 10));
        assert_eq!(state.snake1.len(), 1);
        assert_eq!(state.snake2.len(), 1);
        assert_eq!(state.direction1, None);
        assert_eq!(state.direction2, None);
        assert_eq!((state.score1, state.score2), (0, 0));
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_occupied() {
        let state = GameState::new(&GameConfig::default());
        assert!(state.occupied(Cell::new(5, 10)));
        assert!(state.occupied(Cell::new(15, 10)));
        assert!(!state.occupied(Cell::new(0, 0)));
        assert!(!state.occupied(Cell::new(10, 10)));
    }

    #[test]
    fn test_accessors_by_player() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.snake(PlayerId::One).head(), Cell::new(5, 10));
        assert_eq!(state.snake(PlayerId::Two).head(), Cell::new(15, 10));
        assert_eq!(state.direction(PlayerId::One), None);
        assert_eq!(state.score(PlayerId::Two), 0);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.win, WinCondition::LengthThreshold(10));
    }
}

//! Game invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger for states produced by `advance` from the
//! documented initial state. If they do, it indicates a bug in the engine,
//! not a gameplay condition.

use std::collections::HashSet;

use crate::game::{GameConfig, GameState, PlayerId};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState, config: &GameConfig) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for player in PlayerId::BOTH {
        let snake = state.snake(player);

        // Stored segments are always inside the grid; out-of-bounds heads
        // exist only transiently inside `advance`.
        for &cell in snake.segments() {
            if !cell.in_bounds(config.grid_size) {
                violations.push(InvariantViolation {
                    message: format!("player {player} has segment {cell} outside the grid"),
                });
            }
        }

        // Segments are mutually distinct at the start of every tick.
        let distinct: HashSet<_> = snake.segments().iter().collect();
        if distinct.len() != snake.len() {
            violations.push(InvariantViolation {
                message: format!(
                    "player {player} has {} segments but only {} distinct cells",
                    snake.len(),
                    distinct.len()
                ),
            });
        }
    }

    // While the game is live, food is never on a snake.
    if !state.is_game_over() && state.occupied(state.food) {
        violations.push(InvariantViolation {
            message: format!("food at {} overlaps a snake body", state.food),
        });
    }

    if !state.food.in_bounds(config.grid_size) {
        violations.push(InvariantViolation {
            message: format!("food at {} is outside the grid", state.food),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState, config: &GameConfig) {
    let violations = check_invariants(state, config);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState, _config: &GameConfig) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Snake, Winner};

    fn valid_state() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        (GameState::new(&config), config)
    }

    #[test]
    fn test_initial_state_passes() {
        let (state, config) = valid_state();
        assert!(check_invariants(&state, &config).is_empty());
    }

    #[test]
    fn test_out_of_bounds_segment_detected() {
        let (mut state, config) = valid_state();
        state.snake1 = Snake::new(Cell::new(20, 10));

        let violations = check_invariants(&state, &config);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("outside the grid"));
    }

    #[test]
    fn test_duplicate_segments_detected() {
        let (mut state, config) = valid_state();
        let mut snake = Snake::new(Cell::new(3, 3));
        snake.grow(Cell::new(3, 4));
        snake.grow(Cell::new(3, 3));
        state.snake1 = snake;

        let violations = check_invariants(&state, &config);
        assert!(!violations.is_empty());
        assert!(violations[0].message.contains("distinct"));
    }

    #[test]
    fn test_food_on_snake_detected() {
        let (mut state, config) = valid_state();
        state.food = state.snake2.head();

        let violations = check_invariants(&state, &config);
        assert!(!violations.is_empty());
        assert!(violations[0].message.contains("overlaps"));
    }

    #[test]
    fn test_food_overlap_allowed_after_game_over() {
        // A frozen final state keeps whatever food cell it had; only live
        // states require the food to be free.
        let (mut state, config) = valid_state();
        state.food = state.snake2.head();
        state.outcome = Some(Winner::Tie);

        assert!(check_invariants(&state, &config).is_empty());
    }
}

//! Game layer for Coil.
//!
//! Implements the two-player snake rules:
//! - Grid cells and the four unit directions
//! - Snake bodies and per-player state
//! - The pure per-tick transition function and its tie-break order
//! - Deterministic food placement
//! - Invariant checks over game states

mod engine;
mod food;
mod grid;
mod invariants;
mod snake;
mod state;

pub use engine::{advance, food_eaten, game_ended};
pub use food::{FoodSpawner, SpawnError};
pub use grid::{Cell, Direction};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use snake::{PlayerId, Snake};
pub use state::{
    GameConfig, GameState, WinCondition, Winner, DEFAULT_GRID_SIZE, DEFAULT_WIN_LENGTH,
};

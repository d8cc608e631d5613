// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Coil: a deterministic two-player snake engine with auditable move logs.
//!
//! This crate separates the game into:
//! - A pure per-tick transition function ([`game::advance`])
//! - A move ledger that records, fingerprints, and allows editing the
//!   history of a match ([`log::MoveLedger`])
//! - A live session that wires input, ticks, and the ledger together
//!   ([`session::GameSession`])
//! - Record/replay with time travel and tamper detection ([`replay`])
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      TUI / CLI (scheduler)          │
//! ├─────────────────────────────────────┤
//! │    GameSession  /  ReplayEngine     │
//! ├─────────────────────────────────────┤
//! │   advance()        MoveLedger       │
//! └─────────────────────────────────────┘
//! ```
//!
//! Everything below the session layer is deterministic: the same
//! configuration, food seed, and move log always produce the same game.

pub mod game;
pub mod log;
pub mod replay;
pub mod session;

// Re-export key types at crate root for convenience
pub use game::{
    Cell, Direction, FoodSpawner, GameConfig, GameState, PlayerId, Snake, WinCondition, Winner,
};
pub use log::MoveLedger;
pub use replay::{Recording, ReplayEngine};
pub use session::GameSession;

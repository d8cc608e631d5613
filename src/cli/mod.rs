//! CLI command implementations for Coil.

pub(crate) mod edit;
pub(crate) mod play;
pub(crate) mod replay;
pub(crate) mod verify;

mod output;

use clap::ValueEnum;
use coil::game::{Direction, PlayerId};
use std::error::Error;
use std::fmt;

/// Output format for the `verify` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `replay` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReplayFormat {
    /// Interactive TUI.
    Tui,
    /// Plain text dump of every tick.
    Text,
}

/// A move slot value on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum MoveArg {
    /// Move up.
    Up,
    /// Move down.
    Down,
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// No move this tick.
    Idle,
}

impl MoveArg {
    /// Convert to the engine's move representation.
    pub(crate) const fn to_move(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Idle => None,
        }
    }
}

/// A player number on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlayerArg {
    /// Player 1.
    #[value(name = "1")]
    One,
    /// Player 2.
    #[value(name = "2")]
    Two,
}

impl PlayerArg {
    /// Convert to the engine's player identifier.
    pub(crate) const fn to_player(self) -> PlayerId {
        match self {
            Self::One => PlayerId::One,
            Self::Two => PlayerId::Two,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<coil::replay::ReplayError> for CliError {
    fn from(e: coil::replay::ReplayError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<coil::game::SpawnError> for CliError {
    fn from(e: coil::game::SpawnError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<coil::log::EditError> for CliError {
    fn from(e: coil::log::EditError) -> Self {
        Self::new(e.to_string())
    }
}

//! Recording, replay, and audit verification.
//!
//! Because the engine is deterministic, a recording needs only the game
//! configuration, the food seed, and the move log. No state deltas are
//! stored: to view tick N, re-run the simulation from tick 0 to N.
//!
//! # Time Travel
//!
//! - **Forward**: apply the next logged tick
//! - **Backward**: re-run from tick 0 to (`current_tick` - 1)
//! - **Jump to tick N**: re-run from tick 0 to N

mod render;

pub use render::render_ascii;

use crate::game::{
    self, assert_invariants, FoodSpawner, GameConfig, GameState, SpawnError, Winner,
};
use crate::log::{self, MoveLogEntry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// A saved game: configuration, food seed, and the move log.
///
/// The stored fingerprint and outcome are what the live session observed;
/// [`verify`] recomputes both from the entries and flags any divergence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Session configuration.
    pub config: GameConfig,
    /// Seed the food spawner was created with.
    pub food_seed: u64,
    /// Complete move log, one entry per tick, densely numbered from 0.
    pub entries: Vec<MoveLogEntry>,
    /// Fingerprint of `entries` as recorded at save time.
    pub fingerprint: String,
    /// Final outcome as recorded at save time, if the game ended.
    pub outcome: Option<Winner>,
}

impl Recording {
    /// Save as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization
    /// fails.
    pub fn save(&self, path: &Path) -> Result<(), ReplayError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the JSON is
    /// malformed, or the tick numbering is not dense from 0.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path)?;
        let recording: Self = serde_json::from_reader(BufReader::new(file))?;

        for (i, entry) in recording.entries.iter().enumerate() {
            if entry.tick as usize != i {
                return Err(ReplayError::NonDenseTicks {
                    index: i,
                    tick: entry.tick,
                });
            }
        }

        Ok(recording)
    }

    /// Number of recorded ticks.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Whether the recording holds no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Error type for replay operations.
#[derive(Debug)]
pub enum ReplayError {
    /// File I/O failed.
    Io(io::Error),
    /// The recording JSON could not be parsed or written.
    Malformed(serde_json::Error),
    /// Entry at `index` carries tick `tick` instead of `index`.
    NonDenseTicks {
        /// Position in the entries vector.
        index: usize,
        /// Tick number that entry claims.
        tick: u32,
    },
    /// Tick number past the end of the recording.
    TickOutOfBounds {
        /// Requested tick.
        requested: u32,
        /// Number of recorded ticks.
        max_tick: u32,
    },
    /// Cannot step forward: the game already ended.
    GameOver,
    /// Food relocation failed during re-simulation.
    Spawn(SpawnError),
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e)
    }
}

impl From<SpawnError> for ReplayError {
    fn from(e: SpawnError) -> Self {
        Self::Spawn(e)
    }
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "recording I/O failed: {e}"),
            Self::Malformed(e) => write!(f, "malformed recording: {e}"),
            Self::NonDenseTicks { index, tick } => {
                write!(f, "entry {index} carries tick {tick}, expected {index}")
            }
            Self::TickOutOfBounds { requested, max_tick } => {
                write!(f, "tick {requested} out of bounds (max: {max_tick})")
            }
            Self::GameOver => write!(f, "game is already over"),
            Self::Spawn(e) => write!(f, "re-simulation failed: {e}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed(e) => Some(e),
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

/// Replay engine: steps through a recorded game deterministically.
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    recording: Recording,
    state: GameState,
    spawner: FoodSpawner,
    current_tick: u32,
}

impl ReplayEngine {
    /// Create a replay engine at tick 0.
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        let state = GameState::new(&recording.config);
        let spawner = FoodSpawner::new(recording.food_seed, recording.config.grid_size);
        Self {
            recording,
            state,
            spawner,
            current_tick: 0,
        }
    }

    /// Create a replay engine positioned at a specific tick.
    ///
    /// Re-runs from tick 0; stops early if the game ends first.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick is out of bounds or re-simulation
    /// fails.
    pub fn new_at_tick(recording: Recording, target_tick: u32) -> Result<Self, ReplayError> {
        let max_tick = recording.len();
        if target_tick > max_tick {
            return Err(ReplayError::TickOutOfBounds {
                requested: target_tick,
                max_tick,
            });
        }

        let mut engine = Self::new(recording);
        for _ in 0..target_tick {
            if engine.state.is_game_over() {
                break;
            }
            engine.apply_next()?;
        }
        Ok(engine)
    }

    /// The recording being replayed.
    #[must_use]
    pub const fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Ticks applied so far.
    #[must_use]
    pub const fn tick(&self) -> u32 {
        self.current_tick
    }

    /// Current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the replayed game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Whether the playhead sits at the end of the log.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current_tick >= self.recording.len()
    }

    /// Step forward one tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the log is exhausted, the game already
    /// ended, or re-simulation fails.
    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        if self.at_end() {
            return Err(ReplayError::TickOutOfBounds {
                requested: self.current_tick,
                max_tick: self.recording.len(),
            });
        }
        if self.state.is_game_over() {
            return Err(ReplayError::GameOver);
        }

        self.apply_next()
    }

    /// Step backward one tick by re-running from tick 0.
    ///
    /// # Errors
    ///
    /// Returns an error if already at tick 0 or re-simulation fails.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.current_tick == 0 {
            return Err(ReplayError::TickOutOfBounds {
                requested: 0,
                max_tick: 0,
            });
        }

        let target = self.current_tick - 1;
        self.goto_tick(target)
    }

    /// Jump to a specific tick by re-running from tick 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick is out of bounds or re-simulation
    /// fails.
    pub fn goto_tick(&mut self, target_tick: u32) -> Result<(), ReplayError> {
        let recording = self.recording.clone();
        *self = Self::new_at_tick(recording, target_tick)?;
        Ok(())
    }

    /// Run to the end of the log (or until the game ends).
    ///
    /// # Errors
    ///
    /// Returns an error if re-simulation fails.
    pub fn run_to_end(&mut self) -> Result<(), ReplayError> {
        while !self.at_end() && !self.state.is_game_over() {
            self.apply_next()?;
        }
        Ok(())
    }

    /// Render the current state for terminal viewing.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        render_ascii(&self.state, &self.recording.config, self.current_tick)
    }

    fn apply_next(&mut self) -> Result<(), ReplayError> {
        let entry = self.recording.entries[self.current_tick as usize];
        let next = game::advance(
            &self.state,
            &self.recording.config,
            entry.move1,
            entry.move2,
            &mut self.spawner,
        )?;
        assert_invariants(&next, &self.recording.config);
        self.state = next;
        self.current_tick += 1;
        Ok(())
    }
}

/// Result of checking a recording against its stored audit data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// Fingerprint recomputed from the entries.
    pub computed_fingerprint: String,
    /// Recomputed fingerprint equals the stored one.
    pub fingerprint_matches: bool,
    /// Outcome produced by re-running the full log.
    pub computed_outcome: Option<Winner>,
    /// Recomputed outcome equals the stored one.
    pub outcome_matches: bool,
    /// Ticks actually applied during the re-run.
    pub ticks_replayed: u32,
}

impl VerifyReport {
    /// Both the fingerprint and the outcome check out.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.fingerprint_matches && self.outcome_matches
    }
}

/// Re-run a recording and check it against its stored fingerprint and
/// outcome.
///
/// A mismatch means the entries were altered after recording (or the
/// stored audit data was).
///
/// # Errors
///
/// Returns an error if re-simulation fails.
pub fn verify(recording: &Recording) -> Result<VerifyReport, ReplayError> {
    let computed_fingerprint = log::fingerprint(&recording.entries);

    let mut engine = ReplayEngine::new(recording.clone());
    engine.run_to_end()?;
    let computed_outcome = engine.state().outcome;

    Ok(VerifyReport {
        fingerprint_matches: computed_fingerprint == recording.fingerprint,
        computed_fingerprint,
        outcome_matches: computed_outcome == recording.outcome,
        computed_outcome,
        ticks_replayed: engine.tick(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, PlayerId};
    use crate::session::GameSession;
    use tempfile::NamedTempFile;

    fn short_game() -> Recording {
        // Player 1 marches right into the idle player 2; 10 ticks total.
        let mut session = GameSession::new(GameConfig::default(), 99);
        session.steer(PlayerId::One, Direction::Right);
        while !session.state().is_game_over() {
            session.tick().expect("tick");
        }
        session.recording()
    }

    #[test]
    fn test_replay_reproduces_live_game() {
        let mut session = GameSession::new(GameConfig::default(), 7);
        session.steer(PlayerId::One, Direction::Right);
        session.steer(PlayerId::Two, Direction::Left);
        for _ in 0..4 {
            session.tick().expect("tick");
        }

        let mut engine = ReplayEngine::new(session.recording());
        engine.run_to_end().expect("replay");

        assert_eq!(engine.state(), session.state());
        assert_eq!(engine.tick(), session.current_tick());
    }

    #[test]
    fn test_step_backward_rewinds_one_tick() {
        let recording = short_game();
        let mut engine = ReplayEngine::new_at_tick(recording, 5).expect("position");
        let head_at_5 = engine.state().snake1.head();

        engine.step_forward().expect("forward");
        engine.step_backward().expect("backward");

        assert_eq!(engine.tick(), 5);
        assert_eq!(engine.state().snake1.head(), head_at_5);
    }

    #[test]
    fn test_goto_tick_out_of_bounds() {
        let recording = short_game();
        let len = recording.len();
        let mut engine = ReplayEngine::new(recording);

        let err = engine.goto_tick(len + 1).expect_err("must reject");
        assert!(matches!(err, ReplayError::TickOutOfBounds { .. }));
    }

    #[test]
    fn test_step_forward_past_end_fails() {
        let recording = short_game();
        let mut engine = ReplayEngine::new(recording);
        engine.run_to_end().expect("replay");

        assert!(engine.step_forward().is_err());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let recording = short_game();

        let temp_file = NamedTempFile::new().expect("create temp file");
        recording.save(temp_file.path()).expect("save recording");
        let loaded = Recording::load(temp_file.path()).expect("load recording");

        assert_eq!(loaded, recording);
    }

    #[test]
    fn test_load_rejects_non_dense_ticks() {
        let mut recording = short_game();
        recording.entries[1].tick = 5;

        let temp_file = NamedTempFile::new().expect("create temp file");
        recording.save(temp_file.path()).expect("save recording");

        let err = Recording::load(temp_file.path()).expect_err("must reject");
        assert!(matches!(err, ReplayError::NonDenseTicks { index: 1, tick: 5 }));
    }

    #[test]
    fn test_verify_passes_untampered_recording() {
        let recording = short_game();
        let report = verify(&recording).expect("verify");

        assert!(report.passed());
        assert_eq!(report.computed_fingerprint, recording.fingerprint);
    }

    #[test]
    fn test_verify_flags_tampered_moves() {
        let mut recording = short_game();
        recording.entries[0].move1 = Some(Direction::Up);

        let report = verify(&recording).expect("verify");
        assert!(!report.fingerprint_matches);
        assert!(!report.passed());
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::TickOutOfBounds {
            requested: 15,
            max_tick: 10,
        };
        assert!(format!("{err}").contains("15"));
        assert!(format!("{err}").contains("10"));

        let err = ReplayError::GameOver;
        assert!(format!("{err}").contains("over"));
    }
}

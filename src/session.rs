//! Live game session: the scheduler-facing seam.
//!
//! A [`GameSession`] owns the game state, the move ledger, and the food
//! spawner, and exposes exactly two mutation paths: [`GameSession::steer`]
//! for input events (which touch only the pending directions) and
//! [`GameSession::tick`], which executes one complete tick - read pending
//! directions, advance, append to the ledger, refingerprint - atomically
//! with respect to input. The host (TUI, test harness) owns the timer.

use crate::game::{
    self, assert_invariants, Direction, FoodSpawner, GameConfig, GameState, PlayerId, SpawnError,
};
use crate::log::{EditError, MoveLedger};
use crate::replay::Recording;

/// One-shot signals and audit data for a completed tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was just executed.
    pub tick: u32,
    /// A snake ate this tick (either length grew or the food moved).
    pub food_eaten: bool,
    /// The game transitioned to over this tick.
    pub game_ended: bool,
    /// Fingerprint of the move log after appending this tick.
    pub fingerprint: String,
}

/// A live two-player game.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    state: GameState,
    ledger: MoveLedger,
    spawner: FoodSpawner,
    pending1: Option<Direction>,
    pending2: Option<Direction>,
    tick: u32,
}

impl GameSession {
    /// Start a session from the documented initial state.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            state: GameState::new(&config),
            ledger: MoveLedger::new(),
            spawner: FoodSpawner::new(seed, config.grid_size),
            pending1: None,
            pending2: None,
            tick: 0,
        }
    }

    /// Queue a direction for the next tick.
    ///
    /// Accepted only when not parallel to the player's current axis of
    /// motion, which prevents instant reversal into the snake's own neck;
    /// an idle player accepts any first direction (this is what starts the
    /// match). Within a tick, the last accepted write wins. Returns
    /// whether the input was accepted.
    pub fn steer(&mut self, player: PlayerId, dir: Direction) -> bool {
        if self.state.is_game_over() {
            return false;
        }

        let pending = match player {
            PlayerId::One => &mut self.pending1,
            PlayerId::Two => &mut self.pending2,
        };

        match *pending {
            Some(current) if current.same_axis(dir) => false,
            _ => {
                *pending = Some(dir);
                true
            }
        }
    }

    /// Execute one tick.
    ///
    /// A finished game is left untouched (the report carries no one-shot
    /// signals). Idle ticks before the match starts are still recorded, so
    /// tick numbers in the log always match elapsed timer ticks.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnError`] if food relocation exhausted its retries;
    /// the tick is not recorded in that case.
    pub fn tick(&mut self) -> Result<TickReport, SpawnError> {
        if self.state.is_game_over() {
            return Ok(TickReport {
                tick: self.tick,
                food_eaten: false,
                game_ended: false,
                fingerprint: self.ledger.fingerprint(),
            });
        }

        let (move1, move2) = (self.pending1, self.pending2);
        let next = game::advance(&self.state, &self.config, move1, move2, &mut self.spawner)?;
        assert_invariants(&next, &self.config);

        self.ledger.append(self.tick, move1, move2);

        let report = TickReport {
            tick: self.tick,
            food_eaten: game::food_eaten(&self.state, &next),
            game_ended: game::game_ended(&self.state, &next),
            fingerprint: self.ledger.fingerprint(),
        };

        self.state = next;
        self.tick += 1;
        Ok(report)
    }

    /// Edit one recorded `(tick, player)` slot.
    ///
    /// Forwards to the ledger: the game state is never recomputed by an
    /// edit.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSuchTick`] if the tick has not been played.
    pub fn edit_move(
        &mut self,
        tick: u32,
        player: PlayerId,
        new_move: Option<Direction>,
    ) -> Result<(), EditError> {
        self.ledger.edit_slot(tick, player, new_move)
    }

    /// Reset to the initial state with a fresh food seed.
    ///
    /// State, both logs, the modified set, pending directions, and the
    /// tick counter are cleared together so no stale cross-references
    /// survive.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.state = GameState::new(&self.config);
        self.ledger.clear();
        self.spawner = FoodSpawner::new(seed, self.config.grid_size);
        self.pending1 = None;
        self.pending2 = None;
        self.tick = 0;
    }

    /// Current game state snapshot.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The move ledger (log, original shadow, modified set).
    #[must_use]
    pub const fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The food seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Next tick to be executed (equals ticks played so far).
    #[must_use]
    pub const fn current_tick(&self) -> u32 {
        self.tick
    }

    /// Snapshot this session as a saveable recording.
    ///
    /// Uses the original (pre-edit) log so that replaying the recording
    /// reproduces the session as it was actually played.
    #[must_use]
    pub fn recording(&self) -> Recording {
        Recording {
            config: self.config,
            food_seed: self.seed,
            entries: self.ledger.original_entries().to_vec(),
            fingerprint: self.ledger.original_fingerprint(),
            outcome: self.state.outcome,
        }
    }
}

//! Move recording, editing, and tamper tracking.
//!
//! Three structures share a lifetime and are cleared together on reset:
//!
//! - the **move log**: one entry per tick with both players' inputs;
//! - the **original log**: an append-only shadow capturing each tick's
//!   first recorded values, never touched by edits;
//! - the **modified set**: the `(tick, player)` slots whose current value
//!   differs from the original.
//!
//! Editing a slot deliberately does NOT re-run the simulation: the log is
//! a decoupled, human-auditable annotation layer over an already-computed
//! outcome. The fingerprint in [`hash`] makes a divergence between two
//! copies of a log visible at a glance.

mod hash;

pub use hash::fingerprint;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::game::{Direction, PlayerId};

/// Both players' recorded inputs for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    /// Tick this entry belongs to.
    pub tick: u32,
    /// Player 1's input (`None` = idle).
    pub move1: Option<Direction>,
    /// Player 2's input (`None` = idle).
    pub move2: Option<Direction>,
}

impl MoveLogEntry {
    /// Get the slot for a player.
    #[must_use]
    pub const fn slot(&self, player: PlayerId) -> Option<Direction> {
        match player {
            PlayerId::One => self.move1,
            PlayerId::Two => self.move2,
        }
    }

    /// Set the slot for a player.
    pub const fn set_slot(&mut self, player: PlayerId, value: Option<Direction>) {
        match player {
            PlayerId::One => self.move1 = value,
            PlayerId::Two => self.move2 = value,
        }
    }
}

/// Error type for move-log edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The requested tick has not been recorded.
    NoSuchTick {
        /// The tick that was requested.
        tick: u32,
    },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::NoSuchTick { tick } => write!(f, "no move recorded for tick {tick}"),
        }
    }
}

impl std::error::Error for EditError {}

/// The move log, its original shadow, and the modified-slot set.
///
/// Ticks are dense non-negative integers starting at 0, so both logs are
/// plain vectors indexed by tick and lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    log: Vec<MoveLogEntry>,
    original: Vec<MoveLogEntry>,
    modified: HashSet<(u32, PlayerId)>,
}

impl MoveLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both players' inputs for a tick.
    ///
    /// A tick already present in the log is overwritten there (that is how
    /// a replayed tick differs from first-time recording); the original
    /// log only ever receives each tick's first values. Ticks must be
    /// recorded densely from 0.
    pub fn append(&mut self, tick: u32, move1: Option<Direction>, move2: Option<Direction>) {
        let entry = MoveLogEntry { tick, move1, move2 };
        let idx = tick as usize;

        if idx < self.log.len() {
            self.log[idx] = entry;
        } else {
            debug_assert_eq!(idx, self.log.len(), "ticks are recorded densely from 0");
            self.log.push(entry);
        }

        if idx >= self.original.len() {
            self.original.push(entry);
        }

        self.refresh_modified(tick, PlayerId::One);
        self.refresh_modified(tick, PlayerId::Two);
    }

    /// Replace the stored value for one `(tick, player)` slot.
    ///
    /// Touches the move log only - the original shadow stays as recorded,
    /// the game state is not recomputed. The modified set is refreshed for
    /// the slot: reverting to the original value removes its mark.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSuchTick`] (a no-op) if the tick has not
    /// been recorded.
    pub fn edit_slot(
        &mut self,
        tick: u32,
        player: PlayerId,
        new_move: Option<Direction>,
    ) -> Result<(), EditError> {
        let idx = tick as usize;
        let Some(entry) = self.log.get_mut(idx) else {
            return Err(EditError::NoSuchTick { tick });
        };

        entry.set_slot(player, new_move);
        self.refresh_modified(tick, player);
        Ok(())
    }

    /// Recompute modified-set membership for one slot.
    fn refresh_modified(&mut self, tick: u32, player: PlayerId) {
        let idx = tick as usize;
        let current = self.log.get(idx).map(|e| e.slot(player));
        let original = self.original.get(idx).map(|e| e.slot(player));

        if current == original {
            self.modified.remove(&(tick, player));
        } else {
            self.modified.insert((tick, player));
        }
    }

    /// Look up the entry for a tick.
    #[must_use]
    pub fn get(&self, tick: u32) -> Option<&MoveLogEntry> {
        self.log.get(tick as usize)
    }

    /// All current entries in tick order.
    #[must_use]
    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.log
    }

    /// The original (first-recorded) entries in tick order.
    #[must_use]
    pub fn original_entries(&self) -> &[MoveLogEntry] {
        &self.original
    }

    /// Check whether a slot currently differs from its original value.
    #[must_use]
    pub fn is_modified(&self, tick: u32, player: PlayerId) -> bool {
        self.modified.contains(&(tick, player))
    }

    /// The set of slots that differ from their original values.
    #[must_use]
    pub const fn modified(&self) -> &HashSet<(u32, PlayerId)> {
        &self.modified
    }

    /// Number of recorded ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Check whether no ticks have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Fingerprint of the current move log.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.log)
    }

    /// Fingerprint of the original (pre-edit) move log.
    #[must_use]
    pub fn original_fingerprint(&self) -> String {
        fingerprint(&self.original)
    }

    /// Clear the log, the original shadow, and the modified set together.
    pub fn clear(&mut self) {
        self.log.clear();
        self.original.clear();
        self.modified.clear();
    }
}

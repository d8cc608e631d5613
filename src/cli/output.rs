//! Output formatting utilities for CLI.

use coil::replay::{Recording, VerifyReport};
use serde::Serialize;

/// JSON-serializable verification result.
#[derive(Debug, Serialize)]
pub(super) struct JsonVerifyResult {
    /// Number of ticks in the recording.
    pub(super) ticks_recorded: u32,
    /// Number of ticks actually replayed.
    pub(super) ticks_replayed: u32,
    /// Fingerprint stored in the recording.
    pub(super) stored_fingerprint: String,
    /// Fingerprint recomputed from the entries.
    pub(super) computed_fingerprint: String,
    /// Stored and computed fingerprints agree.
    pub(super) fingerprint_matches: bool,
    /// Outcome stored in the recording ("player 1", "tie", or null).
    pub(super) stored_outcome: Option<String>,
    /// Outcome produced by the re-run.
    pub(super) computed_outcome: Option<String>,
    /// Stored and computed outcomes agree.
    pub(super) outcome_matches: bool,
    /// Overall verdict.
    pub(super) passed: bool,
}

impl JsonVerifyResult {
    /// Build from a recording and its verification report.
    pub(super) fn from_report(recording: &Recording, report: &VerifyReport) -> Self {
        Self {
            ticks_recorded: recording.len(),
            ticks_replayed: report.ticks_replayed,
            stored_fingerprint: recording.fingerprint.clone(),
            computed_fingerprint: report.computed_fingerprint.clone(),
            fingerprint_matches: report.fingerprint_matches,
            stored_outcome: recording.outcome.map(|w| w.to_string()),
            computed_outcome: report.computed_outcome.map(|w| w.to_string()),
            outcome_matches: report.outcome_matches,
            passed: report.passed(),
        }
    }
}

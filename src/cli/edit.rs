//! Edit command implementation - rewrite one move slot of a recording.

use super::{CliError, MoveArg, PlayerArg};
use coil::log::MoveLedger;
use coil::replay::Recording;
use std::path::PathBuf;

/// Execute the edit command.
///
/// Loads a recording, rewrites one `(tick, player)` slot, and saves the
/// edited copy. The stored fingerprint is left untouched, so `verify`
/// against the edited file reports the divergence.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded, the tick does
/// not exist, or the edited copy cannot be saved.
pub(crate) fn execute(
    recording_path: PathBuf,
    tick: u32,
    player: PlayerArg,
    new_move: MoveArg,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut recording = Recording::load(&recording_path).map_err(|e| {
        CliError::new(format!(
            "Failed to load recording {}: {e}",
            recording_path.display()
        ))
    })?;

    // Run the edit through a ledger so the modified-slot bookkeeping is
    // the same as in a live session.
    let mut ledger = MoveLedger::new();
    for entry in &recording.entries {
        ledger.append(entry.tick, entry.move1, entry.move2);
    }
    let before = ledger.fingerprint();

    ledger.edit_slot(tick, player.to_player(), new_move.to_move())?;

    let after = ledger.fingerprint();
    recording.entries = ledger.entries().to_vec();

    let output_path = output.unwrap_or(recording_path);
    recording
        .save(&output_path)
        .map_err(|e| CliError::new(format!("Failed to save recording: {e}")))?;

    println!("Edited tick {tick}, player {}", player.to_player());
    println!("Fingerprint: {before} -> {after}");
    for (t, p) in ledger.modified() {
        println!("  modified slot: tick {t}, player {p}");
    }
    println!("Saved to: {}", output_path.display());

    Ok(())
}

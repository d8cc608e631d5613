//! Verify command implementation - headless audit of a recording.

use super::output::JsonVerifyResult;
use super::{CliError, OutputFormat};
use coil::replay::{self, Recording};
use std::path::PathBuf;
use std::process::ExitCode;

/// Execute the verify command.
///
/// Re-runs the recording and checks the stored fingerprint and outcome.
/// Returns a failure exit code on mismatch so scripts can gate on it.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded or replayed.
pub(crate) fn execute(
    recording_path: PathBuf,
    format: OutputFormat,
) -> Result<ExitCode, CliError> {
    let recording = Recording::load(&recording_path).map_err(|e| {
        CliError::new(format!(
            "Failed to load recording {}: {e}",
            recording_path.display()
        ))
    })?;

    let report = replay::verify(&recording)?;

    match format {
        OutputFormat::Text => {
            println!("Recording: {}", recording_path.display());
            println!("Ticks replayed: {}", report.ticks_replayed);
            println!(
                "Fingerprint: stored {} / computed {} [{}]",
                recording.fingerprint,
                report.computed_fingerprint,
                if report.fingerprint_matches { "ok" } else { "MISMATCH" }
            );
            println!(
                "Outcome: stored {} / computed {} [{}]",
                outcome_label(recording.outcome.as_ref()),
                outcome_label(report.computed_outcome.as_ref()),
                if report.outcome_matches { "ok" } else { "MISMATCH" }
            );
            println!();
            if report.passed() {
                println!("PASS");
            } else {
                println!("FAIL");
            }
        }
        OutputFormat::Json => {
            let result = JsonVerifyResult::from_report(&recording, &report);
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn outcome_label(outcome: Option<&coil::game::Winner>) -> String {
    outcome.map_or_else(|| "unfinished".to_string(), ToString::to_string)
}

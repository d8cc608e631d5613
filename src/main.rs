//! Coil CLI - play, replay, edit, and verify two-player snake games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Coil - a deterministic two-player snake engine
#[derive(Parser, Debug)]
#[command(name = "coil")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive two-player game in the terminal
    Play {
        /// Food seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Tick interval in milliseconds (default: 150)
        #[arg(long, default_value = "150")]
        speed: u64,

        /// Board side length (default: 20)
        #[arg(short, long, default_value = "20")]
        grid_size: i16,

        /// Snake length that wins the game (default: 10)
        #[arg(short, long, default_value = "10")]
        win_length: usize,

        /// Win by elimination only, ignoring snake length
        #[arg(long)]
        elimination_only: bool,

        /// Save recording to file
        #[arg(long)]
        save: Option<std::path::PathBuf>,
    },

    /// Replay a recorded game
    Replay {
        /// Recording file (.json)
        #[arg(required = true)]
        recording: std::path::PathBuf,

        /// Output format: tui or text
        #[arg(short, long, default_value = "tui")]
        format: cli::ReplayFormat,

        /// Start at a specific tick
        #[arg(short, long)]
        tick: Option<u32>,
    },

    /// Rewrite one move slot of a recording
    Edit {
        /// Recording file (.json)
        #[arg(required = true)]
        recording: std::path::PathBuf,

        /// Tick to edit
        #[arg(short, long)]
        tick: u32,

        /// Player whose move to rewrite (1 or 2)
        #[arg(short, long)]
        player: cli::PlayerArg,

        /// New value for the slot: up, down, left, right, or idle
        #[arg(short, long)]
        new_move: cli::MoveArg,

        /// Write the edited copy here instead of overwriting
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Re-run a recording and check its fingerprint and outcome
    Verify {
        /// Recording file (.json)
        #[arg(required = true)]
        recording: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            seed,
            speed,
            grid_size,
            win_length,
            elimination_only,
            save,
        } => cli::play::execute(seed, speed, grid_size, win_length, elimination_only, save)
            .map(|()| ExitCode::SUCCESS),

        Commands::Replay {
            recording,
            format,
            tick,
        } => cli::replay::execute(recording, format, tick).map(|()| ExitCode::SUCCESS),

        Commands::Edit {
            recording,
            tick,
            player,
            new_move,
            output,
        } => cli::edit::execute(recording, tick, player, new_move, output)
            .map(|()| ExitCode::SUCCESS),

        Commands::Verify { recording, format } => cli::verify::execute(recording, format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Replay command implementation.

use super::{CliError, ReplayFormat};
use coil::replay::{Recording, ReplayEngine};
use std::path::PathBuf;

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded or the replay
/// fails.
pub(crate) fn execute(
    recording_path: PathBuf,
    format: ReplayFormat,
    tick: Option<u32>,
) -> Result<(), CliError> {
    let recording = Recording::load(&recording_path).map_err(|e| {
        CliError::new(format!(
            "Failed to load recording {}: {e}",
            recording_path.display()
        ))
    })?;

    let engine = if let Some(target_tick) = tick {
        ReplayEngine::new_at_tick(recording, target_tick)?
    } else {
        ReplayEngine::new(recording)
    };

    match format {
        ReplayFormat::Tui => run_replay_tui(engine),
        ReplayFormat::Text => print_text_replay(engine),
    }
}

fn run_replay_tui(engine: ReplayEngine) -> Result<(), CliError> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut engine = engine;

    loop {
        terminal
            .draw(|f| {
                use ratatui::{
                    layout::{Constraint, Direction, Layout},
                    style::{Color, Modifier, Style},
                    widgets::{Block, Borders, Paragraph, Wrap},
                };

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(10),
                        Constraint::Length(3),
                    ])
                    .split(f.area());

                // Header
                let status = if engine.is_game_over() {
                    "GAME OVER"
                } else {
                    "REPLAY"
                };
                let title = format!(
                    " Coil Replay | Tick {}/{} | {} | Hash: {} ",
                    engine.tick(),
                    engine.recording().len(),
                    status,
                    engine.recording().fingerprint
                );
                let header = Paragraph::new(title)
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(header, chunks[0]);

                // Board
                let ascii = engine.render_ascii();
                let board_widget = Paragraph::new(ascii)
                    .block(Block::default().borders(Borders::ALL).title(" Board "))
                    .wrap(Wrap { trim: false });
                f.render_widget(board_widget, chunks[1]);

                // Footer
                let controls = " [q] Quit  [←/→] Step  [Home] Tick 0  [End] Last tick ";
                let footer = Paragraph::new(controls)
                    .style(Style::default().fg(Color::Gray))
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(footer, chunks[2]);
            })
            .map_err(|e| CliError::new(e.to_string()))?;

        // Handle input
        if event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Right | KeyCode::Char('l') => {
                    let _ = engine.step_forward();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    let _ = engine.step_backward();
                }
                KeyCode::Home => {
                    let _ = engine.goto_tick(0);
                }
                KeyCode::End => {
                    let _ = engine.run_to_end();
                }
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn print_text_replay(mut engine: ReplayEngine) -> Result<(), CliError> {
    println!("Replay (food seed: {})", engine.recording().food_seed);
    println!("Recorded ticks: {}", engine.recording().len());
    println!();

    loop {
        println!("{}", engine.render_ascii());
        println!();

        if engine.is_game_over() || engine.at_end() {
            println!("=== END OF RECORDING ===");
            break;
        }

        engine.step_forward()?;
    }

    Ok(())
}

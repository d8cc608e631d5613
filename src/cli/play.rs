//! Play command implementation - interactive two-player TUI.

// CLI play uses intentional casts for display and timing
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use super::CliError;
use coil::game::{
    Cell, Direction as MoveDirection, GameConfig, GameState, PlayerId, WinCondition, Winner,
};
use coil::session::GameSession;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the TUI fails or the recording cannot be saved.
pub(crate) fn execute(
    seed: Option<u64>,
    speed: u64,
    grid_size: i16,
    win_length: usize,
    elimination_only: bool,
    save: Option<PathBuf>,
) -> Result<(), CliError> {
    if grid_size < 4 {
        return Err(CliError::new("grid size must be at least 4"));
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let win = if elimination_only {
        WinCondition::EliminationOnly
    } else {
        WinCondition::LengthThreshold(win_length)
    };
    let config = GameConfig { grid_size, win };

    let session = GameSession::new(config, seed);
    run_tui(session, speed, save)
}

/// App state for the TUI.
struct App {
    session: GameSession,
    paused: bool,
    speed_ms: u64,
    last_tick: Instant,
}

impl App {
    fn new(session: GameSession, speed_ms: u64) -> Self {
        Self {
            session,
            paused: false,
            speed_ms,
            last_tick: Instant::now(),
        }
    }

    fn tick(&mut self) -> Result<(), CliError> {
        self.session.tick()?;
        self.last_tick = Instant::now();
        Ok(())
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(25).max(50);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 25).min(1000);
    }

    fn should_tick(&self) -> bool {
        !self.paused
            && !self.session.state().is_game_over()
            && self.last_tick.elapsed() >= Duration::from_millis(self.speed_ms)
    }

    fn restart(&mut self) {
        let seed = self.session.seed();
        self.session.reset(seed);
        self.paused = false;
        self.last_tick = Instant::now();
    }
}

fn run_tui(session: GameSession, speed: u64, save: Option<PathBuf>) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(session, speed);
    let mut tick_error = None;

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if app.should_tick()
            && let Err(e) = app.tick()
        {
            tick_error = Some(e);
            break;
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(25)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char(' ') => app.paused = !app.paused,
                KeyCode::Char('w') => {
                    app.session.steer(PlayerId::One, MoveDirection::Up);
                }
                KeyCode::Char('s') => {
                    app.session.steer(PlayerId::One, MoveDirection::Down);
                }
                KeyCode::Char('a') => {
                    app.session.steer(PlayerId::One, MoveDirection::Left);
                }
                KeyCode::Char('d') => {
                    app.session.steer(PlayerId::One, MoveDirection::Right);
                }
                KeyCode::Up => {
                    app.session.steer(PlayerId::Two, MoveDirection::Up);
                }
                KeyCode::Down => {
                    app.session.steer(PlayerId::Two, MoveDirection::Down);
                }
                KeyCode::Left => {
                    app.session.steer(PlayerId::Two, MoveDirection::Left);
                }
                KeyCode::Right => {
                    app.session.steer(PlayerId::Two, MoveDirection::Right);
                }
                KeyCode::Char('+' | '=') => app.increase_speed(),
                KeyCode::Char('-') => app.decrease_speed(),
                KeyCode::Char('r') => app.restart(),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Some(e) = tick_error {
        return Err(e);
    }

    // Save recording if requested
    if let Some(save_path) = save {
        app.session
            .recording()
            .save(&save_path)
            .map_err(|e| CliError::new(format!("Failed to save recording: {e}")))?;
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    // Main content - move log, board, move log
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    render_move_log(f, main_chunks[0], app, PlayerId::One);
    render_board(f, main_chunks[1], app);
    render_move_log(f, main_chunks[2], app, PlayerId::Two);

    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = app.session.state();

    let status = match state.outcome {
        Some(Winner::Player(p)) => format!("PLAYER {p} WINS"),
        Some(Winner::Tie) => "TIE".to_string(),
        None if app.paused => "PAUSED".to_string(),
        None => "RUNNING".to_string(),
    };

    let title = format!(
        " Coil | Tick {} | {} | P1: {} P2: {} | Hash: {} | {}ms ",
        app.session.current_tick(),
        status,
        state.score(PlayerId::One),
        state.score(PlayerId::Two),
        app.session.ledger().fingerprint(),
        app.speed_ms
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let state = app.session.state();
    let grid_size = app.session.config().grid_size;

    let mut lines: Vec<Line> = Vec::new();
    for y in 0..grid_size {
        let mut spans = Vec::new();
        for x in 0..grid_size {
            let cell = Cell::new(x, y);
            let (ch, color) = cell_to_char_color(state, cell);
            spans.push(Span::styled(ch, Style::default().fg(color)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let board_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board_widget, area);
}

fn cell_to_char_color(state: &GameState, cell: Cell) -> (&'static str, Color) {
    if state.snake1.head() == cell {
        ("@", Color::Red)
    } else if state.snake2.head() == cell {
        ("#", Color::Blue)
    } else if state.snake1.occupies(cell) {
        ("1", Color::LightRed)
    } else if state.snake2.occupies(cell) {
        ("o", Color::LightBlue)
    } else if state.food == cell {
        ("*", Color::Yellow)
    } else {
        (".", Color::DarkGray)
    }
}

fn render_move_log(f: &mut Frame, area: Rect, app: &App, player: PlayerId) {
    let ledger = app.session.ledger();
    let visible = (area.height as usize).saturating_sub(2);

    let mut lines: Vec<Line> = Vec::new();
    let entries = ledger.entries();
    let start = entries.len().saturating_sub(visible);
    for entry in &entries[start..] {
        let letter = entry
            .slot(player)
            .map_or('-', coil::game::Direction::letter);
        let marker = if ledger.is_modified(entry.tick, player) {
            "*"
        } else {
            " "
        };

        let style = if marker == "*" {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{:>4}: {letter}{marker}", entry.tick),
            style,
        )));
    }

    let title = format!(" P{player} moves ");
    let color = match player {
        PlayerId::One => Color::Red,
        PlayerId::Two => Color::Blue,
    };
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.session.state().is_game_over() {
        " [q] Quit  [r] Restart "
    } else {
        " [q] Quit  [Space] Pause  [wasd] P1  [arrows] P2  [+/-] Speed  [r] Restart "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

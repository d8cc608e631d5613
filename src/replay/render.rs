//! ASCII renderer for terminal viewing with ANSI colors.

use crate::game::{Cell, GameConfig, GameState, PlayerId, Winner};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const GRAY: &str = "\x1b[90m";

/// Render game state to ASCII with ANSI colors.
///
/// Output format:
/// ```text
/// Tick 42                            [P1: len 4, score 3] [P2: len 2, score 1]
/// ┌────────────────────────────────────────┐
/// │ . . . . . . . . . . . . . . . . . . . .│
/// │ . . . 1 1 @ . . . * . . . o o # . . . .│
/// └────────────────────────────────────────┘
///
/// Legend: @=P1 head  1=P1 body  #=P2 head  o=P2 body  *=food
///
/// [<] Back  [>] Forward  [g] Goto tick  [q] Quit
/// ```
#[must_use]
pub fn render_ascii(state: &GameState, config: &GameConfig, tick: u32) -> String {
    let mut output = String::new();

    render_header(&mut output, state, tick);
    render_board(&mut output, state, config);

    output.push_str("\nLegend: @=P1 head  1=P1 body  #=P2 head  o=P2 body  *=food\n");

    if let Some(outcome) = state.outcome {
        let line = match outcome {
            Winner::Player(p) => format!("{BOLD}Player {p} wins{RESET}"),
            Winner::Tie => format!("{BOLD}Tie{RESET}"),
        };
        output.push_str(&format!("\n{line}\n"));
    }

    output.push_str("\n[<] Back  [>] Forward  [g] Goto tick  [q] Quit\n");
    output
}

/// Render the header line with tick number and per-player stats.
fn render_header(output: &mut String, state: &GameState, tick: u32) {
    output.push_str(&format!("Tick {tick}"));

    let padding = 30usize.saturating_sub(format!("Tick {tick}").len());
    for _ in 0..padding {
        output.push(' ');
    }

    for player in PlayerId::BOTH {
        let color = player_color(player);
        let len = state.snake(player).len();
        let score = state.score(player);
        output.push_str(&format!(
            "{color}[P{player}: len {len}, score {score}]{RESET} "
        ));
    }
    output.push('\n');
}

/// Render the grid with both snakes and the food.
fn render_board(output: &mut String, state: &GameState, config: &GameConfig) {
    let size = config.grid_size;

    output.push('┌');
    for _ in 0..(size * 2) {
        output.push('─');
    }
    output.push_str("┐\n");

    for y in 0..size {
        output.push('│');
        for x in 0..size {
            output.push(' ');
            render_cell(output, state, Cell::new(x, y));
        }
        output.push_str("│\n");
    }

    output.push('└');
    for _ in 0..(size * 2) {
        output.push('─');
    }
    output.push_str("┘\n");
}

/// Render one cell. Heads win over bodies, snakes win over food.
fn render_cell(output: &mut String, state: &GameState, cell: Cell) {
    if state.snake1.head() == cell {
        output.push_str(&format!("{RED}{BOLD}@{RESET}"));
    } else if state.snake2.head() == cell {
        output.push_str(&format!("{BLUE}{BOLD}#{RESET}"));
    } else if state.snake1.occupies(cell) {
        output.push_str(&format!("{RED}1{RESET}"));
    } else if state.snake2.occupies(cell) {
        output.push_str(&format!("{BLUE}o{RESET}"));
    } else if state.food == cell {
        output.push_str(&format!("{YELLOW}*{RESET}"));
    } else {
        output.push_str(&format!("{GRAY}.{RESET}"));
    }
}

/// ANSI color for a player.
const fn player_color(player: PlayerId) -> &'static str {
    match player {
        PlayerId::One => RED,
        PlayerId::Two => BLUE,
    }
}

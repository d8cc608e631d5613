//! Per-tick state transition.
//!
//! [`advance`] is a pure function of the previous state and both players'
//! moves for the tick (food placement draws from the caller's seeded
//! spawner, so identical inputs and seeds give identical outputs). The
//! event resolution order defines the game's tie-breaks and must not be
//! reordered:
//!
//! 1. Head-to-head collision of two moving snakes (tie, bodies frozen).
//! 2. Independent death checks per moving snake (wall, self, opponent).
//! 3. Food claim, player 1 strictly before player 2.
//! 4. Body update (fed snakes keep their tail, unfed snakes drop it).
//! 5. Length-threshold win, player 1 strictly before player 2.

use crate::game::{Direction, FoodSpawner, GameConfig, GameState, PlayerId, SpawnError, Winner};
use crate::game::{Snake, WinCondition};

/// Compute the state after one tick.
///
/// A finished game and a not-yet-started game (both moves idle) are
/// returned unchanged. Moves are the decoded per-tick inputs; `None` means
/// the player is idle and its snake does not move.
///
/// # Errors
///
/// Returns [`SpawnError`] if food was eaten and the spawner exhausted its
/// retry budget relocating it.
pub fn advance(
    state: &GameState,
    config: &GameConfig,
    move1: Option<Direction>,
    move2: Option<Direction>,
    spawner: &mut FoodSpawner,
) -> Result<GameState, SpawnError> {
    // Frozen after game over.
    if state.is_game_over() {
        return Ok(state.clone());
    }

    // Neither snake has started moving; the match has not begun.
    if move1.is_none() && move2.is_none() {
        return Ok(state.clone());
    }

    let head1 = state.snake1.head();
    let head2 = state.snake2.head();
    let new_head1 = move1.map_or(head1, |d| head1.step(d));
    let new_head2 = move2.map_or(head2, |d| head2.step(d));

    // Two moving heads landing on the same cell is a tie, regardless of
    // what the individual death checks would report. Bodies stay at their
    // pre-move positions.
    if move1.is_some() && move2.is_some() && new_head1 == new_head2 {
        return Ok(frozen(state, Winner::Tie));
    }

    // Death checks are independent per moving player. Self-collision is
    // checked against the full current body, including the tail cell that
    // would be vacated this tick.
    let dead1 = move1.is_some() && is_fatal(new_head1, &state.snake1, &state.snake2, config);
    let dead2 = move2.is_some() && is_fatal(new_head2, &state.snake2, &state.snake1, config);

    match (dead1, dead2) {
        (true, true) => return Ok(frozen(state, Winner::Tie)),
        (true, false) => return Ok(frozen(state, Winner::Player(PlayerId::Two))),
        (false, true) => return Ok(frozen(state, Winner::Player(PlayerId::One))),
        (false, false) => {}
    }

    // Food claim: player 1 is evaluated first, and a claimed food cannot
    // also feed player 2 on the same tick.
    let fed1 = move1.is_some() && new_head1 == state.food;
    let fed2 = !fed1 && move2.is_some() && new_head2 == state.food;

    let mut next = state.clone();
    next.direction1 = move1;
    next.direction2 = move2;

    if move1.is_some() {
        if fed1 {
            next.snake1.grow(new_head1);
            next.score1 += 1;
        } else {
            next.snake1.advance(new_head1);
        }
    }
    if move2.is_some() {
        if fed2 {
            next.snake2.grow(new_head2);
            next.score2 += 1;
        } else {
            next.snake2.advance(new_head2);
        }
    }

    // Relocate claimed food away from both post-move bodies.
    if fed1 || fed2 {
        let (snake1, snake2) = (&next.snake1, &next.snake2);
        next.food = spawner.place(|c| snake1.occupies(c) || snake2.occupies(c))?;
    }

    // Threshold win ends the game on the tick the length is reached; if
    // both cross together, player 1 is declared winner.
    if let WinCondition::LengthThreshold(target) = config.win {
        if next.snake1.len() >= target {
            next.outcome = Some(Winner::Player(PlayerId::One));
        } else if next.snake2.len() >= target {
            next.outcome = Some(Winner::Player(PlayerId::Two));
        }
    }

    Ok(next)
}

/// One-shot signal: did either snake eat this tick?
///
/// Derived by diffing consecutive states, so hosts trigger effects exactly
/// once per event.
#[must_use]
pub fn food_eaten(before: &GameState, after: &GameState) -> bool {
    after.snake1.len() > before.snake1.len()
        || after.snake2.len() > before.snake2.len()
        || after.food != before.food
}

/// One-shot signal: did the game end this tick?
#[must_use]
pub fn game_ended(before: &GameState, after: &GameState) -> bool {
    !before.is_game_over() && after.is_game_over()
}

/// Check whether a tentative head is lethal for its snake.
fn is_fatal(new_head: crate::game::Cell, own: &Snake, opponent: &Snake, config: &GameConfig) -> bool {
    !new_head.in_bounds(config.grid_size) || own.occupies(new_head) || opponent.occupies(new_head)
}

/// Copy of the state with only the outcome set.
fn frozen(state: &GameState, winner: Winner) -> GameState {
    let mut next = state.clone();
    next.outcome = Some(winner);
    next
}

#![deny(missing_debug_implementations)]
#![warn(missing_copy_implementations, missing_docs)]
//! Rules for a two player, tron style snake duel.
//!
//! Two snakes share a tile [grid::Grid]. Each is stepped one tile at a time on its own
//! cadence by a [round::RoundController]. The round is won when the snakes end up nose to
//! nose (the cell in front of one snake's new head holds the other snake's head) and lost
//! as soon as either snake tries to move in to a wall or a body segment.
//!
//! Nothing here draws, reads input or keeps time on its own: the host forwards input with
//! `steer`, tells the round how much time passed with `advance`, and listens for
//! [round::RoundEvent]s to show the win and lose screens.

use level::Level;

pub mod grid;
pub mod level;
pub mod round;
pub mod snake;
pub mod types;

/// Loads a level fixture from a json string
pub fn level_fixture(level_fixture: &str) -> Level {
    let l: Result<Level, _> = Level::from_json(level_fixture);
    l.expect("the json literal is valid")
}

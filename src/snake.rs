//! A single snake: its segments, the direction it was last told to go, and the rules for
//! moving it one tile.
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{instrument, trace};

use crate::grid::{Grid, Occupant};
use crate::types::{Move, Position, PositionGettableGame, Side, Vector};

/// What stopped a snake from moving
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CollisionKind {
    /// the tile is a wall
    Wall,
    /// the tile holds a body segment of the given snake, which may be the mover itself
    Body(Side),
}

/// A rejected move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Collision {
    /// the tile the snake tried to move in to
    pub at: Position,
    #[allow(missing_docs)]
    pub kind: CollisionKind,
}

/// The result of stepping a snake once
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum StepOutcome {
    /// every segment moved along one tile. With no input yet the head "moves" on to its
    /// own tile.
    Moved {
        #[allow(missing_docs)]
        head: Position,
    },
    /// the move was rejected and the snake is exactly where it was
    Collided(Collision),
}

impl StepOutcome {
    #[allow(missing_docs)]
    pub fn collision(&self) -> Option<Collision> {
        match self {
            StepOutcome::Collided(c) => Some(*c),
            _ => None,
        }
    }
}

/// One of the two snakes. Segments are stored head first and their count never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    side: Side,
    segments: VecDeque<Position>,
    pending: Vector,
    has_won: bool,
}

impl Snake {
    /// builds a snake with its head and `body_length` body segments all stacked on `at`
    pub fn new(side: Side, at: Position, body_length: usize) -> Self {
        Snake {
            side,
            segments: std::iter::repeat(at).take(body_length + 1).collect(),
            pending: Vector::ZERO,
            has_won: false,
        }
    }

    /// builds a snake and marks its head on the grid
    pub fn spawn(side: Side, at: Position, body_length: usize, grid: &mut Grid) -> Self {
        let snake = Self::new(side, at, body_length);
        grid.set_occupant(at, Occupant::head(side));
        snake
    }

    #[allow(missing_docs)]
    pub fn side(&self) -> Side {
        self.side
    }

    #[allow(missing_docs)]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// all segments, head first
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }

    /// number of segments including the head
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// always false, a snake has at least a head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// the direction the next step will use, zero until the first input
    pub fn pending_direction(&self) -> Vector {
        self.pending
    }

    /// did the last successful move put this snake nose to nose with the other one
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// sets the direction for the next step. Later calls before the step overwrite earlier ones.
    pub fn set_direction(&mut self, mv: Move) {
        self.pending = mv.to_vector();
    }

    /// moves the snake one tile in its pending direction. A snake that was never steered
    /// steps in place: its body lands on its own head, so the next step runs in to it.
    #[instrument(level = "trace", skip_all)]
    pub fn step(&mut self, grid: &mut Grid) -> StepOutcome {
        let candidate = self.head().add_vec(self.pending);
        if let Some(kind) = Self::collision_at(grid, candidate) {
            trace!(side = %self.side, at = %candidate, ?kind, "move rejected");
            return StepOutcome::Collided(Collision {
                at: candidate,
                kind,
            });
        }

        for segment in self.segments.iter() {
            grid.set_occupant(*segment, Occupant::None);
        }

        self.segments.push_front(candidate);
        self.segments.pop_back();

        grid.set_occupant(candidate, Occupant::head(self.side));
        // body goes down after the head, a segment stacked under the head covers it
        for segment in self.segments.iter().skip(1) {
            grid.set_occupant(*segment, Occupant::body(self.side));
        }

        self.has_won = self.win_check(grid, candidate.add_vec(self.pending));
        trace!(side = %self.side, head = %candidate, has_won = self.has_won, "moved");

        StepOutcome::Moved { head: candidate }
    }

    fn collision_at(grid: &Grid, pos: Position) -> Option<CollisionKind> {
        if grid.position_is_wall(pos) {
            Some(CollisionKind::Wall)
        } else if grid.position_is_snake_body(pos) {
            grid.occupant_at(pos).side().map(CollisionKind::Body)
        } else {
            None
        }
    }

    fn win_check(&self, grid: &Grid, pos: Position) -> bool {
        grid.occupant_at(pos) == Occupant::head(self.side.opponent())
    }
}

//! various types that are useful for working with a snake duel
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::time::Duration;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    /// x offset
    pub x: i64,
    /// y offset
    pub y: i64,
}

impl Vector {
    /// the vector that goes nowhere, this is the direction of a snake before any input
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// is this the zero vector
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// A position on the grid, `(0, 0)` is the bottom left tile
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// builds a position
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    #[allow(missing_docs)]
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }

}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector, up is towards larger y
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// create a Move from the given vector, `None` for anything that isn't a unit step
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: -1, y: 0 } => Some(Self::Left),
            Vector { x: 1, y: 0 } => Some(Self::Right),
            Vector { x: 0, y: 1 } => Some(Self::Up),
            Vector { x: 0, y: -1 } => Some(Self::Down),
            _ => None,
        }
    }

    /// returns all possible moves
    pub fn all() -> [Move; 4] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }
}

/// Which of the two snakes we are talking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl Side {
    /// both sides, left first. Left is also the tie break order when both are due
    pub fn all() -> [Side; 2] {
        [Side::Left, Side::Right]
    }

    /// the other snake
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// converts this side to an index in to a two element array
    pub fn as_index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A game for which one can get the snake ids
pub trait SnakeIDGettableGame {
    #[allow(missing_docs)]
    type SnakeIDType: PartialEq + Debug + Eq + Hash + Clone + Send;

    #[allow(missing_docs)]
    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType>;
}

/// Instruments to be used while ticking a round
pub trait RoundInstruments: std::fmt::Debug {
    /// called once per tick with the side that ticked and how long the tick took
    fn observe_tick(&self, side: Side, duration: Duration);
}

impl RoundInstruments for () {
    fn observe_tick(&self, _side: Side, _duration: Duration) {}
}

/// A game which can have it's winner determined
pub trait VictorDeterminableGame: std::fmt::Debug + SnakeIDGettableGame {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;

    /// get the snake whose win check ended the game, None if the game is not won
    fn get_winner(&self) -> Option<Self::SnakeIDType>;
}

/// A game where board positions can be checked for what is blocking them
pub trait PositionGettableGame {
    /// Check if the given position is a snake body
    fn position_is_snake_body(&self, pos: Position) -> bool;

    /// Check if the given position is a wall
    fn position_is_wall(&self, pos: Position) -> bool;
}

/// A game for which the head of a given snake can be got.
pub trait HeadGettableGame: SnakeIDGettableGame {
    /// get the head position for a given snake id
    fn get_head_as_position(&self, snake_id: &Self::SnakeIDType) -> Position;
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// A game where an entire snake body is gettable
pub trait SnakeBodyGettableGame: SnakeIDGettableGame {
    /// return a Vec of the positions for a given snake body, in order from head to tail
    fn get_snake_body_vec(&self, snake_id: &Self::SnakeIDType) -> Vec<Position>;
}

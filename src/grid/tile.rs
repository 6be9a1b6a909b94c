use serde::Serialize;

use crate::types::{Position, Side};

/// What the level put in a tile
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TileKind {
    #[allow(missing_docs)]
    Empty = 0x00,
    #[allow(missing_docs)]
    Wall = 0x01,
}

/// Which piece of which snake is sitting in a tile
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Occupant {
    #[allow(missing_docs)]
    None = 0x00,
    #[allow(missing_docs)]
    LeftHead = 0x01,
    #[allow(missing_docs)]
    LeftBody = 0x02,
    #[allow(missing_docs)]
    RightHead = 0x03,
    #[allow(missing_docs)]
    RightBody = 0x04,
}

impl Default for Occupant {
    fn default() -> Self {
        Occupant::None
    }
}

impl Occupant {
    /// the head marker for a given snake
    pub fn head(side: Side) -> Self {
        match side {
            Side::Left => Occupant::LeftHead,
            Side::Right => Occupant::RightHead,
        }
    }

    /// the body marker for a given snake
    pub fn body(side: Side) -> Self {
        match side {
            Side::Left => Occupant::LeftBody,
            Side::Right => Occupant::RightBody,
        }
    }

    /// the snake this marker belongs to
    pub fn side(&self) -> Option<Side> {
        match self {
            Occupant::None => None,
            Occupant::LeftHead | Occupant::LeftBody => Some(Side::Left),
            Occupant::RightHead | Occupant::RightBody => Some(Side::Right),
        }
    }

    #[allow(missing_docs)]
    pub fn is_head(&self) -> bool {
        matches!(self, Occupant::LeftHead | Occupant::RightHead)
    }

    #[allow(missing_docs)]
    pub fn is_body(&self) -> bool {
        matches!(self, Occupant::LeftBody | Occupant::RightBody)
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        *self == Occupant::None
    }
}

/// One cell of the grid
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    /// wall or empty, fixed for the life of the grid
    pub kind: TileKind,
    /// the tile's coordinate in level space, where the middle of the level is `(0, 0)`
    pub position: Position,
    /// snake piece currently in this tile
    pub occupant: Occupant,
}

impl Tile {
    #[allow(missing_docs)]
    pub fn is_wall(&self) -> bool {
        self.kind == TileKind::Wall
    }

    /// walls and body segments stop a snake from moving in to a tile. Heads don't.
    pub fn is_blocking(&self) -> bool {
        self.is_wall() || self.occupant.is_body()
    }

    #[allow(missing_docs)]
    pub fn glyph(&self) -> char {
        match self.occupant {
            Occupant::LeftHead => 'L',
            Occupant::LeftBody => 'l',
            Occupant::RightHead => 'R',
            Occupant::RightBody => 'r',
            Occupant::None => match self.kind {
                TileKind::Wall => '#',
                TileKind::Empty => '.',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_belong_to_their_side() {
        for side in Side::all() {
            assert_eq!(Occupant::head(side).side(), Some(side));
            assert_eq!(Occupant::body(side).side(), Some(side));
            assert!(Occupant::head(side).is_head());
            assert!(Occupant::body(side).is_body());
        }
        assert_eq!(Occupant::None.side(), None);
        assert_eq!(Occupant::default(), Occupant::None);
    }

    #[test]
    fn test_heads_do_not_block() {
        let mut tile = Tile {
            kind: TileKind::Empty,
            position: Position::new(0, 0),
            occupant: Occupant::RightHead,
        };
        assert!(!tile.is_blocking());
        tile.occupant = Occupant::LeftBody;
        assert!(tile.is_blocking());
        tile.occupant = Occupant::None;
        tile.kind = TileKind::Wall;
        assert!(tile.is_blocking());
    }
}

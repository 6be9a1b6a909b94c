//! The tile grid both snakes move on.
//!
//! Lookups are lenient: asking about a position outside the grid gives back `None`
//! (or does nothing, for writes) instead of failing, and callers skip whatever they were
//! about to do with it.
mod tile;

pub use tile::{Occupant, Tile, TileKind};

use fxhash::FxHashSet;
use serde::Serialize;
use std::fmt;

use crate::level::Level;
use crate::types::{Position, PositionGettableGame, SizeDeterminableGame};

/// A point in world space, the centre of a tile
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct WorldPoint {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
}

impl WorldPoint {
    /// shifts this point by a world space offset
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        WorldPoint {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed size row major grid of tiles. The shape never changes after construction, only
/// the occupants do.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cell_size: f32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// builds the grid for a level, every tile starts unoccupied
    pub fn from_level(level: &Level, cell_size: f32) -> Self {
        let walls: FxHashSet<Position> = level.walls.iter().copied().collect();
        let (width, height) = (level.width, level.height);
        // level space is centred on the origin
        let start_x = -(width as i32 / 2);
        let start_y = -(height as i32 / 2);

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let kind = if walls.contains(&Position::new(x, y)) {
                    TileKind::Wall
                } else {
                    TileKind::Empty
                };
                tiles.push(Tile {
                    kind,
                    position: Position::new(start_x + x, start_y + y),
                    occupant: Occupant::None,
                });
            }
        }

        Grid {
            width,
            height,
            cell_size,
            tiles,
        }
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// world units per tile
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// is this position within `[0, width) x [0, height)`
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// the tile at a position, `None` when out of bounds
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// world space centre of the tile at a position, `None` when out of bounds
    pub fn world_position_of(&self, pos: Position) -> Option<WorldPoint> {
        self.tile_at(pos).map(|tile| WorldPoint {
            x: (tile.position.x as f32 + 0.5) * self.cell_size,
            y: (tile.position.y as f32 + 0.5) * self.cell_size,
        })
    }

    /// overwrites the occupant of a tile, does nothing when out of bounds
    pub fn set_occupant(&mut self, pos: Position, occupant: Occupant) {
        if let Some(i) = self.index(pos) {
            self.tiles[i].occupant = occupant;
        }
    }

    /// the occupant at a position, `Occupant::None` when out of bounds
    pub fn occupant_at(&self, pos: Position) -> Occupant {
        self.tile_at(pos)
            .map(|tile| tile.occupant)
            .unwrap_or_default()
    }

    /// all tiles, bottom row first
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// clears every occupant, leaving the walls alone
    pub fn clear_occupants(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.occupant = Occupant::None;
        }
    }
}

impl PositionGettableGame for Grid {
    fn position_is_snake_body(&self, pos: Position) -> bool {
        self.occupant_at(pos).is_body()
    }

    fn position_is_wall(&self, pos: Position) -> bool {
        self.tile_at(pos).map(Tile::is_wall).unwrap_or(false)
    }
}

impl SizeDeterminableGame for Grid {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            let k = self.height - i - 1;
            for j in 0..self.width {
                let tile = &self.tiles[(k * self.width + j) as usize];
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_level(&Level::parse("t", "#....\n.....\n....#").unwrap(), 1.0)
    }

    #[test]
    fn test_out_of_bounds_is_a_miss() {
        let mut g = grid();
        assert!(g.tile_at(Position::new(-1, 0)).is_none());
        assert!(g.tile_at(Position::new(5, 0)).is_none());
        assert!(g.tile_at(Position::new(0, 3)).is_none());
        assert!(g.world_position_of(Position::new(0, -1)).is_none());

        let before = g.clone();
        g.set_occupant(Position::new(9, 9), Occupant::LeftHead);
        assert_eq!(before, g);
        assert_eq!(g.occupant_at(Position::new(9, 9)), Occupant::None);
    }

    #[test]
    fn test_walls_come_from_the_level() {
        let g = grid();
        assert!(g.tile_at(Position::new(0, 2)).unwrap().is_wall());
        assert!(g.tile_at(Position::new(4, 0)).unwrap().is_wall());
        assert!(!g.tile_at(Position::new(2, 1)).unwrap().is_wall());
        assert!(g.position_is_wall(Position::new(0, 2)));
        assert!(!g.position_is_wall(Position::new(-3, 2)));
        assert_eq!(g.get_width(), 5);
        assert_eq!(g.get_height(), 3);
    }

    #[test]
    fn test_world_position_is_centred_on_the_origin() {
        let g = grid();
        // 5 wide, 3 tall: tile (2, 1) is the middle tile
        assert_eq!(
            g.tile_at(Position::new(2, 1)).unwrap().position,
            Position::new(0, 0)
        );
        assert_eq!(
            g.world_position_of(Position::new(2, 1)),
            Some(WorldPoint { x: 0.5, y: 0.5 })
        );
        assert_eq!(
            g.world_position_of(Position::new(0, 0)),
            Some(WorldPoint { x: -1.5, y: -0.5 })
        );

        let big = Grid::from_level(&Level::open("big", 4, 4), 2.0);
        assert_eq!(
            big.world_position_of(Position::new(3, 3)),
            Some(WorldPoint { x: 3.0, y: 3.0 })
        );
    }

    #[test]
    fn test_set_occupant_and_display() {
        let mut g = grid();
        g.set_occupant(Position::new(1, 1), Occupant::LeftHead);
        g.set_occupant(Position::new(2, 1), Occupant::LeftBody);
        g.set_occupant(Position::new(3, 0), Occupant::RightBody);
        assert!(g.position_is_snake_body(Position::new(2, 1)));
        assert!(!g.position_is_snake_body(Position::new(1, 1)));
        assert_eq!(g.to_string(), "#....\n.Ll..\n...r#\n");

        g.clear_occupants();
        assert!(g.tiles().all(|t| t.occupant.is_empty()));
    }
}

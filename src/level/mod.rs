//! static level geometry, the walls a round is played between
mod set;

pub use set::LevelSet;

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Position;

const WALL_GLYPH: char = '#';
const EMPTY_GLYPH: char = '.';

/// The wall layout of a single level. Walls are stored bottom up, so `(0, 0)` is the
/// bottom left tile, matching the grid.
///
/// Levels can be written as json:
/// ```
/// # use snake_duel::level::Level;
/// let level = Level::from_json(r#"{"name":"pillar","width":5,"height":5,"walls":[{"x":2,"y":2}]}"#).unwrap();
/// assert!(level.is_wall(snake_duel::types::Position::new(2, 2)));
/// ```
/// or as rows of text where the first row is the top of the level:
/// ```
/// # use snake_duel::level::Level;
/// let level = Level::parse("corner", "#..\n...\n...").unwrap();
/// assert!(level.is_wall(snake_duel::types::Position::new(0, 2)));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// human readable name, only used for logging
    pub name: String,
    /// number of columns
    pub width: u32,
    /// number of rows
    pub height: u32,
    /// every wall tile in the level
    #[serde(default)]
    pub walls: Vec<Position>,
}

impl Level {
    /// a level with no walls at all
    pub fn open(name: impl Into<String>, width: u32, height: u32) -> Self {
        Level {
            name: name.into(),
            width,
            height,
            walls: vec![],
        }
    }

    /// reads a level from its json representation
    pub fn from_json(json: &str) -> Result<Self> {
        let level: Level = serde_json::from_str(json).context("level json is malformed")?;
        level.validate()?;
        Ok(level)
    }

    /// reads a level from rows of `#` (wall) and `.` (empty). Blank lines and surrounding
    /// whitespace are ignored, every remaining row must be the same length.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();

        if rows.is_empty() {
            bail!("level {} has no rows", name);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = vec![];

        for (row_index, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                bail!(
                    "level {} row {} is {} wide, expected {}",
                    name,
                    row_index,
                    row.chars().count(),
                    width
                );
            }
            // first row of text is the top of the level
            let y = (height - row_index - 1) as i32;
            for (x, glyph) in row.chars().enumerate() {
                match glyph {
                    WALL_GLYPH => walls.push(Position::new(x as i32, y)),
                    EMPTY_GLYPH => {}
                    other => bail!(
                        "level {} has unknown glyph {:?} at row {} column {}",
                        name,
                        other,
                        row_index,
                        x
                    ),
                }
            }
        }

        let level = Level {
            name,
            width: width as u32,
            height: height as u32,
            walls,
        };
        level.validate()?;
        Ok(level)
    }

    /// checks that the level has some area and every wall is inside it
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "level {} has no area ({}x{})",
                self.name,
                self.width,
                self.height
            );
        }
        if let Some(outside) = self.walls.iter().find(|w| !self.contains(**w)) {
            bail!(
                "level {} has a wall at {} outside of {}x{}",
                self.name,
                outside,
                self.width,
                self.height
            );
        }
        Ok(())
    }

    /// adds a ring of walls around the edge of the level, like the outside walls layer
    /// every arena is drawn on top of
    pub fn with_outside_walls(mut self) -> Self {
        let (w, h) = (self.width as i32, self.height as i32);
        let ring = (0..w)
            .flat_map(|x| vec![Position::new(x, 0), Position::new(x, h - 1)])
            .chain((0..h).flat_map(|y| vec![Position::new(0, y), Position::new(w - 1, y)]));
        self.walls.extend(ring);
        self.walls = self.walls.into_iter().sorted().dedup().collect();
        self
    }

    /// is this position inside the level
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// is there a wall at this position
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            let y = (self.height - i - 1) as i32;
            let row: String = (0..self.width as i32)
                .map(|x| {
                    if self.is_wall(Position::new(x, y)) {
                        WALL_GLYPH
                    } else {
                        EMPTY_GLYPH
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::{Position, Side};

/// Where a snake starts and how long it is
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    /// the tile every segment starts on
    pub spawn: Position,
    /// number of segments behind the head
    pub body_length: usize,
}

/// Everything needed to set up a round, besides the level
///
/// ```
/// # use snake_duel::round::RoundConfig;
/// let config = RoundConfig::from_json(r#"{"update_interval_ms": 300}"#).unwrap();
/// assert_eq!(config.update_interval().as_millis(), 300);
/// // left moves first, half an interval in
/// assert_eq!(config.first_tick(snake_duel::types::Side::Left).as_millis(), 150);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RoundConfig {
    /// time between two steps of the same snake
    pub update_interval_ms: u64,
    /// when the left snake first moves, defaults to half an interval
    pub left_first_tick_ms: Option<u64>,
    /// when the right snake first moves, defaults to a full interval
    pub right_first_tick_ms: Option<u64>,
    #[allow(missing_docs)]
    pub left: SnakeConfig,
    #[allow(missing_docs)]
    pub right: SnakeConfig,
    /// world units per tile
    pub cell_size: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        RoundConfig {
            update_interval_ms: 200,
            left_first_tick_ms: None,
            right_first_tick_ms: None,
            left: SnakeConfig {
                spawn: Position::new(2, 5),
                body_length: 3,
            },
            right: SnakeConfig {
                spawn: Position::new(8, 5),
                body_length: 3,
            },
            cell_size: 1.0,
        }
    }
}

impl RoundConfig {
    /// default config with the given spawn points
    pub fn with_spawns(left: Position, right: Position) -> Self {
        let mut config = Self::default();
        config.left.spawn = left;
        config.right.spawn = right;
        config
    }

    /// reads a config from json, missing fields take their default
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RoundConfig =
            serde_json::from_str(json).context("round config json is malformed")?;
        config.validate()?;
        Ok(config)
    }

    /// checks the config makes sense on its own, without a level
    pub fn validate(&self) -> Result<()> {
        if self.update_interval_ms == 0 {
            bail!("update interval must be greater than zero");
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.left.spawn == self.right.spawn {
            bail!("both snakes spawn on {}", self.left.spawn);
        }
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// when a snake takes its first step, measured from the start of the round
    pub fn first_tick(&self, side: Side) -> Duration {
        let interval = self.update_interval();
        match side {
            Side::Left => self
                .left_first_tick_ms
                .map(Duration::from_millis)
                .unwrap_or(interval / 2),
            Side::Right => self
                .right_first_tick_ms
                .map(Duration::from_millis)
                .unwrap_or(interval),
        }
    }

    #[allow(missing_docs)]
    pub fn snake(&self, side: Side) -> &SnakeConfig {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.update_interval(), Duration::from_millis(200));
        assert_eq!(config.first_tick(Side::Left), Duration::from_millis(100));
        assert_eq!(config.first_tick(Side::Right), Duration::from_millis(200));
    }

    #[test]
    fn test_first_ticks_can_be_overridden() {
        let config = RoundConfig::from_json(
            r#"{"update_interval_ms": 100, "left_first_tick_ms": 0, "right_first_tick_ms": 30}"#,
        )
        .unwrap();
        assert_eq!(config.first_tick(Side::Left), Duration::ZERO);
        assert_eq!(config.first_tick(Side::Right), Duration::from_millis(30));
    }

    #[test]
    fn test_spawns_from_json() {
        let config = RoundConfig::from_json(
            r#"{"left": {"spawn": {"x": 1, "y": 1}, "body_length": 0},
                "right": {"spawn": {"x": 3, "y": 1}, "body_length": 5}}"#,
        )
        .unwrap();
        assert_eq!(config.snake(Side::Left).spawn, Position::new(1, 1));
        assert_eq!(config.snake(Side::Right).body_length, 5);
        assert_eq!(config.cell_size, 1.0);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(RoundConfig::from_json(r#"{"update_interval_ms": 0}"#).is_err());
        assert!(RoundConfig::from_json(r#"{"cell_size": -1.0}"#).is_err());
        assert!(RoundConfig::from_json("[]").is_err());
        let same = RoundConfig::with_spawns(Position::new(1, 1), Position::new(1, 1));
        assert!(same.validate().is_err());
    }
}

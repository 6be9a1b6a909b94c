//! Runs a round: owns the grid and both snakes, steps them when the scheduler says so and
//! ends the round on the first win or collision.
mod config;
mod events;
mod head_gettable;
mod scheduler;
mod size_determinable;
mod snake_body_gettable;
mod snake_id_gettable;
mod victor_determinable;

pub use config::{RoundConfig, SnakeConfig};
pub use events::{RoundEvent, RoundObserver};
pub use scheduler::Scheduler;

use anyhow::{bail, Result};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, trace};

use crate::grid::{Grid, WorldPoint};
use crate::level::Level;
use crate::snake::{Snake, StepOutcome};
use crate::types::{Move, RoundInstruments, Side};

/// Where a round is at. `Won` and `Lost` are final, only a restart leaves them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RoundState {
    #[allow(missing_docs)]
    Running,
    #[allow(missing_docs)]
    Won,
    #[allow(missing_docs)]
    Lost,
}

/// Drives both snakes on a level.
///
/// ```
/// # use snake_duel::{level::Level, round::{RoundConfig, RoundController, RoundState}};
/// # use snake_duel::types::{Move, Position, Side};
/// # use std::time::Duration;
/// let config = RoundConfig::with_spawns(Position::new(1, 2), Position::new(5, 2));
/// let mut round = RoundController::new(config, Level::open("open", 7, 5), ()).unwrap();
/// round.steer(Side::Left, Move::Right);
/// round.steer(Side::Right, Move::Left);
/// while round.state() == RoundState::Running {
///     round.advance(Duration::from_millis(50));
/// }
/// assert_eq!(round.state(), RoundState::Won);
/// ```
#[derive(Debug, Clone)]
pub struct RoundController<O: RoundObserver = ()> {
    config: RoundConfig,
    level: Level,
    grid: Grid,
    snakes: [Snake; 2],
    scheduler: Scheduler,
    state: RoundState,
    winner: Option<Side>,
    loser: Option<Side>,
    observer: O,
}

impl<O: RoundObserver> RoundController<O> {
    /// sets up a round, fails if the config is invalid or a snake would spawn outside the
    /// level or in a wall
    pub fn new(config: RoundConfig, level: Level, observer: O) -> Result<Self> {
        Self::check_setup(&config, &level)?;
        let (grid, snakes) = Self::build(&config, &level);
        debug!(level = %level.name, "round started");
        Ok(RoundController {
            scheduler: Scheduler::from_config(&config),
            config,
            level,
            grid,
            snakes,
            state: RoundState::Running,
            winner: None,
            loser: None,
            observer,
        })
    }

    fn check_setup(config: &RoundConfig, level: &Level) -> Result<()> {
        config.validate()?;
        level.validate()?;
        for side in Side::all() {
            let spawn = config.snake(side).spawn;
            if !level.contains(spawn) {
                bail!(
                    "{} snake spawns at {} outside of level {}",
                    side,
                    spawn,
                    level.name
                );
            }
            if level.is_wall(spawn) {
                bail!(
                    "{} snake spawns in a wall at {} in level {}",
                    side,
                    spawn,
                    level.name
                );
            }
        }
        Ok(())
    }

    fn build(config: &RoundConfig, level: &Level) -> (Grid, [Snake; 2]) {
        let mut grid = Grid::from_level(level, config.cell_size);
        let snakes = Side::all().map(|side| {
            let snake_config = config.snake(side);
            Snake::spawn(
                side,
                snake_config.spawn,
                snake_config.body_length,
                &mut grid,
            )
        });
        (grid, snakes)
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[allow(missing_docs)]
    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    #[allow(missing_docs)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[allow(missing_docs)]
    pub fn snake(&self, side: Side) -> &Snake {
        &self.snakes[side.as_index()]
    }

    #[allow(missing_docs)]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[allow(missing_docs)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// the snake that ran in to something, if the round was lost
    pub fn loser(&self) -> Option<Side> {
        self.loser
    }

    #[allow(missing_docs)]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[allow(missing_docs)]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[allow(missing_docs)]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// input for a snake, takes effect on its next step. Ignored once the round is over.
    pub fn steer(&mut self, side: Side, mv: Move) {
        if !self.is_running() {
            trace!(%side, %mv, "round is over, ignoring input");
            return;
        }
        self.snakes[side.as_index()].set_direction(mv);
    }

    /// lets `elapsed` time pass, stepping each snake that comes due at most once. Stops as
    /// soon as the round ends, a tick still due after that is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> RoundState {
        self.advance_with(elapsed, &())
    }

    /// [Self::advance], reporting every tick to `instruments`
    pub fn advance_with<I: RoundInstruments>(
        &mut self,
        elapsed: Duration,
        instruments: &I,
    ) -> RoundState {
        if !self.is_running() {
            return self.state;
        }
        for side in self.scheduler.advance(elapsed) {
            if self.tick_with(side, instruments) != RoundState::Running {
                break;
            }
        }
        self.state
    }

    /// steps one snake right now, ignoring the scheduler
    pub fn tick(&mut self, side: Side) -> RoundState {
        self.tick_with(side, &())
    }

    /// [Self::tick], reporting the tick to `instruments`
    #[instrument(level = "trace", skip_all, fields(side = %side))]
    pub fn tick_with<I: RoundInstruments>(&mut self, side: Side, instruments: &I) -> RoundState {
        if !self.is_running() {
            return self.state;
        }
        let start = Instant::now();

        let outcome = self.snakes[side.as_index()].step(&mut self.grid);
        self.observer.observe(RoundEvent::Stepped { side, outcome });

        if let StepOutcome::Collided(collision) = outcome {
            debug!(%side, at = %collision.at, kind = ?collision.kind, "round lost");
            self.state = RoundState::Lost;
            self.loser = Some(side);
            self.observer.observe(RoundEvent::Lost { side, collision });
        } else if let Some(winner) = self.check_win(side) {
            debug!(side = %winner, "round won");
            self.state = RoundState::Won;
            self.winner = Some(winner);
            let marker = self.marker();
            self.observer.observe(RoundEvent::Won {
                side: winner,
                marker,
            });
        }

        instruments.observe_tick(side, start.elapsed());
        self.state
    }

    /// either snake can have won, the one that just moved is reported first
    fn check_win(&self, ticked: Side) -> Option<Side> {
        [ticked, ticked.opponent()]
            .iter()
            .copied()
            .find(|side| self.snakes[side.as_index()].has_won())
    }

    fn marker(&self) -> Option<WorldPoint> {
        let head = self.snake(Side::Left).head();
        self.grid
            .world_position_of(head)
            .map(|p| p.offset(0.0, self.grid.cell_size()))
    }

    /// throws the round away and starts again on the same level
    pub fn restart(&mut self) {
        let (grid, snakes) = Self::build(&self.config, &self.level);
        self.reset(grid, snakes);
    }

    /// throws the round away and starts again on a new level
    pub fn restart_with(&mut self, level: Level) -> Result<()> {
        Self::check_setup(&self.config, &level)?;
        let (grid, snakes) = Self::build(&self.config, &level);
        self.level = level;
        self.reset(grid, snakes);
        Ok(())
    }

    fn reset(&mut self, grid: Grid, snakes: [Snake; 2]) {
        self.grid = grid;
        self.snakes = snakes;
        self.scheduler = Scheduler::from_config(&self.config);
        self.state = RoundState::Running;
        self.winner = None;
        self.loser = None;
        debug!(level = %self.level.name, "round restarted");
        self.observer.observe(RoundEvent::Restarted);
    }
}

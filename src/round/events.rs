use serde::Serialize;

use crate::grid::WorldPoint;
use crate::snake::{Collision, StepOutcome};
use crate::types::Side;

/// Something that happened during a round, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RoundEvent {
    /// a snake was stepped
    Stepped {
        #[allow(missing_docs)]
        side: Side,
        #[allow(missing_docs)]
        outcome: StepOutcome,
    },
    /// the snakes met head to head. `side` is the snake whose check fired, the win is shared
    Won {
        #[allow(missing_docs)]
        side: Side,
        /// where to draw the end of round marker: one tile above the left snake's head
        marker: Option<WorldPoint>,
    },
    /// a snake ran in to a wall or a body
    Lost {
        #[allow(missing_docs)]
        side: Side,
        #[allow(missing_docs)]
        collision: Collision,
    },
    /// the round was set up again from scratch
    Restarted,
}

/// Receives round events, this is how the win and lose screens find out about the end of a
/// round
pub trait RoundObserver: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe(&mut self, event: RoundEvent);
}

impl RoundObserver for () {
    fn observe(&mut self, _event: RoundEvent) {}
}

impl RoundObserver for Vec<RoundEvent> {
    fn observe(&mut self, event: RoundEvent) {
        self.push(event);
    }
}

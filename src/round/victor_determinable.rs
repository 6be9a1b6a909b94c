use crate::types::VictorDeterminableGame;

use super::{RoundController, RoundObserver, RoundState};

impl<O: RoundObserver> VictorDeterminableGame for RoundController<O> {
    fn is_over(&self) -> bool {
        self.state != RoundState::Running
    }

    fn get_winner(&self) -> Option<Self::SnakeIDType> {
        if self.state == RoundState::Won {
            self.winner
        } else {
            None
        }
    }
}

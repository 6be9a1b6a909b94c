use crate::types::{HeadGettableGame, Position};

use super::{RoundController, RoundObserver};

impl<O: RoundObserver> HeadGettableGame for RoundController<O> {
    fn get_head_as_position(&self, snake_id: &Self::SnakeIDType) -> Position {
        self.snake(*snake_id).head()
    }
}

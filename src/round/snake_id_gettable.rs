use crate::types::{Side, SnakeIDGettableGame};

use super::{RoundController, RoundObserver};

impl<O: RoundObserver> SnakeIDGettableGame for RoundController<O> {
    type SnakeIDType = Side;

    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType> {
        Side::all().to_vec()
    }
}

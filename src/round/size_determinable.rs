use crate::types::SizeDeterminableGame;

use super::{RoundController, RoundObserver};

impl<O: RoundObserver> SizeDeterminableGame for RoundController<O> {
    fn get_width(&self) -> u32 {
        self.grid.get_width()
    }

    fn get_height(&self) -> u32 {
        self.grid.get_height()
    }
}

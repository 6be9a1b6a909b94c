use crate::types::{Position, SnakeBodyGettableGame};

use super::{RoundController, RoundObserver};

impl<O: RoundObserver> SnakeBodyGettableGame for RoundController<O> {
    fn get_snake_body_vec(&self, snake_id: &Self::SnakeIDType) -> Vec<Position> {
        self.snake(*snake_id).segments().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;
    use crate::round::{RoundConfig, RoundController};
    use crate::types::{
        HeadGettableGame, Move, Position, Side, SizeDeterminableGame, SnakeBodyGettableGame,
        SnakeIDGettableGame,
    };

    #[test]
    fn test_bodies_and_heads() {
        let mut config = RoundConfig::with_spawns(Position::new(1, 1), Position::new(4, 4));
        config.left.body_length = 2;
        config.right.body_length = 1;
        let mut round = RoundController::new(config, Level::open("6x6", 6, 6), ()).unwrap();
        round.steer(Side::Left, Move::Up);
        round.tick(Side::Left);
        round.tick(Side::Left);

        assert_eq!(round.get_snake_ids(), vec![Side::Left, Side::Right]);
        assert_eq!(round.get_head_as_position(&Side::Left), Position::new(1, 3));
        assert_eq!(
            round.get_snake_body_vec(&Side::Left),
            vec![Position::new(1, 3), Position::new(1, 2), Position::new(1, 1)]
        );
        assert_eq!(
            round.get_snake_body_vec(&Side::Right),
            vec![Position::new(4, 4), Position::new(4, 4)]
        );
        assert_eq!(round.get_width(), 6);
        assert_eq!(round.get_height(), 6);
    }
}

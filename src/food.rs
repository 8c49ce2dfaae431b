use log::warn;

use crate::config::DEFAULT_MAX_SPAWN_ATTEMPTS;
use crate::grid::{Cell, Grid};
use crate::random::RandomSource;
use crate::snake::Snake;

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }
}

/// Places food by rejection sampling over the whole board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodSpawner {
    max_attempts: u32,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPAWN_ATTEMPTS)
    }
}

impl FoodSpawner {
    /// Creates a spawner that draws at most `max_attempts` candidates.
    /// At least one candidate is always drawn.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    #[must_use]
    pub fn max_attempts(self) -> u32 {
        self.max_attempts
    }

    /// Draws cells until one is free of the snake.
    ///
    /// After `max_attempts` occupied draws the last candidate is returned
    /// regardless of occupancy, so a nearly full board never loops forever.
    pub fn spawn<R: RandomSource + ?Sized>(self, grid: Grid, snake: &Snake, random: &mut R) -> Food {
        let mut candidate = grid.random_cell(random);

        for _ in 1..self.max_attempts {
            if !snake.occupies(candidate) {
                return Food::at(candidate);
            }
            candidate = grid.random_cell(random);
        }

        if snake.occupies(candidate) {
            warn!(
                "food spawn exhausted {} attempts; placing food under the snake at ({}, {})",
                self.max_attempts, candidate.x, candidate.y
            );
        }

        Food::at(candidate)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, Grid};
    use crate::input::Direction;
    use crate::random::{ScriptedRandom, SeededRandom};
    use crate::snake::Snake;

    use super::FoodSpawner;

    fn grid() -> Grid {
        Grid::new(80, 60, 10).expect("valid grid")
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut random = SeededRandom::new(7);
        let snake = Snake::straight(grid(), 0, 0, 5);

        for _ in 0..200 {
            let food = FoodSpawner::default().spawn(grid(), &snake, &mut random);
            assert!(!snake.occupies(food.position));
            assert!(grid().contains(food.position));
        }
    }

    #[test]
    fn occupied_candidates_are_redrawn() {
        let snake = Snake::straight(grid(), 0, 0, 5);
        // (0,0) and (10,0) are under the snake, (30,20) is free.
        let mut random = ScriptedRandom::new(vec![0, 0, 1, 0, 3, 2]);

        let food = FoodSpawner::default().spawn(grid(), &snake, &mut random);

        assert_eq!(food.position, Cell::new(30, 20));
    }

    #[test]
    fn exhausted_attempts_fall_back_to_last_candidate() {
        let snake = Snake::straight(grid(), 0, 0, 5);
        let mut random = ScriptedRandom::new(vec![0, 0, 1, 0, 2, 0]);

        let food = FoodSpawner::new(3).spawn(grid(), &snake, &mut random);

        assert_eq!(food.position, Cell::new(20, 0));
        assert!(snake.occupies(food.position));
    }

    #[test]
    fn full_board_terminates() {
        let tight = Grid::new(50, 10, 10).expect("valid grid");
        let snake = Snake::from_segments(
            (0..5).map(|col| tight.cell_at(col, 0)).collect(),
            Direction::Right,
            tight,
        )
        .expect("non-empty snake");
        let mut random = SeededRandom::new(1);

        let food = FoodSpawner::new(10).spawn(tight, &snake, &mut random);

        assert!(tight.contains(food.position));
    }

    #[test]
    fn zero_attempts_still_draws_once() {
        assert_eq!(FoodSpawner::new(0).max_attempts(), 1);
    }
}

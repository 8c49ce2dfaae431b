use std::fmt;

use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Reason a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverCause {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WallCollision => f.write_str("hit the wall"),
            Self::SelfCollision => f.write_str("hit yourself"),
        }
    }
}

/// True when `head` lies outside the board.
#[must_use]
pub fn wall_collision(head: Cell, grid: Grid) -> bool {
    !grid.contains(head)
}

/// True when `head` lands on any current segment.
///
/// Checked before the head is appended, so the current tail counts even
/// though a non-growing move would vacate it.
#[must_use]
pub fn self_collision(head: Cell, snake: &Snake) -> bool {
    snake.occupies(head)
}

#[must_use]
pub fn food_collision(head: Cell, food: Food) -> bool {
    head == food.position
}

#[cfg(test)]
mod tests {
    use crate::food::Food;
    use crate::grid::{Cell, Grid};
    use crate::snake::Snake;

    use super::{food_collision, self_collision, wall_collision};

    fn grid() -> Grid {
        Grid::new(600, 600, 10).expect("valid grid")
    }

    #[test]
    fn wall_collision_on_every_edge() {
        assert!(wall_collision(Cell::new(-10, 100), grid()));
        assert!(wall_collision(Cell::new(600, 100), grid()));
        assert!(wall_collision(Cell::new(100, -10), grid()));
        assert!(wall_collision(Cell::new(100, 600), grid()));
        assert!(!wall_collision(Cell::new(590, 0), grid()));
    }

    #[test]
    fn self_collision_counts_current_tail() {
        let snake = Snake::straight(grid(), 10, 10, 5);

        assert!(self_collision(Cell::new(100, 100), &snake));
        assert!(self_collision(Cell::new(120, 100), &snake));
        assert!(!self_collision(Cell::new(150, 100), &snake));
    }

    #[test]
    fn food_collision_requires_exact_cell() {
        let food = Food::at(Cell::new(150, 100));

        assert!(food_collision(Cell::new(150, 100), food));
        assert!(!food_collision(Cell::new(150, 110), food));
    }
}

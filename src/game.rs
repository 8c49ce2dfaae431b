use log::{debug, info, trace};

use crate::collision::{GameOverCause, food_collision, self_collision, wall_collision};
use crate::config::INITIAL_SNAKE_LENGTH;
use crate::error::GameError;
use crate::food::{Food, FoodSpawner};
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::random::RandomSource;
use crate::snake::Snake;

/// Current high-level lifecycle state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Starting,
    Running,
    GameOver,
}

/// Result of one simulation step, handed to the rendering collaborator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    Advanced {
        head: Cell,
        /// Body cells, tail first.
        snake: Vec<Cell>,
        food: Cell,
        grew: bool,
    },
    GameOver {
        cause: GameOverCause,
    },
}

/// Complete mutable state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub score: u32,
    pub tick_count: u64,
    pub death_reason: Option<GameOverCause>,
    direction_has_changed: bool,
}

impl GameState {
    /// Builds a fresh Starting state with the snake in its opening spot.
    fn fresh<R: RandomSource + ?Sized>(grid: Grid, spawner: FoodSpawner, random: &mut R) -> Self {
        let length = INITIAL_SNAKE_LENGTH.min(grid.columns());
        let tail_col = (grid.columns() / 6).min(grid.columns() - length);
        let row = grid.rows() / 6;
        let snake = Snake::straight(grid, tail_col, row, length);
        let food = spawner.spawn(grid, &snake, random);

        Self {
            snake,
            food,
            status: GameStatus::Starting,
            score: 0,
            tick_count: 0,
            death_reason: None,
            direction_has_changed: false,
        }
    }

    /// Whether a direction request has already been consumed this tick.
    #[must_use]
    pub fn direction_has_changed(&self) -> bool {
        self.direction_has_changed
    }
}

/// Owns one game session and advances it one tick at a time.
#[derive(Debug)]
pub struct GameEngine<R: RandomSource> {
    grid: Grid,
    spawner: FoodSpawner,
    random: R,
    state: GameState,
}

impl<R: RandomSource> GameEngine<R> {
    /// Starts a new session in the Starting state.
    pub fn new_game(grid: Grid, random: R) -> Self {
        Self::with_spawner(grid, FoodSpawner::default(), random)
    }

    /// Starts a new session with a custom food spawner.
    pub fn with_spawner(grid: Grid, spawner: FoodSpawner, mut random: R) -> Self {
        let state = GameState::fresh(grid, spawner, &mut random);
        info!(
            "new game on {}x{} board (cell {}), food at ({}, {})",
            grid.width(),
            grid.height(),
            grid.cell_size(),
            state.food.position.x,
            state.food.position.y
        );

        Self {
            grid,
            spawner,
            random,
            state,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups; bypasses the tick rules.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Current body, tail first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        self.state.snake.snapshot()
    }

    /// Moves from Starting to Running once the countdown has elapsed.
    pub fn start_running(&mut self) -> Result<(), GameError> {
        if self.state.status != GameStatus::Starting {
            return Err(GameError::InvalidStateTransition {
                operation: "start running",
                status: self.state.status,
            });
        }

        self.state.status = GameStatus::Running;
        info!("game running");
        Ok(())
    }

    /// Discards the current session and returns to a fresh Starting state.
    pub fn reset(&mut self) {
        self.state = GameState::fresh(self.grid, self.spawner, &mut self.random);
        info!("game reset");
    }

    /// Offers a direction change for the current tick window.
    ///
    /// Only the first request per tick is considered, whether or not the
    /// snake accepts it. Requests outside Running are ignored. Returns
    /// whether the heading changed.
    pub fn request_direction(&mut self, requested: Direction) -> bool {
        if self.state.status != GameStatus::Running || self.state.direction_has_changed {
            return false;
        }

        self.state.direction_has_changed = true;
        let accepted = self.state.snake.set_direction(requested);
        if !accepted {
            debug!(
                "rejected reversal {:?} while heading {:?}",
                requested,
                self.state.snake.direction()
            );
        }
        accepted
    }

    /// Advances the simulation by one step.
    ///
    /// Fails with `InvalidStateTransition` outside Running, leaving the
    /// state untouched. Collisions end the game and are reported through
    /// the returned outcome.
    pub fn tick(&mut self, intent: Option<Direction>) -> Result<TickOutcome, GameError> {
        if self.state.status != GameStatus::Running {
            return Err(GameError::InvalidStateTransition {
                operation: "tick",
                status: self.state.status,
            });
        }

        if let Some(direction) = intent {
            let _ = self.request_direction(direction);
        }

        let new_head = self
            .state
            .snake
            .propose_next_head(self.state.snake.direction());

        if wall_collision(new_head, self.grid) {
            return Ok(self.finish(GameOverCause::WallCollision));
        }

        if self_collision(new_head, &self.state.snake) {
            return Ok(self.finish(GameOverCause::SelfCollision));
        }

        let grew = food_collision(new_head, self.state.food);
        self.state.snake.advance(new_head, grew);

        if grew {
            self.state.score += 1;
            self.state.food = self
                .spawner
                .spawn(self.grid, &self.state.snake, &mut self.random);
            debug!(
                "ate food at ({}, {}); length {}, next food at ({}, {})",
                new_head.x,
                new_head.y,
                self.state.snake.len(),
                self.state.food.position.x,
                self.state.food.position.y
            );
        }

        self.state.direction_has_changed = false;
        self.state.tick_count += 1;
        trace!(
            "tick {} head ({}, {})",
            self.state.tick_count, new_head.x, new_head.y
        );

        Ok(TickOutcome::Advanced {
            head: new_head,
            snake: self.state.snake.snapshot(),
            food: self.state.food.position,
            grew,
        })
    }

    fn finish(&mut self, cause: GameOverCause) -> TickOutcome {
        self.state.status = GameStatus::GameOver;
        self.state.death_reason = Some(cause);
        info!(
            "game over: {cause} after {} ticks with length {}",
            self.state.tick_count,
            self.state.snake.len()
        );
        TickOutcome::GameOver { cause }
    }
}

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::snake::{Direction::{self, *}, Snake};
use crate::{Coords, TermInt};

pub const FOOD_SCORE: u64 = 10;
const INITIAL_SNAKE_LENGTH: i32 = 3;
const MIN_WIDTH: TermInt = 6;
const MIN_HEIGHT: TermInt = 3;

// Random probes before falling back to scanning the free cells
const MAX_SPAWN_ATTEMPTS: usize = 256;

/// The whole simulation: board, snake, food and score. Renderers and input
/// readers only look at it through the accessors and drive it with
/// [`set_direction`](GameState::set_direction) and [`update`](GameState::update).
pub struct GameState {
    width: TermInt,
    height: TermInt,
    snake: Snake,
    direction: Direction,
    food: Coords,
    score: u64,
    game_over: bool,
    won: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(width: TermInt, height: TermInt) -> Result<Self, GameError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Same as [`new`](GameState::new) but every food placement is
    /// reproducible for a given seed.
    pub fn with_seed(width: TermInt, height: TermInt, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: TermInt, height: TermInt, rng: StdRng) -> Result<Self, GameError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GameError::InvalidDimensions { width, height });
        }

        let center = (i32::from(width / 2), i32::from(height / 2));
        let snake = Snake::new(center, INITIAL_SNAKE_LENGTH, Right);

        let mut state = GameState {
            width,
            height,
            snake,
            direction: Right,
            food: (0, 0),
            score: 0,
            game_over: false,
            won: false,
            rng,
        };

        // The interior is at least 4 cells wide, so there is always room left
        if let Some(food) = state.spawn_food() {
            state.food = food;
        }

        debug!("[Game] New {}x{} board, snake at {:?}, food at {:?}", width, height, center, state.food);
        Ok(state)
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction == self.direction.opposite() {
            debug!("[Game] Ignoring reversal from {} to {}", self.direction.name(), new_direction.name());
        } else {
            self.direction = new_direction;
        }
    }

    /// Advances the simulation by one tick. Does nothing once the game is over.
    pub fn update(&mut self) {
        if self.game_over {
            return;
        }

        let old_head = self.snake.head();
        let diff = self.direction.delta();
        let new_head = (old_head.0 + diff.0, old_head.1 + diff.1);

        if self.hits_wall(new_head) {
            self.finish(new_head, "wall");
            return;
        }

        // Checked against the full body: the tail has not moved out yet
        if self.snake.contains(&new_head) {
            self.finish(new_head, "own body");
            return;
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += FOOD_SCORE;
            debug!("[Game] Food eaten at {:?}, score {}", new_head, self.score);

            match self.spawn_food() {
                Some(food) => self.food = food,
                None => {
                    info!("[Game] Snake fills the board, final score {}", self.score);
                    self.won = true;
                    self.game_over = true;
                }
            }
        } else {
            self.snake.pop_tail();
        }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Coords {
        self.snake.head()
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True when the game ended because no free cell was left for food.
    pub fn won(&self) -> bool {
        self.won
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    ///////////////////////////////////////////////////////////////////////////

    fn hits_wall(&self, pos: Coords) -> bool {
        let (max_x, max_y) = (i32::from(self.width) - 1, i32::from(self.height) - 1);
        pos.0 <= 0 || pos.0 >= max_x || pos.1 <= 0 || pos.1 >= max_y
    }

    fn finish(&mut self, new_head: Coords, cause: &str) {
        info!("[Game] Crashed into {} at {:?}, final score {}", cause, new_head, self.score);
        self.game_over = true;
    }

    fn spawn_food(&mut self) -> Option<Coords> {
        let (max_x, max_y) = (i32::from(self.width) - 2, i32::from(self.height) - 2);

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let pos = (self.rng.gen_range(1..=max_x), self.rng.gen_range(1..=max_y));
            if !self.snake.contains(&pos) {
                return Some(pos);
            }
        }

        warn!("[Game] No free cell after {} probes, scanning the board", MAX_SPAWN_ATTEMPTS);

        let snake = &self.snake;
        let choices: Vec<Coords> = (1..=max_y)
            .flat_map(|y| (1..=max_x).map(move |x| (x, y)))
            .filter(|pos| !snake.contains(pos))
            .collect();

        choices.choose(&mut self.rng).copied()
    }
}

//! Model of the snake game: the snake body, the food, and the clocks that
//! drive discrete move steps.

use std::collections::VecDeque;
use std::time::Duration;

use log::debug;
use rand::Rng;

/// Window width in pixels.
pub const WINDOW_WIDTH: i32 = 800;
/// Window height in pixels.
pub const WINDOW_HEIGHT: i32 = 600;
/// Side length of one grid block in pixels. Every segment and the food sit on
/// multiples of this.
pub const BLOCK_SIZE: i32 = 20;
/// Number of grid columns.
pub const GRID_COLS: i32 = WINDOW_WIDTH / BLOCK_SIZE;
/// Number of grid rows.
pub const GRID_ROWS: i32 = WINDOW_HEIGHT / BLOCK_SIZE;
/// How many segments the snake spawns with.
pub const INIT_SNAKE_LENGTH: usize = 3;
/// Amount of accumulated time before the snake is forced to move one block.
pub const MOVE_INTERVAL: Duration = Duration::from_millis(200);

/// One grid-aligned block of the snake (or the food).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake. Screen coordinates, so `Up` decreases y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta of this heading in grid blocks.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// What a call to [`SnakeGame::tick`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// Nothing fatal happened; the game continues.
    Playing,
    /// A collision forced a full reset during this tick. The state already
    /// holds the fresh layout; the status is only a signal to the caller.
    JustReset,
}

/// The whole game state. One instance exists and one thread owns it; every
/// frame feeds its elapsed time into [`SnakeGame::tick`].
#[derive(Clone, Debug)]
pub struct SnakeGame {
    /// Body segments, head at the front.
    snake: VecDeque<Segment>,
    food: Segment,
    direction: Direction,
    move_timer: Duration,
    total_time: Duration,
}

impl SnakeGame {
    #[must_use]
    pub fn new() -> Self {
        let mut game = Self {
            snake: VecDeque::new(),
            food: Segment::new(0, 0),
            direction: Direction::Right,
            move_timer: Duration::ZERO,
            total_time: Duration::ZERO,
        };
        game.reset();
        game
    }

    /// Rebuilds the starting layout: a horizontal run of blocks on the top
    /// row with the head at its right end, heading right, fresh food, both
    /// clocks at zero. Used on launch and after any collision.
    pub fn reset(&mut self) {
        self.snake.clear();
        let mut segment = Segment::new(0, 0);
        for _ in 0..INIT_SNAKE_LENGTH {
            self.snake.push_front(segment);
            segment.x += BLOCK_SIZE;
        }
        self.direction = Direction::Right;
        self.move_timer = Duration::ZERO;
        self.total_time = Duration::ZERO;
        self.place_food();
    }

    /// Requests a new heading. A reversal onto the neighbouring segment would
    /// be an instant death, so the axis-opposite of the current heading is
    /// ignored.
    pub fn handle_input(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.direction = requested;
    }

    /// Advances the clocks by `delta` and performs at most one move step.
    /// The move timer resets to zero when it fires; any overshoot past the
    /// interval is dropped rather than carried into the next window.
    pub fn tick(&mut self, delta: Duration) -> TickStatus {
        self.total_time += delta;
        self.move_timer += delta;
        if self.move_timer >= MOVE_INTERVAL {
            self.move_timer = Duration::ZERO;
            return self.move_step();
        }
        TickStatus::Playing
    }

    /// One discrete move: the head advances one block and the rest of the
    /// body follows. Pushing the new head and popping the tail shifts every
    /// segment onto its predecessor's block; on a food hit the tail stays,
    /// which grows the snake by one segment at the spot the tail occupied
    /// before the move.
    fn move_step(&mut self) -> TickStatus {
        let (dx, dy) = self.direction.delta();
        // reset() guarantees the snake is never empty
        let head = *self.snake.front().unwrap();
        let new_head = Segment::new(head.x + dx * BLOCK_SIZE, head.y + dy * BLOCK_SIZE);
        self.snake.push_front(new_head);

        if new_head == self.food {
            debug!(
                "Food eaten at ({}, {}). Length is now {}",
                new_head.x,
                new_head.y,
                self.snake.len()
            );
            self.place_food();
        } else {
            self.snake.pop_back();
        }

        if self.snake.iter().skip(1).any(|segment| *segment == new_head) {
            debug!("Snake ran into itself. Resetting");
            self.reset();
            return TickStatus::JustReset;
        }

        if new_head.x < 0
            || new_head.x >= WINDOW_WIDTH
            || new_head.y < 0
            || new_head.y >= WINDOW_HEIGHT
        {
            debug!("Snake went out of bounds. Resetting");
            self.reset();
            return TickStatus::JustReset;
        }

        TickStatus::Playing
    }

    /// Drops the food on a uniformly random grid cell.
    // TODO: food can land on the snake body; decide whether placement should
    // reroll onto an empty cell instead.
    fn place_food(&mut self) {
        let mut rng = rand::thread_rng();
        self.food = Segment::new(
            rng.gen_range(0..GRID_COLS) * BLOCK_SIZE,
            rng.gen_range(0..GRID_ROWS) * BLOCK_SIZE,
        );
    }

    #[must_use]
    pub fn get_segments(&self) -> &VecDeque<Segment> {
        &self.snake
    }

    #[must_use]
    pub fn get_food(&self) -> Segment {
        self.food
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Elapsed time since the last reset. Display-only.
    #[must_use]
    pub fn get_total_time(&self) -> Duration {
        self.total_time
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

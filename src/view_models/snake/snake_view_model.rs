use std::time::{Duration, Instant};

use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::snake::snake_game::{
        Direction, Segment, SnakeGame, TickStatus, BLOCK_SIZE, GRID_COLS, GRID_ROWS,
    },
    view_model::ViewModel,
    views::snake::snake_game_screen::SnakeGameMessage,
};

/// Shown in the top-left corner of the playfield.
pub const INSTRUCTIONS: &str = "Use arrow keys to move";

/// What a single render cell holds, as consumed by the game screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCell {
    Empty,
    Body,
    Head,
    Food,
}

/// Bridges the game model and the game screen: turns keys into direction
/// requests, frame-timer instants into elapsed deltas, and the settled state
/// into render data.
#[derive(Debug)]
pub struct SnakeViewModel {
    game: SnakeGame,
    last_tick: Option<Instant>,
}

impl SnakeViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: SnakeGame::new(),
            last_tick: None,
        }
    }

    /// Projects the game state onto the render grid, row by row. The body is
    /// marked first and the food last, so food stays visible when it lands on
    /// a body segment.
    #[must_use]
    pub fn get_grid(&self) -> Vec<Vec<SnakeCell>> {
        let mut grid = Vec::new();
        for _ in 0..GRID_ROWS {
            let mut row = Vec::new();
            for _ in 0..GRID_COLS {
                row.push(SnakeCell::Empty);
            }
            grid.push(row);
        }
        for segment in self.game.get_segments().iter().skip(1) {
            Self::mark(&mut grid, *segment, SnakeCell::Body);
        }
        if let Some(head) = self.game.get_segments().front() {
            Self::mark(&mut grid, *head, SnakeCell::Head);
        }
        Self::mark(&mut grid, self.game.get_food(), SnakeCell::Food);
        grid
    }

    /// Elapsed-time display string, whole seconds only.
    #[must_use]
    pub fn get_time_text(&self) -> String {
        format!("Time: {} seconds", self.game.get_total_time().as_secs())
    }

    fn mark(grid: &mut [Vec<SnakeCell>], segment: Segment, cell: SnakeCell) {
        let (Ok(col), Ok(row)) = (
            usize::try_from(segment.x / BLOCK_SIZE),
            usize::try_from(segment.y / BLOCK_SIZE),
        ) else {
            return;
        };
        if let Some(slot) = grid.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *slot = cell;
        }
    }

    fn key_to_direction(key: &Key) -> Option<Direction> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(Direction::Up),
                Named::ArrowDown => Some(Direction::Down),
                Named::ArrowLeft => Some(Direction::Left),
                Named::ArrowRight => Some(Direction::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(Direction::Up),
                "s" | "S" => Some(Direction::Down),
                "a" | "A" => Some(Direction::Left),
                "d" | "D" => Some(Direction::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_message) = message else {
            warn!("Non-snake message sent to SnakeViewModel: {message:#?}");
            return None;
        };
        match snake_message {
            SnakeGameMessage::Key(key) => {
                if matches!(key, Key::Named(Named::Escape)) {
                    debug!("Escape pressed. Quitting");
                    return Some(Message::Quit);
                }
                if let Some(direction) = Self::key_to_direction(&key) {
                    self.game.handle_input(direction);
                }
                None
            }
            SnakeGameMessage::Timer(now) => {
                let delta = match self.last_tick {
                    Some(previous) => now.duration_since(previous),
                    // First firing establishes the baseline.
                    None => Duration::ZERO,
                };
                self.last_tick = Some(now);
                if self.game.tick(delta) == TickStatus::JustReset {
                    debug!("Collision. The game was reset");
                }
                None
            }
        }
    }
}

impl Default for SnakeViewModel {
    fn default() -> Self {
        Self::new()
    }
}

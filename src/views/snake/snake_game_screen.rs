use std::time::{Duration, Instant};

use iced::{
    keyboard::{self, Key},
    time,
    widget::{column, container, stack, text, Column, Row},
    Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::{SnakeCell, SnakeViewModel, INSTRUCTIONS},
};

/// How often the frame timer fires. Each firing advances the engine clocks by
/// the measured elapsed time, so this only bounds input/render latency.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    Key(Key),
    Timer(Instant),
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_model: SnakeViewModel::new(),
        }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let cell_size = 20;

        let make_cell = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        let mut grid_view = Column::new();
        for grid_row in self.view_model.get_grid() {
            let mut row = Row::new();
            for cell in grid_row {
                let rectangle = match cell {
                    SnakeCell::Empty => make_cell(Color::BLACK),
                    SnakeCell::Body => make_cell(Color::from_rgba(0.0, 1.0, 0.0, 0.8)),
                    SnakeCell::Head => make_cell(Color::from_rgb(0.0, 1.0, 0.0)),
                    SnakeCell::Food => make_cell(Color::from_rgb(1.0, 0.0, 0.0)),
                };
                row = row.push(rectangle);
            }
            grid_view = grid_view.push(row);
        }

        // Instructions and the clock sit over the top-left corner of the
        // playfield.
        let overlay = column![
            text(INSTRUCTIONS).size(20).color(Color::WHITE),
            text(self.view_model.get_time_text())
                .size(20)
                .color(Color::WHITE),
        ]
        .spacing(10)
        .padding(10);

        stack![grid_view, overlay]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let timer = time::every(FRAME_INTERVAL)
            .map(SnakeGameMessage::Timer)
            .map(Message::Snake);
        let keyboard = keyboard::on_key_press(|key, _| {
            Some(Message::Snake(SnakeGameMessage::Key(key)))
        });
        Subscription::batch(vec![timer, keyboard])
    }
}

impl Default for SnakeGameScreen {
    fn default() -> Self {
        Self::new()
    }
}

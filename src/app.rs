use iced::{Element, Subscription, Task};
use log::debug;

use crate::{
    view::View,
    views::snake::snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
};

/// Top-level application state. The game is the only screen.
pub struct State {
    screen: SnakeGameScreen,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeGameMessage),
    Quit,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: SnakeGameScreen::new(),
        }
    }

    pub fn update(state: &mut State, message: Message) -> Task<Message> {
        match state.screen.update(message) {
            Some(Message::Quit) => iced::exit(),
            Some(other) => {
                debug!("Unhandled message bubbled up: {other:#?}");
                Task::none()
            }
            None => Task::none(),
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

//! The [`View`] trait for the MVVM architecture.

use iced::{Element, Subscription};

use crate::app::Message;

/// Trait containing methods for `View` modules in the MVVM architecture.
pub trait View {
    /// Handles a message, optionally bubbling a follow-up message to the
    /// application layer.
    fn update(&mut self, message: Message) -> Option<Message>;

    /// Builds the widget tree for the current state.
    fn view(&self) -> Element<'_, Message>;

    /// Event sources this view listens to.
    fn subscription(&self) -> Subscription<Message>;
}

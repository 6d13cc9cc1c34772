use log::debug;
use rustsnake::app::State;

fn main() {
    std::env::set_var("RUST_LOG", "rustsnake=debug");
    env_logger::init();
    debug!("Debug on");
    let _ = iced::application("Snake Game", State::update, State::view)
        .window_size(iced::Size::new(800.0, 600.0))
        .subscription(State::subscription)
        .run();
}

//! Player entity and its input

pub mod input;
pub mod player;

pub use input::InputState;
pub use player::Player;

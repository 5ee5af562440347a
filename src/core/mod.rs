//! Core game state and logic.

pub mod clock;
pub mod config;
pub mod constants;
pub mod game_loop;

pub use clock::FrameClock;
pub use config::GameConfig;
pub use constants::*;
pub use game_loop::{GameLoop, TickResult};

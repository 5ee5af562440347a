//! Road dodging game.
//!
//! A top-down driving game: the player steers a car left and right across
//! a road while obstacle cars descend from the top. Obstacles spawn on a
//! timer, fall faster every few seconds, and touching one crashes the car.

pub mod logic;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use spawner::Spawner;
pub use types::*;

//! Road Crash - terminal dodge-the-traffic game and lyrics presentation.
//!
//! This module exposes the game logic for testing and for the binaries.

pub mod build_info;
pub mod core;
pub mod crash;
pub mod input;
pub mod lyrics;
pub mod road;
pub mod ui;
pub mod utils;

//! Road game logic: movement, obstacle descent, collision, difficulty and
//! the Playing/Crashed transitions.
//!
//! These are the individual steps of a tick. [`crate::core::game_loop`]
//! sequences them and owns the spawner and crash dispatcher.

use super::types::{RoadGame, SessionState};

/// UI-agnostic input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoadInput {
    /// Steer left (held).
    pub left: bool,
    /// Steer right (held).
    pub right: bool,
    /// Restart after a crash (one-shot).
    pub restart: bool,
    /// Leave the game (one-shot).
    pub quit: bool,
}

impl RoadInput {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Default::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

/// Apply steering for one tick and clamp the player to the track.
/// Holding both directions cancels out.
pub fn move_player(game: &mut RoadGame, input: &RoadInput) {
    let mut dx = 0.0;
    if input.left {
        dx -= game.player_speed;
    }
    if input.right {
        dx += game.player_speed;
    }

    let rect = &mut game.player.rect;
    rect.x = game.track.clamp_x(rect.x + dx, rect.width);
}

/// Move every obstacle down by the current difficulty speed.
pub fn advance_obstacles(game: &mut RoadGame) {
    let speed = game.obstacle_speed;
    for obstacle in &mut game.obstacles {
        obstacle.rect.y += speed;
    }
}

/// Drop obstacles whose top edge is past the despawn line. Returns how many.
pub fn remove_passed_obstacles(game: &mut RoadGame) -> usize {
    let before = game.obstacles.len();
    let line = game.despawn_line;
    game.obstacles.retain(|o| o.rect.top() <= line);
    before - game.obstacles.len()
}

/// Index of an obstacle overlapping the player, if any.
pub fn find_collision(game: &RoadGame) -> Option<usize> {
    let player = &game.player.rect;
    game.obstacles
        .iter()
        .position(|o| o.rect.intersects(player))
}

/// Transition Playing -> Crashed.
///
/// `respond` is the crash side effect; it runs at most once per crash
/// episode and the attempt flag is set whatever its outcome. An `Err`
/// message is kept for the crash screen. Returns true if `respond` ran.
pub fn enter_crashed<F>(game: &mut RoadGame, respond: F) -> bool
where
    F: FnOnce() -> Result<(), String>,
{
    if game.state == SessionState::Crashed {
        return false;
    }
    game.state = SessionState::Crashed;

    if game.media_launch_attempted {
        return false;
    }
    game.media_launch_attempted = true;
    if let Err(message) = respond() {
        game.last_error = Some(message);
    }
    true
}

/// Add active time to the score and the difficulty ramp.
/// Returns true if the obstacle speed went up.
pub fn accumulate_active_time(game: &mut RoadGame, dt: f64) -> bool {
    let dt = dt.max(0.0);
    game.score += dt;
    game.since_speedup += dt;

    if game.since_speedup >= game.speedup_interval {
        game.obstacle_speed += game.speed_step;
        game.since_speedup = 0.0;
        return true;
    }
    false
}

/// Reset the session for a new run. Only valid from Crashed.
/// Returns true if the game restarted.
pub fn restart(game: &mut RoadGame) -> bool {
    if game.state != SessionState::Crashed {
        return false;
    }

    game.player.rect = game.player_start;
    game.obstacles.clear();
    game.obstacle_speed = game.initial_obstacle_speed;
    game.score = 0.0;
    game.since_speedup = 0.0;
    game.media_launch_attempted = false;
    game.last_error = None;
    game.state = SessionState::Playing;
    true
}

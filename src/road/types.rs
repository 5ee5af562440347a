//! Road game data structures.
//!
//! The world uses the visible area's own units: x grows to the right, y grows
//! downward, and every entity is an axis-aligned rectangle anchored at its
//! top-left corner.

use crate::core::config::GameConfig;

/// An axis-aligned rectangle (top-left anchored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Bounding-box overlap, inclusive on both axes (touching edges collide).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

/// Horizontal playable region within the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub left: f64,
    pub right: f64,
    /// Height of the visible area.
    pub height: f64,
}

impl Track {
    pub fn new(left: f64, right: f64, height: f64) -> Self {
        debug_assert!(left < right, "track left edge must be left of right edge");
        Self {
            left,
            right,
            height,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.track_left(),
            config.track_right(),
            config.screen_height,
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Clamp an entity's x so that `[x, x + width]` stays inside the track.
    pub fn clamp_x(&self, x: f64, width: f64) -> f64 {
        let max_x = (self.right - width).max(self.left);
        x.clamp(self.left, max_x)
    }

    /// Largest lateral offset from `left` an entity of `width` may take.
    pub fn lateral_span(&self, width: f64) -> f64 {
        (self.width() - width).max(0.0)
    }
}

/// The player's car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Starting position: horizontally centered on screen, just above the bottom.
    pub fn initial_rect(config: &GameConfig) -> Rect {
        Rect::new(
            ((config.screen_width - config.player_width) / 2.0).floor(),
            config.screen_height - config.player_height - config.player_bottom_gap,
            config.player_width,
            config.player_height,
        )
    }
}

/// A descending obstacle car. Its velocity is the shared difficulty speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
}

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Crashed,
}

/// Main game state, owned by the game loop.
#[derive(Debug, Clone)]
pub struct RoadGame {
    pub track: Track,
    /// Where the player starts and is put back on restart.
    pub player_start: Rect,
    pub player: Player,
    pub player_speed: f64,

    pub obstacles: Vec<Obstacle>,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    /// Obstacles whose top edge passes this line are removed.
    pub despawn_line: f64,

    // Difficulty
    pub obstacle_speed: f64,
    pub initial_obstacle_speed: f64,
    pub speed_step: f64,
    pub speedup_interval: f64,
    /// Active seconds since the last speed increase.
    pub since_speedup: f64,

    // Session
    pub state: SessionState,
    /// Active (non-crashed) seconds survived.
    pub score: f64,
    /// Crash media was already attempted this crash episode.
    pub media_launch_attempted: bool,
    /// Failure message from the last crash media attempt.
    pub last_error: Option<String>,
}

impl RoadGame {
    pub fn new(config: &GameConfig) -> Self {
        let track = Track::from_config(config);
        let player_start = Player::initial_rect(config);
        let mut player = Player { rect: player_start };
        player.rect.x = track.clamp_x(player.rect.x, player.rect.width);

        Self {
            track,
            player_start: player.rect,
            player,
            player_speed: config.player_speed,

            obstacles: Vec::new(),
            obstacle_width: config.obstacle_width,
            obstacle_height: config.obstacle_height,
            despawn_line: config.screen_height + config.despawn_margin,

            obstacle_speed: config.obstacle_speed_start,
            initial_obstacle_speed: config.obstacle_speed_start,
            speed_step: config.obstacle_speed_step,
            speedup_interval: config.speedup_interval_seconds,
            since_speedup: 0.0,

            state: SessionState::Playing,
            score: 0.0,
            media_launch_attempted: false,
            last_error: None,
        }
    }

    pub fn is_crashed(&self) -> bool {
        self.state == SessionState::Crashed
    }

    /// Score as shown to the player (whole seconds, truncated).
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0) as u64
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            track: &self.track,
            player: &self.player,
            obstacles: &self.obstacles,
            score: self.display_score(),
            obstacle_speed: self.obstacle_speed,
            state: self.state,
            last_error: self.last_error.as_deref(),
        }
    }
}

/// Borrowed, read-only view of one frame of the session.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub track: &'a Track,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub score: u64,
    /// Current shared obstacle speed (per tick).
    pub obstacle_speed: f64,
    pub state: SessionState,
    pub last_error: Option<&'a str>,
}

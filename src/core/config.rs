//! Game configuration.
//!
//! Every tunable has a default taken from [`crate::core::constants`]. A JSON
//! file may override any subset of fields; missing fields keep their default.

use crate::core::constants::*;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Tunables for one game session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the visible area in world units.
    pub screen_width: f64,
    /// Height of the visible area in world units.
    pub screen_height: f64,
    /// Off-road strip on each side of the track.
    pub road_margin: f64,

    pub player_width: f64,
    pub player_height: f64,
    /// Gap between the player's bottom edge and the bottom of the screen.
    pub player_bottom_gap: f64,
    /// Horizontal player movement per tick.
    pub player_speed: f64,

    pub obstacle_width: f64,
    pub obstacle_height: f64,

    pub spawn_interval_ms: u64,
    /// How far below the visible area an obstacle may travel before removal.
    pub despawn_margin: f64,

    /// Obstacle descent per tick at the start of a session.
    pub obstacle_speed_start: f64,
    pub obstacle_speed_step: f64,
    pub speedup_interval_seconds: f64,

    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            road_margin: ROAD_MARGIN,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_gap: PLAYER_BOTTOM_GAP,
            player_speed: PLAYER_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            despawn_margin: DESPAWN_MARGIN,
            obstacle_speed_start: OBSTACLE_SPEED_START,
            obstacle_speed_step: OBSTACLE_SPEED_STEP,
            speedup_interval_seconds: SPEEDUP_INTERVAL_SECONDS,
            target_fps: TARGET_FPS,
        }
    }
}

impl GameConfig {
    /// Load a JSON config file and validate it.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Left edge of the track.
    pub fn track_left(&self) -> f64 {
        self.road_margin
    }

    /// Right edge of the track.
    pub fn track_right(&self) -> f64 {
        self.screen_width - self.road_margin
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Target frame duration derived from `target_fps`.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// Reject configurations that would break the track invariants.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidData, msg));

        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("speedup_interval_seconds", self.speedup_interval_seconds),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{} must be positive, got {}", name, value));
            }
        }

        let non_negative = [
            ("road_margin", self.road_margin),
            ("player_bottom_gap", self.player_bottom_gap),
            ("player_speed", self.player_speed),
            ("despawn_margin", self.despawn_margin),
            ("obstacle_speed_start", self.obstacle_speed_start),
            ("obstacle_speed_step", self.obstacle_speed_step),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{} must not be negative, got {}", name, value));
            }
        }

        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms must be positive".to_string());
        }
        if self.target_fps == 0 {
            return invalid("target_fps must be positive".to_string());
        }

        let (left, right) = (self.track_left(), self.track_right());
        if left >= right {
            return invalid(format!(
                "track is empty: left edge {} is not left of right edge {}",
                left, right
            ));
        }
        if self.player_width > right - left {
            return invalid(format!(
                "player_width {} does not fit the track width {}",
                self.player_width,
                right - left
            ));
        }
        if self.player_height + self.player_bottom_gap > self.screen_height {
            return invalid("player does not fit on screen".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.track_left() - 60.0).abs() < f64::EPSILON);
        assert!((config.track_right() - 420.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "player_speed": 9.0, "spawn_interval_ms": 500 }"#).unwrap();
        assert!((config.player_speed - 9.0).abs() < f64::EPSILON);
        assert_eq!(config.spawn_interval_ms, 500);
        assert!((config.obstacle_speed_start - OBSTACLE_SPEED_START).abs() < f64::EPSILON);
        assert_eq!(config.target_fps, TARGET_FPS);
    }

    #[test]
    fn test_validate_rejects_empty_track() {
        let config = GameConfig {
            road_margin: 240.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_validate_rejects_player_wider_than_track() {
        let config = GameConfig {
            player_width: 400.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_spawn_interval() {
        let config = GameConfig {
            spawn_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frame_duration_from_fps() {
        let config = GameConfig::default();
        let frame = config.frame_duration();
        assert!(frame > Duration::from_millis(16) && frame < Duration::from_millis(17));
    }

    #[test]
    fn test_load_reports_bad_json_as_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}

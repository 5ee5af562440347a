// Visible area (world units)
pub const SCREEN_WIDTH: f64 = 480.0;
pub const SCREEN_HEIGHT: f64 = 640.0;
pub const ROAD_MARGIN: f64 = 60.0; // left/right road margins

// Cars
pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 80.0;
pub const PLAYER_BOTTOM_GAP: f64 = 20.0; // distance from the bottom edge
pub const PLAYER_SPEED: f64 = 6.0; // units per tick
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const OBSTACLE_HEIGHT: f64 = 80.0;

// Spawning and cleanup
pub const SPAWN_INTERVAL_MS: u64 = 900;
pub const DESPAWN_MARGIN: f64 = 10.0;

// Difficulty ramp
pub const OBSTACLE_SPEED_START: f64 = 4.0; // units per tick
pub const OBSTACLE_SPEED_STEP: f64 = 0.5;
pub const SPEEDUP_INTERVAL_SECONDS: f64 = 10.0;

// Timing
pub const TARGET_FPS: u32 = 60;

// Input
pub const KEY_HOLD_WINDOW_MS: u64 = 150;

// Crash media
pub const ASSETS_DIR_NAME: &str = "assets";
pub const CRASH_MEDIA_STEM: &str = "crash";
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mkv", "avi", "mov", "webm"];

// Lyrics presentation
pub const DEFAULT_LYRICS_INTERVAL_SECONDS: f64 = 1.5;
pub const LYRICS_LEAD_IN_SECONDS: f64 = 0.2;
pub const DEFAULT_LYRICS_TITLE: &str = "Lyrics";

// Per-user files (logs)
pub const APP_DIR_NAME: &str = ".roadcrash";

pub mod game_common;
pub mod lyrics_scene;
pub mod road_scene;

pub use lyrics_scene::render_lyrics;
pub use road_scene::render_road;

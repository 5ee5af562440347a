//! Lyrics presentation.
//!
//! A standalone sequential reveal of lyric lines with optional background
//! music. It runs in its own process (the `lyrics` binary) and shares
//! nothing with the game loop.

pub mod audio;
pub mod loader;
pub mod reveal;

pub use audio::BackgroundAudio;
pub use loader::{load_lyrics, Lyrics, LyricsSource, SAMPLE_LYRICS};
pub use reveal::LyricsReveal;

use crate::core::constants::{
    DEFAULT_LYRICS_INTERVAL_SECONDS, DEFAULT_LYRICS_TITLE, LYRICS_LEAD_IN_SECONDS,
};
use std::path::PathBuf;
use std::time::Duration;

/// Options for one presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsOptions {
    pub lyrics_path: Option<PathBuf>,
    pub audio_path: Option<PathBuf>,
    pub interval: Duration,
    pub title: String,
}

impl Default for LyricsOptions {
    fn default() -> Self {
        Self {
            lyrics_path: None,
            audio_path: None,
            interval: Duration::from_secs_f64(DEFAULT_LYRICS_INTERVAL_SECONDS),
            title: DEFAULT_LYRICS_TITLE.to_string(),
        }
    }
}

/// Everything the lyrics screen needs: the reveal timer, the audio handle
/// and any notices to show in the status bar.
pub struct LyricsPresentation {
    pub title: String,
    pub reveal: LyricsReveal,
    pub source: LyricsSource,
    pub notice: Option<String>,
    audio: BackgroundAudio,
}

impl LyricsPresentation {
    /// Load the lyrics and start the audio, if any.
    pub fn start(options: &LyricsOptions) -> Self {
        let lyrics = load_lyrics(options.lyrics_path.as_deref());
        tracing::info!(
            lines = lyrics.lines.len(),
            source = ?lyrics.source,
            "lyrics loaded"
        );

        let (audio, notice) = match &options.audio_path {
            Some(path) => BackgroundAudio::start(path),
            None => (BackgroundAudio::silent(), None),
        };

        Self::with_audio(options, lyrics, audio, notice)
    }

    /// Build a presentation from already-loaded lyrics.
    pub fn with_audio(
        options: &LyricsOptions,
        lyrics: Lyrics,
        audio: BackgroundAudio,
        notice: Option<String>,
    ) -> Self {
        Self {
            title: options.title.clone(),
            reveal: LyricsReveal::new(
                lyrics.lines,
                options.interval,
                Duration::from_secs_f64(LYRICS_LEAD_IN_SECONDS),
            ),
            source: lyrics.source,
            notice,
            audio,
        }
    }

    /// Advance the reveal timer. Returns true if a new line appeared.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.reveal.advance(dt)
    }

    pub fn is_audio_playing(&self) -> bool {
        self.audio.is_playing()
    }

    /// Stop the audio. Must run before the display is released.
    pub fn close(&mut self) {
        self.audio.stop();
    }
}

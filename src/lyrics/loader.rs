//! Loading lyrics text.

use std::fs;
use std::io;
use std::path::Path;

/// Lines shown when no usable lyrics file is given.
pub const SAMPLE_LYRICS: [&str; 4] = [
    "You crashed into me, now hear this rhyme,",
    "In a separate window, one line at a time.",
    "Add your song in assets, name it song.mp3,",
    "And put your lyrics in lyrics.txt for free!",
];

/// Where the loaded lines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricsSource {
    File,
    /// No path given, or the file does not exist.
    SampleMissing,
    /// The file had no non-blank lines.
    SampleEmpty,
    /// The file exists but could not be read.
    SampleUnreadable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lyrics {
    pub lines: Vec<String>,
    pub source: LyricsSource,
}

impl Lyrics {
    pub fn sample(source: LyricsSource) -> Self {
        Self {
            lines: SAMPLE_LYRICS.iter().map(|s| s.to_string()).collect(),
            source,
        }
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1 (one byte per character).
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Trimmed, non-blank lines in order.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load lyrics from `path`, substituting the sample lyrics when the file is
/// absent, unreadable, or blank.
pub fn load_lyrics(path: Option<&Path>) -> Lyrics {
    let Some(path) = path else {
        return Lyrics::sample(LyricsSource::SampleMissing);
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "lyrics file not found, using sample lyrics");
            return Lyrics::sample(LyricsSource::SampleMissing);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "lyrics file unreadable, using sample lyrics");
            return Lyrics::sample(LyricsSource::SampleUnreadable);
        }
    };

    let lines = parse_lines(&decode_text(bytes));
    if lines.is_empty() {
        tracing::warn!(path = %path.display(), "lyrics file is empty, using sample lyrics");
        return Lyrics::sample(LyricsSource::SampleEmpty);
    }

    Lyrics {
        lines,
        source: LyricsSource::File,
    }
}

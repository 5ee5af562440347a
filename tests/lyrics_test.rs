//! Integration test: Lyrics presentation
//!
//! Tests loading lyrics (including the sample fallback) and the timed
//! reveal driven through the presentation.

use roadcrash::lyrics::{
    load_lyrics, LyricsOptions, LyricsPresentation, LyricsSource, SAMPLE_LYRICS,
};
use std::fs;
use std::time::Duration;

/// Drive the presentation and collect every line as it appears.
fn reveal_sequence(presentation: &mut LyricsPresentation) -> Vec<String> {
    let mut seen = Vec::new();
    // 100ms steps for a minute is far longer than any test sequence.
    for _ in 0..600 {
        if presentation.advance(0.1) {
            if let Some(line) = presentation.reveal.current() {
                seen.push(line.to_string());
            }
        }
    }
    seen
}

fn options_for(path: Option<std::path::PathBuf>) -> LyricsOptions {
    LyricsOptions {
        lyrics_path: path,
        ..LyricsOptions::default()
    }
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_absent_file_shows_four_sample_lines() {
    let dir = tempfile::tempdir().unwrap();
    let mut presentation =
        LyricsPresentation::start(&options_for(Some(dir.path().join("lyrics.txt"))));

    assert_eq!(presentation.source, LyricsSource::SampleMissing);
    assert_eq!(reveal_sequence(&mut presentation), SAMPLE_LYRICS.to_vec());
    presentation.close();
}

#[test]
fn test_blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lyrics.txt");
    fs::write(&path, "Hello\n\nWorld\n  \n").unwrap();

    let mut presentation = LyricsPresentation::start(&options_for(Some(path)));
    assert_eq!(presentation.source, LyricsSource::File);
    assert_eq!(reveal_sequence(&mut presentation), vec!["Hello", "World"]);
    assert_eq!(presentation.reveal.current(), Some("World"));
    presentation.close();
}

#[test]
fn test_whitespace_only_file_uses_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lyrics.txt");
    fs::write(&path, " \n\t\n").unwrap();

    let lyrics = load_lyrics(Some(&path));
    assert_eq!(lyrics.source, LyricsSource::SampleEmpty);
    assert_eq!(lyrics.lines, SAMPLE_LYRICS.to_vec());
}

#[test]
fn test_latin1_file_is_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lyrics.txt");
    // "Café" and "Ñu" encoded as Latin-1
    fs::write(&path, [b'C', b'a', b'f', 0xE9, b'\n', 0xD1, b'u', b'\n']).unwrap();

    let lyrics = load_lyrics(Some(&path));
    assert_eq!(lyrics.source, LyricsSource::File);
    assert_eq!(lyrics.lines, vec!["Café", "Ñu"]);
}

// =============================================================================
// Timing Tests
// =============================================================================

#[test]
fn test_lines_follow_the_interval() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lyrics.txt");
    fs::write(&path, "one\ntwo\nthree\n").unwrap();

    let options = LyricsOptions {
        lyrics_path: Some(path),
        interval: Duration::from_secs(1),
        ..LyricsOptions::default()
    };
    let mut presentation = LyricsPresentation::start(&options);

    assert_eq!(presentation.reveal.current(), None);
    presentation.advance(0.25);
    assert_eq!(presentation.reveal.current(), Some("one"));
    presentation.advance(0.5);
    assert_eq!(presentation.reveal.current(), Some("one"));
    presentation.advance(0.5);
    assert_eq!(presentation.reveal.current(), Some("two"));
    presentation.advance(1.0);
    assert_eq!(presentation.reveal.current(), Some("three"));
    assert!(presentation.reveal.is_finished());

    // The last line stays.
    presentation.advance(30.0);
    assert_eq!(presentation.reveal.current(), Some("three"));
    presentation.close();
}

#[test]
fn test_missing_audio_is_a_notice_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = LyricsOptions {
        audio_path: Some(dir.path().join("song.mp3")),
        ..LyricsOptions::default()
    };
    let mut presentation = LyricsPresentation::start(&options);

    assert!(!presentation.is_audio_playing());
    assert!(presentation
        .notice
        .as_deref()
        .is_some_and(|n| n.contains("song.mp3")));
    assert_eq!(reveal_sequence(&mut presentation).len(), SAMPLE_LYRICS.len());
    presentation.close();
}

//! Optional background music for the lyrics presentation.
//!
//! Playback is backed by rodio when the `audio` feature is enabled. Any
//! failure (feature disabled, no output device, unreadable file) leaves the
//! presentation silent and yields a notice for the status bar.

use std::path::Path;

/// Background playback handle. Dropping it stops the music.
pub struct BackgroundAudio {
    #[cfg(feature = "audio")]
    inner: Option<rodio_backend::Playback>,
}

impl BackgroundAudio {
    /// A handle that plays nothing.
    pub fn silent() -> Self {
        Self {
            #[cfg(feature = "audio")]
            inner: None,
        }
    }

    /// Start playing `path` in the background.
    ///
    /// Returns the handle and, when playback could not start, a notice
    /// explaining why.
    pub fn start(path: &Path) -> (Self, Option<String>) {
        if !path.is_file() {
            let notice = format!("audio file not found: {}", path.display());
            tracing::warn!("{}", notice);
            return (Self::silent(), Some(notice));
        }

        #[cfg(feature = "audio")]
        {
            match rodio_backend::Playback::start(path) {
                Ok(playback) => {
                    tracing::info!(path = %path.display(), "background audio started");
                    (
                        Self {
                            inner: Some(playback),
                        },
                        None,
                    )
                }
                Err(e) => {
                    let notice = format!("audio playback failed: {}", e);
                    tracing::warn!("{}", notice);
                    (Self::silent(), Some(notice))
                }
            }
        }

        #[cfg(not(feature = "audio"))]
        {
            let notice = "audio playback unavailable (built without the `audio` feature)".to_string();
            tracing::info!("{}", notice);
            (Self::silent(), Some(notice))
        }
    }

    pub fn is_playing(&self) -> bool {
        #[cfg(feature = "audio")]
        {
            self.inner.as_ref().is_some_and(|p| p.is_playing())
        }

        #[cfg(not(feature = "audio"))]
        {
            false
        }
    }

    /// Stop playback and release the output device.
    pub fn stop(&mut self) {
        #[cfg(feature = "audio")]
        if let Some(playback) = self.inner.take() {
            playback.stop();
            tracing::info!("background audio stopped");
        }
    }
}

impl Drop for BackgroundAudio {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(feature = "audio")]
mod rodio_backend {
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    /// Playing sink plus the stream that keeps the device open.
    pub struct Playback {
        sink: Sink,
        _stream: OutputStream,
        _handle: OutputStreamHandle,
    }

    impl Playback {
        pub fn start(path: &Path) -> Result<Self, String> {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| format!("no audio output device: {}", e))?;
            let sink = Sink::try_new(&handle).map_err(|e| format!("audio sink: {}", e))?;

            let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            let source = Decoder::new(BufReader::new(file))
                .map_err(|e| format!("cannot decode {}: {}", path.display(), e))?;
            sink.append(source);
            sink.play();

            Ok(Self {
                sink,
                _stream: stream,
                _handle: handle,
            })
        }

        pub fn is_playing(&self) -> bool {
            !self.sink.empty() && !self.sink.is_paused()
        }

        pub fn stop(self) {
            self.sink.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_audio_file_is_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let (audio, notice) = BackgroundAudio::start(&dir.path().join("song.mp3"));
        assert!(!audio.is_playing());
        assert!(notice.is_some_and(|n| n.contains("not found")));
    }

    #[test]
    fn test_silent_stop_is_noop() {
        let mut audio = BackgroundAudio::silent();
        audio.stop();
        assert!(!audio.is_playing());
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn test_without_feature_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        std::fs::write(&path, b"not really audio").unwrap();
        let (audio, notice) = BackgroundAudio::start(&path);
        assert!(!audio.is_playing());
        assert!(notice.is_some_and(|n| n.contains("unavailable")));
    }
}

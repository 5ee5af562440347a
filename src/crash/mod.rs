//! Crash response: find the crash video and open it with the default player.
//!
//! The game loop calls [`CrashDispatcher::dispatch`] once per crash episode.
//! Every failure comes back as a [`CrashMediaError`] whose message is shown
//! on the crash screen; nothing here can stop the game.

pub mod launcher;
pub mod media;

pub use launcher::{LaunchDefaultHandler, LaunchError, NoopLauncher, SystemLauncher};
pub use media::{find_crash_media, is_video_file};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrashMediaError {
    #[error("no resource found in {} (try assets/crash.mp4)", dir.display())]
    NoResourceFound { dir: PathBuf },
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

pub struct CrashDispatcher {
    assets_dir: PathBuf,
    launcher: Box<dyn LaunchDefaultHandler>,
}

impl CrashDispatcher {
    pub fn new(assets_dir: impl Into<PathBuf>, launcher: Box<dyn LaunchDefaultHandler>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            launcher,
        }
    }

    /// Dispatcher using the platform opener.
    pub fn system(assets_dir: impl Into<PathBuf>) -> Self {
        Self::new(assets_dir, Box::new(SystemLauncher))
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Locate the crash media and ask the OS to open it. Returns the opened path.
    pub fn dispatch(&mut self) -> Result<PathBuf, CrashMediaError> {
        let path =
            find_crash_media(&self.assets_dir).ok_or_else(|| CrashMediaError::NoResourceFound {
                dir: self.assets_dir.clone(),
            })?;
        self.launcher.launch(&path)?;
        Ok(path)
    }
}

impl std::fmt::Debug for CrashDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrashDispatcher")
            .field("assets_dir", &self.assets_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_media_reports_no_resource_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut dispatcher = CrashDispatcher::new(dir.path(), Box::new(NoopLauncher));
        let err = dispatcher.dispatch().unwrap_err();
        assert!(matches!(err, CrashMediaError::NoResourceFound { .. }));
        assert!(err.to_string().contains("no resource found"));
    }

    #[test]
    fn test_found_media_is_launched() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("crash.mp4");
        fs::write(&video, b"").unwrap();
        let mut dispatcher = CrashDispatcher::new(dir.path(), Box::new(NoopLauncher));
        assert_eq!(dispatcher.dispatch().unwrap(), video);
    }

    struct FailingLauncher;

    impl LaunchDefaultHandler for FailingLauncher {
        fn launch(&mut self, _path: &Path) -> Result<(), LaunchError> {
            Err(LaunchError::Unsupported)
        }
    }

    #[test]
    fn test_launch_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clip.mkv"), b"").unwrap();
        let mut dispatcher = CrashDispatcher::new(dir.path(), Box::new(FailingLauncher));
        let err = dispatcher.dispatch().unwrap_err();
        assert!(matches!(err, CrashMediaError::Launch(LaunchError::Unsupported)));
        assert!(err.to_string().contains("not supported"));
    }
}

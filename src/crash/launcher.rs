//! Asking the operating system to open a file with its default handler.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Failure to hand a file over to the OS default handler.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("couldn't open {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("opening files is not supported on this platform")]
    Unsupported,
}

/// Port for "open this file with its default application".
///
/// Implementations must not wait for the opened application to exit.
pub trait LaunchDefaultHandler {
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError>;
}

/// Launches through the platform's opener command (`open`, `start`, `xdg-open`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(path: &Path) -> Result<Command, LaunchError> {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            // The empty string is the window title argument of `start`.
            cmd.args(["/C", "start", ""]).arg(path);
            Ok(cmd)
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            Ok(cmd)
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            Ok(cmd)
        } else {
            Err(LaunchError::Unsupported)
        }
    }
}

impl LaunchDefaultHandler for SystemLauncher {
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError> {
        let mut child = Self::command(path)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        // Reap the opener without blocking the game loop.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Launcher that never opens anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLauncher;

impl LaunchDefaultHandler for NoopLauncher {
    fn launch(&mut self, _path: &Path) -> Result<(), LaunchError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_message_names_file() {
        let err = LaunchError::Spawn {
            path: PathBuf::from("assets/crash.mp4"),
            source: io::Error::new(io::ErrorKind::NotFound, "xdg-open not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("assets/crash.mp4"));
        assert!(msg.contains("xdg-open not found"));
    }

    #[test]
    fn test_noop_launcher_succeeds() {
        let mut launcher = NoopLauncher;
        assert!(launcher.launch(Path::new("whatever.mp4")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_command_targets_path() {
        let cmd = SystemLauncher::command(Path::new("/tmp/crash.mp4")).unwrap();
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().map(|a| a.to_os_string()), Some("/tmp/crash.mp4".into()));
    }
}

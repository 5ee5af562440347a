//! Filesystem locations: the per-user ~/.roadcrash/ directory and the
//! assets directory next to the program.

use crate::core::constants::{APP_DIR_NAME, ASSETS_DIR_NAME};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.roadcrash/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default log file for a binary: ~/.roadcrash/<name>.log.
pub fn default_log_path(binary: &str) -> io::Result<PathBuf> {
    Ok(app_dir()?.join(format!("{}.log", binary)))
}

/// Pick the assets directory: `assets/` beside the executable when it
/// exists, otherwise `assets/` under `cwd`.
pub fn resolve_assets_dir(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = exe_dir {
        let beside_exe = dir.join(ASSETS_DIR_NAME);
        if beside_exe.is_dir() {
            return beside_exe;
        }
    }
    cwd.join(ASSETS_DIR_NAME)
}

/// Assets directory for the running program.
pub fn default_assets_dir() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_assets_dir(exe_dir.as_deref(), &cwd)
}

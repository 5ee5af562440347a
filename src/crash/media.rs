//! Crash media discovery in the assets directory.

use crate::core::constants::{CRASH_MEDIA_STEM, VIDEO_EXTENSIONS};
use std::fs;
use std::path::{Path, PathBuf};

/// True if `path` has one of the supported video extensions (any case).
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Find the video to open on a crash.
///
/// Prefers `crash.<ext>` (checking extensions in [`VIDEO_EXTENSIONS`] order),
/// then the first regular file by name whose extension is a supported video
/// format. Returns `None` if the directory is missing or holds no video.
pub fn find_crash_media(assets_dir: &Path) -> Option<PathBuf> {
    for ext in VIDEO_EXTENSIONS {
        let preferred = assets_dir.join(format!("{}.{}", CRASH_MEDIA_STEM, ext));
        if preferred.is_file() {
            return Some(preferred);
        }
    }

    let entries = fs::read_dir(assets_dir).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_video_file(path))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

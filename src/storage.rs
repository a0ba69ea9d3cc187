// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for capture artifacts
//!
//! Artifacts follow the naming convention `photo-<epoch-millis>.png` and
//! `video-<epoch-millis>.webm` inside the artifact directory.

use std::path::PathBuf;
use tracing::{debug, info};

/// Get the artifact directory (~/Pictures/capture)
pub fn artifact_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join("Pictures")
        })
        .join("capture")
}

/// Ensure the artifact directory exists, creating it if necessary
pub fn ensure_artifact_directory() -> Result<PathBuf, std::io::Error> {
    let dir = artifact_directory();
    std::fs::create_dir_all(&dir)?;
    info!(path = %dir.display(), "Artifact directory ready");
    Ok(dir)
}

/// Current Unix time in milliseconds, used to stamp artifact names
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// File name for a photo artifact
pub fn photo_file_name(epoch_millis: i64) -> String {
    format!("photo-{}.png", epoch_millis)
}

/// File name for a video clip artifact
pub fn clip_file_name(epoch_millis: i64) -> String {
    format!("video-{}.webm", epoch_millis)
}

/// Write an assembled clip to the artifact directory.
///
/// Returns the path of the saved clip.
pub async fn save_clip(data: Vec<u8>, dir: PathBuf) -> Result<PathBuf, std::io::Error> {
    let path = dir.join(clip_file_name(now_millis()));

    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(&path, &data).await?;

    info!(path = %path.display(), bytes = data.len(), "Clip saved");
    Ok(path)
}

/// Load the newest image artifact as a widget handle for the gallery button.
///
/// Clips are skipped; only still photos produce a thumbnail.
pub async fn load_latest_thumbnail(dir: PathBuf) -> Option<cosmic::widget::image::Handle> {
    let mut entries = tokio::task::spawn_blocking(move || {
        let mut files = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if let Some(ext) = path.extension() {
                    let ext = ext.to_string_lossy();
                    if ext.eq_ignore_ascii_case("png") || ext.eq_ignore_ascii_case("jpg") {
                        files.push(entry);
                    }
                }
            }
        }
        files
    })
    .await
    .ok()?;

    if entries.is_empty() {
        return None;
    }

    // Newest first
    entries.sort_by_key(|e| {
        e.metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .map(std::cmp::Reverse)
    });

    let latest = entries.first()?.path();
    debug!(path = ?latest, "Loading latest thumbnail");

    let bytes = tokio::fs::read(&latest).await.ok()?;
    Some(cosmic::widget::image::Handle::from_bytes(bytes))
}

/// Open an artifact with the system handler
pub fn open_path(path: &std::path::Path) {
    if let Err(e) = open::that_detached(path) {
        tracing::error!(error = %e, path = %path.display(), "Failed to open artifact");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_names_follow_convention() {
        assert_eq!(photo_file_name(1700000000123), "photo-1700000000123.png");
    }

    #[test]
    fn clip_names_follow_convention() {
        assert_eq!(clip_file_name(1700000000123), "video-1700000000123.webm");
    }

    #[test]
    fn artifact_directory_ends_with_capture() {
        assert!(artifact_directory().ends_with("capture"));
    }
}

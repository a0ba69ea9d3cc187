// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture pipeline
//!
//! Encodes the current RGBA preview frame to PNG at the stream's native
//! dimensions and saves it under the artifact naming convention.

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use crate::storage;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Encode a frame to PNG bytes.
///
/// The artifact keeps the frame's dimensions; a 1280x720 stream produces
/// a 1280x720 image.
pub fn encode_png(frame: &CameraFrame) -> Result<Vec<u8>, PhotoError> {
    let image = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.to_vec())
        .ok_or_else(|| {
            PhotoError::EncodingFailed(format!(
                "frame data does not match {}x{}",
                frame.width, frame.height
            ))
        })?;

    let mut data = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut data), image::ImageFormat::Png)
        .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

    debug!(size = data.len(), "PNG encoding complete");
    Ok(data)
}

/// Capture the frame as a photo artifact.
///
/// Encoding runs on a blocking task; the saved path is returned.
pub async fn save_photo(frame: Arc<CameraFrame>, dir: PathBuf) -> Result<PathBuf, PhotoError> {
    let (width, height) = (frame.width, frame.height);

    let data = tokio::task::spawn_blocking(move || encode_png(&frame))
        .await
        .map_err(|e| PhotoError::EncodingFailed(format!("encode task failed: {}", e)))??;

    let path = dir.join(storage::photo_file_name(storage::now_millis()));
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(&path, &data).await?;

    info!(path = %path.display(), width, height, "Photo saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn frame(width: u32, height: u32) -> CameraFrame {
        CameraFrame {
            width,
            height,
            data: Arc::from(vec![0u8; (width * height * 4) as usize]),
            captured_at: Instant::now(),
        }
    }

    #[test]
    fn encoded_photo_keeps_frame_dimensions() {
        let encoded = encode_png(&frame(1280, 720)).unwrap();
        let decoded = image::load_from_memory(&encoded).unwrap();
        assert_eq!(decoded.width(), 1280);
        assert_eq!(decoded.height(), 720);
    }

    #[test]
    fn truncated_frame_data_is_an_encoding_error() {
        let bad = CameraFrame {
            width: 640,
            height: 480,
            data: Arc::from(vec![0u8; 16]),
            captured_at: Instant::now(),
        };
        assert!(matches!(
            encode_png(&bad),
            Err(PhotoError::EncodingFailed(_))
        ));
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Command line interface for headless capture
//!
//! Mirrors the GUI flows without a window: `list` prints detected
//! cameras, `photo` saves the first delivered frame, `video` records a
//! fixed-length clip assembled from recorder chunks.

use capture::backends::camera::{
    CameraFacing, CameraPipeline, StreamConstraints, enumerate_cameras, select_device,
};
use capture::pipelines::video::{ChunkBuffer, ClipRecorder, RecorderEvent};
use capture::{pipelines, storage};
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Seconds to wait for the first frame before giving up
const FIRST_FRAME_TIMEOUT_SECS: u64 = 10;

/// List available cameras with their facing classification
pub fn list_cameras() -> Result<(), Box<dyn std::error::Error>> {
    let cameras = enumerate_cameras();

    if cameras.is_empty() {
        println!("No cameras found");
        return Ok(());
    }

    println!("Available cameras:");
    for camera in &cameras {
        let facing = camera
            .facing
            .map(|f| f.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("  [{}] {}", facing, camera.name);
    }

    Ok(())
}

/// Capture a single photo from the camera for the given facing
pub fn take_photo(
    facing: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let facing: CameraFacing = facing.parse()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let cameras = enumerate_cameras();
        let device = select_device(&cameras, facing)
            .ok_or("no camera devices found")?
            .clone();

        println!("Using camera: {} ({})", device.name, facing);

        let (sender, mut receiver) = futures::channel::mpsc::channel(8);
        let pipeline = CameraPipeline::new(&device, &StreamConstraints::default(), sender)
            .map_err(|e| e.to_string())?;

        let frame = tokio::time::timeout(
            Duration::from_secs(FIRST_FRAME_TIMEOUT_SECS),
            receiver.next(),
        )
        .await
        .map_err(|_| "timed out waiting for a frame")?
        .ok_or("camera stream ended before delivering a frame")?;

        pipeline.stop();

        let dir = match &output {
            Some(path) => path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(storage::artifact_directory),
            None => storage::artifact_directory(),
        };

        let saved = pipelines::photo::save_photo(Arc::new(frame), dir).await?;

        // An explicit output path renames the stamped artifact
        let final_path = match output {
            Some(path) => {
                tokio::fs::rename(&saved, &path).await?;
                path
            }
            None => saved,
        };

        println!("Photo saved: {}", final_path.display());
        Ok(())
    })
}

/// Record a fixed-length clip from the camera for the given facing
pub fn record_video(
    facing: &str,
    duration_secs: u64,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let facing: CameraFacing = facing.parse()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let cameras = enumerate_cameras();
        let device = select_device(&cameras, facing)
            .ok_or("no camera devices found")?
            .clone();

        println!(
            "Recording {}s from camera: {} ({})",
            duration_secs, device.name, facing
        );

        let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
        let recorder = ClipRecorder::new(&device, &StreamConstraints::default(), events_tx)
            .map_err(|e| e.to_string())?;
        recorder.start().map_err(|e| e.to_string())?;

        tokio::time::sleep(Duration::from_secs(duration_secs)).await;

        tokio::task::spawn_blocking(move || recorder.stop())
            .await?
            .map_err(|e| e.to_string())?;

        // All chunks are queued by the time stop returns; drain in order
        let mut buffer = ChunkBuffer::new();
        while let Some(event) = events_rx.recv().await {
            match event {
                RecorderEvent::Chunk(chunk) => buffer.push(chunk),
                RecorderEvent::Finalized => break,
            }
        }

        if buffer.is_empty() {
            return Err("recorder produced no chunks".into());
        }

        let clip = buffer.assemble();
        let saved = storage::save_clip(clip, storage::artifact_directory()).await?;

        let final_path = match output {
            Some(path) => {
                tokio::fs::rename(&saved, &path).await?;
                path
            }
            None => saved,
        };

        println!("Clip saved: {}", final_path.display());
        Ok(())
    })
}

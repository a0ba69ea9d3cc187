// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles the shutter dispatch, photo capture, and the flash affordance.

use crate::app::state::{AppModel, ArtifactPreview, Message};
use crate::constants::capture;
use cosmic::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

impl AppModel {
    /// Create a delayed task that sends a message after the specified milliseconds
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    /// Shutter dispatch: still capture in photo modes, recording toggle in
    /// video modes.
    pub(crate) fn handle_shutter_pressed(&mut self) -> Task<cosmic::Action<Message>> {
        if self.mode.is_photo_kind() {
            self.take_picture()
        } else {
            self.toggle_recording()
        }
    }

    /// Capture the current frame as a photo artifact.
    fn take_picture(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(frame) = self.current_frame.clone() else {
            info!("No frame available to capture");
            return Task::none();
        };

        info!(
            width = frame.width,
            height = frame.height,
            "Capturing photo"
        );
        self.is_capturing = true;
        self.flash_active = true;

        let save_dir = crate::storage::artifact_directory();
        let save_task = Task::perform(
            async move {
                crate::pipelines::photo::save_photo(Arc::clone(&frame), save_dir)
                    .await
                    .map(|p| p.display().to_string())
                    .map_err(|e| e.to_string())
            },
            |result| cosmic::Action::App(Message::PhotoSaved(result)),
        );

        let flash_task = Self::delay_task(capture::FLASH_DURATION_MS, Message::FlashComplete);
        let animation_task =
            Self::delay_task(capture::CAPTURE_ANIMATION_MS, Message::ClearCaptureAnimation);

        Task::batch([save_task, flash_task, animation_task])
    }

    pub(crate) fn handle_flash_complete(&mut self) -> Task<cosmic::Action<Message>> {
        self.flash_active = false;
        Task::none()
    }

    pub(crate) fn handle_clear_capture_animation(&mut self) -> Task<cosmic::Action<Message>> {
        self.is_capturing = false;
        Task::none()
    }

    pub(crate) fn handle_photo_saved(
        &mut self,
        result: Result<String, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => {
                info!(path = %path, "Photo saved successfully");
                let path = PathBuf::from(path);
                // The photo replaces whatever artifact was showing
                self.artifact = ArtifactPreview::Photo {
                    handle: cosmic::widget::image::Handle::from_path(&path),
                    path,
                };
                return Task::done(cosmic::Action::App(Message::RefreshGalleryThumbnail));
            }
            Err(err) => {
                error!(error = %err, "Failed to save photo");
            }
        }
        Task::none()
    }
}

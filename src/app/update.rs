// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher; the handling code
//! lives in the `handlers` submodules organized by functional domain.

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Camera Control =====
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::CamerasInitialized(cameras) => self.handle_cameras_initialized(cameras),
            Message::CameraFrame(frame) => self.handle_camera_frame(frame),
            Message::CameraStreamFailed(error) => self.handle_camera_stream_failed(error),
            Message::ToggleMirrorPreview => self.handle_toggle_mirror_preview(),

            // ===== Capture Operations =====
            Message::ShutterPressed => self.handle_shutter_pressed(),
            Message::SetMode(mode) => self.handle_set_mode(mode),
            Message::FlashComplete => self.handle_flash_complete(),
            Message::ClearCaptureAnimation => self.handle_clear_capture_animation(),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),

            // ===== Recording =====
            Message::RecorderEvent(event) => self.handle_recorder_event(event),
            Message::RecordingFailed(error) => self.handle_recording_failed(error),
            Message::RecordingSaved(result) => self.handle_recording_saved(result),
            Message::RecordingTimerTick => self.handle_recording_timer_tick(),

            // ===== Gallery =====
            Message::OpenArtifact => self.handle_open_artifact(),
            Message::RefreshGalleryThumbnail => self.handle_refresh_gallery_thumbnail(),
            Message::GalleryThumbnailLoaded(handle) => {
                self.handle_gallery_thumbnail_loaded(handle)
            }

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),

            Message::Noop => Task::none(),
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Camera control handlers
//!
//! Handles facing switches, enumeration results, frame delivery, and
//! stream failures.

use crate::app::state::{AppModel, Message};
use crate::app::utils;
use crate::backends::camera::enumeration::select_device;
use crate::backends::camera::types::{CameraDevice, CameraFrame};
use cosmic::Task;
use std::sync::Arc;
use tracing::{error, info, warn};

impl AppModel {
    pub(crate) fn handle_switch_camera(&mut self) -> Task<cosmic::Action<Message>> {
        self.facing = self.facing.toggled();
        info!(facing = %self.facing, "Switching camera facing");

        // Invalidate the running subscription; the old pipeline is dropped
        // (releasing the device) before the new one starts
        self.camera_cancel_flag
            .store(true, std::sync::atomic::Ordering::Release);
        self.camera_cancel_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

        self.current_device = select_device(&self.available_cameras, self.facing).cloned();
        self.current_frame = None;
        self.preview_handle = None;

        if self.current_device.is_none() && self.cameras_initialized {
            error!(facing = %self.facing, "No camera device for facing");
        }

        // Remember the facing for the next launch
        self.config.last_facing = self.facing;
        self.write_config();

        Task::none()
    }

    pub(crate) fn handle_cameras_initialized(
        &mut self,
        cameras: Vec<CameraDevice>,
    ) -> Task<cosmic::Action<Message>> {
        info!(count = cameras.len(), "Cameras initialized asynchronously");

        self.available_cameras = cameras;
        self.cameras_initialized = true;
        self.current_device = select_device(&self.available_cameras, self.facing).cloned();

        if let Some(device) = &self.current_device {
            info!(device = %device.name, facing = %self.facing, "Selected camera");
        } else {
            error!("No camera devices found");
        }

        Task::none()
    }

    pub(crate) fn handle_camera_frame(
        &mut self,
        frame: Arc<CameraFrame>,
    ) -> Task<cosmic::Action<Message>> {
        let mirror = self.facing.is_front() && self.config.mirror_front_preview;

        let pixels = if mirror {
            utils::mirror_rgba(&frame.data, frame.width, frame.height)
        } else {
            frame.data.to_vec()
        };

        self.preview_handle = Some(cosmic::widget::image::Handle::from_rgba(
            frame.width,
            frame.height,
            pixels,
        ));
        self.current_frame = Some(frame);

        Task::none()
    }

    pub(crate) fn handle_camera_stream_failed(
        &mut self,
        error: String,
    ) -> Task<cosmic::Action<Message>> {
        // Operator-visible log only; the preview stays blank and there is
        // no automatic retry
        error!(error = %error, "Camera acquisition failed");
        self.current_frame = None;
        self.preview_handle = None;

        if self.recording.is_recording() {
            warn!("Camera lost while recording");
        }

        Task::none()
    }

    /// Rebuild the preview handle from the stored frame, e.g. after the
    /// mirror setting changed.
    pub(crate) fn refresh_preview_handle(&mut self) {
        if let Some(frame) = self.current_frame.clone() {
            let _ = self.handle_camera_frame(frame);
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Live camera preview widget
//!
//! Shows the latest frame, already mirrored for the front camera when the
//! preview handle was built. Before the first frame (or after an
//! acquisition failure) the preview stays blank with a status line.

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::widget;

impl AppModel {
    /// Build the camera preview widget
    pub fn build_camera_preview(&self) -> Element<'_, Message> {
        if let Some(handle) = &self.preview_handle {
            return widget::container(
                widget::image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
        }

        let status = if self.cameras_initialized && self.available_cameras.is_empty() {
            fl!("no-camera")
        } else {
            fl!("waiting-for-camera")
        };

        widget::container(widget::text(status).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}

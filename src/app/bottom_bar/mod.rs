// SPDX-License-Identifier: GPL-3.0-only

//! Bottom bar: mode switcher row above gallery, shutter, and camera switcher

mod camera_switcher;
mod gallery_button;
mod mode_switcher;

use crate::app::state::{AppModel, Message};
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Build the bottom bar
    ///
    /// The mode switcher row is hidden while recording; the controls row
    /// keeps the shutter centered between the gallery and switcher buttons.
    pub fn build_bottom_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut column = widget::column()
            .align_x(Alignment::Center)
            .spacing(spacing.space_xs)
            .padding([spacing.space_s, spacing.space_m]);

        if !self.recording.is_recording() {
            column = column.push(self.build_mode_switcher());
        }

        let controls = widget::row()
            .align_y(Alignment::Center)
            .push(
                widget::container(self.build_gallery_button())
                    .width(Length::Fill)
                    .align_x(Alignment::Start),
            )
            .push(self.build_capture_button())
            .push(
                widget::container(self.build_camera_switcher())
                    .width(Length::Fill)
                    .align_x(Alignment::End),
            )
            .width(Length::Fill);

        column.push(controls).width(Length::Fill).into()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Mode switcher widget implementation (slo-mo/video/photo/portrait row)

use crate::app::state::{AppModel, CaptureMode, Message};
use cosmic::Element;
use cosmic::widget;

impl AppModel {
    /// Build the mode switcher widget
    ///
    /// One text button per capture mode; the active mode is highlighted
    /// with the suggested button style. Presses always dispatch SetMode;
    /// the handler ignores them while recording.
    pub fn build_mode_switcher(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut row = widget::row().spacing(spacing.space_xs);

        for mode in CaptureMode::ALL {
            let button = widget::button::text(mode.label())
                .on_press(Message::SetMode(mode))
                .class(if self.mode == mode {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Text
                });

            row = row.push(button);
        }

        row.into()
    }
}

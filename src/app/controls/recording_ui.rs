// SPDX-License-Identifier: GPL-3.0-only

//! Recording indicator and timer widget

use crate::app::state::AppModel;
use crate::app::utils::format_timer;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the recording indicator and timer widget
    ///
    /// Shows a red dot and elapsed `MM:SS` time while recording is active.
    /// Returns None when not recording.
    pub fn build_recording_indicator<'a>(&self) -> Option<Element<'a, crate::app::state::Message>> {
        if !self.recording.is_recording() {
            return None;
        }

        let spacing = cosmic::theme::spacing();

        let red_dot = widget::container(widget::Space::new(
            Length::Fixed(ui::RECORDING_DOT_SIZE),
            Length::Fixed(ui::RECORDING_DOT_SIZE),
        ))
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0))),
            border: cosmic::iced::Border {
                radius: [ui::RECORDING_DOT_SIZE / 2.0; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let timer_text = format_timer(self.recording.elapsed_secs());

        let row = widget::row()
            .align_y(Alignment::Center)
            .spacing(spacing.space_xxs)
            .push(red_dot)
            .push(widget::text(timer_text).size(14));

        Some(row.into())
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Shutter button widget implementation

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the shutter button widget
    ///
    /// The button changes appearance based on mode and state:
    /// - Photo/portrait modes: white circle (gray press-down while capturing)
    /// - Video/slo-mo modes: red circle (darker and shrunken while recording)
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let shutter_color = if self.mode.is_video_kind() {
            if self.recording.is_recording() {
                Color::from_rgb(0.6, 0.05, 0.05) // Darker red while recording
            } else {
                Color::from_rgb(0.9, 0.1, 0.1) // Red for video modes
            }
        } else if self.is_capturing {
            Color::from_rgb(0.7, 0.7, 0.7) // Gray while capturing
        } else {
            Color::WHITE // White for photo modes
        };

        // Recording shrinks the button and keeps it small; a photo press
        // dips it briefly
        let (inner_size, outer_size) = if self.recording.is_recording() {
            (
                ui::SHUTTER_BUTTON_INNER * 0.70,
                ui::SHUTTER_BUTTON_OUTER * 0.70,
            )
        } else if self.is_capturing {
            (
                ui::SHUTTER_BUTTON_INNER * 0.85,
                ui::SHUTTER_BUTTON_OUTER * 0.85,
            )
        } else {
            (ui::SHUTTER_BUTTON_INNER, ui::SHUTTER_BUTTON_OUTER)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(shutter_color)),
            border: Border {
                radius: [ui::SHUTTER_BUTTON_RADIUS * (inner_size / ui::SHUTTER_BUTTON_INNER); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let button = widget::button::custom(button_inner)
            .on_press(Message::ShutterPressed)
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        // Fixed-size wrapper prevents layout shift when the button shrinks
        widget::container(button)
            .width(Length::Fixed(ui::SHUTTER_BUTTON_OUTER))
            .height(Length::Fixed(ui::SHUTTER_BUTTON_OUTER))
            .center_x(ui::SHUTTER_BUTTON_OUTER)
            .center_y(ui::SHUTTER_BUTTON_OUTER)
            .into()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Composes the main UI from modularized components:
//! - Live camera preview (camera_preview module)
//! - Full-screen flash overlay during photo capture
//! - Top overlay with the camera-side indicator and recording timer
//! - Bottom bar with mode switcher, gallery, shutter, and camera switcher

use crate::app::state::{AppModel, Message};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, Length};
use cosmic::widget;

/// Shared translucent backdrop for controls drawn over the preview
pub(crate) fn overlay_container_style(
    _theme: &cosmic::Theme,
) -> widget::container::Style {
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))),
        border: Border {
            radius: [12.0; 4].into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let camera_preview = self.build_camera_preview();

        // Flash mode: only the preview under a white overlay, no controls
        if self.flash_active {
            let flash_overlay = widget::container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| widget::container::Style {
                    background: Some(Background::Color(Color::WHITE)),
                    ..Default::default()
                });

            return widget::container(
                cosmic::iced::widget::stack![camera_preview, flash_overlay]
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
        }

        let controls = widget::column()
            .push(self.build_top_overlay())
            .push(widget::vertical_space())
            .push(self.build_bottom_bar())
            .width(Length::Fill)
            .height(Length::Fill);

        widget::container(
            cosmic::iced::widget::stack![camera_preview, controls]
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            ..Default::default()
        })
        .into()
    }

    /// Top overlay: camera-side indicator on the left, recording
    /// indicator and timer centered.
    fn build_top_overlay(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let indicator = widget::container(
            widget::text(self.facing.indicator_label()).size(14),
        )
        .padding([spacing.space_xxs, spacing.space_xs])
        .style(overlay_container_style);

        let mut row = widget::row()
            .align_y(Alignment::Center)
            .padding(spacing.space_xs)
            .push(indicator)
            .push(widget::horizontal_space());

        if let Some(recording_indicator) = self.build_recording_indicator() {
            row = row
                .push(
                    widget::container(recording_indicator)
                        .padding([spacing.space_xxs, spacing.space_xs])
                        .style(overlay_container_style),
                )
                .push(widget::horizontal_space());
        }

        row.width(Length::Fill).into()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Camera switcher button widget implementation

use crate::app::state::{AppModel, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

/// Camera switch icon SVG (camera with circular arrows)
const CAMERA_SWITCH_ICON: &[u8] =
    include_bytes!("../../../resources/button_icons/camera-switch.svg");

impl AppModel {
    /// Build the camera switcher button widget
    ///
    /// Shows a flip button if multiple cameras are available, otherwise an
    /// invisible placeholder to keep the shutter centered.
    pub fn build_camera_switcher(&self) -> Element<'_, Message> {
        if self.available_cameras.len() < 2 {
            return widget::Space::new(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH), Length::Shrink)
                .into();
        }

        let switch_icon = widget::icon::from_svg_bytes(CAMERA_SWITCH_ICON).symbolic(true);

        let icon_content = widget::container(widget::icon(switch_icon).size(32))
            .width(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH))
            .height(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH))
            .center(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH));

        let button = widget::button::custom(icon_content)
            .padding(0)
            .class(cosmic::theme::Button::Text)
            .on_press(Message::SwitchCamera);

        widget::container(button)
            .style(overlay_container_style)
            .into()
    }
}

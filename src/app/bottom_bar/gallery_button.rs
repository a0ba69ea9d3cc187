// SPDX-License-Identifier: GPL-3.0-only

//! Gallery button widget: latest artifact thumbnail, opens the artifact

use crate::app::state::{AppModel, ArtifactPreview, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::widget;

impl AppModel {
    /// Build the gallery button widget
    ///
    /// Shows the freshest available preview: the in-session artifact
    /// first, then the newest saved image, then a folder icon. Pressing
    /// opens the artifact (or the artifact directory).
    pub fn build_gallery_button(&self) -> Element<'_, Message> {
        let size = Length::Fixed(ui::GALLERY_THUMBNAIL_SIZE);

        let thumbnail: Element<'_, Message> = match &self.artifact {
            ArtifactPreview::Photo { handle, .. } => widget::image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(size)
                .height(size)
                .into(),
            // Clips have no decoded thumbnail; a video icon stands in
            ArtifactPreview::Clip { .. } => widget::container(
                widget::icon::from_name("video-x-generic-symbolic").size(28).icon(),
            )
            .width(size)
            .height(size)
            .center(size)
            .into(),
            ArtifactPreview::None => match &self.gallery_thumbnail {
                Some(handle) => widget::image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(size)
                    .height(size)
                    .into(),
                None => widget::container(
                    widget::icon::from_name("folder-pictures-symbolic").size(28).icon(),
                )
                .width(size)
                .height(size)
                .center(size)
                .into(),
            },
        };

        let button = widget::button::custom(thumbnail)
            .padding(0)
            .class(cosmic::theme::Button::Text)
            .on_press(Message::OpenArtifact);

        widget::container(button)
            .style(overlay_container_style)
            .into()
    }
}

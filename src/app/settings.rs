// SPDX-License-Identifier: GPL-3.0-only

//! Settings context drawer

use crate::app::state::{AppModel, ContextPage, Message};
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::widget;

impl AppModel {
    /// Build the settings drawer content
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let mirror_toggle = widget::settings::item::builder(fl!("mirror-front-preview"))
            .description(fl!("mirror-front-preview-description"))
            .toggler(self.config.mirror_front_preview, |_| {
                Message::ToggleMirrorPreview
            });

        let content = widget::settings::view_column(vec![
            widget::settings::section().add(mirror_toggle).into(),
        ]);

        context_drawer::context_drawer(
            content,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! UI navigation, mode selection, gallery, and settings handlers

use crate::app::state::{AppModel, CaptureMode, ContextPage, Message};
use crate::config::Config;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{debug, error, info};

impl AppModel {
    pub(crate) fn handle_launch_url(&mut self, url: String) -> Task<cosmic::Action<Message>> {
        if let Err(e) = open::that_detached(&url) {
            error!(error = %e, url = %url, "Failed to open URL");
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    /// Change the capture mode; ignored while a recording is in progress.
    pub(crate) fn handle_set_mode(&mut self, mode: CaptureMode) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            debug!(?mode, "Mode switch ignored while recording");
            return Task::none();
        }

        if self.mode != mode {
            info!(?mode, "Capture mode changed");
            self.mode = mode;
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_mirror_preview(&mut self) -> Task<cosmic::Action<Message>> {
        self.config.mirror_front_preview = !self.config.mirror_front_preview;
        info!(
            mirror = self.config.mirror_front_preview,
            "Mirror preview toggled"
        );
        self.write_config();
        self.refresh_preview_handle();
        Task::none()
    }

    /// Open the latest artifact, falling back to the artifact directory.
    pub(crate) fn handle_open_artifact(&mut self) -> Task<cosmic::Action<Message>> {
        match self.artifact.path() {
            Some(path) => crate::storage::open_path(path),
            None => crate::storage::open_path(&crate::storage::artifact_directory()),
        }
        Task::none()
    }

    pub(crate) fn handle_refresh_gallery_thumbnail(&mut self) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async { crate::storage::load_latest_thumbnail(crate::storage::artifact_directory()).await },
            |handle| cosmic::Action::App(Message::GalleryThumbnailLoaded(handle)),
        )
    }

    pub(crate) fn handle_gallery_thumbnail_loaded(
        &mut self,
        handle: Option<cosmic::widget::image::Handle>,
    ) -> Task<cosmic::Action<Message>> {
        self.gallery_thumbnail = handle;
        Task::none()
    }

    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        let mirror_changed = config.mirror_front_preview != self.config.mirror_front_preview;
        self.config = config;
        if mirror_changed {
            self.refresh_preview_handle();
        }
        Task::none()
    }

    /// Persist the current configuration through the config handler.
    pub(crate) fn write_config(&self) {
        if let Some(handler) = self.config_handler.as_ref() {
            if let Err(err) = self.config.write_entry(handler) {
                error!(?err, "Failed to save configuration");
            }
        }
    }
}

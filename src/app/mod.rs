// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for Capture
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, CaptureMode, ...)
//! - `camera_preview`: Live preview widget
//! - `controls`: Shutter button and recording UI
//! - `bottom_bar`: Gallery, mode switcher, camera switcher
//! - `settings`: Settings drawer UI
//! - `handlers`: Message handling by functional domain
//! - `view`: Main view rendering
//! - `update`: Message dispatch

mod bottom_bar;
mod camera_preview;
mod controls;
mod handlers;
mod settings;
mod state;
mod update;
mod utils;
mod view;

use crate::backends::camera::types::StreamConstraints;
use crate::config::Config;
use crate::constants::pipeline as tuning;
use crate::errors::CameraError;
use crate::fl;
use crate::pipelines::video::RecorderEvent;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ArtifactPreview, CaptureMode, ContextPage, Message, RecordingState};
use std::sync::Arc;
use tracing::{error, info};

const REPOSITORY: &str = "https://github.com/cosmic-utils/capture";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.cosmic-utils.capture.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic-utils.capture";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Ensure the artifact directory exists
        if let Err(e) = crate::storage::ensure_artifact_directory() {
            error!(error = %e, "Failed to create artifact directory");
        }

        // Initialize GStreamer early (required before any GStreamer calls)
        if let Err(e) = gstreamer::init() {
            error!(error = %e, "Failed to initialize GStreamer");
        }

        let facing = config.last_facing;

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            facing,
            mode: CaptureMode::default(),
            recording: RecordingState::default(),
            chunk_buffer: crate::pipelines::video::ChunkBuffer::new(),
            recorder_events: None,
            recording_generation: 0,
            available_cameras: Vec::new(),
            cameras_initialized: false,
            current_device: None,
            camera_cancel_flag: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            current_frame: None,
            preview_handle: None,
            is_capturing: false,
            flash_active: false,
            artifact: ArtifactPreview::default(),
            gallery_thumbnail: None,
        };

        // Enumerate cameras asynchronously (can be slow with several devices)
        let init_task = Task::perform(
            async move {
                info!("Enumerating cameras asynchronously");
                tokio::task::spawn_blocking(crate::backends::camera::enumerate_cameras)
                    .await
                    .unwrap_or_default()
            },
            |cameras| cosmic::Action::App(Message::CamerasInitialized(cameras)),
        );

        // Load initial gallery thumbnail
        let load_thumbnail_task = Task::perform(
            async {
                crate::storage::load_latest_thumbnail(crate::storage::artifact_directory()).await
            },
            |handle| cosmic::Action::App(Message::GalleryThumbnailLoaded(handle)),
        );

        (app, Task::batch([init_task, load_thumbnail_task]))
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        use cosmic::iced::futures::{SinkExt, StreamExt};

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Camera stream subscription, keyed on facing so a facing switch
        // tears the old pipeline down (releasing the device) and builds a
        // new one
        let device = self.current_device.clone();
        let cancel_flag = Arc::clone(&self.camera_cancel_flag);
        let cameras_initialized = self.cameras_initialized;

        let camera_sub = Subscription::run_with_id(
            ("camera", self.facing, cameras_initialized),
            cosmic::iced::stream::channel(
                tuning::FRAME_CHANNEL_CAPACITY,
                move |mut output| async move {
                    // Restarts once enumeration lands
                    if !cameras_initialized {
                        return;
                    }

                    let Some(device) = device else {
                        let _ = output
                            .send(Message::CameraStreamFailed(
                                CameraError::NoCameraFound.to_string(),
                            ))
                            .await;
                        return;
                    };

                    info!(device = %device.name, "Camera subscription started");

                    let constraints = StreamConstraints::default();
                    let (sender, mut receiver) =
                        cosmic::iced::futures::channel::mpsc::channel(
                            tuning::FRAME_CHANNEL_CAPACITY,
                        );

                    let pipeline = match crate::backends::camera::CameraPipeline::new(
                        &device,
                        &constraints,
                        sender,
                    ) {
                        Ok(pipeline) => pipeline,
                        Err(e) => {
                            // No retry; the preview stays blank until the
                            // user acts (facing switch, relaunch)
                            let _ = output.send(Message::CameraStreamFailed(e.to_string())).await;
                            return;
                        }
                    };

                    loop {
                        if cancel_flag.load(std::sync::atomic::Ordering::Acquire) {
                            info!("Cancel flag set - camera subscription exiting");
                            break;
                        }
                        if output.is_closed() {
                            break;
                        }

                        // Short timeout so cancellation is checked between frames
                        match tokio::time::timeout(
                            tokio::time::Duration::from_millis(16),
                            receiver.next(),
                        )
                        .await
                        {
                            Ok(Some(frame)) => {
                                // Dropping frames is fine for a live preview
                                if let Err(e) =
                                    output.try_send(Message::CameraFrame(Arc::new(frame)))
                                {
                                    if e.is_disconnected() {
                                        break;
                                    }
                                }
                            }
                            Ok(None) => {
                                info!("Camera frame stream ended");
                                break;
                            }
                            Err(_) => continue,
                        }
                    }

                    // Dropping the pipeline stops the camera
                    drop(pipeline);
                },
            ),
        );

        // Recorder event subscription, alive from recording start until the
        // finalize signal has been forwarded
        let recorder_sub = match &self.recorder_events {
            Some(receiver) => {
                let receiver = Arc::clone(receiver);
                Subscription::run_with_id(
                    ("recorder", self.recording_generation),
                    cosmic::iced::stream::channel(16, move |mut output| async move {
                        let mut receiver = receiver.lock().await;
                        while let Some(event) = receiver.recv().await {
                            let finalized = matches!(event, RecorderEvent::Finalized);
                            if output.send(Message::RecorderEvent(event)).await.is_err() {
                                break;
                            }
                            if finalized {
                                break;
                            }
                        }
                    }),
                )
            }
            None => Subscription::none(),
        };

        Subscription::batch([config_sub, camera_sub, recorder_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

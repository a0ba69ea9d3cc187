// SPDX-License-Identifier: GPL-3.0-only

//! Recording handlers
//!
//! Drives the recording state machine, the chunk buffer, the timer tick
//! chain, and clip assembly on finalize.

use crate::app::state::{AppModel, ArtifactPreview, Message, RecordingState};
use crate::backends::camera::types::StreamConstraints;
use crate::constants::capture;
use crate::pipelines::video::{ClipRecorder, RecorderEvent};
use cosmic::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

impl AppModel {
    /// Start or stop recording depending on the current state.
    pub(crate) fn toggle_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            self.stop_recording()
        } else {
            self.start_recording()
        }
    }

    /// Begin a recording: clear the chunk buffer, construct the recorder
    /// asynchronously, and start the timer tick chain.
    ///
    /// No-op when already recording or when no stream exists.
    fn start_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            debug!("Already recording, ignoring start");
            return Task::none();
        }

        let Some(device) = self.current_device.clone() else {
            warn!("No stream available, not starting recording");
            return Task::none();
        };

        // A selected device without frames means acquisition failed
        if self.current_frame.is_none() {
            warn!("Stream has not delivered frames, not starting recording");
            return Task::none();
        }

        // Fresh buffer for this recording's chunks
        self.chunk_buffer.clear();

        let constraints = StreamConstraints {
            framerate: self.mode.framerate_hint(),
            ..StreamConstraints::default()
        };

        let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();

        self.recording = RecordingState::start(stop_tx);
        self.recorder_events = Some(Arc::new(tokio::sync::Mutex::new(events_rx)));
        self.recording_generation += 1;

        info!(
            device = %device.name,
            constraints = %constraints,
            "Starting recording"
        );

        let recording_task = Task::perform(
            async move {
                let recorder = match ClipRecorder::new(&device, &constraints, events_tx) {
                    Ok(recorder) => recorder,
                    Err(e) => return Err(e.to_string()),
                };

                if let Err(e) = recorder.start() {
                    return Err(e.to_string());
                }

                // Wait for the stop signal; a dropped sender also stops
                let _ = stop_rx.await;

                tokio::task::spawn_blocking(move || recorder.stop().map_err(|e| e.to_string()))
                    .await
                    .unwrap_or_else(|e| Err(format!("finalize task failed: {}", e)))
            },
            |result| {
                cosmic::Action::App(match result {
                    Ok(()) => Message::Noop,
                    Err(error) => Message::RecordingFailed(error),
                })
            },
        );

        let timer_task = Self::delay_task(capture::TIMER_TICK_MS, Message::RecordingTimerTick);

        Task::batch([recording_task, timer_task])
    }

    /// Signal the recorder to finalize and return the UI to idle.
    ///
    /// No-op when not recording. The clip is assembled when the finalize
    /// event arrives.
    fn stop_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.recording.is_recording() {
            debug!("Not recording, ignoring stop");
            return Task::none();
        }

        if let Some(sender) = self.recording.take_stop_sender() {
            info!(
                elapsed = self.recording.elapsed_secs(),
                chunks = self.chunk_buffer.len(),
                "Sending stop signal to recorder"
            );
            let _ = sender.send(());
        }

        self.recording = RecordingState::Idle;
        Task::none()
    }

    /// Ordered recorder events: chunks accumulate, finalize assembles.
    pub(crate) fn handle_recorder_event(
        &mut self,
        event: RecorderEvent,
    ) -> Task<cosmic::Action<Message>> {
        match event {
            RecorderEvent::Chunk(chunk) => {
                self.chunk_buffer.push(chunk);
                Task::none()
            }
            RecorderEvent::Finalized => {
                // All chunks are in; the channel is done
                self.recorder_events = None;

                if self.chunk_buffer.is_empty() {
                    warn!("Recorder finalized without producing chunks");
                    return Task::none();
                }

                let clip = self.chunk_buffer.assemble();
                info!(bytes = clip.len(), "Assembling clip from chunks");

                let save_dir = crate::storage::artifact_directory();
                Task::perform(
                    async move {
                        crate::storage::save_clip(clip, save_dir)
                            .await
                            .map(|p| p.display().to_string())
                            .map_err(|e| e.to_string())
                    },
                    |result| cosmic::Action::App(Message::RecordingSaved(result)),
                )
            }
        }
    }

    /// Recorder construction or finalize failed: log it and force the
    /// state machine back to idle with the UI restored.
    pub(crate) fn handle_recording_failed(
        &mut self,
        error: String,
    ) -> Task<cosmic::Action<Message>> {
        error!(error = %error, "Recording failed");

        let _ = self.recording.take_stop_sender();
        self.recording = RecordingState::Idle;
        self.recorder_events = None;
        self.chunk_buffer.clear();

        Task::none()
    }

    pub(crate) fn handle_recording_saved(
        &mut self,
        result: Result<String, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => {
                info!(path = %path, "Recording saved successfully");
                // The clip replaces whatever artifact was showing
                self.artifact = ArtifactPreview::Clip {
                    path: PathBuf::from(path),
                };
                return Task::done(cosmic::Action::App(Message::RefreshGalleryThumbnail));
            }
            Err(err) => {
                error!(error = %err, "Failed to save recording");
            }
        }
        Task::none()
    }

    /// One-second timer tick; re-arms only while recording, so stopping
    /// implicitly cancels the chain.
    pub(crate) fn handle_recording_timer_tick(&mut self) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            self.recording.tick();
            return Self::delay_task(capture::TIMER_TICK_MS, Message::RecordingTimerTick);
        }
        Task::none()
    }
}

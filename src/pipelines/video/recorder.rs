// SPDX-License-Identifier: GPL-3.0-only

//! Chunked WebM clip recorder
//!
//! Builds `pipewiresrc -> videoconvert -> videoscale -> capsfilter ->
//! vp8enc -> webmmux (streamable) -> appsink`. Every muxed buffer becomes
//! a [`RecorderEvent::Chunk`]; the appsink EOS callback emits
//! [`RecorderEvent::Finalized`] once all chunks have been delivered.
//!
//! The recorder runs its own pipeline against the same PipeWire node as
//! the preview, so the live preview continues while recording.

use super::{RecorderEvent, RecorderEventSender};
use crate::backends::camera::types::{CameraDevice, StreamConstraints};
use crate::constants::pipeline as tuning;
use crate::errors::RecordingError;
use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use tracing::{debug, info, warn};

/// Clip recorder over a camera device
#[derive(Debug)]
pub struct ClipRecorder {
    pipeline: gst::Pipeline,
}

impl ClipRecorder {
    /// Construct the recording pipeline.
    ///
    /// Fails with [`RecordingError::ConstructionFailed`] when an element
    /// (typically the VP8 encoder or WebM muxer) is unavailable.
    pub fn new(
        device: &CameraDevice,
        constraints: &StreamConstraints,
        events: RecorderEventSender,
    ) -> Result<Self, RecordingError> {
        info!(
            device = %device.name,
            constraints = %constraints,
            "Creating clip recorder"
        );

        gst::init().map_err(|e| RecordingError::ConstructionFailed(e.to_string()))?;

        let make = |factory: &str| {
            gst::ElementFactory::make(factory)
                .build()
                .map_err(|e| RecordingError::ConstructionFailed(format!("{}: {}", factory, e)))
        };

        let source = make("pipewiresrc")?;
        if !device.path.is_empty() {
            source.set_property("target-object", &device.path);
        }

        let videoconvert = make("videoconvert")?;
        let videoscale = make("videoscale")?;

        let mut caps = gst::Caps::builder("video/x-raw")
            .field("width", constraints.width as i32)
            .field("height", constraints.height as i32);
        if let Some(fps) = constraints.framerate {
            caps = caps.field("framerate", gst::Fraction::new(fps as i32, 1));
        }

        let capsfilter = gst::ElementFactory::make("capsfilter")
            .property("caps", &caps.build())
            .build()
            .map_err(|e| RecordingError::ConstructionFailed(format!("capsfilter: {}", e)))?;

        // Realtime deadline keeps the encoder from falling behind the stream
        let encoder = make("vp8enc")?;
        encoder.set_property("deadline", 1i64);

        let muxer = make("webmmux")?;
        // Streamable output is what makes incremental chunks valid
        muxer.set_property("streamable", true);

        let appsink = make("appsink")?
            .dynamic_cast::<AppSink>()
            .map_err(|_| RecordingError::ConstructionFailed("appsink cast failed".to_string()))?;
        appsink.set_property("sync", false);

        let chunk_events = events.clone();
        appsink.set_callbacks(
            gstreamer_app::AppSinkCallbacks::builder()
                .new_sample(move |appsink| {
                    let sample = appsink.pull_sample().map_err(|_| gst::FlowError::Eos)?;
                    let buffer = sample.buffer().ok_or(gst::FlowError::Error)?;
                    let map = buffer.map_readable().map_err(|_| gst::FlowError::Error)?;

                    if !map.as_slice().is_empty()
                        && chunk_events
                            .send(RecorderEvent::Chunk(map.as_slice().to_vec()))
                            .is_err()
                    {
                        // Receiver gone; nothing left to record for
                        return Err(gst::FlowError::Eos);
                    }

                    Ok(gst::FlowSuccess::Ok)
                })
                .eos(move |_appsink| {
                    debug!("Recorder reached EOS, signaling finalize");
                    let _ = events.send(RecorderEvent::Finalized);
                })
                .build(),
        );

        let pipeline = gst::Pipeline::new();
        pipeline
            .add_many([
                &source,
                &videoconvert,
                &videoscale,
                &capsfilter,
                &encoder,
                &muxer,
                appsink.upcast_ref::<gst::Element>(),
            ])
            .map_err(|e| RecordingError::ConstructionFailed(e.to_string()))?;

        gst::Element::link_many([
            &source,
            &videoconvert,
            &videoscale,
            &capsfilter,
            &encoder,
            &muxer,
            appsink.upcast_ref::<gst::Element>(),
        ])
        .map_err(|e| RecordingError::ConstructionFailed(format!("link failed: {}", e)))?;

        Ok(Self { pipeline })
    }

    /// Start recording.
    pub fn start(&self) -> Result<(), RecordingError> {
        self.pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

        let (result, state, _pending) = self.pipeline.state(gst::ClockTime::from_seconds(
            tuning::STATE_CHANGE_TIMEOUT_SECS,
        ));
        debug!(result = ?result, state = ?state, "Recorder pipeline state");
        if result.is_err() {
            return Err(RecordingError::StartFailed(format!(
                "pipeline stuck in {:?}",
                state
            )));
        }

        info!("Recording started");
        Ok(())
    }

    /// Stop recording: send EOS, wait for the muxer to flush its tail
    /// chunks, then tear the pipeline down. The finalize event reaches the
    /// controller through the event channel once the flush completes.
    pub fn stop(self) -> Result<(), RecordingError> {
        info!("Stopping recorder, sending EOS");
        self.pipeline.send_event(gst::event::Eos::new());

        if let Some(bus) = self.pipeline.bus() {
            match bus.timed_pop_filtered(
                Some(gst::ClockTime::from_seconds(tuning::FINALIZE_TIMEOUT_SECS)),
                &[gst::MessageType::Eos, gst::MessageType::Error],
            ) {
                Some(msg) => match msg.view() {
                    gst::MessageView::Eos(_) => debug!("Recorder EOS confirmed on bus"),
                    gst::MessageView::Error(err) => {
                        let _ = self.pipeline.set_state(gst::State::Null);
                        return Err(RecordingError::FinalizeFailed(err.error().to_string()));
                    }
                    _ => {}
                },
                None => warn!("Timed out waiting for recorder EOS"),
            }
        }

        self.pipeline
            .set_state(gst::State::Null)
            .map_err(|e| RecordingError::FinalizeFailed(e.to_string()))?;

        info!("Recorder stopped");
        Ok(())
    }
}

impl Drop for ClipRecorder {
    fn drop(&mut self) {
        let _ = self.pipeline.set_state(gst::State::Null);
    }
}

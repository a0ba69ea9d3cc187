// SPDX-License-Identifier: GPL-3.0-only

//! Live camera stream pipeline
//!
//! Builds `pipewiresrc -> videoconvert -> videoscale -> capsfilter -> appsink`
//! and pushes tightly-packed RGBA frames through a bounded channel.
//! Dropping the pipeline releases the camera.

use super::types::{CameraDevice, CameraFrame, FrameSender, StreamConstraints};
use crate::constants::pipeline as tuning;
use crate::errors::CameraError;
use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Camera stream pipeline
///
/// Owns the GStreamer pipeline for the live preview stream. There is at
/// most one instance alive at a time; a facing switch drops the old
/// instance before the new one reaches PLAYING.
pub struct CameraPipeline {
    pipeline: gst::Pipeline,
    appsink: AppSink,
}

impl CameraPipeline {
    /// Create and start a camera pipeline for the given device.
    pub fn new(
        device: &CameraDevice,
        constraints: &StreamConstraints,
        frame_sender: FrameSender,
    ) -> Result<Self, CameraError> {
        info!(
            device = %device.name,
            constraints = %constraints,
            "Creating camera pipeline"
        );

        gst::init().map_err(|e| CameraError::AcquisitionFailed(e.to_string()))?;

        let source = gst::ElementFactory::make("pipewiresrc")
            .build()
            .map_err(|e| CameraError::AcquisitionFailed(format!("pipewiresrc: {}", e)))?;

        if !device.path.is_empty() {
            source.set_property("target-object", &device.path);
        }

        let videoconvert = gst::ElementFactory::make("videoconvert")
            .build()
            .map_err(|e| CameraError::AcquisitionFailed(format!("videoconvert: {}", e)))?;

        let videoscale = gst::ElementFactory::make("videoscale")
            .build()
            .map_err(|e| CameraError::AcquisitionFailed(format!("videoscale: {}", e)))?;

        // RGBA output at the requested size; videoscale makes the size
        // request always satisfiable regardless of the native format
        let mut caps = gst::Caps::builder("video/x-raw")
            .field("format", "RGBA")
            .field("width", constraints.width as i32)
            .field("height", constraints.height as i32);
        if let Some(fps) = constraints.framerate {
            caps = caps.field("framerate", gst::Fraction::new(fps as i32, 1));
        }

        let capsfilter = gst::ElementFactory::make("capsfilter")
            .property("caps", &caps.build())
            .build()
            .map_err(|e| CameraError::AcquisitionFailed(format!("capsfilter: {}", e)))?;

        let appsink = gst::ElementFactory::make("appsink")
            .build()
            .map_err(|e| CameraError::AcquisitionFailed(format!("appsink: {}", e)))?
            .dynamic_cast::<AppSink>()
            .map_err(|_| CameraError::AcquisitionFailed("appsink cast failed".to_string()))?;

        appsink.set_property("sync", false);
        appsink.set_property("max-buffers", tuning::MAX_BUFFERS);
        appsink.set_property("drop", true);
        appsink.set_property("enable-last-sample", false);

        appsink.set_callbacks(
            gstreamer_app::AppSinkCallbacks::builder()
                .new_sample(move |appsink| {
                    let frame_start = Instant::now();

                    let sample = appsink
                        .pull_sample()
                        .map_err(|_| gst::FlowError::Eos)?;
                    let buffer = sample.buffer().ok_or(gst::FlowError::Error)?;
                    let caps = sample.caps().ok_or(gst::FlowError::Error)?;
                    let video_info =
                        VideoInfo::from_caps(caps).map_err(|_| gst::FlowError::Error)?;
                    let map = buffer
                        .map_readable()
                        .map_err(|_| gst::FlowError::Error)?;

                    let frame = CameraFrame {
                        width: video_info.width(),
                        height: video_info.height(),
                        data: pack_rgba(&map, &video_info),
                        captured_at: frame_start,
                    };

                    // Dropping frames is fine for a live preview; the
                    // channel bound keeps a busy UI from ballooning
                    let mut sender = frame_sender.clone();
                    if let Err(e) = sender.try_send(frame) {
                        if e.is_disconnected() {
                            return Err(gst::FlowError::Eos);
                        }
                        debug!("Frame dropped (channel full)");
                    }

                    Ok(gst::FlowSuccess::Ok)
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
                appsink.upcast_ref::<gst::Element>(),
            ])
            .map_err(|e| CameraError::AcquisitionFailed(e.to_string()))?;

        gst::Element::link_many([
            &source,
            &videoconvert,
            &videoscale,
            &capsfilter,
            appsink.upcast_ref::<gst::Element>(),
        ])
        .map_err(|e| CameraError::AcquisitionFailed(format!("link failed: {}", e)))?;

        pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| CameraError::AcquisitionFailed(format!("failed to start: {}", e)))?;

        let (result, state, _pending) = pipeline.state(gst::ClockTime::from_seconds(
            tuning::STATE_CHANGE_TIMEOUT_SECS,
        ));
        debug!(result = ?result, state = ?state, "Camera pipeline state");
        if state != gst::State::Playing {
            warn!("Camera pipeline did not reach PLAYING");
        }

        info!("Camera pipeline started");
        Ok(Self { pipeline, appsink })
    }

    /// Stop the pipeline and release the camera.
    pub fn stop(self) {
        // Drop does the work; this makes release explicit at call sites
        drop(self);
    }
}

impl Drop for CameraPipeline {
    fn drop(&mut self) {
        // Clear callbacks first so no sample lands mid-teardown
        self.appsink
            .set_callbacks(gstreamer_app::AppSinkCallbacks::builder().build());
        let _ = self.pipeline.set_state(gst::State::Null);
        info!("Camera pipeline stopped, device released");
    }
}

/// Copy mapped buffer bytes into a tightly-packed RGBA slice,
/// removing any row padding the pipeline introduced.
fn pack_rgba(map: &gst::BufferMap<'_, gst::buffer::Readable>, info: &VideoInfo) -> Arc<[u8]> {
    let width = info.width() as usize;
    let height = info.height() as usize;
    let stride = info.stride()[0] as usize;
    let row_len = width * 4;

    let bytes = map.as_slice();
    if stride == row_len {
        return Arc::from(bytes);
    }

    let mut tight = Vec::with_capacity(row_len * height);
    for row in 0..height {
        let start = row * stride;
        tight.extend_from_slice(&bytes[start..start + row_len]);
    }
    Arc::from(tight)
}

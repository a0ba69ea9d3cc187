// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend: device discovery and stream acquisition
//!
//! The backend is the application's media-source capability. It discovers
//! camera devices, classifies them by facing, and acquires a live RGBA
//! frame stream for a facing preference through a GStreamer pipeline.

pub mod enumeration;
pub mod pipeline;
pub mod types;

pub use enumeration::{enumerate_cameras, select_device};
pub use pipeline::CameraPipeline;
pub use types::{CameraDevice, CameraFacing, CameraFrame, FrameSender, StreamConstraints};

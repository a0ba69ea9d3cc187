// SPDX-License-Identifier: GPL-3.0-only

//! Capture pipelines
//!
//! - `photo`: still capture from the current preview frame
//! - `video`: clip recording via chunked WebM encoding

pub mod photo;
pub mod video;

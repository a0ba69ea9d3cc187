// SPDX-License-Identifier: GPL-3.0-only

//! Camera enumeration and facing classification
//!
//! Discovery goes through the GStreamer device monitor, which surfaces
//! PipeWire and V4L2 video sources uniformly.

use super::types::{CameraDevice, CameraFacing};
use gstreamer as gst;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

/// Enumerate available camera devices.
///
/// Returns an empty list when no video source is present; facing is
/// classified from device names with a positional fallback so that two
/// devices always cover both facings.
pub fn enumerate_cameras() -> Vec<CameraDevice> {
    if let Err(e) = gst::init() {
        warn!(error = %e, "GStreamer init failed, no cameras available");
        return Vec::new();
    }

    let monitor = gst::DeviceMonitor::new();
    monitor.add_filter(Some("Video/Source"), None);

    if let Err(e) = monitor.start() {
        warn!(error = %e, "Device monitor failed to start");
        return Vec::new();
    }

    let mut cameras: Vec<CameraDevice> = monitor
        .devices()
        .iter()
        .map(|device| {
            let name = device.display_name().to_string();
            let path = device_path(device).unwrap_or_default();
            let facing = CameraDevice::classify_facing(&name);

            debug!(name = %name, path = %path, facing = ?facing, "Discovered camera");
            CameraDevice { name, path, facing }
        })
        .collect();

    monitor.stop();

    assign_positional_facings(&mut cameras);

    info!(count = cameras.len(), "Camera enumeration complete");
    cameras
}

/// Extract a stable backend path for the device, usable as a pipewiresrc
/// target. Empty lets the source auto-select.
fn device_path(device: &gst::Device) -> Option<String> {
    let props = device.properties()?;

    for key in ["object.serial", "object.path", "device.path", "node.name"] {
        if let Ok(value) = props.get::<String>(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        // PipeWire serials arrive as integers
        if let Ok(value) = props.get::<u64>(key) {
            return Some(value.to_string());
        }
    }

    None
}

/// Give unclassified devices a facing in discovery order (back first),
/// so facing selection always resolves on multi-camera machines.
pub fn assign_positional_facings(cameras: &mut [CameraDevice]) {
    let mut next = CameraFacing::Back;

    for camera in cameras.iter_mut() {
        if camera.facing.is_none() {
            camera.facing = Some(next);
        }
        // Alternate from whatever the previous device ended up as
        if let Some(facing) = camera.facing {
            next = facing.toggled();
        }
    }
}

/// Pick the device for a facing preference.
///
/// A classified match wins; otherwise the first device serves as a
/// best-effort fallback (the platform decides, as with an unconstrained
/// facing hint).
pub fn select_device(cameras: &[CameraDevice], facing: CameraFacing) -> Option<&CameraDevice> {
    cameras
        .iter()
        .find(|camera| camera.facing == Some(facing))
        .or_else(|| cameras.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, facing: Option<CameraFacing>) -> CameraDevice {
        CameraDevice {
            name: name.to_string(),
            path: String::new(),
            facing,
        }
    }

    #[test]
    fn positional_fallback_covers_both_facings() {
        let mut cameras = vec![device("cam0", None), device("cam1", None)];
        assign_positional_facings(&mut cameras);
        assert_eq!(cameras[0].facing, Some(CameraFacing::Back));
        assert_eq!(cameras[1].facing, Some(CameraFacing::Front));
    }

    #[test]
    fn positional_fallback_respects_classified_devices() {
        let mut cameras = vec![
            device("Integrated Camera", Some(CameraFacing::Front)),
            device("cam1", None),
        ];
        assign_positional_facings(&mut cameras);
        assert_eq!(cameras[1].facing, Some(CameraFacing::Back));
    }

    #[test]
    fn select_prefers_classified_match() {
        let cameras = vec![
            device("rear", Some(CameraFacing::Back)),
            device("front", Some(CameraFacing::Front)),
        ];
        let selected = select_device(&cameras, CameraFacing::Front).unwrap();
        assert_eq!(selected.name, "front");
    }

    #[test]
    fn select_falls_back_to_first_device() {
        let cameras = vec![device("only", Some(CameraFacing::Back))];
        let selected = select_device(&cameras, CameraFacing::Front).unwrap();
        assert_eq!(selected.name, "only");
    }

    #[test]
    fn select_on_empty_list_is_none() {
        assert!(select_device(&[], CameraFacing::Back).is_none());
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the camera backend

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Which physical camera supplies the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    /// World-facing camera (default, matches the source's `environment` facing)
    #[default]
    Back,
    /// User-facing camera
    Front,
}

impl CameraFacing {
    /// The opposite facing
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }

    /// Label shown in the camera-side indicator
    pub fn indicator_label(self) -> &'static str {
        match self {
            CameraFacing::Back => "BACK",
            CameraFacing::Front => "FRONT",
        }
    }

    pub fn is_front(self) -> bool {
        matches!(self, CameraFacing::Front)
    }
}

impl std::fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraFacing::Back => write!(f, "back"),
            CameraFacing::Front => write!(f, "front"),
        }
    }
}

impl std::str::FromStr for CameraFacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "back" | "rear" | "environment" => Ok(CameraFacing::Back),
            "front" | "user" => Ok(CameraFacing::Front),
            other => Err(format!("unknown facing: {other}")),
        }
    }
}

/// A camera device discovered through the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human-readable device name
    pub name: String,
    /// Backend object path or serial; empty lets the backend auto-select
    pub path: String,
    /// Facing classification, if the device name allowed one
    pub facing: Option<CameraFacing>,
}

impl CameraDevice {
    /// Classify facing from the device name.
    ///
    /// Desktop stacks expose no facing property, so this relies on naming
    /// conventions seen in UVC and libcamera device descriptions.
    pub fn classify_facing(name: &str) -> Option<CameraFacing> {
        let name = name.to_ascii_lowercase();
        if ["front", "user", "integrated", "selfie"]
            .iter()
            .any(|hint| name.contains(hint))
        {
            Some(CameraFacing::Front)
        } else if ["back", "rear", "world", "environment"]
            .iter()
            .any(|hint| name.contains(hint))
        {
            Some(CameraFacing::Back)
        } else {
            None
        }
    }
}

/// Stream constraints passed to the backend when acquiring a camera
///
/// Width and height are ideal values; the pipeline scales to honor them,
/// so acquisition never fails on an unsupported native resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    pub width: u32,
    pub height: u32,
    /// Framerate hint; `None` lets the camera pick
    pub framerate: Option<u32>,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            width: crate::constants::capture::IDEAL_WIDTH,
            height: crate::constants::capture::IDEAL_HEIGHT,
            framerate: None,
        }
    }
}

impl std::fmt::Display for StreamConstraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.framerate {
            Some(fps) => write!(f, "{}x{}@{}", self.width, self.height, fps),
            None => write!(f, "{}x{}", self.width, self.height),
        }
    }
}

/// A single tightly-packed RGBA frame from the camera
#[derive(Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, `width * height * 4` bytes, no row padding
    pub data: Arc<[u8]>,
    pub captured_at: Instant,
}

impl std::fmt::Debug for CameraFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CameraFrame({}x{}, {} bytes)",
            self.width,
            self.height,
            self.data.len()
        )
    }
}

/// Channel used to push frames from the pipeline thread to the UI
pub type FrameSender = futures::channel::mpsc::Sender<CameraFrame>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_toggle_round_trips() {
        assert_eq!(CameraFacing::Back.toggled(), CameraFacing::Front);
        assert_eq!(CameraFacing::Front.toggled(), CameraFacing::Back);
        assert_eq!(CameraFacing::Back.toggled().toggled(), CameraFacing::Back);
    }

    #[test]
    fn indicator_labels() {
        assert_eq!(CameraFacing::Back.indicator_label(), "BACK");
        assert_eq!(CameraFacing::Front.indicator_label(), "FRONT");
    }

    #[test]
    fn default_facing_is_back() {
        assert_eq!(CameraFacing::default(), CameraFacing::Back);
    }

    #[test]
    fn classify_facing_from_names() {
        assert_eq!(
            CameraDevice::classify_facing("Integrated Camera: Integrated C"),
            Some(CameraFacing::Front)
        );
        assert_eq!(
            CameraDevice::classify_facing("OV5640 rear camera"),
            Some(CameraFacing::Back)
        );
        assert_eq!(CameraDevice::classify_facing("USB2.0 HD UVC WebCam"), None);
    }

    #[test]
    fn default_constraints_are_full_hd() {
        let constraints = StreamConstraints::default();
        assert_eq!(constraints.width, 1920);
        assert_eq!(constraints.height, 1080);
        assert_eq!(constraints.framerate, None);
    }
}

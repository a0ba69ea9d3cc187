// SPDX-License-Identifier: GPL-3.0-only

use crate::backends::camera::types::CameraFacing;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Camera facing restored on the next launch
    pub last_facing: CameraFacing,
    /// Mirror the live preview horizontally when the front camera is active.
    /// Captured photos and clips are never mirrored.
    pub mirror_front_preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_facing: CameraFacing::default(),
            mirror_front_preview: true,
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use capture::CameraFacing;
use capture::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.last_facing,
        CameraFacing::Back,
        "Back camera should be the default facing"
    );
    assert_eq!(
        config.mirror_front_preview, true,
        "Front preview mirroring should be enabled by default"
    );
}

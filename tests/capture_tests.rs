// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for capture state machines and artifact conventions

use capture::CameraFacing;
use capture::CaptureMode;
use capture::app::RecordingState;
use capture::pipelines::video::ChunkBuffer;
use capture::storage;

#[test]
fn test_every_mode_dispatches_exactly_one_way() {
    assert_eq!(CaptureMode::ALL.len(), 4);

    for mode in CaptureMode::ALL {
        assert!(
            mode.is_photo_kind() ^ mode.is_video_kind(),
            "Mode {:?} must be either photo-kind or video-kind",
            mode
        );
        assert!(!mode.label().is_empty(), "Mode {:?} has no label", mode);
    }
}

#[test]
fn test_photo_is_the_default_mode() {
    assert_eq!(CaptureMode::default(), CaptureMode::Photo);
    assert!(CaptureMode::default().is_photo_kind());
}

#[test]
fn test_recording_state_guards() {
    // Idle: stop is a no-op, there is nothing to signal
    let mut idle = RecordingState::Idle;
    assert!(!idle.is_recording());
    assert!(idle.take_stop_sender().is_none());
    assert!(!idle.stop().is_recording());

    // Recording: timer counts ticks from zero
    let (tx, _rx) = tokio::sync::oneshot::channel();
    let mut recording = RecordingState::start(tx);
    assert!(recording.is_recording());
    assert_eq!(recording.elapsed_secs(), 0);

    for _ in 0..65 {
        recording.tick();
    }
    assert_eq!(
        recording.elapsed_secs(),
        65,
        "65 ticks should read as 01:05 in the timer"
    );

    // Stop resets to idle and hands back the previous state
    let previous = recording.stop();
    assert!(previous.is_recording());
    assert!(!recording.is_recording());
    assert_eq!(recording.elapsed_secs(), 0);
}

#[test]
fn test_chunk_buffer_lifecycle() {
    let mut buffer = ChunkBuffer::new();

    // A recording's chunks assemble in arrival order
    buffer.push(vec![0x1a, 0x45]);
    buffer.push(vec![0xdf, 0xa3]);
    assert_eq!(buffer.assemble(), vec![0x1a, 0x45, 0xdf, 0xa3]);

    // The next recording starts from a clean buffer
    buffer.push(vec![1]);
    buffer.clear();
    assert!(buffer.is_empty());
}

#[test]
fn test_artifact_naming_conventions() {
    assert_eq!(storage::photo_file_name(42), "photo-42.png");
    assert_eq!(storage::clip_file_name(42), "video-42.webm");

    let millis = storage::now_millis();
    assert!(millis > 0, "Epoch millis should be positive");
}

#[test]
fn test_facing_round_trip_through_strings() {
    for facing in [CameraFacing::Back, CameraFacing::Front] {
        let parsed: CameraFacing = facing.to_string().parse().unwrap();
        assert_eq!(parsed, facing);
    }

    // Web-style facing names parse too
    assert_eq!(
        "environment".parse::<CameraFacing>().unwrap(),
        CameraFacing::Back
    );
    assert_eq!("user".parse::<CameraFacing>().unwrap(), CameraFacing::Front);
    assert!("sideways".parse::<CameraFacing>().is_err());
}

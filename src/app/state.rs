// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::types::{CameraDevice, CameraFacing, CameraFrame};
use crate::config::Config;
use crate::pipelines::video::{ChunkBuffer, RecorderEvent, RecorderEventReceiver};
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use std::path::PathBuf;
use std::sync::Arc;

/// Capture modes selectable in the mode switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureMode {
    #[default]
    Photo,
    Portrait,
    Video,
    SloMo,
}

impl CaptureMode {
    /// All modes in switcher order
    pub const ALL: [CaptureMode; 4] = [
        CaptureMode::SloMo,
        CaptureMode::Video,
        CaptureMode::Photo,
        CaptureMode::Portrait,
    ];

    /// Label shown in the mode switcher
    pub fn label(self) -> &'static str {
        match self {
            CaptureMode::Photo => "PHOTO",
            CaptureMode::Portrait => "PORTRAIT",
            CaptureMode::Video => "VIDEO",
            CaptureMode::SloMo => "SLO-MO",
        }
    }

    /// Shutter press takes a still picture in these modes
    pub fn is_photo_kind(self) -> bool {
        matches!(self, CaptureMode::Photo | CaptureMode::Portrait)
    }

    /// Shutter press toggles recording in these modes
    pub fn is_video_kind(self) -> bool {
        matches!(self, CaptureMode::Video | CaptureMode::SloMo)
    }

    /// Framerate hint passed to the recorder; slo-mo asks for a high rate
    pub fn framerate_hint(self) -> Option<u32> {
        match self {
            CaptureMode::SloMo => Some(crate::constants::capture::SLO_MO_FRAMERATE),
            _ => None,
        }
    }
}

/// Recording state machine
///
/// Two states: either recording or not. The elapsed counter advances one
/// step per timer tick, so the display tracks ticks rather than wall time.
#[derive(Debug, Default)]
pub enum RecordingState {
    /// Not recording
    #[default]
    Idle,
    /// Actively recording
    Recording {
        /// Whole seconds shown in the timer, starting at zero
        elapsed_secs: u64,
        /// Channel to signal the recorder to finalize
        stop_sender: Option<tokio::sync::oneshot::Sender<()>>,
    },
}

impl RecordingState {
    /// Start recording with a fresh timer
    pub fn start(stop_sender: tokio::sync::oneshot::Sender<()>) -> Self {
        RecordingState::Recording {
            elapsed_secs: 0,
            stop_sender: Some(stop_sender),
        }
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Seconds shown in the recording timer
    pub fn elapsed_secs(&self) -> u64 {
        match self {
            RecordingState::Idle => 0,
            RecordingState::Recording { elapsed_secs, .. } => *elapsed_secs,
        }
    }

    /// Advance the timer by one second; no-op when idle
    pub fn tick(&mut self) {
        if let RecordingState::Recording { elapsed_secs, .. } = self {
            *elapsed_secs += 1;
        }
    }

    /// Take the stop sender (consumes it)
    pub fn take_stop_sender(&mut self) -> Option<tokio::sync::oneshot::Sender<()>> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { stop_sender, .. } => stop_sender.take(),
        }
    }

    /// Stop recording (returns the previous state, leaves Idle behind)
    pub fn stop(&mut self) -> Self {
        std::mem::replace(self, RecordingState::Idle)
    }
}

/// The latest capture artifact shown in the gallery button
///
/// At most one artifact is presented at a time; a new photo replaces a
/// clip and vice versa.
#[derive(Debug, Clone, Default)]
pub enum ArtifactPreview {
    /// Nothing captured yet this session
    #[default]
    None,
    /// A still photo
    Photo {
        handle: cosmic::widget::image::Handle,
        path: PathBuf,
    },
    /// An assembled video clip
    Clip { path: PathBuf },
}

impl ArtifactPreview {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ArtifactPreview::None => None,
            ArtifactPreview::Photo { path, .. } | ArtifactPreview::Clip { path } => {
                Some(path.as_path())
            }
        }
    }
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,

    /// Which camera side is active (drives device selection and preview mirror)
    pub facing: CameraFacing,
    /// Current capture mode
    pub mode: CaptureMode,
    /// Recording state (idle or recording with timer)
    pub recording: RecordingState,
    /// Ordered chunks of the in-progress recording
    pub chunk_buffer: ChunkBuffer,
    /// Recorder event channel, present from recording start until finalize
    pub recorder_events: Option<Arc<tokio::sync::Mutex<RecorderEventReceiver>>>,
    /// Bumped per recording so the event subscription restarts cleanly
    pub recording_generation: u64,

    /// Available camera devices
    pub available_cameras: Vec<CameraDevice>,
    /// Enumeration finished (an empty list then means "no camera")
    pub cameras_initialized: bool,
    /// Device currently selected for the active facing
    pub current_device: Option<CameraDevice>,
    /// Flag to cancel the camera subscription when facing changes
    pub camera_cancel_flag: Arc<std::sync::atomic::AtomicBool>,
    /// Most recent camera frame (capture source)
    pub current_frame: Option<Arc<CameraFrame>>,
    /// Display handle for the current frame, mirrored when front-facing
    pub preview_handle: Option<cosmic::widget::image::Handle>,

    /// Whether a photo capture animation is in progress
    pub is_capturing: bool,
    /// Full-screen flash overlay is showing
    pub flash_active: bool,
    /// Latest capture artifact (photo or clip)
    pub artifact: ArtifactPreview,
    /// Latest saved image, shown on the gallery button
    pub gallery_thumbnail: Option<cosmic::widget::image::Handle>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Camera Control =====
    /// Toggle camera facing and restart the camera
    SwitchCamera,
    /// Cameras enumerated asynchronously during startup
    CamerasInitialized(Vec<CameraDevice>),
    /// New camera frame received from the pipeline
    CameraFrame(Arc<CameraFrame>),
    /// Camera acquisition failed (permission, device, pipeline)
    CameraStreamFailed(String),
    /// Toggle mirroring of the front camera preview
    ToggleMirrorPreview,

    // ===== Capture Operations =====
    /// Shutter pressed: photo modes capture, video modes toggle recording
    ShutterPressed,
    /// Switch between capture modes
    SetMode(CaptureMode),
    /// Flash overlay duration elapsed
    FlashComplete,
    /// Shutter press animation finished
    ClearCaptureAnimation,
    /// Photo was saved (or failed) with the artifact path
    PhotoSaved(Result<String, String>),

    // ===== Recording =====
    /// Recorder delivered a chunk or the finalize signal
    RecorderEvent(RecorderEvent),
    /// Recorder construction/start/finalize failed
    RecordingFailed(String),
    /// Assembled clip was saved (or failed) with the artifact path
    RecordingSaved(Result<String, String>),
    /// Advance the recording timer by one second
    RecordingTimerTick,

    // ===== Gallery =====
    /// Open the latest artifact (or the artifact directory)
    OpenArtifact,
    /// Refresh the gallery thumbnail
    RefreshGalleryThumbnail,
    /// Gallery thumbnail loaded
    GalleryThumbnailLoaded(Option<cosmic::widget::image::Handle>),

    // ===== Settings =====
    /// Configuration updated externally
    UpdateConfig(Config),

    /// No-op message for async tasks that don't need a response
    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutter_dispatch_kinds() {
        assert!(CaptureMode::Photo.is_photo_kind());
        assert!(CaptureMode::Portrait.is_photo_kind());
        assert!(CaptureMode::Video.is_video_kind());
        assert!(CaptureMode::SloMo.is_video_kind());
        for mode in CaptureMode::ALL {
            assert!(mode.is_photo_kind() != mode.is_video_kind());
        }
    }

    #[test]
    fn slo_mo_requests_high_framerate() {
        assert_eq!(CaptureMode::SloMo.framerate_hint(), Some(60));
        assert_eq!(CaptureMode::Video.framerate_hint(), None);
        assert_eq!(CaptureMode::Photo.framerate_hint(), None);
    }

    #[test]
    fn recording_timer_counts_ticks() {
        let (tx, _rx) = tokio::sync::oneshot::channel();
        let mut recording = RecordingState::start(tx);
        assert_eq!(recording.elapsed_secs(), 0);

        for _ in 0..65 {
            recording.tick();
        }
        assert_eq!(recording.elapsed_secs(), 65);
    }

    #[test]
    fn tick_is_a_no_op_when_idle() {
        let mut idle = RecordingState::Idle;
        idle.tick();
        assert_eq!(idle.elapsed_secs(), 0);
        assert!(!idle.is_recording());
    }

    #[test]
    fn stop_consumes_the_recording_state() {
        let (tx, _rx) = tokio::sync::oneshot::channel();
        let mut recording = RecordingState::start(tx);
        assert!(recording.is_recording());
        assert!(recording.take_stop_sender().is_some());
        assert!(recording.take_stop_sender().is_none());

        let previous = recording.stop();
        assert!(previous.is_recording());
        assert!(!recording.is_recording());
    }
}

pub mod recording_modal;

pub use recording_modal::RecordingModal;

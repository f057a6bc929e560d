pub mod config;
pub mod document;
pub mod gateway;
pub mod modal;

pub use config::{FieldBindings, FormSetting};
pub use document::InMemoryDocument;
pub use gateway::PlaceholderGateway;
pub use modal::RecordingModal;

pub mod registry;

pub use registry::{RecordingWarnings, StaticRegistry, constraints};

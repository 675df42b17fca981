//! Observer adapters.
//!
//! - `TracingObserver` - logs session events through `tracing`
//! - `RecordingObserver` - keeps every event in memory (testing, replays)

pub mod recording_observer;
pub mod tracing_observer;

pub use recording_observer::{RecordedEvent, RecordingObserver};
pub use tracing_observer::TracingObserver;

//! Login Form
//!
//! The engine that owns the field values and publishes derived state.

pub mod engine;
pub mod observer;
pub mod state;

pub use engine::{FormEngine, DEFAULT_FAILURE_MESSAGE};
pub use observer::Subscription;
pub use state::{EngineOutput, InputState, Phase, SubmissionResult};

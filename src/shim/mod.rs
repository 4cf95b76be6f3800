//! Presentation Shim
//!
//! Stand-in for the login screen: replays input events through the engine
//! and renders its outputs.

pub mod render;
pub mod runner;

pub use render::{render, OutputFormat, Record};
pub use runner::{run, run_events, serve, Recorder, RunSummary};

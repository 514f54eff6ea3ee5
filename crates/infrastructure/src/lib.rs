//! Infrastructure layer - Configuration and tagset delivery

pub mod config;
pub mod sinks;

pub use config::{OutputConfig, OutputFormat, RunnerConfig};
pub use sinks::{BinarySink, JsonSink, MemorySink, SinkFactory};

pub mod binary_sink;
pub mod json_sink;
pub mod memory_sink;

pub use binary_sink::{BinarySink, read_tagsets};
pub use json_sink::JsonSink;
pub use memory_sink::MemorySink;

use anyhow::{Result, anyhow};
use domain::TagsetSink;

use crate::config::{OutputConfig, OutputFormat};

pub struct SinkFactory;

impl SinkFactory {
    /// Build the sink described by `config`; `None` means deliver nothing.
    pub fn create(config: &OutputConfig) -> Result<Option<Box<dyn TagsetSink>>> {
        match (config.format, config.path.as_deref()) {
            (OutputFormat::None, _) => Ok(None),
            (OutputFormat::Json, Some(path)) => Ok(Some(Box::new(JsonSink::create(path)?))),
            (OutputFormat::Json, None) => Ok(Some(Box::new(JsonSink::stdout()))),
            (OutputFormat::Binary, Some(path)) => Ok(Some(Box::new(BinarySink::create(path)?))),
            (OutputFormat::Binary, None) => {
                Err(anyhow!("Binary output requires an output path"))
            }
        }
    }
}

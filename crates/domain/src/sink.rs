use thiserror::Error;

use crate::tag::Tagset;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Encoding failed: {0}")]
    Encoding(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Destination for the tagsets produced by a script run.
///
/// Implementations live in the infrastructure layer.
pub trait TagsetSink {
    /// Deliver a batch of tagsets in order
    fn write_all(&mut self, tagsets: &[Tagset]) -> Result<(), SinkError>;
}

use std::sync::{Arc, Mutex};

use domain::{SinkError, Tagset, TagsetSink};

/// Keeps delivered tagsets in a shared buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    pub written: Arc<Mutex<Vec<Tagset>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Tagset> {
        self.written
            .lock()
            .map(|written| written.clone())
            .unwrap_or_default()
    }
}

impl TagsetSink for MemorySink {
    fn write_all(&mut self, tagsets: &[Tagset]) -> Result<(), SinkError> {
        let mut written = self
            .written
            .lock()
            .map_err(|_| SinkError::WriteFailed("memory sink lock poisoned".to_string()))?;
        written.extend_from_slice(tagsets);
        Ok(())
    }
}

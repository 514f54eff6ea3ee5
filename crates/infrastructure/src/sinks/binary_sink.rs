use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytes::Buf;
use domain::{DomainError, SinkError, Tagset, TagsetSink};
use tracing::{debug, error, info};

/// Writes tagsets back to back in their byte encoding.
///
/// The encoding is self-delimiting, so a dump is read back with
/// [`read_tagsets`].
pub struct BinarySink<W: Write> {
    writer: W,
}

impl<W: Write> BinarySink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl BinarySink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        info!("Writing binary tagsets to {:?}", path);
        let file = File::create(path).map_err(|e| {
            error!("Failed to create output file {:?}: {}", path, e);
            SinkError::WriteFailed(e.to_string())
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TagsetSink for BinarySink<W> {
    fn write_all(&mut self, tagsets: &[Tagset]) -> Result<(), SinkError> {
        for tagset in tagsets {
            let bytes = tagset
                .to_bytes()
                .map_err(|e| SinkError::Encoding(e.to_string()))?;
            self.writer
                .write_all(&bytes)
                .map_err(|e| SinkError::WriteFailed(e.to_string()))?;
        }
        self.writer
            .flush()
            .map_err(|e| SinkError::WriteFailed(e.to_string()))?;
        debug!(count = tagsets.len(), "Binary tagsets written");
        Ok(())
    }
}

/// Decode every tagset of a binary dump.
pub fn read_tagsets(data: &[u8]) -> Result<Vec<Tagset>, DomainError> {
    let mut buf = data;
    let mut tagsets = Vec::new();
    while buf.has_remaining() {
        tagsets.push(Tagset::read_from(&mut buf)?);
    }
    Ok(tagsets)
}

use std::fs::File;
use std::io::{BufWriter, Stdout, Write};
use std::path::Path;

use domain::{SinkError, Tagset, TagsetSink};
use tracing::{error, info};

/// Writes tagsets as a pretty JSON array of `{ "<aid>": "<hex>" }` objects.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        info!("Writing JSON tagsets to {:?}", path);
        let file = File::create(path).map_err(|e| {
            error!("Failed to create output file {:?}: {}", path, e);
            SinkError::WriteFailed(e.to_string())
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl JsonSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TagsetSink for JsonSink<W> {
    fn write_all(&mut self, tagsets: &[Tagset]) -> Result<(), SinkError> {
        serde_json::to_writer_pretty(&mut self.writer, tagsets)
            .map_err(|e| SinkError::Encoding(e.to_string()))?;
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .map_err(|e| SinkError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Tag;
    use domain::tag::aid;

    #[test]
    fn test_writes_json_array() {
        let mut ts = Tagset::new();
        ts.put(aid::NAME, Tag::from_string("a"));

        let mut sink = JsonSink::new(Vec::new());
        sink.write_all(&[ts.clone(), Tagset::new()]).unwrap();

        let out = sink.into_inner();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json, serde_json::json!([{ "1": "61" }, {}]));
    }

    #[test]
    fn test_empty_batch() {
        let mut sink = JsonSink::new(Vec::new());
        sink.write_all(&[]).unwrap();
        assert_eq!(sink.into_inner(), b"[]\n");
    }
}

//! JSONL sink for aggregate rows - inspection/debug backend

use super::aggregate::AggregateRow;
use super::writer_backend::{SinkBackend, SinkError};
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct JsonlSink {
    writer: BufWriter<std::fs::File>,
}

impl JsonlSink {
    pub fn new(path: PathBuf) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        log::info!("📝 Writing sentiment aggregates to: {}", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    fn write_json(&mut self, row: &AggregateRow) -> Result<(), SinkError> {
        let json = serde_json::to_string(row)?;
        writeln!(self.writer, "{}", json).map_err(SinkError::Io)?;
        // One flush per line: concurrent partition writers append to the
        // same file, and a full line per write keeps their output whole
        self.writer.flush().map_err(SinkError::Io)?;
        Ok(())
    }
}

impl Drop for JsonlSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

#[async_trait]
impl SinkBackend for JsonlSink {
    async fn write_row(&mut self, row: &AggregateRow) -> Result<(), SinkError> {
        self.write_json(row)
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(SinkError::Io)
    }

    fn backend_type(&self) -> &'static str {
        "JSONL"
    }
}

//! Unified sink interface for aggregate rows
//!
//! Routes writes to either the JSONL or SQLite backend based on
//! configuration.

use super::config::BackendType;
use super::jsonl_writer::JsonlSink;
use super::sqlite_writer::SqliteSink;
use super::writer_backend::{SinkBackend, SinkError};
use std::path::PathBuf;

/// Unified sink that routes to the configured backend.
pub enum SinkWriter {
    Jsonl(JsonlSink),
    Sqlite(SqliteSink),
}

impl SinkWriter {
    /// Open a sink of the configured backend type.
    ///
    /// Each output partition opens its own `SinkWriter` (one
    /// connection per partition).
    pub fn new(backend: BackendType, path: PathBuf) -> Result<Self, SinkError> {
        match backend {
            BackendType::Jsonl => Ok(SinkWriter::Jsonl(JsonlSink::new(path)?)),
            BackendType::Sqlite => Ok(SinkWriter::Sqlite(SqliteSink::new(path)?)),
        }
    }

    pub async fn write_row(
        &mut self,
        row: &super::aggregate::AggregateRow,
    ) -> Result<(), SinkError> {
        match self {
            SinkWriter::Jsonl(w) => w.write_row(row).await,
            SinkWriter::Sqlite(w) => w.write_row(row).await,
        }
    }

    pub async fn flush(&mut self) -> Result<(), SinkError> {
        match self {
            SinkWriter::Jsonl(w) => w.flush().await,
            SinkWriter::Sqlite(w) => w.flush().await,
        }
    }

    pub fn backend_type(&self) -> &'static str {
        match self {
            SinkWriter::Jsonl(_) => "JSONL",
            SinkWriter::Sqlite(_) => "SQLite",
        }
    }
}

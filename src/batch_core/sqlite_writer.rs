use super::aggregate::AggregateRow;
use super::writer_backend::{SinkBackend, SinkError};
use crate::sqlite_pragma::apply_optimized_pragmas;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite sink for sentiment aggregates.
///
/// One connection per sink instance (the job opens one instance per
/// output partition). The insert is an upsert keyed on
/// `(ticker, time)`, so replaying a partition rewrites identical rows
/// instead of duplicating them.
pub struct SqliteSink {
    conn: Connection,
    batch: Vec<AggregateRow>,
    batch_size: usize,
}

impl SqliteSink {
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, SinkError> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SinkError::Io(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!(
                            "Failed to create database directory {}: {}",
                            parent.display(),
                            e
                        ),
                    ))
                })?;
            }
        }

        let conn = Connection::open(db_path)?;

        apply_optimized_pragmas(&conn).map_err(|e| SinkError::Database(e.to_string()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS tweet_sentiment (
                ticker TEXT NOT NULL,
                time TEXT NOT NULL,
                n_tweets INTEGER NOT NULL,
                sentiment REAL NOT NULL,
                PRIMARY KEY (ticker, time)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_sentiment_time ON tweet_sentiment(time)",
            [],
        )?;

        log::info!("✅ SQLite sentiment sink initialized with WAL mode");

        Ok(Self {
            conn,
            batch: Vec::with_capacity(100),
            batch_size: 100,
        })
    }

    fn flush_batch(&mut self) -> Result<(), SinkError> {
        if self.batch.is_empty() {
            return Ok(());
        }

        let tx = self.conn.transaction()?;

        for row in &self.batch {
            tx.execute(
                "INSERT INTO tweet_sentiment (ticker, time, n_tweets, sentiment)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (ticker, time) DO UPDATE SET
                     n_tweets = excluded.n_tweets,
                     sentiment = excluded.sentiment",
                params![row.ticker, row.time, row.n_tweets as i64, row.sentiment],
            )?;
        }

        tx.commit()?;

        log::debug!("✅ Flushed {} aggregate rows to SQLite", self.batch.len());
        self.batch.clear();

        Ok(())
    }
}

#[async_trait]
impl SinkBackend for SqliteSink {
    async fn write_row(&mut self, row: &AggregateRow) -> Result<(), SinkError> {
        self.batch.push(row.clone());

        if self.batch.len() >= self.batch_size {
            self.flush_batch()?;
        }

        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        self.flush_batch()
    }

    fn backend_type(&self) -> &'static str {
        "SQLite"
    }
}

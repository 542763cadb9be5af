//! Batch job orchestration
//!
//! ```text
//! Lexicon files ──▶ Lexicon::load (once, fatal on error)
//!                        │ Arc broadcast
//! Input lines ──▶ worker tasks: TweetParser ──▶ partial SentimentAggregator
//!                        │ merge (associative/commutative)
//!                 SentimentAggregator ──▶ AggregateRow per key
//!                        │ hash partition
//!                 per-partition SinkWriter connection (retry + upsert)
//! ```

use super::aggregate::{AggregateRow, SentimentAggregator};
use super::backoff::RetryBackoff;
use super::config::BatchConfig;
use super::lexicon::Lexicon;
use super::parser::TweetParser;
use super::reader;
use super::writer::SinkWriter;
use super::writer_backend::SinkError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
pub enum JobError {
    Io(std::io::Error),
    Sink(SinkError),
    Worker(tokio::task::JoinError),
}

impl From<std::io::Error> for JobError {
    fn from(err: std::io::Error) -> Self {
        JobError::Io(err)
    }
}

impl From<SinkError> for JobError {
    fn from(err: SinkError) -> Self {
        JobError::Sink(err)
    }
}

impl From<tokio::task::JoinError> for JobError {
    fn from(err: tokio::task::JoinError) -> Self {
        JobError::Worker(err)
    }
}

impl std::fmt::Display for JobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobError::Io(e) => write!(f, "IO error: {}", e),
            JobError::Sink(e) => write!(f, "Sink error: {}", e),
            JobError::Worker(e) => write!(f, "Worker task error: {}", e),
        }
    }
}

impl std::error::Error for JobError {}

#[derive(Debug, Clone, Copy)]
pub struct JobSummary {
    pub lines_read: usize,
    pub mentions_emitted: usize,
    pub rows_written: usize,
    pub partitions_used: usize,
}

/// Run the whole batch: load lexicons, parse in parallel, merge,
/// write partitioned aggregates.
pub async fn run(config: &BatchConfig) -> Result<JobSummary, JobError> {
    // Lexicon load failures are fatal; there is no fallback lexicon.
    let tickers = Arc::new(Lexicon::load(&config.tickers_path)?);
    let positive = Arc::new(Lexicon::load(&config.positive_words_path)?);
    let negative = Arc::new(Lexicon::load(&config.negative_words_path)?);

    let parser = Arc::new(TweetParser::new(tickers, positive, negative));

    let lines = reader::read_lines(&config.input_path).await?;
    let lines_read = lines.len();

    let (aggregator, mentions_emitted) =
        parse_and_combine(lines, parser, config.workers.max(1)).await?;

    log::info!(
        "📊 Aggregated {} mentions into {} (ticker, bucket) rows",
        mentions_emitted,
        aggregator.len()
    );

    let rows = aggregator.into_rows();
    let rows_written = rows.len();
    let partitions = partition_rows(rows, config.sink_partitions.max(1));

    let mut partitions_used = 0;
    let mut handles = Vec::new();
    for (index, partition) in partitions.into_iter().enumerate() {
        // Engine-style guard: empty partitions never open a connection
        if partition.is_empty() {
            continue;
        }
        partitions_used += 1;

        let backend = config.backend;
        let output_path = config.output_path.clone();
        let max_retries = config.write_max_retries;

        handles.push(tokio::spawn(async move {
            write_partition(index, partition, backend, output_path, max_retries).await
        }));
    }

    for handle in handles {
        handle.await??;
    }

    Ok(JobSummary {
        lines_read,
        mentions_emitted,
        rows_written,
        partitions_used,
    })
}

/// Fan the input lines across worker tasks, each folding its chunk into
/// a partial aggregator, then merge the partials.
async fn parse_and_combine(
    lines: Vec<String>,
    parser: Arc<TweetParser>,
    workers: usize,
) -> Result<(SentimentAggregator, usize), JobError> {
    let chunk_size = lines.len().div_ceil(workers).max(1);

    let mut handles = Vec::new();
    let mut chunk = Vec::with_capacity(chunk_size);
    for line in lines {
        chunk.push(line);
        if chunk.len() == chunk_size {
            handles.push(spawn_worker(std::mem::take(&mut chunk), parser.clone()));
        }
    }
    if !chunk.is_empty() {
        handles.push(spawn_worker(chunk, parser.clone()));
    }

    let mut aggregator = SentimentAggregator::new();
    let mut mentions_emitted = 0;
    for handle in handles {
        let (partial, mentions) = handle.await?;
        aggregator.merge(partial);
        mentions_emitted += mentions;
    }

    Ok((aggregator, mentions_emitted))
}

fn spawn_worker(
    chunk: Vec<String>,
    parser: Arc<TweetParser>,
) -> tokio::task::JoinHandle<(SentimentAggregator, usize)> {
    tokio::task::spawn_blocking(move || {
        let mut partial = SentimentAggregator::new();
        let mut mentions = 0;
        for line in &chunk {
            for mention in parser.parse_line(line) {
                partial.add_mention(&mention);
                mentions += 1;
            }
        }
        (partial, mentions)
    })
}

/// Assign each row to a partition by key hash; subsets are disjoint.
fn partition_rows(rows: Vec<AggregateRow>, partitions: usize) -> Vec<Vec<AggregateRow>> {
    let mut parts: Vec<Vec<AggregateRow>> = (0..partitions).map(|_| Vec::new()).collect();

    for row in rows {
        let mut hasher = DefaultHasher::new();
        row.ticker.hash(&mut hasher);
        row.time.hash(&mut hasher);
        let index = (hasher.finish() % partitions as u64) as usize;
        parts[index].push(row);
    }

    parts
}

/// Write one partition through its own sink connection, retrying each
/// failed operation with bounded backoff before giving up.
async fn write_partition(
    index: usize,
    rows: Vec<AggregateRow>,
    backend: super::config::BackendType,
    output_path: std::path::PathBuf,
    max_retries: u32,
) -> Result<(), JobError> {
    let mut writer = SinkWriter::new(backend, output_path)?;
    let mut backoff = RetryBackoff::for_sink(max_retries);

    log::debug!(
        "💾 Partition {}: writing {} rows via {}",
        index,
        rows.len(),
        writer.backend_type()
    );

    for row in &rows {
        loop {
            match writer.write_row(row).await {
                Ok(()) => {
                    backoff.reset();
                    break;
                }
                Err(e) => {
                    log::warn!(
                        "Partition {}: write failed for {} @ {}: {}",
                        index,
                        row.ticker,
                        row.time,
                        e
                    );
                    if backoff.sleep().await.is_err() {
                        return Err(JobError::Sink(e));
                    }
                }
            }
        }
    }

    loop {
        match writer.flush().await {
            Ok(()) => break,
            Err(e) => {
                log::warn!("Partition {}: flush failed: {}", index, e);
                if backoff.sleep().await.is_err() {
                    return Err(JobError::Sink(e));
                }
            }
        }
    }

    Ok(())
}

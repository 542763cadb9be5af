//! Batch Loader Binary - Tweet Sentiment Aggregation
//!
//! Reads a dump of raw tweet JSON lines, extracts validated ticker
//! mentions, scores sentiment against the word lexicons, aggregates per
//! (ticker, 5-minute bucket) and writes one row per key to the sink.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin batch_loader -- --backend sqlite
//! ```
//!
//! ## Environment Variables
//!
//! - TWEETS_INPUT_PATH - Path to the raw tweet line file (required)
//! - TICKERS_PATH - Ticker lexicon (default: input-data/list-tickers.txt)
//! - POSITIVE_WORDS_PATH - Positive word lexicon (default: textual-analysis/positive-words.txt)
//! - NEGATIVE_WORDS_PATH - Negative word lexicon (default: textual-analysis/negative-words.txt)
//! - SENTIMENT_DB_PATH - SQLite output path (default: data/tweet_sentiment.db) - used when --backend sqlite
//! - AGGREGATES_OUTPUT_PATH - JSONL output path (default: data/aggregates.jsonl) - used when --backend jsonl
//! - BATCH_WORKERS - Parallel parse workers (default: available cores)
//! - SINK_PARTITIONS - Concurrent sink connections (default: 4)
//! - WRITE_MAX_RETRIES - Per-operation sink retries (default: 3)
//! - RUST_LOG - Logging level (optional, default: info)

use tickerflow::batch_core::{job, BatchConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = BatchConfig::from_env()?;
    config.validate()?;

    log::info!("🚀 Starting tweet sentiment batch loader");
    log::info!("   Input: {}", config.input_path.display());
    log::info!("   Tickers: {}", config.tickers_path.display());
    log::info!("   Positive words: {}", config.positive_words_path.display());
    log::info!("   Negative words: {}", config.negative_words_path.display());
    log::info!("   Output: {}", config.output_path.display());
    log::info!("   Backend: {:?}", config.backend);
    log::info!("   Workers: {}", config.workers);
    log::info!("   Sink partitions: {}", config.sink_partitions);

    let summary = job::run(&config).await?;

    log::info!(
        "✅ Batch complete: {} lines in, {} mentions, {} rows written across {} partitions",
        summary.lines_read,
        summary.mentions_emitted,
        summary.rows_written,
        summary.partitions_used
    );

    Ok(())
}

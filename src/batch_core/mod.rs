//! Batch Core - Tweet Sentiment Aggregation Pipeline
//!
//! Turns a dump of raw tweet JSON lines into per-ticker, per-5-minute
//! sentiment aggregates.
//!
//! # Architecture
//!
//! ```text
//! Lexicon files → Lexicon (broadcast read-only)
//!     ↓
//! Input lines → TweetParser (cashtag regex + bucket + sentiment)
//!     ↓
//! TickerMention → SentimentAggregator (keyed combine)
//!     ↓
//! AggregateRow → SinkWriter → JSONL or SQLite backend
//! ```

pub mod aggregate;
pub mod backoff;
pub mod bucket;
pub mod config;
pub mod job;
pub mod jsonl_writer;
pub mod lexicon;
pub mod parser;
pub mod reader;
pub mod sentiment;
pub mod sqlite_writer;
pub mod tweet;
pub mod writer;
pub mod writer_backend;

pub use aggregate::{AggregateRow, BucketKey, SentimentAggregator, SentimentTotals};
pub use backoff::RetryBackoff;
pub use bucket::bucket_time;
pub use config::{BackendType, BatchConfig, ConfigError};
pub use job::{JobError, JobSummary};
pub use jsonl_writer::JsonlSink;
pub use lexicon::Lexicon;
pub use parser::{TickerMention, TweetParser};
pub use sqlite_writer::SqliteSink;
pub use tweet::{RawTweet, TweetUser};
pub use writer::SinkWriter;
pub use writer_backend::{SinkBackend, SinkError};

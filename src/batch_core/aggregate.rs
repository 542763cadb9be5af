//! Keyed aggregation of ticker mentions
//!
//! Combine is element-wise addition, associative and commutative, so
//! per-worker partial maps can be merged in any order.

use super::parser::TickerMention;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregation key: one ticker in one 5-minute bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub ticker: String,
    pub time_bucket: String,
}

/// Running totals for one key.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentTotals {
    pub n_tweets: u64,
    pub sentiment_sum: f64,
}

impl SentimentTotals {
    pub fn merge(&mut self, other: SentimentTotals) {
        self.n_tweets += other.n_tweets;
        self.sentiment_sum += other.sentiment_sum;
    }
}

/// One finished output row, matching the sink schema.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateRow {
    pub ticker: String,
    pub time: String,
    pub n_tweets: u64,
    pub sentiment: f64,
}

/// HashMap-backed combiner over `(ticker, time_bucket)` keys.
#[derive(Debug, Default)]
pub struct SentimentAggregator {
    totals: HashMap<BucketKey, SentimentTotals>,
}

impl SentimentAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one mention into the running totals as `(1, sentiment)`.
    pub fn add_mention(&mut self, mention: &TickerMention) {
        let key = BucketKey {
            ticker: mention.ticker.clone(),
            time_bucket: mention.time_bucket.clone(),
        };
        self.totals.entry(key).or_default().merge(SentimentTotals {
            n_tweets: 1,
            sentiment_sum: mention.sentiment,
        });
    }

    /// Fold another aggregator's partial totals into this one.
    pub fn merge(&mut self, other: SentimentAggregator) {
        for (key, totals) in other.totals {
            self.totals.entry(key).or_default().merge(totals);
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Materialize one row per distinct key.
    pub fn into_rows(self) -> Vec<AggregateRow> {
        self.totals
            .into_iter()
            .map(|(key, totals)| AggregateRow {
                ticker: key.ticker,
                time: key.time_bucket,
                n_tweets: totals.n_tweets,
                sentiment: totals.sentiment_sum,
            })
            .collect()
    }
}

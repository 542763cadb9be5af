//! Per-line tweet processing: ticker extraction, bucketing, scoring
//!
//! One input line expands into zero or more `TickerMention`s. Every
//! per-line failure (bad JSON, missing fields, malformed timestamp) is
//! absorbed and logged; a single bad record must never fail the job.

use super::bucket::bucket_time;
use super::lexicon::Lexicon;
use super::sentiment;
use super::tweet::RawTweet;
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;

lazy_static! {
    /// Cashtag pattern: a dollar sign followed by 1-4 uppercase letters.
    /// Case-sensitive, so `$goog` is not a candidate.
    static ref TICKER_PATTERN: Regex = Regex::new(r"\$[A-Z]{1,4}").unwrap();
}

#[derive(Debug)]
pub enum TweetParseError {
    Json(serde_json::Error),
    Timestamp(chrono::ParseError),
}

impl From<serde_json::Error> for TweetParseError {
    fn from(err: serde_json::Error) -> Self {
        TweetParseError::Json(err)
    }
}

impl From<chrono::ParseError> for TweetParseError {
    fn from(err: chrono::ParseError) -> Self {
        TweetParseError::Timestamp(err)
    }
}

impl std::fmt::Display for TweetParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TweetParseError::Json(e) => write!(f, "JSON error: {}", e),
            TweetParseError::Timestamp(e) => write!(f, "timestamp error: {}", e),
        }
    }
}

impl std::error::Error for TweetParseError {}

/// One validated ticker mention extracted from a tweet.
///
/// `author` and `followers` are enrichment only; the aggregate keeps
/// just the mention count and sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerMention {
    pub ticker: String,
    pub time_bucket: String,
    pub sentiment: f64,
    pub author: String,
    pub followers: u64,
}

/// Stateless per-line parser holding the broadcast lexicons.
pub struct TweetParser {
    tickers: Arc<Lexicon>,
    positive: Arc<Lexicon>,
    negative: Arc<Lexicon>,
}

/// Extract candidate symbols from tweet text (leading `$` stripped).
///
/// Repeated mentions are kept: `$AAPL up, $AAPL away` yields two
/// candidates and therefore two emitted records.
pub fn extract_candidates(text: &str) -> Vec<String> {
    TICKER_PATTERN
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

impl TweetParser {
    pub fn new(tickers: Arc<Lexicon>, positive: Arc<Lexicon>, negative: Arc<Lexicon>) -> Self {
        Self {
            tickers,
            positive,
            negative,
        }
    }

    /// Process one raw input line into validated mentions.
    ///
    /// Never fails: malformed lines are logged at warn level and yield
    /// an empty result.
    pub fn parse_line(&self, line: &str) -> Vec<TickerMention> {
        match self.try_parse(line) {
            Ok(mentions) => mentions,
            Err(e) => {
                log::warn!("Dropping tweet line: {}", e);
                Vec::new()
            }
        }
    }

    fn try_parse(&self, line: &str) -> Result<Vec<TickerMention>, TweetParseError> {
        let tweet = RawTweet::from_json(line)?;

        let retained: Vec<String> = extract_candidates(&tweet.text)
            .into_iter()
            .filter(|candidate| self.tickers.contains(candidate))
            .collect();

        // No valid tickers: nothing to emit, and the timestamp is never
        // inspected.
        if retained.is_empty() {
            return Ok(Vec::new());
        }

        let time_bucket = bucket_time(&tweet.created_at)?;

        let author = tweet.user.screen_name.clone().unwrap_or_default();
        let followers = tweet.user.followers_count.unwrap_or(0);

        let normalized = sentiment::normalize(&tweet.text);
        let sentiment = sentiment::score(&normalized, &self.positive, &self.negative);

        Ok(retained
            .into_iter()
            .map(|ticker| TickerMention {
                ticker,
                time_bucket: time_bucket.clone(),
                sentiment,
                author: author.clone(),
                followers,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_parser() -> TweetParser {
        TweetParser::new(
            Arc::new(Lexicon::from_entries(["AAPL", "TSLA", "F"])),
            Arc::new(Lexicon::from_entries(["great", "gain"])),
            Arc::new(Lexicon::from_entries(["bad", "loss"])),
        )
    }

    #[test]
    fn test_extract_candidates_case_sensitive() {
        let candidates = extract_candidates("Buy $AAPL now, watch $goog too");
        assert_eq!(candidates, vec!["AAPL"]);
    }

    #[test]
    fn test_extract_candidates_length_capped_at_four() {
        // Only the first four uppercase letters after `$` match.
        assert_eq!(extract_candidates("$ABCDE moving"), vec!["ABCD"]);
        assert_eq!(extract_candidates("$F up big"), vec!["F"]);
    }

    #[test]
    fn test_extract_candidates_keeps_repeats() {
        let candidates = extract_candidates("$AAPL dips, $AAPL recovers");
        assert_eq!(candidates, vec!["AAPL", "AAPL"]);
    }

    #[test]
    fn test_parse_line_emits_one_mention_per_retained_ticker() {
        let parser = test_parser();
        let line = r#"{"text":"$AAPL and $TSLA and $ZZZZ","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{"screen_name":"x","followers_count":10}}"#;

        let mentions = parser.parse_line(line);
        assert_eq!(mentions.len(), 2);
        assert_eq!(mentions[0].ticker, "AAPL");
        assert_eq!(mentions[1].ticker, "TSLA");
        assert!(mentions
            .iter()
            .all(|m| m.time_bucket == "2016-02-08 11:55:00"));
    }

    #[test]
    fn test_parse_line_end_to_end_scenario() {
        // "great" and "buy" are in neither word lexicon: no signal,
        // neutral 0.0.
        let parser = TweetParser::new(
            Arc::new(Lexicon::from_entries(["AAPL"])),
            Arc::new(Lexicon::from_entries(["up"])),
            Arc::new(Lexicon::from_entries(["down"])),
        );
        let line = r#"{"text":"$AAPL great buy!!","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{"screen_name":"x","followers_count":10}}"#;

        let mentions = parser.parse_line(line);
        assert_eq!(mentions.len(), 1);
        let mention = &mentions[0];
        assert_eq!(mention.ticker, "AAPL");
        assert_eq!(mention.time_bucket, "2016-02-08 11:55:00");
        assert_eq!(mention.sentiment, 0.0);
        assert_eq!(mention.author, "x");
        assert_eq!(mention.followers, 10);
    }

    #[test]
    fn test_parse_line_absorbs_bad_json() {
        let parser = test_parser();
        assert!(parser.parse_line(r#"{"truncated": "#).is_empty());
        assert!(parser.parse_line("not json at all").is_empty());
    }

    #[test]
    fn test_parse_line_absorbs_bad_timestamp() {
        let parser = test_parser();
        let line = r#"{"text":"$AAPL","created_at":"yesterday-ish","user":{}}"#;
        assert!(parser.parse_line(line).is_empty());
    }

    #[test]
    fn test_bad_timestamp_without_valid_ticker_emits_nothing() {
        let parser = test_parser();
        let line = r#"{"text":"no cashtags here","created_at":"garbage","user":{}}"#;
        assert!(parser.parse_line(line).is_empty());
    }

    #[test]
    fn test_missing_user_details_default() {
        let parser = test_parser();
        let line = r#"{"text":"$TSLA","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{}}"#;

        let mentions = parser.parse_line(line);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].author, "");
        assert_eq!(mentions[0].followers, 0);
    }
}

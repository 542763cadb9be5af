#[cfg(test)]
mod tests {
    use crate::batch_core::{bucket, sentiment, Lexicon, SentimentAggregator, TweetParser};
    use std::sync::Arc;

    fn pipeline_parser() -> TweetParser {
        TweetParser::new(
            Arc::new(Lexicon::from_entries(["AAPL", "TSLA"])),
            Arc::new(Lexicon::from_entries(["gain", "strong"])),
            Arc::new(Lexicon::from_entries(["loss", "weak"])),
        )
    }

    /// End-to-end reference scenario: one tweet, one validated ticker,
    /// no lexicon words, 11:57:23 floors to the 11:55 bucket.
    #[test]
    fn test_single_tweet_end_to_end() {
        let parser = pipeline_parser();
        let line = r#"{"text":"$AAPL great buy!!","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{"screen_name":"x","followers_count":10}}"#;

        let mentions = parser.parse_line(line);
        assert_eq!(mentions.len(), 1);

        let mut aggregator = SentimentAggregator::new();
        for mention in &mentions {
            aggregator.add_mention(mention);
        }

        let rows = aggregator.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ticker, "AAPL");
        assert_eq!(rows[0].time, "2016-02-08 11:55:00");
        assert_eq!(rows[0].n_tweets, 1);
        assert_eq!(rows[0].sentiment, 0.0);
    }

    /// Mention counts equal the number of contributing tweets per key,
    /// and per-tweet sentiment stays within [-1, 1].
    #[test]
    fn test_mention_count_matches_contributing_tweets() {
        let parser = pipeline_parser();
        let lines = [
            r#"{"text":"$AAPL strong gain","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{}}"#,
            r#"{"text":"$AAPL weak loss ahead","created_at":"Mon Feb 08 11:58:01 +0000 2016","user":{}}"#,
            r#"{"text":"$AAPL drifting","created_at":"Mon Feb 08 11:59:59 +0000 2016","user":{}}"#,
            r#"not json"#,
        ];

        let mut aggregator = SentimentAggregator::new();
        for line in lines {
            for mention in parser.parse_line(line) {
                assert!((-1.0..=1.0).contains(&mention.sentiment));
                aggregator.add_mention(&mention);
            }
        }

        let rows = aggregator.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time, "2016-02-08 11:55:00");
        assert_eq!(rows[0].n_tweets, 3);
        // +1.0, -1.0 and 0.0 cancel out
        assert_eq!(rows[0].sentiment, 0.0);
    }

    /// Tweets in different 5-minute windows never share a key.
    #[test]
    fn test_buckets_split_keys() {
        let parser = pipeline_parser();
        let lines = [
            r#"{"text":"$TSLA","created_at":"Mon Feb 08 11:59:59 +0000 2016","user":{}}"#,
            r#"{"text":"$TSLA","created_at":"Mon Feb 08 12:00:00 +0000 2016","user":{}}"#,
        ];

        let mut aggregator = SentimentAggregator::new();
        for line in lines {
            for mention in parser.parse_line(line) {
                aggregator.add_mention(&mention);
            }
        }

        assert_eq!(aggregator.len(), 2);
    }

    /// The scorer consumes exactly what the parser normalizes to.
    #[test]
    fn test_normalize_then_score_roundtrip() {
        let positive = Lexicon::from_entries(["gain"]);
        let negative = Lexicon::from_entries(["loss"]);

        let normalized = sentiment::normalize("GAIN! (loss?) GAIN.");
        assert_eq!(normalized, "gain loss gain");

        let score = sentiment::score(&normalized, &positive, &negative);
        assert!((score - (1.0 / 3.0)).abs() < 1e-12);
    }

    /// Bucket output is always 5-minute aligned and never later than
    /// the source timestamp.
    #[test]
    fn test_bucket_alignment_property() {
        for (raw, expected) in [
            ("Mon Feb 08 00:00:00 +0000 2016", "2016-02-08 00:00:00"),
            ("Mon Feb 08 00:04:59 +0000 2016", "2016-02-08 00:00:00"),
            ("Mon Feb 08 23:59:59 +0000 2016", "2016-02-08 23:55:00"),
        ] {
            assert_eq!(bucket::bucket_time(raw).unwrap(), expected);
        }
    }
}

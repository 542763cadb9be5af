//! Raw tweet record parsed from one line of the input dump

use serde::Deserialize;

/// One raw tweet as delivered by the collection layer.
///
/// `text`, `created_at` and `user` are required; a line missing any of
/// them fails deserialization and is dropped upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTweet {
    pub text: String,
    pub created_at: String,
    pub user: TweetUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetUser {
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub followers_count: Option<u64>,
}

impl RawTweet {
    /// Parse a tweet from one JSON line.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let line = r#"{"text":"$AAPL great buy!!","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{"screen_name":"trader_x","followers_count":10}}"#;

        let tweet = RawTweet::from_json(line).unwrap();
        assert_eq!(tweet.text, "$AAPL great buy!!");
        assert_eq!(tweet.created_at, "Mon Feb 08 11:57:23 +0000 2016");
        assert_eq!(tweet.user.screen_name.as_deref(), Some("trader_x"));
        assert_eq!(tweet.user.followers_count, Some(10));
    }

    #[test]
    fn test_parse_tolerates_missing_user_details() {
        let line = r#"{"text":"$TSLA","created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{}}"#;

        let tweet = RawTweet::from_json(line).unwrap();
        assert_eq!(tweet.user.screen_name, None);
        assert_eq!(tweet.user.followers_count, None);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let line = r#"{"text":"x","created_at":"y","user":{"screen_name":"z"},"lang":"en","retweet_count":3}"#;
        assert!(RawTweet::from_json(line).is_ok());
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let no_text = r#"{"created_at":"Mon Feb 08 11:57:23 +0000 2016","user":{}}"#;
        assert!(RawTweet::from_json(no_text).is_err());

        let no_user = r#"{"text":"$AAPL","created_at":"Mon Feb 08 11:57:23 +0000 2016"}"#;
        assert!(RawTweet::from_json(no_user).is_err());
    }

    #[test]
    fn test_truncated_line_is_error() {
        assert!(RawTweet::from_json(r#"{"text":"$AAPL","crea"#).is_err());
    }
}

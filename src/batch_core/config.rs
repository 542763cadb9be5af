use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendType {
    Jsonl,
    Sqlite,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing environment variable: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Job configuration, read from the environment (plus the `--backend`
/// switch). Endpoints and paths are deliberately not hardcoded.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_path: PathBuf,
    pub tickers_path: PathBuf,
    pub positive_words_path: PathBuf,
    pub negative_words_path: PathBuf,
    pub backend: BackendType,
    pub output_path: PathBuf,
    pub workers: usize,
    pub sink_partitions: usize,
    pub write_max_retries: u32,
}

impl BatchConfig {
    pub fn parse_backend_from_args() -> BackendType {
        let args: Vec<String> = env::args().collect();

        if args.contains(&"--backend".to_string()) {
            if let Some(idx) = args.iter().position(|x| x == "--backend") {
                match args.get(idx + 1).map(|s| s.as_str()) {
                    Some("sqlite") => return BackendType::Sqlite,
                    Some("jsonl") => return BackendType::Jsonl,
                    _ => {}
                }
            }
        }

        BackendType::Sqlite // Default to the database sink
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_backend(Self::parse_backend_from_args())
    }

    pub fn from_env_with_backend(backend: BackendType) -> Result<Self, ConfigError> {
        let input_path = env::var("TWEETS_INPUT_PATH")
            .map_err(|_| ConfigError::MissingVariable("TWEETS_INPUT_PATH".to_string()))?;

        let output_path = match backend {
            BackendType::Sqlite => env::var("SENTIMENT_DB_PATH")
                .unwrap_or_else(|_| "data/tweet_sentiment.db".to_string()),
            BackendType::Jsonl => env::var("AGGREGATES_OUTPUT_PATH")
                .unwrap_or_else(|_| "data/aggregates.jsonl".to_string()),
        };

        let default_workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Ok(Self {
            input_path: input_path.into(),
            tickers_path: env::var("TICKERS_PATH")
                .unwrap_or_else(|_| "input-data/list-tickers.txt".to_string())
                .into(),
            positive_words_path: env::var("POSITIVE_WORDS_PATH")
                .unwrap_or_else(|_| "textual-analysis/positive-words.txt".to_string())
                .into(),
            negative_words_path: env::var("NEGATIVE_WORDS_PATH")
                .unwrap_or_else(|_| "textual-analysis/negative-words.txt".to_string())
                .into(),
            backend,
            output_path: output_path.into(),
            workers: env::var("BATCH_WORKERS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_workers),
            sink_partitions: env::var("SINK_PARTITIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),
            write_max_retries: env::var("WRITE_MAX_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidValue(
                "BATCH_WORKERS must be at least 1".to_string(),
            ));
        }

        if self.sink_partitions == 0 {
            return Err(ConfigError::InvalidValue(
                "SINK_PARTITIONS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

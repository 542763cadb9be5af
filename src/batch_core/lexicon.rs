//! Lexicon loading for ticker symbols and sentiment word lists

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable word/symbol set loaded once per job and shared read-only
/// across all worker tasks (wrap in `Arc` for distribution).
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from a flat text file.
    ///
    /// The first whitespace-delimited token of each non-empty line is an
    /// entry; the rest of the line is ignored. A missing or unreadable
    /// file is an error (the job has no fallback lexicon).
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut entries = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(token) = line.split_whitespace().next() {
                entries.insert(token.to_string());
            }
        }

        log::info!(
            "📚 Loaded {} lexicon entries from {}",
            entries.len(),
            path.as_ref().display()
        );

        Ok(Self { entries })
    }

    /// Build a lexicon from an in-memory entry list.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Batch line reader for the raw tweet dump

use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read the whole input file into memory, one entry per non-empty line.
///
/// This is a one-shot batch read; a missing or unreadable input file is
/// fatal to the job.
pub async fn read_lines(path: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
    let file = File::open(path.as_ref()).await?;
    let mut reader = BufReader::new(file).lines();

    let mut lines = Vec::new();
    while let Some(line) = reader.next_line().await? {
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    log::info!(
        "📖 Read {} tweet lines from {}",
        lines.len(),
        path.as_ref().display()
    );

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_reads_non_empty_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.txt");

        let mut file = tokio::fs::File::create(&path).await.unwrap();
        file.write_all(b"line1\n\nline2\n   \nline3\n").await.unwrap();
        file.flush().await.unwrap();
        drop(file);

        let lines = read_lines(&path).await.unwrap();
        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines(dir.path().join("absent.txt")).await.is_err());
    }
}

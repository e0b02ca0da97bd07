//! Append-only interaction log
//!
//! Each question/response exchange is appended as a timestamped block to a flat
//! text file. The file is never read back, rotated or truncated.

use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::InteractionRecord;

/// Appends interaction records to a file
pub struct LogStore {
    path: PathBuf,
    /// Serializes appends so concurrent requests never interleave records
    write_lock: Mutex<()>,
}

impl LogStore {
    /// Create a log store writing to `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one exchange stamped with the current time
    pub fn append(&self, question: &str, response: &str) -> Result<InteractionRecord> {
        let record = InteractionRecord::now(question, response);
        self.append_record(&record)?;
        Ok(record)
    }

    /// Append a prepared record
    pub fn append_record(&self, record: &InteractionRecord) -> Result<()> {
        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // The handle is dropped (and closed) on every return path
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.render().as_bytes())?;
        file.flush()?;

        tracing::debug!("Appended interaction to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::sync::Arc;

    #[test]
    fn test_two_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("chat_log.txt"));

        store.append("Q1", "A1").unwrap();
        store.append("Q2", "A2").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let record = Regex::new(
            r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\]\nYou: Q1\nClaude: A1\n\n\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\]\nYou: Q2\nClaude: A2\n\n$",
        )
        .unwrap();
        assert!(record.is_match(&content), "unexpected log content: {:?}", content);
    }

    #[test]
    fn test_existing_content_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat_log.txt");
        let prior = "[2024-01-01 00:00:00]\nYou: old\nClaude: older\n\n";
        fs::write(&path, prior).unwrap();

        let store = LogStore::new(&path);
        let record = store.append("새 질문", "새 답변").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(prior));
        assert_eq!(&content[prior.len()..], record.render());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("logs").join("nested").join("chat_log.txt"));

        store.append("q", "a").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let store = LogStore::new(dir.path());

        let err = store.append("q", "a").unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }

    #[test]
    fn test_concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(LogStore::new(dir.path().join("chat_log.txt")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for j in 0..25 {
                        store
                            .append(&format!("question {}-{}", i, j), &"x".repeat(512))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(store.path()).unwrap();
        let blocks: Vec<&str> = content.split_terminator("\n\n").collect();
        assert_eq!(blocks.len(), 200);
        for block in blocks {
            let lines: Vec<&str> = block.lines().collect();
            assert_eq!(lines.len(), 3);
            assert!(lines[1].starts_with("You: question "));
            assert!(lines[2].starts_with("Claude: x"));
        }
    }
}

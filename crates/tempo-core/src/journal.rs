//! JSON-lines journal for submitted messages.
//!
//! The journal is the local delivery target for submitted messages: one
//! JSON object per line, append-only.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::message::Message;

/// Append-only message journal backed by a JSON-lines file.
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one message as a JSON line, creating the file and parent
    /// directories as needed.
    pub fn append(&self, message: &Message) -> Result<(), JournalError> {
        let mut line =
            serde_json::to_string(message).map_err(JournalError::Serialize)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Load all journaled messages in append order.
    ///
    /// A missing file is an empty journal, not an error.
    pub fn load(&self) -> Result<Vec<Message>, JournalError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(JournalError::Io(e)),
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(JournalError::Parse))
            .collect()
    }
}

/// Errors that can occur when working with the journal.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// I/O error reading or writing the journal file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a journal line.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing a message.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JournalStore::new(dir.path().join("journal.jsonl"));

        let first = Message::from_input("first").unwrap();
        let second = Message::from_input("second").unwrap();
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JournalStore::new(dir.path().join("absent.jsonl"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JournalStore::new(dir.path().join("deep").join("journal.jsonl"));

        store
            .append(&Message::from_input("nested").unwrap())
            .unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_rejects_corrupt_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");
        fs::write(&path, "not json\n").unwrap();

        let store = JournalStore::new(&path);
        assert!(matches!(store.load(), Err(JournalError::Parse(_))));
    }
}

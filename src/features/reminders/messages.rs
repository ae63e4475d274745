//! # Feature: Message Pool
//!
//! The reminder texts, one per line in a flat file. The pool is re-read at
//! the start of every dispatch cycle so the file can be edited without
//! restarting the bot; within a cycle every recipient draws from the same
//! snapshot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Re-read per cycle (was loaded once at startup)
//! - 1.0.0: Initial creation with uniform random pick

use crate::core::list_file::read_lines;
use log::warn;
use rand::seq::IndexedRandom;
use std::path::Path;

/// One cycle's snapshot of the reminder messages.
#[derive(Debug, Clone)]
pub struct MessagePool {
    messages: Vec<String>,
}

impl MessagePool {
    /// Read the pool file.
    ///
    /// An unreadable file yields an empty pool with a warning rather than an
    /// error; the scheduler treats an empty pool as "skip this cycle", so a
    /// missing file heals itself once the file shows up.
    pub fn load(path: &Path) -> Self {
        match read_lines(path) {
            Ok(messages) => Self { messages },
            Err(e) => {
                warn!("Could not read message pool {}: {}", path.display(), e);
                Self {
                    messages: Vec::new(),
                }
            }
        }
    }

    /// Build a pool from messages already in hand.
    pub fn from_messages(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Draw one message uniformly at random, trimmed of surrounding
    /// whitespace.
    ///
    /// Returns `None` when the pool is empty. Draws are independent, so the
    /// same message can come up twice in a row.
    pub fn pick(&self) -> Option<String> {
        self.messages
            .choose(&mut rand::rng())
            .map(|message| message.trim().to_string())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pick_returns_a_pool_member() {
        let pool = MessagePool::from_messages(vec![
            "Drink water!".to_string(),
            "Hydrate or diedrate".to_string(),
            "Water break".to_string(),
        ]);
        for _ in 0..100 {
            let picked = pool.pick().unwrap();
            assert!(
                ["Drink water!", "Hydrate or diedrate", "Water break"]
                    .contains(&picked.as_str())
            );
        }
        // Picking never drains the pool
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_pick_trims_whitespace() {
        let pool = MessagePool::from_messages(vec!["  Drink water!  \n".to_string()]);
        assert_eq!(pool.pick().unwrap(), "Drink water!");
    }

    #[test]
    fn test_pick_empty_pool_is_none() {
        let pool = MessagePool::from_messages(Vec::new());
        assert!(pool.pick().is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pick_eventually_covers_the_pool() {
        let pool =
            MessagePool::from_messages(vec!["first".to_string(), "second".to_string()]);
        let mut seen_first = false;
        let mut seen_second = false;
        for _ in 0..200 {
            match pool.pick().unwrap().as_str() {
                "first" => seen_first = true,
                "second" => seen_second = true,
                other => panic!("unexpected pick {other:?}"),
            }
        }
        assert!(seen_first && seen_second);
    }

    #[test]
    fn test_load_reads_one_message_per_line() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"Drink water!\n\nStay hydrated\n")
            .expect("write temp file");
        let pool = MessagePool::load(file.path());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_load_missing_file_yields_empty_pool() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let pool = MessagePool::load(&dir.path().join("gone.txt"));
        assert!(pool.is_empty());
        assert!(pool.pick().is_none());
    }
}

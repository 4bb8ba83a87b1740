//! Persisted high-score watermark
//!
//! A single non-negative integer, read once at startup and written whenever
//! it increases. Stored as a small JSON envelope; any read or parse failure
//! falls back to zero so gameplay never blocks on persistence.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct Envelope {
    high_score: u32,
}

/// File-backed high-score store
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open the store, reading the current best. Missing or corrupt files
    /// yield a best of zero.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Envelope>(&json) {
                Ok(envelope) => {
                    log::info!("loaded high score {} from {}", envelope.high_score, path.display());
                    envelope.high_score
                }
                Err(err) => {
                    log::warn!("high score file unreadable ({err}), starting at 0");
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting fresh", path.display());
                0
            }
        };
        Self { path, best }
    }

    /// Current best score
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a run's score; writes through only when it beats the best.
    /// Returns true if a new high score was stored.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match serde_json::to_string(&Envelope { high_score: score }) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::error!("failed to write high score: {err}");
                } else {
                    log::info!("high score {} saved", score);
                }
            }
            Err(err) => log::error!("failed to encode high score: {err}"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("slingshot-bird-test-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let store = HighScoreStore::open(temp_path("missing.json"));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "not json at all").unwrap();
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_record_round_trip() {
        let path = temp_path("roundtrip.json");
        let _ = fs::remove_file(&path);

        let mut store = HighScoreStore::open(&path);
        assert!(store.record(12));
        assert!(!store.record(7), "lower score must not overwrite");
        assert_eq!(store.best(), 12);

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 12);
        let _ = fs::remove_file(&path);
    }
}

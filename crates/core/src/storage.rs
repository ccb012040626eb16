//! Whole-file JSON persistence for the game collection

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::PersistenceError;
use crate::models::Game;
use crate::normalize::normalize_games;

/// Default location of the saved collection
pub const DEFAULT_DATA_FILE: &str = "games.json";

/// Reads and writes every game as one JSON array
#[derive(Debug, Clone)]
pub struct GameStore {
    path: PathBuf,
}

impl GameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, treating any failure as "no data yet".
    pub fn load(&self) -> Vec<Game> {
        match self.try_load() {
            Ok(games) => {
                tracing::info!(path = %self.path.display(), games = games.len(), "Loaded games");
                games
            }
            Err(PersistenceError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No saved games yet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to load games, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Load the collection, surfacing read and parse errors.
    pub fn try_load(&self) -> Result<Vec<Game>, PersistenceError> {
        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        Ok(normalize_games(&value))
    }

    /// Replace the saved collection with `games`.
    ///
    /// The JSON goes to a sibling temp file first and is renamed over the
    /// target, so readers never see a half-written document.
    pub fn save(&self, games: &[Game]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(games)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), games = games.len(), "Saved games");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

//! In-memory game collection

use crate::error::{Result, TrackerError, ValidationError};
use crate::models::{Game, NOT_AVAILABLE};

/// Owns every tracked game, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    games: Vec<Game>,
}

impl Library {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Id the next registered game will get, `None` once `u32::MAX` is used
    pub fn next_id(&self) -> Option<u32> {
        self.games.iter().map(|g| g.id).max().unwrap_or(0).checked_add(1)
    }

    /// Register a new game with no achievements.
    ///
    /// Inputs are trimmed; a blank platform or genre is stored as "N/A".
    pub fn register(&mut self, name: &str, platform: &str, genre: &str) -> Result<&Game> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let id = self.next_id().ok_or(TrackerError::IdsExhausted("game"))?;

        let game = Game {
            id,
            name: name.to_string(),
            platform: or_not_available(platform),
            genre: or_not_available(genre),
            achievements: Vec::new(),
        };
        tracing::info!(id = game.id, name = %game.name, "Registered game");

        self.games.push(game);
        Ok(&self.games[self.games.len() - 1])
    }

    pub fn find(&self, id: u32) -> Result<&Game> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or(TrackerError::GameNotFound(id))
    }

    pub fn find_mut(&mut self, id: u32) -> Result<&mut Game> {
        self.games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(TrackerError::GameNotFound(id))
    }
}

fn or_not_available(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

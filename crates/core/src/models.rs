//! Data model shared by the repositories, reports and storage

use serde::{Deserialize, Serialize};

/// Placeholder for optional game fields left blank at registration
pub const NOT_AVAILABLE: &str = "N/A";

/// How hard an achievement is to get
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a difficulty name, case-insensitively.
    ///
    /// Besides the English names this accepts the Portuguese labels found in
    /// older save files ("fácil", "média", "difícil"), with or without
    /// accents.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Some(Difficulty::Easy),
            "medium" | "média" | "media" => Some(Difficulty::Medium),
            "hard" | "difícil" | "dificil" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A milestone belonging to exactly one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub unlocked: bool,
    /// Set exactly when `unlocked` flips to true
    #[serde(default)]
    pub unlock_date: Option<String>,
    #[serde(default)]
    pub points: u32,
}

impl Achievement {
    /// Mark as unlocked. Returns false (and changes nothing) if it already was.
    pub fn unlock(&mut self, stamp: &str) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.unlock_date = Some(stamp.to_string());
        true
    }

    /// Points this achievement currently contributes
    pub fn points_earned(&self) -> u32 {
        if self.unlocked { self.points } else { 0 }
    }
}

/// A tracked game and the achievements it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub platform: String,
    pub genre: String,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Game {
    pub fn achievements_total(&self) -> usize {
        self.achievements.len()
    }

    pub fn achievements_unlocked(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Completion in percent, `None` for a game without achievements
    pub fn completion_percent(&self) -> Option<f64> {
        match self.achievements_total() {
            0 => None,
            total => Some(self.achievements_unlocked() as f64 / total as f64 * 100.0),
        }
    }
}

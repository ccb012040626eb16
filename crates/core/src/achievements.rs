//! Achievement operations scoped to a single game

use chrono::Local;

use crate::error::{Result, TrackerError, ValidationError};
use crate::models::{Achievement, Difficulty, Game};

/// Default `strftime` format for unlock dates (dd/mm/yyyy)
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// User input for a new achievement
#[derive(Debug, Clone, Default)]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub points: u32,
}

/// Aggregate outcome of a batch unlock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnlockResult {
    pub unlocked: usize,
    pub already_unlocked: usize,
    pub unknown: usize,
}

/// Current local time rendered with `format`
pub fn unlock_stamp(format: &str) -> String {
    Local::now().format(format).to_string()
}

/// Turn free-text points into a count.
///
/// Never fails: non-numeric input gives 0, negatives clamp to 0 and decimals
/// are truncated.
pub fn coerce_points(input: &str) -> u32 {
    let input = input.trim();
    if let Ok(value) = input.parse::<i64>() {
        return value.clamp(0, u32::MAX as i64) as u32;
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => value.clamp(0.0, u32::MAX as f64) as u32,
        _ => 0,
    }
}

impl Game {
    /// Id the next achievement of this game will get, `None` once `u32::MAX` is used
    pub fn next_achievement_id(&self) -> Option<u32> {
        self.achievements
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Append a locked achievement. Title and description are trimmed.
    pub fn add_achievement(&mut self, new: NewAchievement) -> Result<&Achievement> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let id = self
            .next_achievement_id()
            .ok_or(TrackerError::IdsExhausted("achievement"))?;

        let achievement = Achievement {
            id,
            title: title.to_string(),
            description: new.description.trim().to_string(),
            difficulty: new.difficulty,
            unlocked: false,
            unlock_date: None,
            points: new.points,
        };
        tracing::info!(
            game_id = self.id,
            achievement_id = achievement.id,
            title = %achievement.title,
            "Added achievement"
        );

        self.achievements.push(achievement);
        Ok(&self.achievements[self.achievements.len() - 1])
    }

    /// Unlock a single achievement. Returns false if it was already unlocked.
    pub fn unlock_achievement(&mut self, id: u32, stamp: &str) -> Result<bool> {
        let game_id = self.id;
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(TrackerError::AchievementNotFound {
                game_id,
                achievement_id: id,
            })?;
        Ok(achievement.unlock(stamp))
    }

    /// Unlock every listed achievement that is still locked.
    ///
    /// Already-unlocked and unknown ids are counted, never an error.
    pub fn unlock_achievements(&mut self, ids: &[u32], stamp: &str) -> UnlockResult {
        let mut result = UnlockResult::default();
        for &id in ids {
            match self.achievements.iter_mut().find(|a| a.id == id) {
                Some(achievement) => {
                    if achievement.unlock(stamp) {
                        result.unlocked += 1;
                    } else {
                        result.already_unlocked += 1;
                    }
                }
                None => result.unknown += 1,
            }
        }
        tracing::info!(
            game_id = self.id,
            unlocked = result.unlocked,
            already_unlocked = result.already_unlocked,
            unknown = result.unknown,
            "Unlocked achievements"
        );
        result
    }
}

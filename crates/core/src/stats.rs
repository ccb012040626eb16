//! Read-only statistics and ranking, recomputed on every call

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Achievement, Difficulty, Game};

/// Achievement counts for one difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyTally {
    pub total: usize,
    pub unlocked: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    pub total: usize,
    pub unlocked: usize,
    /// 0 for a game without achievements, otherwise rounded to one decimal
    pub percent_unlocked: f64,
    pub points_earned: u64,
    pub points_total: u64,
    /// Always holds every difficulty, even with zero achievements
    pub by_difficulty: BTreeMap<Difficulty, DifficultyTally>,
}

/// One row of the ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub game_id: u32,
    pub name: String,
    pub total: usize,
    pub unlocked: usize,
    pub percent: f64,
    pub points_earned: u64,
}

/// Totals across the whole library
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibrarySummary {
    pub games: usize,
    pub achievements: usize,
    pub unlocked: usize,
    pub points_earned: u64,
    pub points_total: u64,
    /// Mean completion over games that have at least one achievement
    pub average_completion: f64,
}

/// `unlocked / total` as a percentage rounded to one decimal, 0 when empty
pub fn percent(unlocked: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_one_decimal(unlocked as f64 / total as f64 * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn stats_for_game(game: &Game) -> GameStats {
    let mut by_difficulty: BTreeMap<Difficulty, DifficultyTally> = Difficulty::ALL
        .iter()
        .map(|d| (*d, DifficultyTally::default()))
        .collect();

    for achievement in &game.achievements {
        let tally = by_difficulty.entry(achievement.difficulty).or_default();
        tally.total += 1;
        if achievement.unlocked {
            tally.unlocked += 1;
        }
    }

    let total = game.achievements_total();
    let unlocked = game.achievements_unlocked();

    GameStats {
        total,
        unlocked,
        percent_unlocked: percent(unlocked, total),
        points_earned: points_earned(game),
        points_total: game.achievements.iter().map(|a| a.points as u64).sum(),
        by_difficulty,
    }
}

fn points_earned(game: &Game) -> u64 {
    game.achievements.iter().map(|a| a.points_earned() as u64).sum()
}

/// Games ordered by completion, then by points earned, both descending.
///
/// The sort is stable, so exact ties keep registration order.
pub fn rank_games(games: &[Game]) -> Vec<RankEntry> {
    let mut ranking: Vec<RankEntry> = games
        .iter()
        .map(|game| {
            let total = game.achievements_total();
            let unlocked = game.achievements_unlocked();
            RankEntry {
                game_id: game.id,
                name: game.name.clone(),
                total,
                unlocked,
                percent: percent(unlocked, total),
                points_earned: points_earned(game),
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.points_earned.cmp(&a.points_earned))
    });
    ranking
}

/// Achievements whose unlocked flag matches, grouped by game.
///
/// Games without a match are left out.
pub fn filter_achievements(games: &[Game], unlocked: bool) -> Vec<(&Game, Vec<&Achievement>)> {
    games
        .iter()
        .filter_map(|game| {
            let matching: Vec<&Achievement> = game
                .achievements
                .iter()
                .filter(|a| a.unlocked == unlocked)
                .collect();
            (!matching.is_empty()).then_some((game, matching))
        })
        .collect()
}

pub fn summarize(games: &[Game]) -> LibrarySummary {
    let completion: Vec<f64> = games.iter().filter_map(Game::completion_percent).collect();
    let average_completion = if completion.is_empty() {
        0.0
    } else {
        round_one_decimal(completion.iter().sum::<f64>() / completion.len() as f64)
    };

    LibrarySummary {
        games: games.len(),
        achievements: games.iter().map(Game::achievements_total).sum(),
        unlocked: games.iter().map(Game::achievements_unlocked).sum(),
        points_earned: games.iter().map(points_earned).sum(),
        points_total: games
            .iter()
            .flat_map(|g| &g.achievements)
            .map(|a| a.points as u64)
            .sum(),
        average_completion,
    }
}

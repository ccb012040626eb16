//! Report rendering - plain lines handed to the prompter

use tracker_core::{Achievement, Difficulty, Game, GameStats, LibrarySummary, RankEntry};

use crate::ui::StatusFilter;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "━".repeat(RULE_WIDTH)
}

/// "100" for whole numbers, "66.7" otherwise
pub fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{:.0}", percent)
    } else {
        format!("{:.1}", percent)
    }
}

fn medal(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

fn achievement_lines(achievement: &Achievement) -> Vec<String> {
    let status = if achievement.unlocked { "✅" } else { "🔒" };
    let date = match (&achievement.unlock_date, achievement.unlocked) {
        (Some(date), true) => format!(" [{}]", date),
        _ => String::new(),
    };

    let mut lines = vec![
        String::new(),
        format!("{} {} - {} pts", status, achievement.title, achievement.points),
    ];
    if !achievement.description.is_empty() {
        lines.push(format!("   {}", achievement.description));
    }
    lines.push(format!("   Difficulty: {}{}", achievement.difficulty.label(), date));
    lines
}

/// Every achievement of one game, in insertion order
pub fn game_achievement_lines(game: &Game) -> Vec<String> {
    let mut lines = vec![
        format!("🎮 {} - {} ({})", game.name, game.platform, game.genre),
        rule(),
    ];
    for achievement in &game.achievements {
        lines.extend(achievement_lines(achievement));
    }
    lines.push(String::new());
    lines.push(rule());
    lines
}

/// Achievements matching a status, grouped by game
pub fn status_lines(groups: &[(&Game, Vec<&Achievement>)], filter: StatusFilter) -> Vec<String> {
    let mut lines = vec![format!("📋 {} achievements", filter.label()), rule()];
    for (game, achievements) in groups {
        lines.push(String::new());
        lines.push(format!("🎮 {} ({})", game.name, achievements.len()));
        for achievement in achievements {
            lines.extend(achievement_lines(achievement).into_iter().skip(1));
        }
    }
    lines.push(String::new());
    lines.push(rule());
    lines
}

pub fn stats_lines(game: &Game, stats: &GameStats) -> Vec<String> {
    let mut lines = vec![
        format!("📊 Statistics - {}", game.name),
        rule(),
        String::new(),
        "🎮 Overall progress:".to_string(),
        format!("   Total achievements: {}", stats.total),
        format!(
            "   Unlocked: {} ({}%)",
            stats.unlocked,
            format_percent(stats.percent_unlocked)
        ),
        format!("   Points: {}/{}", stats.points_earned, stats.points_total),
        String::new(),
        "📈 By difficulty:".to_string(),
    ];
    for difficulty in Difficulty::ALL {
        let tally = stats.by_difficulty.get(&difficulty).copied().unwrap_or_default();
        lines.push(format!(
            "   {}: {}/{}",
            difficulty.label(),
            tally.unlocked,
            tally.total
        ));
    }
    lines.push(String::new());
    lines.push(rule());
    lines
}

pub fn ranking_lines(ranking: &[RankEntry], summary: &LibrarySummary) -> Vec<String> {
    let mut lines = vec![
        "🏆 Game ranking".to_string(),
        rule(),
        format!(
            "   {} games · {}/{} achievements · {}/{} pts · average completion {}%",
            summary.games,
            summary.unlocked,
            summary.achievements,
            summary.points_earned,
            summary.points_total,
            format_percent(summary.average_completion)
        ),
    ];
    for (index, entry) in ranking.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{} {}", medal(index + 1), entry.name));
        lines.push(format!(
            "   Progress: {}/{} ({}%)",
            entry.unlocked,
            entry.total,
            format_percent(entry.percent)
        ));
        lines.push(format!("   Points: {}", entry.points_earned));
    }
    lines.push(String::new());
    lines.push(rule());
    lines
}

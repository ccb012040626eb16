//! Coerce loosely-shaped saved data into the typed model
//!
//! Everything lenient about old or hand-edited files lives here. Unknown
//! shapes never fail: they fall back to defaults, and ids are repaired so they
//! stay unique.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::models::{Achievement, Difficulty, Game, NOT_AVAILABLE};

const UNTITLED_GAME: &str = "Untitled game";
const UNTITLED_ACHIEVEMENT: &str = "Untitled achievement";

/// Stored for unlocked records that carry no date
pub const UNKNOWN_UNLOCK_DATE: &str = "unknown";

// Current key first, then the Portuguese keys of older save files
const GAME_NAME: &[&str] = &["name", "nome"];
const GAME_PLATFORM: &[&str] = &["platform", "plataforma"];
const GAME_GENRE: &[&str] = &["genre", "genero", "gênero"];
const GAME_ACHIEVEMENTS: &[&str] = &["achievements", "conquistas"];
const ACH_TITLE: &[&str] = &["title", "titulo", "título"];
const ACH_DESCRIPTION: &[&str] = &["description", "descricao", "descrição"];
const ACH_DIFFICULTY: &[&str] = &["difficulty", "dificuldade"];
const ACH_UNLOCKED: &[&str] = &["unlocked", "desbloqueada"];
const ACH_UNLOCK_DATE: &[&str] = &["unlockDate", "unlock_date", "dataDesbloqueio"];
const ACH_POINTS: &[&str] = &["points", "pontos"];

/// Build the game list from any parsed JSON value.
///
/// A non-array yields an empty list; non-object entries are skipped.
pub fn normalize_games(value: &Value) -> Vec<Game> {
    let Some(entries) = value.as_array() else {
        tracing::warn!("Saved data is not a list of games, starting empty");
        return Vec::new();
    };

    let mut ids = Vec::with_capacity(entries.len());
    let mut games = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            Some(object) => {
                ids.push(object.get("id").and_then(positive_id));
                games.push(normalize_game(object));
            }
            None => tracing::warn!(index, "Skipping game entry that is not an object"),
        }
    }

    if let Some(ids) = unique_ids(&ids) {
        for (game, id) in games.iter_mut().zip(ids) {
            game.id = id;
        }
    } else {
        tracing::warn!("Game ids missing or duplicated, renumbering");
        for (position, game) in games.iter_mut().enumerate() {
            game.id = position as u32 + 1;
        }
    }

    games
}

fn normalize_game(object: &Map<String, Value>) -> Game {
    let entries = field(object, GAME_ACHIEVEMENTS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut ids = Vec::with_capacity(entries.len());
    let mut achievements = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(object) = entry.as_object() {
            ids.push(object.get("id").and_then(positive_id));
            achievements.push(normalize_achievement(object));
        }
    }

    match unique_ids(&ids) {
        Some(ids) => {
            for (achievement, id) in achievements.iter_mut().zip(ids) {
                achievement.id = id;
            }
        }
        None => {
            for (position, achievement) in achievements.iter_mut().enumerate() {
                achievement.id = position as u32 + 1;
            }
        }
    }

    Game {
        id: 0,
        name: text(object, GAME_NAME).unwrap_or_else(|| UNTITLED_GAME.to_string()),
        platform: text(object, GAME_PLATFORM).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        genre: text(object, GAME_GENRE).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        achievements,
    }
}

fn normalize_achievement(object: &Map<String, Value>) -> Achievement {
    let unlocked = field(object, ACH_UNLOCKED).map(parse_bool).unwrap_or(false);
    let unlock_date = if unlocked {
        Some(text(object, ACH_UNLOCK_DATE).unwrap_or_else(|| UNKNOWN_UNLOCK_DATE.to_string()))
    } else {
        None
    };

    Achievement {
        id: 0,
        title: text(object, ACH_TITLE).unwrap_or_else(|| UNTITLED_ACHIEVEMENT.to_string()),
        description: text(object, ACH_DESCRIPTION).unwrap_or_default(),
        difficulty: field(object, ACH_DIFFICULTY)
            .and_then(Value::as_str)
            .and_then(Difficulty::parse)
            .unwrap_or_default(),
        unlocked,
        unlock_date,
        points: field(object, ACH_POINTS).map(points).unwrap_or(0),
    }
}

/// Permissive boolean: `true`/`false`, numbers (0 is false), and the strings
/// true/1/yes/y and false/0/no/n in any case. Anything else is false.
pub fn parse_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
        _ => false,
    }
}

fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

/// Trimmed, non-empty text. Numbers are accepted and rendered as text.
fn text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let value = match field(object, keys)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!value.is_empty()).then_some(value)
}

fn points(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v.min(u32::MAX as u64) as u32
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.clamp(0.0, u32::MAX as f64) as u32)
                    .unwrap_or(0)
            }
        }
        Value::String(s) => crate::achievements::coerce_points(s),
        _ => 0,
    }
}

fn positive_id(value: &Value) -> Option<u32> {
    let id = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(id).ok().filter(|id| *id > 0)
}

/// The ids as-is when all are present and distinct, otherwise `None`
fn unique_ids(ids: &[Option<u32>]) -> Option<Vec<u32>> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .map(|id| id.filter(|id| seen.insert(*id)))
        .collect()
}

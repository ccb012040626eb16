//! Menu actions - each runs its own prompts, then leaves a status line

use std::io;

use tracker_core::{
    filter_achievements, rank_games, stats_for_game, summarize, unlock_stamp, coerce_points,
    Difficulty, NewAchievement, TrackerError, ValidationError,
};

use super::{views, TrackerApp};
use crate::prompt::{choose, Prompter};
use crate::ui::{difficulty_label, AchievementView, MenuChoice, StatusFilter};

const NO_GAMES: &str = "⚠️ No games registered yet!";

impl TrackerApp {
    pub(crate) fn dispatch(&mut self, choice: MenuChoice, prompter: &mut dyn Prompter) -> io::Result<()> {
        match choice {
            MenuChoice::RegisterGame => self.register_game(prompter),
            MenuChoice::AddAchievement => self.add_achievement(prompter),
            MenuChoice::UnlockAchievements => self.unlock_achievements(prompter),
            MenuChoice::ViewAchievements => self.view_achievements(prompter),
            MenuChoice::Statistics => self.show_statistics(prompter),
            MenuChoice::Ranking => self.show_ranking(prompter),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn fail(&mut self, error: TrackerError) {
        tracing::info!("Action aborted: {}", error);
        self.status = Some(format!("⚠️ {}", error));
    }

    /// Ask for a game, or leave a status line if there is nothing to pick
    fn select_game(&mut self, prompter: &mut dyn Prompter) -> io::Result<Option<u32>> {
        if self.library.is_empty() {
            self.status = Some(NO_GAMES.to_string());
            return Ok(None);
        }
        let ids: Vec<u32> = self.library.games().iter().map(|g| g.id).collect();
        let library = &self.library;
        let id = choose(prompter, "Select the game:", &ids, |id| {
            library
                .find(*id)
                .map(|g| format!("{} ({})", g.name, g.platform))
                .unwrap_or_default()
        })?;
        Ok(Some(id))
    }

    fn register_game(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        let name = prompter.read_text("Game name:")?;
        if name.trim().is_empty() {
            self.fail(ValidationError::EmptyName.into());
            return Ok(());
        }
        let platform = prompter.read_text("Platform:")?;
        let genre = prompter.read_text("Genre:")?;

        match self.library.register(&name, &platform, &genre) {
            Ok(game) => {
                self.status = Some(format!("🎮 Game \"{}\" registered!", game.name));
                self.dirty = true;
            }
            Err(e) => self.fail(e),
        }
        Ok(())
    }

    fn add_achievement(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        let Some(game_id) = self.select_game(prompter)? else {
            return Ok(());
        };

        let title = prompter.read_text("Achievement title:")?;
        if title.trim().is_empty() {
            self.fail(ValidationError::EmptyTitle.into());
            return Ok(());
        }
        let description = prompter.read_text("Description:")?;
        let difficulty = choose(prompter, "Difficulty:", &Difficulty::ALL, difficulty_label)?;
        let points = coerce_points(&prompter.read_text("Points:")?);

        let new = NewAchievement {
            title,
            description,
            difficulty,
            points,
        };
        let result = self
            .library
            .find_mut(game_id)
            .and_then(|game| {
                let title = game.add_achievement(new)?.title.clone();
                Ok((title, game.name.clone()))
            });
        match result {
            Ok((title, game_name)) => {
                self.status = Some(format!("🏆 Achievement \"{}\" added to {}!", title, game_name));
                self.dirty = true;
            }
            Err(e) => self.fail(e),
        }
        Ok(())
    }

    fn unlock_achievements(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        let Some(game_id) = self.select_game(prompter)? else {
            return Ok(());
        };
        let game = match self.library.find(game_id) {
            Ok(game) => game,
            Err(e) => {
                self.fail(e);
                return Ok(());
            }
        };
        if game.achievements.is_empty() {
            self.status = Some("⚠️ This game has no achievements.".to_string());
            return Ok(());
        }

        let ids: Vec<u32> = game.achievements.iter().map(|a| a.id).collect();
        let options: Vec<(String, bool)> = game
            .achievements
            .iter()
            .map(|a| (format!("{} ({} pts)", a.title, a.points), a.unlocked))
            .collect();
        let selected: Vec<u32> = prompter
            .choose_many("Select the achievements to unlock:", &options)?
            .into_iter()
            .filter_map(|index| ids.get(index).copied())
            .collect();
        if selected.is_empty() {
            self.status = Some("⚠️ No achievements selected.".to_string());
            return Ok(());
        }

        let stamp = unlock_stamp(self.config.date_format());
        let result = match self.library.find_mut(game_id) {
            Ok(game) => game.unlock_achievements(&selected, &stamp),
            Err(e) => {
                self.fail(e);
                return Ok(());
            }
        };

        self.status = Some(match (result.unlocked, result.already_unlocked) {
            (0, 0) => "⚠️ Achievement not found!".to_string(),
            (0, _) => "✅ Already unlocked.".to_string(),
            (1, 0) => "🏅 1 achievement unlocked!".to_string(),
            (n, 0) => format!("🏅 {} achievements unlocked!", n),
            (n, already) => format!("🏅 {} unlocked ({} already unlocked).", n, already),
        });
        if result.unlocked > 0 {
            self.dirty = true;
        }
        Ok(())
    }

    fn view_achievements(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        if self.library.is_empty() {
            self.status = Some(NO_GAMES.to_string());
            return Ok(());
        }

        let view = choose(prompter, "View achievements:", &AchievementView::ALL, AchievementView::label)?;
        match view {
            AchievementView::ByGame => {
                let Some(game_id) = self.select_game(prompter)? else {
                    return Ok(());
                };
                match self.library.find(game_id) {
                    Ok(game) if game.achievements.is_empty() => {
                        self.status =
                            Some("⚠️ This game has no achievements registered.".to_string());
                    }
                    Ok(game) => prompter.display(&views::game_achievement_lines(game))?,
                    Err(e) => self.fail(e),
                }
            }
            AchievementView::ByStatus => {
                let filter = choose(prompter, "Status:", &StatusFilter::ALL, StatusFilter::label)?;
                let groups = filter_achievements(self.library.games(), filter.is_unlocked());
                if groups.is_empty() {
                    self.status = Some(format!(
                        "⚠️ No {} achievements.",
                        filter.label().to_lowercase()
                    ));
                } else {
                    prompter.display(&views::status_lines(&groups, filter))?;
                }
            }
        }
        Ok(())
    }

    fn show_statistics(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        let Some(game_id) = self.select_game(prompter)? else {
            return Ok(());
        };
        match self.library.find(game_id) {
            Ok(game) => prompter.display(&views::stats_lines(game, &stats_for_game(game)))?,
            Err(e) => self.fail(e),
        }
        Ok(())
    }

    fn show_ranking(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        if self.library.is_empty() {
            self.status = Some(NO_GAMES.to_string());
            return Ok(());
        }
        let games = self.library.games();
        prompter.display(&views::ranking_lines(&rank_games(games), &summarize(games)))
    }
}

//! Interactive session - owns the library and runs the menu loop

mod actions;
mod views;

use std::io;

use tracker_core::{Game, GameStore, Library};

use crate::config::Config;
use crate::prompt::{choose, Prompter};
use crate::ui::{MenuChoice, MENU_PROMPT, WELCOME};

pub struct TrackerApp {
    pub(crate) config: Config,
    pub(crate) library: Library,
    pub(crate) store: GameStore,
    /// Shown once at the next redraw, then cleared
    pub(crate) status: Option<String>,
    // Set by mutating actions, cleared by a successful save
    pub(crate) dirty: bool,
}

impl TrackerApp {
    pub fn new(config: Config, store: GameStore) -> Self {
        let library = Library::new(store.load());
        Self {
            config,
            library,
            store,
            status: Some(WELCOME.to_string()),
            dirty: false,
        }
    }

    pub fn games(&self) -> &[Game] {
        self.library.games()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Run the menu until the user picks Exit.
    ///
    /// State is saved after every action that changed it, before the next
    /// prompt, and once more on Exit.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> io::Result<()> {
        loop {
            prompter.show_status(self.status.take().as_deref())?;

            let choice = choose(prompter, MENU_PROMPT, &MenuChoice::ALL, MenuChoice::label)?;
            tracing::debug!(?choice, "Menu selection");

            if choice == MenuChoice::Exit {
                self.persist();
                return Ok(());
            }

            self.dispatch(choice, prompter)?;
            self.persist();
        }
    }

    /// Write the library if anything changed since the last save.
    ///
    /// Failures keep the in-memory state and retry on the next call.
    pub(crate) fn persist(&mut self) {
        if !self.dirty {
            return;
        }
        match self.store.save(self.library.games()) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::error!(path = %self.store.path().display(), "Failed to save games: {}", e);
                let warning = format!("⚠️ Could not save {}: {}", self.store.path().display(), e);
                self.status = Some(match self.status.take() {
                    Some(status) => format!("{}\n{}", status, warning),
                    None => warning,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::{Path, PathBuf};

    enum Step {
        One(usize),
        Many(Vec<usize>),
        Text(&'static str),
    }

    /// Replays canned answers and records what the session showed
    struct ScriptedPrompter {
        steps: VecDeque<Step>,
        data_file: PathBuf,
        statuses: Vec<Option<String>>,
        /// Data file contents at each redraw
        snapshots: Vec<Option<String>>,
        displayed: Vec<Vec<String>>,
        many_options: Vec<Vec<(String, bool)>>,
    }

    impl ScriptedPrompter {
        fn new(data_file: &Path, steps: Vec<Step>) -> Self {
            Self {
                steps: steps.into(),
                data_file: data_file.to_path_buf(),
                statuses: Vec::new(),
                snapshots: Vec::new(),
                displayed: Vec::new(),
                many_options: Vec::new(),
            }
        }

        fn next(&mut self) -> io::Result<Step> {
            self.steps
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn status_texts(&self) -> Vec<&str> {
            self.statuses.iter().flatten().map(String::as_str).collect()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn choose_one(&mut self, _prompt: &str, options: &[String]) -> io::Result<usize> {
            match self.next()? {
                Step::One(index) => {
                    assert!(index < options.len(), "no option {} in {:?}", index, options);
                    Ok(index)
                }
                _ => panic!("expected a single choice"),
            }
        }

        fn choose_many(&mut self, _prompt: &str, options: &[(String, bool)]) -> io::Result<Vec<usize>> {
            self.many_options.push(options.to_vec());
            match self.next()? {
                Step::Many(indices) => Ok(indices),
                _ => panic!("expected a multi choice"),
            }
        }

        fn read_text(&mut self, _prompt: &str) -> io::Result<String> {
            match self.next()? {
                Step::Text(text) => Ok(text.to_string()),
                _ => panic!("expected text input"),
            }
        }

        fn display(&mut self, lines: &[String]) -> io::Result<()> {
            self.displayed.push(lines.to_vec());
            Ok(())
        }

        fn show_status(&mut self, status: Option<&str>) -> io::Result<()> {
            self.statuses.push(status.map(str::to_string));
            self.snapshots.push(fs::read_to_string(&self.data_file).ok());
            Ok(())
        }
    }

    const REGISTER: usize = 0;
    const ADD: usize = 1;
    const UNLOCK: usize = 2;
    const VIEW: usize = 3;
    const STATS: usize = 4;
    const RANKING: usize = 5;
    const EXIT: usize = 6;

    fn app_in(dir: &Path) -> TrackerApp {
        let config = Config {
            data_file: dir.join("games.json"),
            log_dir: dir.join("logs"),
            date_format: "%d/%m/%Y".to_string(),
        };
        let store = GameStore::new(&config.data_file);
        TrackerApp::new(config, store)
    }

    fn register_celeste() -> Vec<Step> {
        vec![
            Step::One(REGISTER),
            Step::Text("Celeste"),
            Step::Text("PC"),
            Step::Text("Platformer"),
        ]
    }

    fn add_climb() -> Vec<Step> {
        vec![
            Step::One(ADD),
            Step::One(0),
            Step::Text("Climb the Mountain"),
            Step::Text(""),
            Step::One(2),
            Step::Text("100"),
        ]
    }

    fn script(parts: Vec<Vec<Step>>) -> Vec<Step> {
        parts.into_iter().flatten().collect()
    }

    #[test]
    fn test_register_is_saved_before_next_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter =
            ScriptedPrompter::new(&data_file, script(vec![register_celeste(), vec![Step::One(EXIT)]]));

        app.run(&mut prompter).unwrap();

        assert_eq!(prompter.statuses[0].as_deref(), Some(WELCOME));
        assert_eq!(prompter.snapshots[0], None);
        let saved = prompter.snapshots[1].as_deref().unwrap();
        assert!(saved.contains("\"name\": \"Celeste\""));
        assert_eq!(prompter.status_texts()[1], "🎮 Game \"Celeste\" registered!");
        assert!(!app.has_unsaved_changes());
        assert_eq!(app.games()[0].id, 1);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter = ScriptedPrompter::new(
            &data_file,
            vec![Step::One(REGISTER), Step::Text("   "), Step::One(EXIT)],
        );

        app.run(&mut prompter).unwrap();

        assert!(app.games().is_empty());
        assert_eq!(prompter.status_texts()[1], "⚠️ Game name cannot be empty");
        assert!(!data_file.exists());
    }

    #[test]
    fn test_add_and_unlock_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter = ScriptedPrompter::new(
            &data_file,
            script(vec![
                register_celeste(),
                add_climb(),
                vec![Step::One(UNLOCK), Step::One(0), Step::Many(vec![0])],
                vec![Step::One(UNLOCK), Step::One(0), Step::Many(vec![0])],
                vec![Step::One(STATS), Step::One(0)],
                vec![Step::One(EXIT)],
            ]),
        );

        app.run(&mut prompter).unwrap();

        let statuses = prompter.status_texts();
        assert_eq!(statuses[2], "🏆 Achievement \"Climb the Mountain\" added to Celeste!");
        assert_eq!(statuses[3], "🏅 1 achievement unlocked!");
        assert_eq!(statuses[4], "✅ Already unlocked.");

        // second unlock offers the achievement pre-checked
        assert_eq!(prompter.many_options[0], vec![("Climb the Mountain (100 pts)".to_string(), false)]);
        assert!(prompter.many_options[1][0].1);

        let achievement = &app.games()[0].achievements[0];
        assert!(achievement.unlocked);
        assert!(achievement.unlock_date.is_some());
        let saved = GameStore::new(&data_file).load();
        assert_eq!(saved, app.games());

        let stats = &prompter.displayed[0];
        assert!(stats.contains(&"   Unlocked: 1 (100%)".to_string()));
        assert!(stats.contains(&"   Points: 100/100".to_string()));
    }

    #[test]
    fn test_blank_title_and_bad_points() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter = ScriptedPrompter::new(
            &data_file,
            script(vec![
                register_celeste(),
                vec![Step::One(ADD), Step::One(0), Step::Text("")],
                vec![
                    Step::One(ADD),
                    Step::One(0),
                    Step::Text("Strawberry Picker"),
                    Step::Text("Collect one"),
                    Step::One(0),
                    Step::Text("ten"),
                ],
                vec![Step::One(EXIT)],
            ]),
        );

        app.run(&mut prompter).unwrap();

        assert_eq!(prompter.status_texts()[2], "⚠️ Achievement title cannot be empty");
        let achievements = &app.games()[0].achievements;
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements[0].id, 1);
        assert_eq!(achievements[0].points, 0);
    }

    #[test]
    fn test_actions_without_games() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter = ScriptedPrompter::new(
            &data_file,
            vec![
                Step::One(ADD),
                Step::One(UNLOCK),
                Step::One(VIEW),
                Step::One(STATS),
                Step::One(RANKING),
                Step::One(EXIT),
            ],
        );

        app.run(&mut prompter).unwrap();

        let statuses = prompter.status_texts();
        assert_eq!(statuses.len(), 6);
        assert!(statuses[1..].iter().all(|s| *s == "⚠️ No games registered yet!"));
        assert!(prompter.displayed.is_empty());
    }

    #[test]
    fn test_view_by_status_and_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter = ScriptedPrompter::new(
            &data_file,
            script(vec![
                register_celeste(),
                vec![Step::One(REGISTER), Step::Text("Hades"), Step::Text(""), Step::Text("")],
                add_climb(),
                // nothing unlocked yet
                vec![Step::One(VIEW), Step::One(1), Step::One(0)],
                vec![Step::One(VIEW), Step::One(1), Step::One(1)],
                vec![Step::One(VIEW), Step::One(0), Step::One(1)],
                vec![Step::One(RANKING)],
                vec![Step::One(EXIT)],
            ]),
        );

        app.run(&mut prompter).unwrap();

        let statuses = prompter.status_texts();
        assert_eq!(statuses[4], "⚠️ No unlocked achievements.");
        assert_eq!(statuses[5], "⚠️ This game has no achievements registered.");
        assert_eq!(app.games()[1].platform, "N/A");

        let locked = &prompter.displayed[0];
        assert_eq!(locked[0], "📋 Locked achievements");
        assert!(locked.contains(&"🎮 Celeste (1)".to_string()));

        let ranking = &prompter.displayed[1];
        assert!(ranking.contains(&"🥇 Celeste".to_string()));
        assert!(ranking.contains(&"🥈 Hades".to_string()));
    }

    #[test]
    fn test_unlock_with_nothing_selected() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let data_file = dir.path().join("games.json");
        let mut prompter = ScriptedPrompter::new(
            &data_file,
            script(vec![
                register_celeste(),
                vec![Step::One(UNLOCK), Step::One(0)],
                add_climb(),
                vec![Step::One(UNLOCK), Step::One(0), Step::Many(Vec::new())],
                vec![Step::One(EXIT)],
            ]),
        );

        app.run(&mut prompter).unwrap();

        let statuses = prompter.status_texts();
        assert_eq!(statuses[2], "⚠️ This game has no achievements.");
        assert_eq!(statuses[4], "⚠️ No achievements selected.");
        assert!(!app.games()[0].achievements[0].unlocked);
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let mut app = app_in(dir.path());
        app.store = GameStore::new(blocker.join("games.json"));

        let mut prompter = ScriptedPrompter::new(
            &blocker.join("games.json"),
            script(vec![register_celeste(), vec![Step::One(EXIT)]]),
        );
        app.run(&mut prompter).unwrap();

        assert_eq!(app.games().len(), 1);
        assert!(app.has_unsaved_changes());
        let status = prompter.status_texts()[1];
        assert!(status.starts_with("🎮 Game \"Celeste\" registered!\n⚠️ Could not save"));
    }

    #[test]
    fn test_loads_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("games.json");
        fs::write(
            &data_file,
            r#"[{"id": 5, "nome": "Celeste", "conquistas": [{"id": 1, "titulo": "Topo", "desbloqueada": "yes"}]}]"#,
        )
        .unwrap();

        let mut app = app_in(dir.path());
        assert_eq!(app.games()[0].name, "Celeste");
        assert!(app.games()[0].achievements[0].unlocked);

        let mut prompter = ScriptedPrompter::new(
            &data_file,
            vec![Step::One(REGISTER), Step::Text("Hades"), Step::Text(""), Step::Text(""), Step::One(EXIT)],
        );
        app.run(&mut prompter).unwrap();
        assert_eq!(app.games()[1].id, 6);
    }

    #[test]
    fn test_closed_input_ends_session_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let mut prompter = ScriptedPrompter::new(&dir.path().join("games.json"), Vec::new());
        let err = app.run(&mut prompter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

use tracker_core::Difficulty;

pub const MENU_PROMPT: &str = "🎮 Menu";
pub const WELCOME: &str = "🎮 Welcome to the achievement tracker!";
pub const FAREWELL: &str = "👋 See you next time!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterGame,
    AddAchievement,
    UnlockAchievements,
    ViewAchievements,
    Statistics,
    Ranking,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::RegisterGame,
        MenuChoice::AddAchievement,
        MenuChoice::UnlockAchievements,
        MenuChoice::ViewAchievements,
        MenuChoice::Statistics,
        MenuChoice::Ranking,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> String {
        match self {
            MenuChoice::RegisterGame => "Register game",
            MenuChoice::AddAchievement => "Add achievement",
            MenuChoice::UnlockAchievements => "Unlock achievements",
            MenuChoice::ViewAchievements => "View achievements",
            MenuChoice::Statistics => "Statistics by game",
            MenuChoice::Ranking => "Game ranking",
            MenuChoice::Exit => "Exit",
        }
        .to_string()
    }
}

/// How the achievement list is browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementView {
    ByGame,
    ByStatus,
}

impl AchievementView {
    pub const ALL: [AchievementView; 2] = [AchievementView::ByGame, AchievementView::ByStatus];

    pub fn label(&self) -> String {
        match self {
            AchievementView::ByGame => "By game".to_string(),
            AchievementView::ByStatus => "By status".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Unlocked,
    Locked,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 2] = [StatusFilter::Unlocked, StatusFilter::Locked];

    pub fn label(&self) -> String {
        match self {
            StatusFilter::Unlocked => "Unlocked".to_string(),
            StatusFilter::Locked => "Locked".to_string(),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, StatusFilter::Unlocked)
    }
}

pub fn difficulty_label(difficulty: &Difficulty) -> String {
    difficulty.label().to_string()
}

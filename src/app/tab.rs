/// Top-level views reachable from the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Study,
    Quizzes,
    Rewards,
    Profile,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Self::Dashboard,
            Self::Study,
            Self::Quizzes,
            Self::Rewards,
            Self::Profile,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Study => "Lab",
            Self::Quizzes => "Challenges",
            Self::Rewards => "Trophies",
            Self::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "🏠",
            Self::Study => "📖",
            Self::Quizzes => "⚡",
            Self::Rewards => "🏆",
            Self::Profile => "👤",
        }
    }
}

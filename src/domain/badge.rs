use serde::{Deserialize, Serialize};

/// A trophy shown on the dashboard and the rewards screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    /// Display glyph (usually a single emoji)
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub unlocked: bool,
}

impl Badge {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
        unlocked: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            unlocked,
        }
    }

    /// Label used by the rewards screen
    pub fn status_label(&self) -> &'static str {
        if self.unlocked { "Unlocked" } else { "Locked" }
    }
}

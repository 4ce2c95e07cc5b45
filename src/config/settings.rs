//! Settings configuration types

mod assistant;
mod gui;

pub use assistant::AssistantSettings;
pub use gui::GuiSettings;

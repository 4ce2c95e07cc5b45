//! GUI module for the main DrStone application
//!
//! A side navigation switches between the dashboard, the study lab, the
//! challenge list and the trophy shelf. A running quiz takes over the central
//! panel until it is finished or abandoned. The assistant window floats above
//! everything and runs its requests on a worker thread.

mod assistant_panel;
mod markdown;
mod toast;
mod views;

pub mod app;
pub mod runner;
pub mod theme;

pub use app::DrStoneApp;
pub use runner::run_gui;

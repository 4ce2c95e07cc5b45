//! CLI command implementations

pub mod ask;
pub mod catalog;
pub mod dashboard;
pub mod init;
pub mod quiz;

mod render;

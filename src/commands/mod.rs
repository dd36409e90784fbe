//! CLI commands

pub mod config;
pub mod download;
pub mod list;
pub mod open;

//! CLI subcommand handlers.

pub mod config;
pub mod info;
pub mod play;

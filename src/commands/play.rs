//! Play subcommand handler.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use trackplay::player::{run_player, PlayerOptions, ViewOptions};
use trackplay::{Config, Track};

/// Load a dat file and run the interactive player.
pub fn handle(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let track = Track::parse(&text)
        .with_context(|| format!("{}", path.display()))?;
    info!(points = track.len(), file = %path.display(), "track parsed");

    let config = Config::load()?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let opts = PlayerOptions {
        tick_interval: config.tick_interval(),
        view: ViewOptions {
            file_name,
            speed_unit: config.speed_unit,
            altitude_unit: config.altitude_unit,
        },
    };

    run_player(track, opts)
}

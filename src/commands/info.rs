//! Info subcommand handler.
//!
//! Prints a track summary, or the parsed samples as JSON with `--json`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use trackplay::Track;

pub fn handle(path: &Path, json: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let track = Track::parse(&text)
        .with_context(|| format!("{}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(track.samples())?);
        return Ok(());
    }

    print_summary(&track);
    Ok(())
}

fn print_summary(track: &Track) {
    let samples = track.samples();
    let first = &samples[0];
    let last = &samples[samples.len() - 1];
    let (min_lat, min_lon, max_lat, max_lon) = track.bounds();
    let with_speed = samples.iter().filter(|s| s.speed.is_some()).count();
    let with_altitude = samples.iter().filter(|s| s.altitude.is_some()).count();

    println!("points:    {}", track.len());
    println!("time:      {} .. {}", first.display_time, last.display_time);
    println!(
        "bounds:    lat {:.6} .. {:.6}, lon {:.6} .. {:.6}",
        min_lat, max_lat, min_lon, max_lon
    );
    println!("speed:     {}/{} samples", with_speed, track.len());
    println!("altitude:  {}/{} samples", with_altitude, track.len());
}

//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small valid track: three points heading north-west out of SF.
pub const SAMPLE_DAT: &str = "\
# sample track
20230615120000,37.774929,N,122.419416,W,10.5,15.2
20230615120010,37.775100,N,122.419500,W,11.0,15.4
20230615120020,37.775300,N,122.419700,W,11.5,15.6
";

/// Comment-only input: parses to zero valid points.
pub const EMPTY_DAT: &str = "# no data\n";

/// Write dat content to a temp file, returning the dir (for lifetime)
/// and the file path.
pub fn temp_dat(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("track.dat");
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}

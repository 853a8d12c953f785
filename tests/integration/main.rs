//! Integration test harness.

mod helpers;
mod info_test;
mod playback_test;

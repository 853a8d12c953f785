//! End-to-end playback through the public library surface.

use std::cell::RefCell;
use std::rc::Rc;

use trackplay::{PlaybackController, PlayerState, Track};

use super::helpers::SAMPLE_DAT;

#[test]
fn parse_then_replay_visits_every_point_in_order() {
    let track = Track::parse(SAMPLE_DAT).expect("valid track");
    let len = track.len();

    let mut controller = PlaybackController::new();
    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    controller.on_cursor_change(move |sample, index| {
        sink.borrow_mut().push((index, sample.display_time.clone()));
    });

    controller.load(track);
    controller.play();
    for _ in 0..len + 2 {
        controller.tick();
    }

    let visited = visited.borrow();
    let indices: Vec<usize> = visited.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(visited[0].1, "2023-06-15 12:00:00");
    assert_eq!(visited[2].1, "2023-06-15 12:00:20");
    assert_eq!(controller.state(), PlayerState::LoadedPaused);
}

#[test]
fn scrub_during_autoplay_pauses_and_repositions() {
    let track = Track::parse(SAMPLE_DAT).expect("valid track");
    let mut controller = PlaybackController::new();
    controller.load(track);
    controller.play();
    controller.tick();

    controller.seek(0);
    assert_eq!(controller.state(), PlayerState::LoadedPaused);
    assert_eq!(controller.cursor(), Some(0));
}

#[test]
fn reload_discards_previous_playback_state() {
    let first = Track::parse(SAMPLE_DAT).expect("valid track");
    let second = Track::parse("20230615130000,10.0,S,20.0,E").expect("valid track");

    let mut controller = PlaybackController::new();
    controller.load(first);
    controller.seek(2);
    controller.play();

    controller.load(second);
    assert_eq!(controller.cursor(), Some(0));
    assert_eq!(controller.state(), PlayerState::LoadedPaused);
    assert_eq!(controller.current_sample().unwrap().latitude, -10.0);
}

// Integration tests for the playback controller

use arrviz::generator::{generate, OperationRequest};
use arrviz::playback::PlaybackController;
use std::time::{Duration, Instant};

fn find_timeline() -> Vec<arrviz::snapshot::Snapshot> {
    // start + 5 checks + not found = 7 snapshots
    generate(&OperationRequest::find(&[5, 12, 8, 23, 16], 99))
}

#[test]
fn test_step_bounds_are_noops() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    let n = playback.len();

    assert!(!playback.step_backward());
    assert_eq!(playback.cursor(), 0);

    for _ in 0..n + 3 {
        playback.step_forward();
    }
    assert_eq!(playback.cursor(), n - 1);
    assert!(!playback.step_forward());
    assert_eq!(playback.cursor(), n - 1);
}

#[test]
fn test_autoplay_self_terminates() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    let n = playback.len();

    playback.play();
    assert!(playback.is_playing());
    for _ in 0..n - 1 {
        playback.tick();
    }
    assert!(!playback.is_playing());
    assert_eq!(playback.cursor(), n - 1);

    playback.tick();
    playback.tick();
    assert_eq!(playback.cursor(), n - 1);
    assert!(!playback.is_timer_armed());
}

#[test]
fn test_load_timeline_resets_playback() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    playback.step_forward();
    playback.step_forward();
    playback.play();

    playback.load_timeline(generate(&OperationRequest::pop(&[1, 2])));
    assert!(!playback.is_playing());
    assert!(!playback.is_timer_armed());
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.len(), 2);
}

#[test]
fn test_load_empty_timeline() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    playback.load_timeline(Vec::new());
    assert!(playback.active_snapshot().is_none());
    assert!(!playback.step_forward());
    assert!(!playback.step_backward());
}

#[test]
fn test_pause_is_idempotent_and_keeps_cursor() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    playback.play();
    playback.tick();
    playback.pause();
    playback.pause();
    assert!(!playback.is_playing());
    assert_eq!(playback.cursor(), 1);

    // Ticks after pause are ignored
    playback.tick();
    assert_eq!(playback.cursor(), 1);
}

#[test]
fn test_reset_keeps_timeline() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    playback.play();
    playback.tick();
    playback.tick();
    playback.reset();
    assert_eq!(playback.cursor(), 0);
    assert!(!playback.is_playing());
    assert_eq!(playback.len(), 7);
    assert_eq!(
        playback.active_snapshot().map(|s| s.narration.as_str()),
        Some("Searching for 99...")
    );
}

#[test]
fn test_play_rearms_single_timer() {
    let start = Instant::now();
    let mut playback = PlaybackController::new(Duration::from_millis(100));
    playback.load_timeline(find_timeline());

    playback.play_at(start);
    // A second play replaces the deadline instead of adding another one
    playback.play_at(start + Duration::from_millis(50));
    assert_eq!(playback.poll(start + Duration::from_millis(100)), 0);
    assert_eq!(playback.poll(start + Duration::from_millis(150)), 1);
    assert_eq!(playback.cursor(), 1);
}

#[test]
fn test_set_speed_applies_from_next_tick() {
    let start = Instant::now();
    let mut playback = PlaybackController::new(Duration::from_millis(1000));
    playback.load_timeline(find_timeline());
    playback.play_at(start);

    playback.set_speed(Duration::from_millis(200));
    assert_eq!(playback.interval(), Duration::from_millis(200));
    // The deadline already armed keeps its original wait
    assert_eq!(playback.poll(start + Duration::from_millis(999)), 0);
    assert_eq!(playback.poll(start + Duration::from_millis(1000)), 1);
    // The next one uses the new interval
    assert_eq!(playback.poll(start + Duration::from_millis(1199)), 0);
    assert_eq!(playback.poll(start + Duration::from_millis(1200)), 1);
    assert_eq!(playback.cursor(), 2);
}

#[test]
fn test_play_at_end_stays_idle() {
    let mut playback = PlaybackController::default();
    playback.load_timeline(find_timeline());
    playback.jump_to_end();
    playback.play();
    assert!(!playback.is_playing());
    assert!(!playback.is_timer_armed());
}

#[test]
fn test_independent_controllers() {
    let start = Instant::now();
    let mut a = PlaybackController::new(Duration::from_millis(100));
    let mut b = PlaybackController::new(Duration::from_millis(100));
    a.load_timeline(find_timeline());
    b.load_timeline(find_timeline());

    a.play_at(start);
    a.poll(start + Duration::from_millis(300));
    assert_eq!(a.cursor(), 3);
    assert_eq!(b.cursor(), 0);
    assert!(!b.is_playing());
}

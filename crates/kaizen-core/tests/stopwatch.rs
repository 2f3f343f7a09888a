//! Stopwatch arithmetic against a manually driven clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::Duration;
use kaizen_core::{ManualClock, Stopwatch, StopwatchState};

const T0: i64 = 1_700_000_000_000;

fn fixture() -> (ManualClock, Stopwatch<ManualClock>) {
    let clock = ManualClock::new(T0);
    let sw = Stopwatch::with_clock(clock.clone());
    (clock, sw)
}

#[test]
fn unstarted_reports_zeros() {
    let (_, sw) = fixture();
    assert_eq!(sw.state(), StopwatchState::Unstarted);
    assert_eq!(sw.start_time(), 0);
    assert_eq!(sw.end_time(), 0);
    assert_eq!(sw.elapsed_millis(), 0);
    assert_eq!(sw.duration(), Duration::zero());
    assert_eq!(sw.mean_latency_millis(0), 0.0);
    assert_eq!(sw.throughput(0), 0.0);
    assert_eq!(sw.throughput(10), 0.0);
    assert_eq!(sw.eta(0, 100), Duration::zero());
    assert_eq!(sw.to_string(), "0ms");
}

#[test]
fn running_elapsed_is_live() {
    let (clock, mut sw) = fixture();
    sw.start();
    assert!(sw.is_running());
    assert_eq!(sw.start_time(), T0);
    assert_eq!(sw.end_time(), 0);

    clock.advance(250);
    assert_eq!(sw.elapsed_millis(), 250);
    clock.advance(50);
    assert_eq!(sw.elapsed_millis(), 300);
}

#[test]
fn stopped_elapsed_is_fixed() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(200);
    sw.end();
    assert_eq!(sw.state(), StopwatchState::Stopped);
    assert_eq!(sw.end_time(), T0 + 200);

    clock.advance(5_000);
    assert_eq!(sw.elapsed_millis(), 200);
    assert_eq!(sw.elapsed_millis(), 200);
    assert_eq!(sw.duration(), Duration::milliseconds(200));
}

#[test]
fn end_again_moves_end_forward() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(100);
    sw.end();
    clock.advance(100);
    sw.end();
    assert_eq!(sw.elapsed_millis(), 200);
}

#[test]
fn fluent_chaining() {
    let (_, mut sw) = fixture();
    let elapsed = sw.start().end().elapsed_millis();
    assert_eq!(elapsed, 0);
    assert_eq!(sw.state(), StopwatchState::Stopped);
}

#[test]
fn throughput_and_mean_latency() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(500);
    sw.end();
    assert_eq!(sw.throughput(10), 20.0);
    assert_eq!(sw.mean_latency_millis(10), 50.0);
    assert_eq!(sw.mean_latency_millis(0), 0.0);
}

#[test]
fn eta_is_linear_projection() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(1024);
    // 64 items in 1024ms -> 16ms per item; 448 remaining
    assert_eq!(sw.eta(64, 512), Duration::milliseconds(7168));
    assert_eq!(sw.eta(64, 64), Duration::zero());
}

#[test]
fn eta_with_nothing_processed_is_zero() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(1000);
    assert_eq!(sw.eta(0, 500), Duration::zero());
    assert_eq!(sw.eta(0, 0), Duration::zero());
    assert_eq!(sw.eta(0, -5), Duration::zero());
}

#[test]
fn eta_with_no_elapsed_time_is_zero() {
    let (_, mut sw) = fixture();
    sw.start();
    assert_eq!(sw.eta(10, 100), Duration::zero());
}

#[test]
fn eta_is_negative_when_total_below_processed() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(1024);
    assert_eq!(sw.eta(64, 32), Duration::milliseconds(-512));
}

#[test]
fn eta_time_is_now_plus_eta() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(1024);
    let at = sw.eta_time(64, 512);
    assert_eq!(at.timestamp_millis(), T0 + 1024 + 7168);

    let at = sw.eta_time(0, 512);
    assert_eq!(at.timestamp_millis(), T0 + 1024);
}

#[test]
fn end_before_start_is_masked() {
    let (_, mut sw) = fixture();
    sw.end();
    assert_eq!(sw.start_time(), 0);
    assert_eq!(sw.end_time(), T0);
    assert_eq!(sw.elapsed_millis(), 0);
    assert_eq!(sw.state(), StopwatchState::Unstarted);
}

#[test]
fn restart_reinitialises() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(300);
    sw.end();
    clock.advance(10);
    sw.start();
    assert_eq!(sw.start_time(), T0 + 310);
    assert_eq!(sw.end_time(), 0);
    assert_eq!(sw.elapsed_millis(), 0);
    assert!(sw.is_running());
}

#[test]
fn reset_returns_to_unstarted() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(300);
    sw.reset();
    assert_eq!(sw.elapsed_millis(), 0);
    assert_eq!(sw.start_time(), 0);

    sw.start();
    clock.advance(300);
    sw.end();
    sw.reset();
    assert_eq!(sw.elapsed_millis(), 0);
    assert_eq!(sw.end_time(), 0);
    assert_eq!(sw.state(), StopwatchState::Unstarted);
}

#[test]
fn display_breaks_down_units() {
    let (clock, mut sw) = fixture();
    sw.start();
    clock.advance(86_400_000 + 2 * 3_600_000 + 3 * 60_000 + 4_000 + 5);
    sw.end();
    assert_eq!(sw.to_string(), "1d2h3m4s5ms");

    sw.start();
    clock.advance(60_000);
    assert_eq!(sw.to_string(), "1m");
}

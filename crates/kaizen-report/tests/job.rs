#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use kaizen_core::{Registry, Stopwatch, StopwatchState};
use kaizen_report::config::JobSection;
use kaizen_report::job;

fn small_job() -> JobSection {
    JobSection {
        total_items: 6,
        item_latency_ms: 4,
        jitter_ms: 2,
    }
}

#[test]
fn delays_cycle_around_latency() {
    let cfg = small_job();
    let delays: Vec<Duration> = (0..4).map(|i| job::item_delay(&cfg, i)).collect();
    assert_eq!(
        delays,
        vec![
            Duration::from_millis(2),
            Duration::from_millis(4),
            Duration::from_millis(6),
            Duration::from_millis(2),
        ]
    );
}

#[tokio::test]
async fn run_counts_every_item() {
    let reg = Registry::new();
    let mut sw = Stopwatch::new();

    let processed = job::run(&small_job(), &reg, &mut sw).await;

    assert_eq!(processed, 6);
    assert_eq!(reg.counter(&job::processed_metric()).count(), 6);
    assert_eq!(sw.state(), StopwatchState::Stopped);
    assert!(sw.elapsed_millis() >= 24);
    assert!(sw.throughput(processed) > 0.0);
}

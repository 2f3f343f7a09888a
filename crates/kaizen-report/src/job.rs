//! Simulated batch job: sleeps per item and reports progress with an ETA.

use std::time::Duration;

use kaizen_core::format::format_duration;
use kaizen_core::{Clock, MetricName, Registry, Stopwatch};

use crate::config::JobSection;

pub const PROCESSED_SCOPE: &str = "jobs";
pub const PROCESSED_NAME: &str = "processed";

pub fn processed_metric() -> MetricName {
    MetricName::new(PROCESSED_SCOPE, PROCESSED_NAME)
}

/// Per-item delay, cycling `latency - jitter`, `latency`, `latency + jitter`.
pub fn item_delay(cfg: &JobSection, index: u32) -> Duration {
    let ms = match index % 3 {
        0 => cfg.item_latency_ms.saturating_sub(cfg.jitter_ms),
        1 => cfg.item_latency_ms,
        _ => cfg.item_latency_ms + cfg.jitter_ms,
    };
    Duration::from_millis(ms)
}

/// Run the job to completion, bumping `jobs:processed` once per item.
/// The stopwatch is started here and ended when the last item is done.
pub async fn run<C: Clock>(cfg: &JobSection, registry: &Registry, sw: &mut Stopwatch<C>) -> i64 {
    let processed = registry.counter(&processed_metric());
    let total = i64::from(cfg.total_items);
    let step = (cfg.total_items / 10).max(1);

    sw.start();
    for i in 0..cfg.total_items {
        tokio::time::sleep(item_delay(cfg, i)).await;
        processed.inc();

        let done = i + 1;
        if done % step == 0 && done < cfg.total_items {
            let done = i64::from(done);
            tracing::info!(
                done,
                total,
                throughput = %format!("{:.2}", sw.throughput(done)),
                eta = %format_duration(sw.eta(done, total)),
                eta_time = %sw.eta_time(done, total).format("%H:%M:%S"),
                "progress"
            );
        }
    }
    sw.end();

    tracing::info!(total, elapsed = %sw, "job finished");
    total
}

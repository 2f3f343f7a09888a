//! kaizen-report
//!
//! Runs a simulated batch job under a stopwatch and prints a counter/timer
//! report.
//! - Usage: kaizen-report [config.yaml]
//! - Log level via RUST_LOG (e.g. RUST_LOG=info)

use tracing_subscriber::{fmt, EnvFilter};

use kaizen_core::{Registry, Stopwatch};
use kaizen_report::config::{self, ReportConfig};
use kaizen_report::{job, report::Report};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path).expect("config load failed"),
        None => ReportConfig::default(),
    };

    let registry = Registry::new();
    for name in &cfg.counters {
        registry.counter(name);
    }
    if !cfg.counters.contains(&job::processed_metric()) {
        tracing::warn!(metric = %job::processed_metric(), "job counter not pre-registered; creating on demand");
    }

    tracing::info!(total_items = cfg.job.total_items, "kaizen-report starting");

    let mut sw = Stopwatch::new();
    let processed = job::run(&cfg.job, &registry, &mut sw).await;

    let out = Report::from_registry(&registry)
        .with_timer("job", &sw, processed)
        .render(&cfg.report)
        .expect("report render failed");
    println!("{}", out.trim_end());
}

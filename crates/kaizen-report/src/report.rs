//! On-demand report over a registry snapshot and any number of stopwatches.
//!
//! Nothing here is scheduled; a report is built when the caller asks for one.

use std::fmt::Write;

use kaizen_core::error::{KaizenError, Result};
use kaizen_core::format::{format_millis, group_thousands};
use kaizen_core::{Clock, MetricName, Registry, Stopwatch};
use serde::Serialize;

use crate::config::{OutputFormat, ReportSection};

#[derive(Debug, Clone, Serialize)]
pub struct CounterLine {
    pub name: MetricName,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerLine {
    pub label: String,
    pub elapsed_ms: i64,
    pub items: i64,
    pub throughput: f64,
    pub mean_latency_ms: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub counters: Vec<CounterLine>,
    pub timers: Vec<TimerLine>,
}

impl Report {
    /// Counters in name order.
    pub fn from_registry(registry: &Registry) -> Self {
        let counters = registry
            .snapshot()
            .into_iter()
            .map(|(name, count)| CounterLine { name, count })
            .collect();
        Self {
            counters,
            timers: Vec::new(),
        }
    }

    /// Append a timer summary for `items` processed under `sw`.
    pub fn with_timer<C: Clock>(mut self, label: &str, sw: &Stopwatch<C>, items: i64) -> Self {
        self.timers.push(TimerLine {
            label: label.to_string(),
            elapsed_ms: sw.elapsed_millis(),
            items,
            throughput: sw.throughput(items),
            mean_latency_ms: sw.mean_latency_millis(items),
        });
        self
    }

    pub fn render(&self, section: &ReportSection) -> Result<String> {
        match section.format {
            OutputFormat::Text => Ok(self.render_text(section.thousands_separator)),
            OutputFormat::Json => self.render_json(),
        }
    }

    pub fn render_text(&self, thousands_separator: bool) -> String {
        let mut out = String::new();
        for c in &self.counters {
            let count = if thousands_separator {
                group_thousands(c.count)
            } else {
                c.count.to_string()
            };
            let _ = writeln!(out, "{} : count = {}", c.name, count);
        }
        for t in &self.timers {
            let _ = writeln!(
                out,
                "{}: elapsed={} throughput={:.2}/s latency={:.2}ms",
                t.label,
                format_millis(t.elapsed_ms),
                t.throughput,
                t.mean_latency_ms
            );
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KaizenError::Internal(format!("report serialization failed: {e}")))
    }
}

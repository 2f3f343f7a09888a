use std::collections::BTreeSet;

use kaizen_core::error::{KaizenError, Result};
use kaizen_core::MetricName;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub version: u32,

    #[serde(default)]
    pub report: ReportSection,

    /// Counters registered up front so they show in the report even at 0.
    #[serde(default)]
    pub counters: Vec<MetricName>,

    #[serde(default)]
    pub job: JobSection,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: 1,
            report: ReportSection::default(),
            counters: Vec::new(),
            job: JobSection::default(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(KaizenError::UnsupportedVersion(self.version));
        }

        let mut seen = BTreeSet::new();
        for name in &self.counters {
            if !seen.insert(name) {
                return Err(KaizenError::Config(format!("duplicate counter: {name}")));
            }
        }

        self.job.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            thousands_separator: default_thousands_separator(),
        }
    }
}

fn default_thousands_separator() -> bool {
    true
}

/// Simulated workload driven by the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSection {
    #[serde(default = "default_total_items")]
    pub total_items: u32,

    #[serde(default = "default_item_latency_ms")]
    pub item_latency_ms: u64,

    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

impl Default for JobSection {
    fn default() -> Self {
        Self {
            total_items: default_total_items(),
            item_latency_ms: default_item_latency_ms(),
            jitter_ms: default_jitter_ms(),
        }
    }
}

impl JobSection {
    pub fn validate(&self) -> Result<()> {
        if self.total_items == 0 {
            return Err(KaizenError::Config("job.total_items must be at least 1".into()));
        }
        if !(1..=60000).contains(&self.item_latency_ms) {
            return Err(KaizenError::Config(
                "job.item_latency_ms must be between 1 and 60000".into(),
            ));
        }
        if self.jitter_ms >= self.item_latency_ms {
            return Err(KaizenError::Config(
                "job.jitter_ms must be less than item_latency_ms".into(),
            ));
        }
        Ok(())
    }
}

fn default_total_items() -> u32 {
    50
}
fn default_item_latency_ms() -> u64 {
    20
}
fn default_jitter_ms() -> u64 {
    5
}

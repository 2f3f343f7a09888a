//! Report config loader (strict parsing).

pub mod schema;

use std::fs;

use kaizen_core::error::{KaizenError, Result};

pub use schema::{JobSection, OutputFormat, ReportConfig, ReportSection};

pub fn load_from_file(path: &str) -> Result<ReportConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| KaizenError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ReportConfig> {
    let cfg: ReportConfig = serde_yaml::from_str(s)
        .map_err(|e| KaizenError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

//! kaizen report library entry.
//!
//! Wires configuration, the simulated job, and report rendering on top of
//! `kaizen-core`. Consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod job;
pub mod report;

//! kaizen core: metric identities, counters, stopwatches, and the registry
//! that owns counters.
//!
//! Everything here is passive and pull-based. Nothing spawns threads or
//! schedules sampling; callers read values whenever they choose.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Degenerate inputs (zero elapsed time, zero item counts) resolve to fixed
//! fallback values instead of faults.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod counter;
pub mod error;
pub mod format;
pub mod name;
pub mod registry;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use counter::{Counter, Metric};
/// Shared result type.
pub use error::{KaizenError, Result};
pub use name::MetricName;
pub use registry::Registry;
pub use stopwatch::{Stopwatch, StopwatchState};

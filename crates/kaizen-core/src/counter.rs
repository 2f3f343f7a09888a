//! Atomic signed counter keyed by a `MetricName`.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::format::group_thousands;
use crate::name::MetricName;

/// Shared surface of every metric kept in a registry.
pub trait Metric: Send + Sync {
    fn name(&self) -> &MetricName;
    fn reset(&self);
}

/// Signed 64-bit accumulator.
///
/// Every mutation is a single atomic RMW, so concurrent `inc`/`dec` never lose
/// updates. Overflow wraps. Instances are handed out by
/// [`Registry`](crate::Registry), which keeps one counter per name.
#[derive(Debug)]
pub struct Counter {
    name: MetricName,
    count: AtomicI64,
}

impl Counter {
    pub(crate) fn new(name: MetricName) -> Self {
        Self {
            name,
            count: AtomicI64::new(0),
        }
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.inc_by(1);
    }

    /// Increment by an arbitrary signed delta.
    pub fn inc_by(&self, n: i64) {
        self.count.fetch_add(n, Ordering::SeqCst);
    }

    /// Decrement by 1.
    pub fn dec(&self) {
        self.dec_by(1);
    }

    /// Decrement by an arbitrary signed delta.
    pub fn dec_by(&self, n: i64) {
        self.count.fetch_sub(n, Ordering::SeqCst);
    }

    pub fn count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Absolute set to 0. A racing `inc` may land before or after.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    pub fn identity(&self) -> &MetricName {
        &self.name
    }
}

impl Metric for Counter {
    fn name(&self) -> &MetricName {
        &self.name
    }

    fn reset(&self) {
        Counter::reset(self);
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : count = {}", self.name, group_thousands(self.count()))
    }
}

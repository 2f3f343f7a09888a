use std::sync::Arc;

use dashmap::DashMap;

use crate::counter::Counter;
use crate::name::MetricName;

/// Counter registry. The only place counters are constructed, so there is at
/// most one counter per `MetricName`.
#[derive(Debug, Default)]
pub struct Registry {
    counters: DashMap<MetricName, Arc<Counter>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Get or create the counter for `name`.
    pub fn counter(&self, name: &MetricName) -> Arc<Counter> {
        if let Some(c) = self.counters.get(name) {
            return Arc::clone(c.value());
        }
        self.counters
            .entry(name.clone())
            .or_insert_with(|| {
                tracing::debug!(metric = %name, "counter registered");
                Arc::new(Counter::new(name.clone()))
            })
            .value()
            .clone()
    }

    pub fn get(&self, name: &MetricName) -> Option<Arc<Counter>> {
        self.counters.get(name).map(|c| Arc::clone(c.value()))
    }

    /// Drop `name` from the registry. Outstanding handles keep working but are
    /// no longer reachable from here.
    pub fn remove(&self, name: &MetricName) -> Option<Arc<Counter>> {
        let removed = self.counters.remove(name).map(|(_, c)| c);
        if removed.is_some() {
            tracing::debug!(metric = %name, "counter removed");
        }
        removed
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<MetricName> {
        let mut names: Vec<MetricName> = self.counters.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// `(name, count)` for every counter, sorted by name.
    pub fn snapshot(&self) -> Vec<(MetricName, i64)> {
        let mut out: Vec<(MetricName, i64)> = self
            .counters
            .iter()
            .map(|e| (e.key().clone(), e.value().count()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn reset_all(&self) {
        for e in self.counters.iter() {
            e.value().reset();
        }
        tracing::debug!(len = self.counters.len(), "all counters reset");
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

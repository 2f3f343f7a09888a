//! Manually driven stopwatch with derived rate metrics.
//!
//! The stopwatch measures from `start()` until `end()`. While running, elapsed
//! time is live (`now - start`); once ended it is fixed and replayable.
//! Throughput, mean latency, and the ETA are computed from the elapsed time and
//! progress counts supplied by the caller.
//!
//! Degenerate inputs never fail:
//! - elapsed time of 0 yields a throughput of 0
//! - an item count of 0 yields a mean latency of 0
//! - 0 processed items yields a zero ETA
//! - `total < processed` yields a negative ETA (not clamped)

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::clock::{Clock, SystemClock};
use crate::format::format_millis;

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    Unstarted,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unstarted,
    Running { start: i64 },
    Stopped { start: i64, end: i64 },
    /// `end()` without a preceding `start()`. Keeps the end timestamp but
    /// measures nothing.
    EndedUnstarted { end: i64 },
}

/// Single-owner stopwatch. Mutation takes `&mut self`; share across threads
/// only behind external synchronization.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    state: State,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: State::Unstarted,
        }
    }

    /// Reset, then record the start time.
    pub fn start(&mut self) -> &mut Self {
        self.reset();
        self.state = State::Running {
            start: self.clock.now_millis(),
        };
        self
    }

    /// Record the end time. Calling it again moves the end time forward.
    pub fn end(&mut self) -> &mut Self {
        let end = self.clock.now_millis();
        self.state = match self.state {
            State::Running { start } | State::Stopped { start, .. } => State::Stopped { start, end },
            State::Unstarted | State::EndedUnstarted { .. } => {
                tracing::trace!("stopwatch ended before it was started");
                State::EndedUnstarted { end }
            }
        };
        self
    }

    /// Clear both timestamps without reading the clock.
    pub fn reset(&mut self) -> &mut Self {
        self.state = State::Unstarted;
        self
    }

    pub fn state(&self) -> StopwatchState {
        match self.state {
            State::Unstarted | State::EndedUnstarted { .. } => StopwatchState::Unstarted,
            State::Running { .. } => StopwatchState::Running,
            State::Stopped { .. } => StopwatchState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == StopwatchState::Running
    }

    /// Start time in epoch millis, or 0 if not started.
    pub fn start_time(&self) -> i64 {
        match self.state {
            State::Running { start } | State::Stopped { start, .. } => start,
            State::Unstarted | State::EndedUnstarted { .. } => 0,
        }
    }

    /// End time in epoch millis, or 0 if not ended.
    pub fn end_time(&self) -> i64 {
        match self.state {
            State::Stopped { end, .. } | State::EndedUnstarted { end } => end,
            State::Unstarted | State::Running { .. } => 0,
        }
    }

    /// 0 when never started, live while running, fixed once ended.
    pub fn elapsed_millis(&self) -> i64 {
        match self.state {
            State::Unstarted | State::EndedUnstarted { .. } => 0,
            State::Running { start } => self.clock.now_millis().saturating_sub(start),
            State::Stopped { start, end } => end.saturating_sub(start),
        }
    }

    pub fn duration(&self) -> Duration {
        millis_to_duration(self.elapsed_millis())
    }

    /// Items per second, or 0 when no time has elapsed.
    pub fn throughput(&self, items: i64) -> f64 {
        let elapsed = self.elapsed_millis();
        if elapsed == 0 {
            return 0.0;
        }
        items as f64 / (elapsed as f64 / 1000.0)
    }

    /// Milliseconds per item, or 0 when `items` is 0.
    pub fn mean_latency_millis(&self, items: i64) -> f64 {
        if items == 0 {
            return 0.0;
        }
        self.elapsed_millis() as f64 / items as f64
    }

    /// Remaining time assuming the rate observed so far holds for every
    /// remaining item. Truncated to whole milliseconds.
    pub fn eta(&self, processed: i64, total: i64) -> Duration {
        if processed == 0 {
            return Duration::zero();
        }

        // items per millisecond; infinite when nothing has elapsed, which
        // drives the projection to 0
        let throughput = processed as f64 / self.elapsed_millis() as f64;
        let remaining = (total as f64 - processed as f64) / throughput;
        millis_to_duration(remaining as i64)
    }

    /// Wall-clock instant at which `total` items are projected to be done.
    pub fn eta_time(&self, processed: i64, total: i64) -> DateTime<Utc> {
        let eta = self.eta(processed, total);
        let now = self.clock.now();
        now.checked_add_signed(eta).unwrap_or(if eta < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }
}

impl<C: Clock> fmt::Display for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_millis(self.elapsed_millis()))
    }
}

// chrono rejects i64::MIN milliseconds
fn millis_to_duration(millis: i64) -> Duration {
    Duration::milliseconds(millis.max(-i64::MAX))
}

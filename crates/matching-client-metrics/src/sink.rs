//! The metrics backend seam.

use crate::scope::{MetricKind, MetricScope};
use std::time::{Duration, Instant};

/// Destination for the decorator's measurements.
///
/// Implementations must tolerate concurrent calls from many tasks and must not
/// fail: a sink that cannot deliver a measurement drops it.
pub trait MetricsSink: Send + Sync {
    /// Increments the counter `kind` in `scope` by one.
    fn inc_counter(&self, scope: MetricScope, kind: MetricKind);

    /// Records one elapsed duration for the timer `kind` in `scope`.
    fn record_duration(&self, scope: MetricScope, kind: MetricKind, elapsed: Duration);
}

/// Timer helpers available on every [`MetricsSink`], including `dyn MetricsSink`.
pub trait MetricsSinkExt: MetricsSink {
    /// Starts a timer that records into this sink when stopped or dropped.
    fn start_timer(&self, scope: MetricScope, kind: MetricKind) -> Stopwatch<'_, Self> {
        Stopwatch::start(self, scope, kind)
    }
}

impl<M: MetricsSink + ?Sized> MetricsSinkExt for M {}

/// A running timer bound to a sink.
///
/// [`stop`](Stopwatch::stop) records the elapsed time. A stopwatch dropped
/// without being stopped (an unwinding panic, a cancelled future) records on
/// drop instead, so every started timer is recorded exactly once.
#[must_use = "a stopwatch records when stopped or dropped"]
pub struct Stopwatch<'a, M: MetricsSink + ?Sized> {
    sink: &'a M,
    scope: MetricScope,
    kind: MetricKind,
    started: Option<Instant>,
}

impl<'a, M: MetricsSink + ?Sized> Stopwatch<'a, M> {
    /// Starts timing now.
    pub fn start(sink: &'a M, scope: MetricScope, kind: MetricKind) -> Self {
        Self {
            sink,
            scope,
            kind,
            started: Some(Instant::now()),
        }
    }

    /// Stops the timer, records the elapsed time and returns it.
    pub fn stop(mut self) -> Duration {
        self.record().unwrap_or_default()
    }

    fn record(&mut self) -> Option<Duration> {
        let elapsed = self.started.take()?.elapsed();
        self.sink.record_duration(self.scope, self.kind, elapsed);
        Some(elapsed)
    }
}

impl<M: MetricsSink + ?Sized> Drop for Stopwatch<'_, M> {
    fn drop(&mut self) {
        self.record();
    }
}

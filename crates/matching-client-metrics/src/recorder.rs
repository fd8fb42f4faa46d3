//! A sink backed by the `metrics` facade.

use crate::scope::{MetricKind, MetricScope};
use crate::sink::MetricsSink;
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use std::sync::Once;
use std::time::Duration;

static METRICS_INIT: Once = Once::new();

/// Emits through whatever recorder is installed for the `metrics` facade.
///
/// Counters are emitted as `metrics` counters and timers as histograms in
/// seconds. Every metric carries an `operation` label holding the scope name.
#[derive(Debug, Clone, Copy)]
pub struct RecorderSink {
    _private: (),
}

impl RecorderSink {
    /// Creates a sink, registering metric descriptions on first use.
    pub fn new() -> Self {
        METRICS_INIT.call_once(|| {
            for kind in MetricKind::ALL {
                if kind.is_timer() {
                    describe_histogram!(kind.metric_name(), Unit::Seconds, kind.description());
                } else {
                    describe_counter!(kind.metric_name(), kind.description());
                }
            }
        });
        Self { _private: () }
    }
}

impl Default for RecorderSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for RecorderSink {
    fn inc_counter(&self, scope: MetricScope, kind: MetricKind) {
        counter!(kind.metric_name(), "operation" => scope.as_str()).increment(1);
    }

    fn record_duration(&self, scope: MetricScope, kind: MetricKind, elapsed: Duration) {
        histogram!(kind.metric_name(), "operation" => scope.as_str()).record(elapsed.as_secs_f64());
    }
}

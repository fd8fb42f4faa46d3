//! Per-call context and options passed through to the transport.

use std::time::{Duration, Instant};

/// Caller-supplied context for a single call.
///
/// Decorators pass it through unchanged; only the transport interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// Creates a context without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Creates a context with an absolute deadline.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the time left before the deadline. `Some(Duration::ZERO)` once
    /// it has passed, `None` without a deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

/// A transport-level option for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOption {
    /// Adds an application header to the outbound request.
    Header {
        /// Header key.
        key: String,
        /// Header value.
        value: String,
    },
    /// Sets the shard key used for request routing.
    ShardKey(String),
    /// Overrides the service name used for routing.
    RoutingKey(String),
    /// Routes through a delegate service.
    RoutingDelegate(String),
}

impl CallOption {
    /// Convenience constructor for [`CallOption::Header`].
    pub fn header(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

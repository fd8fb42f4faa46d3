//! Errors reported by matching clients.

use std::time::Duration;

/// Errors a matching client can return.
///
/// Decorators never construct these; they pass whatever the wrapped client
/// returned straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchingError {
    /// The request was malformed or failed validation.
    #[error("bad request: {message}")]
    BadRequest {
        /// Details from the service.
        message: String,
    },
    /// A domain, workflow or task list referenced by the request does not exist.
    #[error("entity not exists: {message}")]
    EntityNotExists {
        /// Details from the service.
        message: String,
    },
    /// The service shed the request.
    #[error("service busy: {message}")]
    ServiceBusy {
        /// Details from the service.
        message: String,
    },
    /// A per-domain or per-task-list limit was hit.
    #[error("limit exceeded: {message}")]
    LimitExceeded {
        /// Details from the service.
        message: String,
    },
    /// The query was rejected or failed on the worker.
    #[error("query failed: {message}")]
    QueryFailed {
        /// Details from the service.
        message: String,
    },
    /// The call outlived its deadline.
    #[error("deadline exceeded after {elapsed:?}")]
    DeadlineExceeded {
        /// Time spent before giving up.
        elapsed: Duration,
    },
    /// The caller cancelled the call.
    #[error("call cancelled")]
    Cancelled,
    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(String),
    /// The service failed internally.
    #[error("internal service error: {message}")]
    Internal {
        /// Details from the service.
        message: String,
    },
}

impl MatchingError {
    /// Returns true if retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ServiceBusy { .. }
                | Self::LimitExceeded { .. }
                | Self::DeadlineExceeded { .. }
                | Self::Transport(_)
                | Self::Internal { .. }
        )
    }

    /// Returns true for deadline and cancellation errors.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::DeadlineExceeded { .. } | Self::Cancelled)
    }
}

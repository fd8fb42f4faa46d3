//! Metric scopes and metric kinds.

use matching_client::Operation;
use std::fmt;

/// Groups every metric emitted for one matching operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricScope {
    AddActivityTask,
    AddDecisionTask,
    PollForActivityTask,
    PollForDecisionTask,
    QueryWorkflow,
    RespondQueryTaskCompleted,
    CancelOutstandingPoll,
    DescribeTaskList,
    ListTaskListPartitions,
}

impl MetricScope {
    /// Returns the scope name used as the `operation` label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddActivityTask => "MatchingClientAddActivityTask",
            Self::AddDecisionTask => "MatchingClientAddDecisionTask",
            Self::PollForActivityTask => "MatchingClientPollForActivityTask",
            Self::PollForDecisionTask => "MatchingClientPollForDecisionTask",
            Self::QueryWorkflow => "MatchingClientQueryWorkflow",
            Self::RespondQueryTaskCompleted => "MatchingClientRespondQueryTaskCompleted",
            Self::CancelOutstandingPoll => "MatchingClientCancelOutstandingPoll",
            Self::DescribeTaskList => "MatchingClientDescribeTaskList",
            Self::ListTaskListPartitions => "MatchingClientListTaskListPartitions",
        }
    }
}

impl From<Operation> for MetricScope {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::AddActivityTask => Self::AddActivityTask,
            Operation::AddDecisionTask => Self::AddDecisionTask,
            Operation::PollForActivityTask => Self::PollForActivityTask,
            Operation::PollForDecisionTask => Self::PollForDecisionTask,
            Operation::QueryWorkflow => Self::QueryWorkflow,
            Operation::RespondQueryTaskCompleted => Self::RespondQueryTaskCompleted,
            Operation::CancelOutstandingPoll => Self::CancelOutstandingPoll,
            Operation::DescribeTaskList => Self::DescribeTaskList,
            Operation::ListTaskListPartitions => Self::ListTaskListPartitions,
        }
    }
}

impl fmt::Display for MetricScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of measurement recorded within a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Calls made, counted before the inner call.
    Requests,
    /// Duration of the inner call. The only timer kind.
    Latency,
    /// Calls whose inner result was an error.
    Failures,
    /// Calls carrying a non-empty forwarded-from partition.
    Forwarded,
    /// Unforwarded calls addressed to a reserved child-partition name.
    InvalidTaskListName,
}

impl MetricKind {
    /// Every kind, in declaration order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Requests,
        MetricKind::Latency,
        MetricKind::Failures,
        MetricKind::Forwarded,
        MetricKind::InvalidTaskListName,
    ];

    /// Returns the metric name.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Self::Requests => "cadence_client_requests",
            Self::Latency => "cadence_client_latency",
            Self::Failures => "cadence_client_errors",
            Self::Forwarded => "forwarded",
            Self::InvalidTaskListName => "invalid_task_list_name",
        }
    }

    /// Returns the human-readable description registered with the recorder.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Requests => "Total number of matching client calls",
            Self::Latency => "Duration of matching client calls",
            Self::Failures => "Total number of matching client calls that returned an error",
            Self::Forwarded => "Total number of requests forwarded from a child partition",
            Self::InvalidTaskListName => {
                "Total number of unforwarded requests addressed to a child partition"
            }
        }
    }

    /// Returns true if this kind is recorded as a duration.
    pub fn is_timer(&self) -> bool {
        matches!(self, Self::Latency)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.metric_name())
    }
}

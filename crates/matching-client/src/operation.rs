//! The fixed set of matching RPCs.

use std::fmt;

/// One matching service RPC. Each variant corresponds to exactly one
/// [`MatchingClient`](crate::MatchingClient) method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
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

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 9] = [
        Operation::AddActivityTask,
        Operation::AddDecisionTask,
        Operation::PollForActivityTask,
        Operation::PollForDecisionTask,
        Operation::QueryWorkflow,
        Operation::RespondQueryTaskCompleted,
        Operation::CancelOutstandingPoll,
        Operation::DescribeTaskList,
        Operation::ListTaskListPartitions,
    ];

    /// Returns the RPC method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddActivityTask => "AddActivityTask",
            Self::AddDecisionTask => "AddDecisionTask",
            Self::PollForActivityTask => "PollForActivityTask",
            Self::PollForDecisionTask => "PollForDecisionTask",
            Self::QueryWorkflow => "QueryWorkflow",
            Self::RespondQueryTaskCompleted => "RespondQueryTaskCompleted",
            Self::CancelOutstandingPoll => "CancelOutstandingPoll",
            Self::DescribeTaskList => "DescribeTaskList",
            Self::ListTaskListPartitions => "ListTaskListPartitions",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Request and response types for the matching RPCs.
//!
//! These mirror the matching service's wire shapes closely enough for a
//! transport to map them one to one. Optional sub-messages are `Option`s;
//! an empty `forwarded_from` means the request was not forwarded.

/// Kind of a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskListKind {
    #[default]
    Normal,
    /// A worker-specific list used for sticky decision execution.
    Sticky,
}

/// Type of tasks a task list carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskListType {
    #[default]
    Decision,
    Activity,
}

/// A named task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskList {
    pub name: String,
    pub kind: Option<TaskListKind>,
}

impl TaskList {
    /// Creates a normal task list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Some(TaskListKind::Normal),
        }
    }

    /// Creates a sticky task list with the given name.
    pub fn sticky(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Some(TaskListKind::Sticky),
        }
    }

    /// Returns true if the name starts with `prefix`, i.e. the list is an
    /// internal child partition when `prefix` is the reserved prefix.
    pub fn has_reserved_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }
}

/// Routing information carried by requests that target a task list.
///
/// Implemented by every request that can be forwarded between partitions.
pub trait ForwardingInfo {
    /// Name of the partition that forwarded this request; empty if the
    /// request was not forwarded.
    fn forwarded_from(&self) -> &str;

    /// The task list this request targets, if present.
    ///
    /// Long-poll requests resolve this through their nested poll request and
    /// return `None` when that request is absent.
    fn task_list(&self) -> Option<&TaskList>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkflowExecution {
    pub workflow_id: String,
    pub run_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowType {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityType {
    pub name: String,
}

/// Where a task originated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSource {
    #[default]
    History,
    DbBacklog,
}

/// Poller-side rate limiting hints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListMetadata {
    pub max_tasks_per_second: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddActivityTaskRequest {
    pub domain_uuid: String,
    pub execution: Option<WorkflowExecution>,
    pub source_domain_uuid: String,
    pub task_list: Option<TaskList>,
    pub schedule_id: i64,
    pub schedule_to_start_timeout_seconds: Option<i32>,
    pub source: Option<TaskSource>,
    pub forwarded_from: String,
}

impl ForwardingInfo for AddActivityTaskRequest {
    fn forwarded_from(&self) -> &str {
        &self.forwarded_from
    }

    fn task_list(&self) -> Option<&TaskList> {
        self.task_list.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddDecisionTaskRequest {
    pub domain_uuid: String,
    pub execution: Option<WorkflowExecution>,
    pub task_list: Option<TaskList>,
    pub schedule_id: i64,
    pub schedule_to_start_timeout_seconds: Option<i32>,
    pub source: Option<TaskSource>,
    pub forwarded_from: String,
}

impl ForwardingInfo for AddDecisionTaskRequest {
    fn forwarded_from(&self) -> &str {
        &self.forwarded_from
    }

    fn task_list(&self) -> Option<&TaskList> {
        self.task_list.as_ref()
    }
}

/// The frontend-facing activity poll carried inside
/// [`MatchingPollForActivityTaskRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollForActivityTaskRequest {
    pub domain: String,
    pub task_list: Option<TaskList>,
    pub identity: String,
    pub task_list_metadata: Option<TaskListMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchingPollForActivityTaskRequest {
    pub domain_uuid: String,
    pub poller_id: String,
    pub poll_request: Option<PollForActivityTaskRequest>,
    pub forwarded_from: String,
    pub isolation_group: String,
}

impl ForwardingInfo for MatchingPollForActivityTaskRequest {
    fn forwarded_from(&self) -> &str {
        &self.forwarded_from
    }

    fn task_list(&self) -> Option<&TaskList> {
        self.poll_request.as_ref()?.task_list.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollForActivityTaskResponse {
    pub task_token: Vec<u8>,
    pub workflow_execution: Option<WorkflowExecution>,
    pub activity_id: String,
    pub activity_type: Option<ActivityType>,
    pub input: Vec<u8>,
    pub scheduled_timestamp: Option<i64>,
    pub started_timestamp: Option<i64>,
    pub schedule_to_close_timeout_seconds: Option<i32>,
    pub start_to_close_timeout_seconds: Option<i32>,
    pub heartbeat_timeout_seconds: Option<i32>,
    pub attempt: i32,
    pub workflow_type: Option<WorkflowType>,
    pub workflow_domain: String,
}

/// The frontend-facing decision poll carried inside
/// [`MatchingPollForDecisionTaskRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollForDecisionTaskRequest {
    pub domain: String,
    pub task_list: Option<TaskList>,
    pub identity: String,
    pub binary_checksum: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingPollForDecisionTaskRequest {
    pub domain_uuid: String,
    pub poller_id: String,
    pub poll_request: Option<PollForDecisionTaskRequest>,
    pub forwarded_from: String,
    pub isolation_group: String,
}

impl ForwardingInfo for MatchingPollForDecisionTaskRequest {
    fn forwarded_from(&self) -> &str {
        &self.forwarded_from
    }

    fn task_list(&self) -> Option<&TaskList> {
        self.poll_request.as_ref()?.task_list.as_ref()
    }
}

/// A query delivered to a worker alongside a decision task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowQuery {
    pub query_type: String,
    pub query_args: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingPollForDecisionTaskResponse {
    pub task_token: Vec<u8>,
    pub workflow_execution: Option<WorkflowExecution>,
    pub workflow_type: Option<WorkflowType>,
    pub previous_started_event_id: Option<i64>,
    pub started_event_id: i64,
    pub attempt: i64,
    pub next_event_id: i64,
    pub backlog_count_hint: i64,
    pub sticky_execution_enabled: bool,
    pub query: Option<WorkflowQuery>,
    pub workflow_execution_task_list: Option<TaskList>,
    pub scheduled_timestamp: Option<i64>,
    pub started_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryWorkflowRequest {
    pub domain: String,
    pub execution: Option<WorkflowExecution>,
    pub query: Option<WorkflowQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingQueryWorkflowRequest {
    pub domain_uuid: String,
    pub task_list: Option<TaskList>,
    pub query_request: Option<QueryWorkflowRequest>,
    pub forwarded_from: String,
}

impl ForwardingInfo for MatchingQueryWorkflowRequest {
    fn forwarded_from(&self) -> &str {
        &self.forwarded_from
    }

    fn task_list(&self) -> Option<&TaskList> {
        self.task_list.as_ref()
    }
}

/// Why a query was rejected without being dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRejected {
    pub close_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryWorkflowResponse {
    pub query_result: Option<Vec<u8>>,
    pub query_rejected: Option<QueryRejected>,
}

/// Outcome of a query task as reported by the worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryTaskCompletedType {
    #[default]
    Completed,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RespondQueryTaskCompletedRequest {
    pub task_token: Vec<u8>,
    pub completed_type: Option<QueryTaskCompletedType>,
    pub query_result: Option<Vec<u8>>,
    pub error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingRespondQueryTaskCompletedRequest {
    pub domain_uuid: String,
    pub task_list: Option<TaskList>,
    pub task_id: String,
    pub completed_request: Option<RespondQueryTaskCompletedRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelOutstandingPollRequest {
    pub domain_uuid: String,
    pub task_list_type: Option<TaskListType>,
    pub task_list: Option<TaskList>,
    pub poller_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeTaskListRequest {
    pub domain: String,
    pub task_list: Option<TaskList>,
    pub task_list_type: Option<TaskListType>,
    pub include_task_list_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingDescribeTaskListRequest {
    pub domain_uuid: String,
    pub desc_request: Option<DescribeTaskListRequest>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollerInfo {
    pub last_access_time: Option<i64>,
    pub identity: String,
    pub rate_per_second: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListStatus {
    pub backlog_count_hint: i64,
    pub read_level: i64,
    pub ack_level: i64,
    pub rate_per_second: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeTaskListResponse {
    pub pollers: Vec<PollerInfo>,
    pub task_list_status: Option<TaskListStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingListTaskListPartitionsRequest {
    pub domain: String,
    pub task_list: Option<TaskList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListPartitionMetadata {
    pub key: String,
    pub owner_host_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTaskListPartitionsResponse {
    pub activity_task_list_partitions: Vec<TaskListPartitionMetadata>,
    pub decision_task_list_partitions: Vec<TaskListPartitionMetadata>,
}

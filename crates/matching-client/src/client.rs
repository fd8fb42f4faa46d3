//! The matching client contract.

use crate::options::{CallContext, CallOption};
use crate::types::*;
use std::future::Future;

/// A client for the matching service.
///
/// Every method takes the caller's [`CallContext`], the typed request and the
/// transport options for the call, and resolves to the typed response (or `()`)
/// or the client's error.
///
/// Decorators implement this trait by wrapping another `MatchingClient`, which
/// makes them interchangeable with the client they wrap.
pub trait MatchingClient: Send + Sync {
    /// Error returned by every call.
    type Error: Send;

    /// Adds an activity task to a task list.
    fn add_activity_task(
        &self,
        ctx: CallContext,
        request: AddActivityTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Adds a decision task to a task list.
    fn add_decision_task(
        &self,
        ctx: CallContext,
        request: AddDecisionTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Long-polls a task list for an activity task.
    fn poll_for_activity_task(
        &self,
        ctx: CallContext,
        request: MatchingPollForActivityTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<PollForActivityTaskResponse, Self::Error>> + Send;

    /// Long-polls a task list for a decision task.
    fn poll_for_decision_task(
        &self,
        ctx: CallContext,
        request: MatchingPollForDecisionTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<MatchingPollForDecisionTaskResponse, Self::Error>> + Send;

    /// Dispatches a query to a worker polling the task list.
    fn query_workflow(
        &self,
        ctx: CallContext,
        request: MatchingQueryWorkflowRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<QueryWorkflowResponse, Self::Error>> + Send;

    /// Delivers a worker's answer to a query task.
    fn respond_query_task_completed(
        &self,
        ctx: CallContext,
        request: MatchingRespondQueryTaskCompletedRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Cancels a poller's outstanding long poll.
    fn cancel_outstanding_poll(
        &self,
        ctx: CallContext,
        request: CancelOutstandingPollRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Describes the pollers and backlog of a task list.
    fn describe_task_list(
        &self,
        ctx: CallContext,
        request: MatchingDescribeTaskListRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<DescribeTaskListResponse, Self::Error>> + Send;

    /// Lists the partitions of a task list and their owners.
    fn list_task_list_partitions(
        &self,
        ctx: CallContext,
        request: MatchingListTaskListPartitionsRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<ListTaskListPartitionsResponse, Self::Error>> + Send;
}

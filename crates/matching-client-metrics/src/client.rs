//! The metric-emitting client decorator.

use crate::config::MetricClientConfig;
use crate::scope::{MetricKind, MetricScope};
use crate::sink::{MetricsSink, MetricsSinkExt, Stopwatch};
use matching_client::*;
use std::future::Future;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};

/// A [`MatchingClient`] that records call metrics around an inner client.
///
/// For every call it increments the operation's request counter, times the
/// inner call, counts failures, and for task-list-bearing requests records
/// whether the request was forwarded or wrongly addressed to a child
/// partition. Requests, responses and errors pass through untouched.
pub struct MetricClient<C, M: ?Sized> {
    client: C,
    metrics: Arc<M>,
    config: Arc<MetricClientConfig>,
}

impl<C, M> MetricClient<C, M>
where
    M: MetricsSink + ?Sized,
{
    /// Wraps `client`, emitting into `metrics` with the default configuration.
    pub fn new(client: C, metrics: Arc<M>) -> Self {
        Self::with_config(client, metrics, MetricClientConfig::default())
    }

    /// Wraps `client` with an explicit configuration.
    pub fn with_config(client: C, metrics: Arc<M>, config: MetricClientConfig) -> Self {
        Self::from_parts(client, metrics, Arc::new(config))
    }

    pub(crate) fn from_parts(
        client: C,
        metrics: Arc<M>,
        config: Arc<MetricClientConfig>,
    ) -> Self {
        Self {
            client,
            metrics,
            config,
        }
    }

    /// Returns a reference to the wrapped client.
    pub fn get_ref(&self) -> &C {
        &self.client
    }

    /// Returns the sink this client emits into.
    pub fn metrics(&self) -> &Arc<M> {
        &self.metrics
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MetricClientConfig {
        &self.config
    }

    /// Consumes the decorator, returning the wrapped client.
    pub fn into_inner(self) -> C {
        self.client
    }

    fn begin(&self, scope: MetricScope) -> Stopwatch<'_, M> {
        self.metrics.inc_counter(scope, MetricKind::Requests);
        self.metrics.start_timer(scope, MetricKind::Latency)
    }

    fn emit_forwarded_from_stats(&self, scope: MetricScope, request: &impl ForwardingInfo) {
        let Some(task_list) = request.task_list() else {
            return;
        };

        if !request.forwarded_from().is_empty() {
            self.metrics.inc_counter(scope, MetricKind::Forwarded);

            #[cfg(feature = "tracing")]
            trace!(
                client = %self.config.name,
                operation = scope.as_str(),
                forwarded_from = request.forwarded_from(),
                "Forwarded request"
            );
        } else if task_list.has_reserved_prefix(&self.config.reserved_task_list_prefix) {
            self.metrics
                .inc_counter(scope, MetricKind::InvalidTaskListName);

            #[cfg(feature = "tracing")]
            warn!(
                client = %self.config.name,
                operation = scope.as_str(),
                task_list = %task_list.name,
                "Child partition addressed without forwarding"
            );
        }
    }

    fn finish<T, E>(&self, scope: MetricScope, stopwatch: Stopwatch<'_, M>, result: &Result<T, E>) {
        let _elapsed = stopwatch.stop();

        if result.is_err() {
            self.metrics.inc_counter(scope, MetricKind::Failures);

            #[cfg(feature = "tracing")]
            debug!(
                client = %self.config.name,
                operation = scope.as_str(),
                duration_ms = _elapsed.as_millis(),
                "Matching call failed"
            );
        }
    }
}

impl<C: Clone, M: ?Sized> Clone for MetricClient<C, M> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            metrics: Arc::clone(&self.metrics),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C, M> MatchingClient for MetricClient<C, M>
where
    C: MatchingClient,
    M: MetricsSink + ?Sized,
{
    type Error = C::Error;

    fn add_activity_task(
        &self,
        ctx: CallContext,
        request: AddActivityTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let scope = MetricScope::AddActivityTask;
            let stopwatch = self.begin(scope);
            self.emit_forwarded_from_stats(scope, &request);

            let result = self.client.add_activity_task(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn add_decision_task(
        &self,
        ctx: CallContext,
        request: AddDecisionTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let scope = MetricScope::AddDecisionTask;
            let stopwatch = self.begin(scope);
            self.emit_forwarded_from_stats(scope, &request);

            let result = self.client.add_decision_task(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn poll_for_activity_task(
        &self,
        ctx: CallContext,
        request: MatchingPollForActivityTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<PollForActivityTaskResponse, Self::Error>> + Send {
        async move {
            let scope = MetricScope::PollForActivityTask;
            let stopwatch = self.begin(scope);
            // No-op when the nested poll request is absent.
            self.emit_forwarded_from_stats(scope, &request);

            let result = self.client.poll_for_activity_task(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn poll_for_decision_task(
        &self,
        ctx: CallContext,
        request: MatchingPollForDecisionTaskRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<MatchingPollForDecisionTaskResponse, Self::Error>> + Send {
        async move {
            let scope = MetricScope::PollForDecisionTask;
            let stopwatch = self.begin(scope);
            self.emit_forwarded_from_stats(scope, &request);

            let result = self.client.poll_for_decision_task(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn query_workflow(
        &self,
        ctx: CallContext,
        request: MatchingQueryWorkflowRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<QueryWorkflowResponse, Self::Error>> + Send {
        async move {
            let scope = MetricScope::QueryWorkflow;
            let stopwatch = self.begin(scope);
            self.emit_forwarded_from_stats(scope, &request);

            let result = self.client.query_workflow(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn respond_query_task_completed(
        &self,
        ctx: CallContext,
        request: MatchingRespondQueryTaskCompletedRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let scope = MetricScope::RespondQueryTaskCompleted;
            let stopwatch = self.begin(scope);

            let result = self
                .client
                .respond_query_task_completed(ctx, request, opts)
                .await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn cancel_outstanding_poll(
        &self,
        ctx: CallContext,
        request: CancelOutstandingPollRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let scope = MetricScope::CancelOutstandingPoll;
            let stopwatch = self.begin(scope);

            let result = self.client.cancel_outstanding_poll(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn describe_task_list(
        &self,
        ctx: CallContext,
        request: MatchingDescribeTaskListRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<DescribeTaskListResponse, Self::Error>> + Send {
        async move {
            let scope = MetricScope::DescribeTaskList;
            let stopwatch = self.begin(scope);

            let result = self.client.describe_task_list(ctx, request, opts).await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }

    fn list_task_list_partitions(
        &self,
        ctx: CallContext,
        request: MatchingListTaskListPartitionsRequest,
        opts: Vec<CallOption>,
    ) -> impl Future<Output = Result<ListTaskListPartitionsResponse, Self::Error>> + Send {
        async move {
            let scope = MetricScope::ListTaskListPartitions;
            let stopwatch = self.begin(scope);

            let result = self
                .client
                .list_task_list_partitions(ctx, request, opts)
                .await;
            self.finish(scope, stopwatch, &result);
            result
        }
    }
}

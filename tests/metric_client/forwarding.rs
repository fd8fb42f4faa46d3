//! Forwarded and mis-routed request diagnostics.

use crate::support::*;
use matching_client::*;
use matching_client_metrics::{MetricKind, MetricScope};

const CHILD: &str = "/__cadence_sys/orders/1";

fn diagnostics(journal: &Journal, scope: MetricScope) -> (usize, usize) {
    (
        journal.counter(scope, MetricKind::Forwarded),
        journal.counter(scope, MetricKind::InvalidTaskListName),
    )
}

fn activity_poll(forwarded_from: &str, name: Option<&str>) -> MatchingPollForActivityTaskRequest {
    MatchingPollForActivityTaskRequest {
        domain_uuid: "7f1c".to_string(),
        poller_id: "poller-1".to_string(),
        poll_request: Some(PollForActivityTaskRequest {
            domain: "payments".to_string(),
            task_list: name.map(TaskList::new),
            identity: "worker@host".to_string(),
            task_list_metadata: None,
        }),
        forwarded_from: forwarded_from.to_string(),
        isolation_group: String::new(),
    }
}

#[tokio::test]
async fn forwarded_add_activity_counts_forwarded() {
    let (client, journal) = decorated(Outcome::Succeed);
    let request = AddActivityTaskRequest {
        task_list: task_list(CHILD),
        forwarded_from: "/__cadence_sys/orders/2".to_string(),
        ..Default::default()
    };

    client
        .add_activity_task(CallContext::default(), request, Vec::new())
        .await
        .unwrap();

    assert_eq!(diagnostics(&journal, MetricScope::AddActivityTask), (1, 0));
}

#[tokio::test]
async fn unforwarded_child_partition_counts_invalid_name() {
    let (client, journal) = decorated(Outcome::Succeed);
    let request = AddDecisionTaskRequest {
        task_list: task_list(CHILD),
        ..Default::default()
    };

    client
        .add_decision_task(CallContext::default(), request, Vec::new())
        .await
        .unwrap();

    assert_eq!(diagnostics(&journal, MetricScope::AddDecisionTask), (0, 1));
}

#[tokio::test]
async fn ordinary_request_is_silent() {
    let (client, journal) = decorated(Outcome::Succeed);
    let request = MatchingQueryWorkflowRequest {
        task_list: task_list("orders"),
        ..Default::default()
    };

    client
        .query_workflow(CallContext::default(), request, Vec::new())
        .await
        .unwrap();

    assert_eq!(diagnostics(&journal, MetricScope::QueryWorkflow), (0, 0));
    assert_eq!(
        journal.counter(MetricScope::QueryWorkflow, MetricKind::Requests),
        1
    );
}

#[tokio::test]
async fn reserved_prefix_must_lead_the_name() {
    let (client, journal) = decorated(Outcome::Succeed);
    let request = AddActivityTaskRequest {
        task_list: task_list("orders/__cadence_sys/1"),
        ..Default::default()
    };

    client
        .add_activity_task(CallContext::default(), request, Vec::new())
        .await
        .unwrap();

    assert_eq!(diagnostics(&journal, MetricScope::AddActivityTask), (0, 0));
}

#[tokio::test]
async fn poll_of_child_partition_end_to_end() {
    let (client, journal) = decorated(Outcome::Succeed);
    let scope = MetricScope::PollForActivityTask;

    let response = client
        .poll_for_activity_task(
            CallContext::default(),
            activity_poll("", Some("/__cadence_sys/child-42")),
            Vec::new(),
        )
        .await
        .unwrap();

    assert_eq!(response, activity_task());
    assert_eq!(journal.counter(scope, MetricKind::Requests), 1);
    assert_eq!(journal.counter(scope, MetricKind::InvalidTaskListName), 1);
    assert_eq!(journal.counter(scope, MetricKind::Forwarded), 0);
    assert_eq!(journal.counter(scope, MetricKind::Failures), 0);
}

#[tokio::test]
async fn forwarded_decision_poll_counts_forwarded() {
    let (client, journal) = decorated(Outcome::Succeed);
    let request = MatchingPollForDecisionTaskRequest {
        poll_request: Some(PollForDecisionTaskRequest {
            task_list: task_list("orders"),
            ..Default::default()
        }),
        forwarded_from: "/__cadence_sys/orders/4".to_string(),
        ..Default::default()
    };

    client
        .poll_for_decision_task(CallContext::default(), request, Vec::new())
        .await
        .unwrap();

    assert_eq!(diagnostics(&journal, MetricScope::PollForDecisionTask), (1, 0));
}

#[tokio::test]
async fn absent_poll_request_skips_diagnostics() {
    for outcome in [Outcome::Succeed, Outcome::Fail(busy())] {
        let failing = matches!(outcome, Outcome::Fail(_));
        let (client, journal) = decorated(outcome);
        let scope = MetricScope::PollForActivityTask;

        let request = MatchingPollForActivityTaskRequest {
            poll_request: None,
            forwarded_from: "/__cadence_sys/orders/2".to_string(),
            ..Default::default()
        };
        let result = client
            .poll_for_activity_task(CallContext::default(), request, Vec::new())
            .await;

        assert_eq!(result.is_err(), failing);
        assert_eq!(diagnostics(&journal, scope), (0, 0));
        assert_eq!(journal.counter(scope, MetricKind::Requests), 1);
        assert_eq!(journal.timers(scope).len(), 1);
        assert_eq!(
            journal.counter(scope, MetricKind::Failures),
            usize::from(failing)
        );
    }
}

#[tokio::test]
async fn poll_without_task_list_skips_diagnostics() {
    let (client, journal) = decorated(Outcome::Succeed);

    client
        .poll_for_activity_task(CallContext::default(), activity_poll("", None), Vec::new())
        .await
        .unwrap();

    assert_eq!(diagnostics(&journal, MetricScope::PollForActivityTask), (0, 0));
}

#[tokio::test]
async fn diagnostics_are_recorded_even_when_the_call_fails() {
    let (client, journal) = decorated(Outcome::Fail(busy()));

    let result = client
        .poll_for_activity_task(
            CallContext::default(),
            activity_poll("", Some(CHILD)),
            Vec::new(),
        )
        .await;

    assert_eq!(result, Err(busy()));
    assert_eq!(diagnostics(&journal, MetricScope::PollForActivityTask), (0, 1));
    assert_eq!(
        journal.counter(MetricScope::PollForActivityTask, MetricKind::Failures),
        1
    );
}

#[tokio::test]
async fn operations_without_forwarding_emit_no_diagnostics() {
    let (client, journal) = decorated(Outcome::Succeed);
    let ctx = CallContext::default;

    client
        .respond_query_task_completed(
            ctx(),
            MatchingRespondQueryTaskCompletedRequest {
                task_list: task_list(CHILD),
                ..Default::default()
            },
            Vec::new(),
        )
        .await
        .unwrap();
    client
        .cancel_outstanding_poll(
            ctx(),
            CancelOutstandingPollRequest {
                task_list: task_list(CHILD),
                ..Default::default()
            },
            Vec::new(),
        )
        .await
        .unwrap();
    client
        .describe_task_list(
            ctx(),
            MatchingDescribeTaskListRequest {
                desc_request: Some(DescribeTaskListRequest {
                    task_list: task_list(CHILD),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Vec::new(),
        )
        .await
        .unwrap();
    client
        .list_task_list_partitions(
            ctx(),
            MatchingListTaskListPartitionsRequest {
                task_list: task_list(CHILD),
                ..Default::default()
            },
            Vec::new(),
        )
        .await
        .unwrap();

    for scope in [
        MetricScope::RespondQueryTaskCompleted,
        MetricScope::CancelOutstandingPoll,
        MetricScope::DescribeTaskList,
        MetricScope::ListTaskListPartitions,
    ] {
        assert_eq!(diagnostics(&journal, scope), (0, 0), "{scope}");
        assert_eq!(journal.counter(scope, MetricKind::Requests), 1, "{scope}");
    }
}

//! Ordering of emissions around the inner call and timer lifetime.

use crate::support::*;
use futures::FutureExt;
use matching_client::*;
use matching_client_metrics::{MetricClient, MetricKind, MetricScope};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

fn without_durations(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .map(|event| match event {
            Event::Timer(scope, kind, _) => Event::Timer(scope, kind, Duration::ZERO),
            other => other,
        })
        .collect()
}

fn delayed(outcome: Outcome, delay: Duration) -> (Decorated, Journal) {
    let journal = Journal::default();
    let client = ScriptedClient::new(journal.clone(), outcome).with_delay(delay);
    let sink = Arc::new(JournalSink::new(journal.clone()));
    (MetricClient::new(client, sink), journal)
}

#[tokio::test]
async fn failing_forwarded_call_emits_in_order() {
    let (client, journal) = decorated(Outcome::Fail(busy()));
    let scope = MetricScope::AddActivityTask;
    let request = AddActivityTaskRequest {
        task_list: task_list("orders"),
        forwarded_from: "/__cadence_sys/orders/1".to_string(),
        ..Default::default()
    };

    let _ = client
        .add_activity_task(CallContext::default(), request, Vec::new())
        .await;

    assert_eq!(
        without_durations(journal.events()),
        vec![
            Event::Counter(scope, MetricKind::Requests),
            Event::Counter(scope, MetricKind::Forwarded),
            Event::Inner(Operation::AddActivityTask),
            Event::Timer(scope, MetricKind::Latency, Duration::ZERO),
            Event::Counter(scope, MetricKind::Failures),
        ]
    );
}

#[tokio::test]
async fn successful_call_without_diagnostics_emits_in_order() {
    let (client, journal) = decorated(Outcome::Succeed);
    let scope = MetricScope::ListTaskListPartitions;

    call(&client, Operation::ListTaskListPartitions).await.unwrap();

    assert_eq!(
        without_durations(journal.events()),
        vec![
            Event::Counter(scope, MetricKind::Requests),
            Event::Inner(Operation::ListTaskListPartitions),
            Event::Timer(scope, MetricKind::Latency, Duration::ZERO),
        ]
    );
}

#[tokio::test]
async fn latency_spans_the_inner_call() {
    let delay = Duration::from_millis(30);
    let (client, journal) = delayed(Outcome::Succeed, delay);

    call(&client, Operation::PollForDecisionTask).await.unwrap();

    let timers = journal.timers(MetricScope::PollForDecisionTask);
    assert_eq!(timers.len(), 1);
    assert!(timers[0] >= delay, "latency {:?} shorter than call", timers[0]);
}

#[tokio::test]
async fn dropped_call_still_records_latency() {
    let (client, journal) = delayed(Outcome::Succeed, Duration::from_secs(5));
    let scope = MetricScope::PollForActivityTask;

    let result = tokio::time::timeout(
        Duration::from_millis(20),
        call(&client, Operation::PollForActivityTask),
    )
    .await;

    assert!(result.is_err(), "call should have been abandoned");
    assert_eq!(journal.counter(scope, MetricKind::Requests), 1);
    assert_eq!(journal.timers(scope).len(), 1);
    assert_eq!(journal.counter(scope, MetricKind::Failures), 0);
    assert_eq!(journal.inner_calls(Operation::PollForActivityTask), 0);
}

#[tokio::test]
async fn inner_panic_propagates_and_records_latency() {
    let (client, journal) = decorated(Outcome::Panic);
    let scope = MetricScope::RespondQueryTaskCompleted;

    let outcome = AssertUnwindSafe(call(&client, Operation::RespondQueryTaskCompleted))
        .catch_unwind()
        .await;

    assert!(outcome.is_err(), "panic should reach the caller");
    assert_eq!(journal.counter(scope, MetricKind::Requests), 1);
    assert_eq!(journal.timers(scope).len(), 1);
    assert_eq!(journal.counter(scope, MetricKind::Failures), 0);
}

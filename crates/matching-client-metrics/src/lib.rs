//! Metrics for matching service clients.
//!
//! [`MetricClient`] wraps any [`MatchingClient`](matching_client::MatchingClient)
//! and, for every call:
//! - counts the request (`cadence_client_requests`)
//! - times the inner call (`cadence_client_latency`)
//! - counts errors (`cadence_client_errors`)
//! - for task-list-bearing requests, counts forwarded requests (`forwarded`)
//!   and unforwarded requests addressed to a child partition
//!   (`invalid_task_list_name`)
//!
//! All metrics are keyed by a per-operation [`MetricScope`]. The decorator never
//! changes requests, responses or errors, and holds no per-call state, so one
//! instance can serve any number of concurrent callers.
//!
//! Where the measurements go is decided by a [`MetricsSink`]. With the `metrics`
//! feature, [`RecorderSink`] forwards them to the `metrics` facade.
//!
//! ## Example
//!
//! ```rust
//! use matching_client::{
//!     CallContext, MatchingClient, MatchingPollForActivityTaskRequest,
//!     PollForActivityTaskRequest, TaskList,
//! };
//! use matching_client_metrics::MetricClient;
//! # use matching_client_metrics::{MetricKind, MetricScope, MetricsSink};
//! use std::sync::Arc;
//! # use std::time::Duration;
//! # struct Discard;
//! # impl MetricsSink for Discard {
//! #     fn inc_counter(&self, _: MetricScope, _: MetricKind) {}
//! #     fn record_duration(&self, _: MetricScope, _: MetricKind, _: Duration) {}
//! # }
//!
//! async fn poll<C: MatchingClient>(transport: C) -> Result<(), C::Error> {
//!     let client = MetricClient::new(transport, Arc::new(Discard));
//!
//!     let request = MatchingPollForActivityTaskRequest {
//!         poll_request: Some(PollForActivityTaskRequest {
//!             task_list: Some(TaskList::new("orders")),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!     let _task = client
//!         .poll_for_activity_task(CallContext::default(), request, Vec::new())
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layering
//!
//! [`MetricClientLayer`] is a `tower` layer, so the decorator can be stacked with
//! other client decorators:
//!
//! ```rust
//! use matching_client_metrics::{MetricClientConfig, MetricClientLayer};
//! # use matching_client_metrics::{MetricKind, MetricScope, MetricsSink};
//! use std::sync::Arc;
//! # use std::time::Duration;
//! # struct Discard;
//! # impl MetricsSink for Discard {
//! #     fn inc_counter(&self, _: MetricScope, _: MetricKind) {}
//! #     fn record_duration(&self, _: MetricScope, _: MetricKind, _: Duration) {}
//! # }
//!
//! let layer: MetricClientLayer<Discard> = MetricClientConfig::builder()
//!     .name("history")
//!     .build()
//!     .layer(Arc::new(Discard));
//! ```
//!
//! ## Feature Flags
//!
//! - `metrics`: enables [`RecorderSink`]
//! - `tracing`: logs failed calls and child partitions addressed without forwarding

pub use client::MetricClient;
pub use config::{MetricClientConfig, MetricClientConfigBuilder};
pub use layer::MetricClientLayer;
#[cfg(feature = "metrics")]
pub use recorder::RecorderSink;
pub use scope::{MetricKind, MetricScope};
pub use sink::{MetricsSink, MetricsSinkExt, Stopwatch};

mod client;
mod config;
mod layer;
#[cfg(feature = "metrics")]
mod recorder;
mod scope;
mod sink;

//! Client contract for the task matching service.
//!
//! This crate defines what a matching client looks like, not how it talks to
//! the service:
//! - [`MatchingClient`], one async method per matching RPC
//! - request and response types for those RPCs
//! - [`CallContext`] and [`CallOption`], carried through to the transport untouched
//! - [`MatchingError`], the error taxonomy concrete clients report
//!
//! Transports implement [`MatchingClient`]; decorators (metrics, logging, rate
//! limiting) implement it too and wrap another [`MatchingClient`], so they can be
//! stacked in any order and substituted wherever the plain client is used.
//!
//! ## Example
//!
//! ```rust
//! use matching_client::{
//!     AddActivityTaskRequest, CallContext, MatchingClient, TaskList,
//! };
//!
//! async fn schedule<C: MatchingClient>(client: &C) -> Result<(), C::Error> {
//!     let request = AddActivityTaskRequest {
//!         domain_uuid: "domain".to_string(),
//!         task_list: Some(TaskList::new("orders")),
//!         schedule_id: 7,
//!         ..Default::default()
//!     };
//!     client
//!         .add_activity_task(CallContext::default(), request, Vec::new())
//!         .await
//! }
//! ```

pub use client::MatchingClient;
pub use error::MatchingError;
pub use operation::Operation;
pub use options::{CallContext, CallOption};
pub use types::*;

mod client;
mod error;
mod operation;
mod options;
mod types;

/// Prefix reserved for the names of internal child partitions of a task list.
///
/// External callers never address such a task list directly; only partition
/// forwarding produces requests for them.
pub const RESERVED_TASK_LIST_PREFIX: &str = "/__cadence_sys/";

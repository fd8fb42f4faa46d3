//! Configuration for the metric client.

use crate::layer::MetricClientLayer;
use crate::sink::MetricsSink;
use matching_client::RESERVED_TASK_LIST_PREFIX;
use std::sync::Arc;

/// Configuration for [`MetricClient`](crate::MetricClient).
#[derive(Debug, Clone)]
pub struct MetricClientConfig {
    pub(crate) name: String,
    pub(crate) reserved_task_list_prefix: String,
}

impl MetricClientConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> MetricClientConfigBuilder {
        MetricClientConfigBuilder::new()
    }

    /// Creates a layer from this configuration that emits into `sink`.
    pub fn layer<M: MetricsSink + ?Sized>(self, sink: Arc<M>) -> MetricClientLayer<M> {
        MetricClientLayer::with_config(sink, self)
    }

    /// Returns the instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the prefix that marks child-partition task list names.
    pub fn reserved_task_list_prefix(&self) -> &str {
        &self.reserved_task_list_prefix
    }
}

impl Default for MetricClientConfig {
    fn default() -> Self {
        MetricClientConfigBuilder::new().build()
    }
}

/// Builder for [`MetricClientConfig`].
pub struct MetricClientConfigBuilder {
    name: String,
    reserved_task_list_prefix: String,
}

impl MetricClientConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            name: String::from("matching-client"),
            reserved_task_list_prefix: RESERVED_TASK_LIST_PREFIX.to_string(),
        }
    }

    /// Sets the name of this client instance, attached to log events.
    ///
    /// Default: `"matching-client"`
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the prefix that marks a task list name as an internal child
    /// partition.
    ///
    /// Default: [`RESERVED_TASK_LIST_PREFIX`]
    pub fn reserved_task_list_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reserved_task_list_prefix = prefix.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> MetricClientConfig {
        MetricClientConfig {
            name: self.name,
            reserved_task_list_prefix: self.reserved_task_list_prefix,
        }
    }
}

impl Default for MetricClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

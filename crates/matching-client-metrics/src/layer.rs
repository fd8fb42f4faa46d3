//! Tower layer for the metric client.

use crate::client::MetricClient;
use crate::config::MetricClientConfig;
use crate::sink::MetricsSink;
use std::sync::Arc;
use tower_layer::Layer;

/// A layer that wraps matching clients in a [`MetricClient`].
///
/// Every client produced by one layer shares its sink and configuration.
pub struct MetricClientLayer<M: ?Sized> {
    metrics: Arc<M>,
    config: Arc<MetricClientConfig>,
}

impl<M: MetricsSink + ?Sized> MetricClientLayer<M> {
    /// Creates a layer emitting into `metrics` with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use matching_client_metrics::{MetricClientLayer, MetricKind, MetricScope, MetricsSink};
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// struct Discard;
    ///
    /// impl MetricsSink for Discard {
    ///     fn inc_counter(&self, _: MetricScope, _: MetricKind) {}
    ///     fn record_duration(&self, _: MetricScope, _: MetricKind, _: Duration) {}
    /// }
    ///
    /// let layer = MetricClientLayer::new(Arc::new(Discard));
    /// ```
    pub fn new(metrics: Arc<M>) -> Self {
        Self::with_config(metrics, MetricClientConfig::default())
    }

    pub(crate) fn with_config(metrics: Arc<M>, config: MetricClientConfig) -> Self {
        Self {
            metrics,
            config: Arc::new(config),
        }
    }
}

impl<M: ?Sized> Clone for MetricClientLayer<M> {
    fn clone(&self) -> Self {
        Self {
            metrics: Arc::clone(&self.metrics),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C, M: MetricsSink + ?Sized> Layer<C> for MetricClientLayer<M> {
    type Service = MetricClient<C, M>;

    fn layer(&self, client: C) -> Self::Service {
        MetricClient::from_parts(client, Arc::clone(&self.metrics), Arc::clone(&self.config))
    }
}

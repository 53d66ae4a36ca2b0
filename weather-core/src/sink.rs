use crate::{error::PublishError, model::WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod amqp;

pub use amqp::AmqpSink;

/// Result of one best-effort publish attempt.
///
/// Delivery is not allowed to take the poller down: a sink reports failure
/// through this type instead of an error the caller could propagate. The
/// pipeline logs a `Failed` outcome and still counts the cycle as finished.
#[derive(Debug)]
pub enum PublishOutcome {
    Delivered,
    Failed(PublishError),
}

impl PublishOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, PublishOutcome::Delivered)
    }
}

/// Delivers canonical records to the durable queue.
#[async_trait]
pub trait RecordSink: Send + Sync + Debug {
    async fn publish(&self, record: &WeatherRecord) -> PublishOutcome;
}

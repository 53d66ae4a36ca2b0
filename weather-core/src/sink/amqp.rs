use async_trait::async_trait;
use lapin::{
    BasicProperties, Connection, ConnectionProperties,
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
};
use tracing::debug;

use crate::{WEATHER_QUEUE, error::PublishError, model::WeatherRecord};

use super::{PublishOutcome, RecordSink};

const PERSISTENT_DELIVERY: u8 = 2;

/// Publishes records to RabbitMQ, one short-lived connection per publish.
///
/// The connection is opened and closed within a single call rather than
/// pooled, trading setup cost for freedom from stale-connection handling.
#[derive(Debug, Clone)]
pub struct AmqpSink {
    url: String,
}

impl AmqpSink {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    async fn try_publish(&self, record: &WeatherRecord) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(record)?;

        let conn = Connection::connect(&self.url, ConnectionProperties::default()).await?;
        let channel = conn.create_channel().await?;

        // Idempotent: re-declaring an existing durable queue is a no-op.
        channel
            .queue_declare(
                WEATHER_QUEUE,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;

        debug!(queue = WEATHER_QUEUE, size_bytes = payload.len(), "publishing record");

        channel
            .basic_publish(
                "",
                WEATHER_QUEUE,
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default().with_delivery_mode(PERSISTENT_DELIVERY),
            )
            .await?
            .await?;

        conn.close(200, "publish complete").await?;

        Ok(())
    }
}

#[async_trait]
impl RecordSink for AmqpSink {
    async fn publish(&self, record: &WeatherRecord) -> PublishOutcome {
        match self.try_publish(record).await {
            Ok(()) => PublishOutcome::Delivered,
            Err(err) => PublishOutcome::Failed(err),
        }
    }
}

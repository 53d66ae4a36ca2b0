//! The polling loop: resolve → fetch → normalize → publish, forever.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::{
    error::CycleError,
    model::WeatherRecord,
    normalize,
    provider::{GeocodingProvider, ObservationProvider},
    sink::{PublishOutcome, RecordSink},
};

/// Time source for the pipeline. Injected so tests can run cycles without
/// real delays and with a fixed `now`.
#[async_trait]
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `tokio::time`.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// One recurring job: geocode the configured city, fetch its current weather,
/// normalize, publish. No state survives a cycle except the interval timer.
pub struct Pipeline {
    geocoder: Box<dyn GeocodingProvider>,
    fetcher: Box<dyn ObservationProvider>,
    sink: Box<dyn RecordSink>,
    clock: Box<dyn Clock>,
    city: String,
    interval: Duration,
}

impl Pipeline {
    pub fn new(
        geocoder: Box<dyn GeocodingProvider>,
        fetcher: Box<dyn ObservationProvider>,
        sink: Box<dyn RecordSink>,
        clock: Box<dyn Clock>,
        city: String,
        interval: Duration,
    ) -> Self {
        Self {
            geocoder,
            fetcher,
            sink,
            clock,
            city,
            interval,
        }
    }

    /// Run cycles forever. Cycle-level failures are logged and absorbed; the
    /// fixed cadence is itself the retry mechanism.
    pub async fn run(&self) {
        info!(city = %self.city, interval_secs = self.interval.as_secs(), "producer started");

        loop {
            if let Err(err) = self.run_cycle().await {
                warn!(city = %self.city, %err, "cycle aborted");
            }

            self.clock.sleep(self.interval).await;
        }
    }

    /// Execute one full cycle and return the record that was handed to the
    /// sink. Publish failures do not fail the cycle.
    pub async fn run_cycle(&self) -> Result<WeatherRecord, CycleError> {
        info!(city = %self.city, "collecting observation");

        let coord = self.geocoder.resolve(&self.city).await?;
        let raw = self.fetcher.fetch(&coord).await?;
        let record = normalize::normalize(&coord.name, &raw, self.clock.now())?;

        info!(
            city = %record.city,
            timestamp = %record.timestamp,
            temperature_c = record.temperature_c,
            condition = %record.condition_text,
            "normalized record"
        );

        match self.sink.publish(&record).await {
            PublishOutcome::Delivered => info!("record published"),
            PublishOutcome::Failed(err) => error!(%err, "publish failed, dropping record"),
        }

        Ok(record)
    }
}

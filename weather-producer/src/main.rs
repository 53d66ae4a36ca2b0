//! Binary crate for the weather observation producer.
//!
//! Loads configuration from `WEATHER_*` environment variables, wires the
//! Open-Meteo providers and the AMQP sink into the pipeline, and polls
//! forever. Only a configuration failure at startup exits the process.

use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use weather_core::{
    Pipeline, ProducerConfig, SystemClock,
    provider::{OpenMeteoFetcher, OpenMeteoGeocoder},
    sink::AmqpSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ProducerConfig::from_env()
        .context("failed to load configuration from WEATHER_* environment variables")?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(city = %config.city, interval_secs = config.interval_secs, "configuration loaded");

    let pipeline = Pipeline::new(
        Box::new(OpenMeteoGeocoder::new(config.geocode_url)),
        Box::new(OpenMeteoFetcher::new(config.open_meteo_url)),
        Box::new(AmqpSink::new(config.amqp_url)),
        Box::new(SystemClock),
        config.city,
        Duration::from_secs(config.interval_secs),
    );

    pipeline.run().await;

    Ok(())
}

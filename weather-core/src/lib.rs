//! Core library for the weather observation producer.
//!
//! This crate defines:
//! - Configuration handling (environment-based)
//! - Abstractions over the geocoding and weather collaborators
//! - The condition-code table and record normalizer
//! - The AMQP sink and the polling pipeline
//!
//! It is used by `weather-producer`, but can also be reused by other binaries
//! or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod provider;
pub mod sink;

pub use config::ProducerConfig;
pub use error::{CycleError, PublishError};
pub use model::{Coordinate, RawObservation, WeatherRecord};
pub use pipeline::{Clock, Pipeline, SystemClock};
pub use provider::{GeocodingProvider, ObservationProvider};
pub use sink::{PublishOutcome, RecordSink};

/// Queue the producer publishes to; declared durable on every publish.
pub const WEATHER_QUEUE: &str = "weather_queue";

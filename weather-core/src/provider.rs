use crate::{
    error::CycleError,
    model::{Coordinate, RawObservation},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

pub use open_meteo::{OpenMeteoFetcher, OpenMeteoGeocoder};

/// Resolves a free-text place name to a coordinate and canonical display name.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn resolve(&self, place: &str) -> Result<Coordinate, CycleError>;
}

/// Retrieves raw current-weather and hourly-forecast data for a coordinate.
///
/// Implementations do not validate the response shape; missing fields are the
/// normalizer's problem.
#[async_trait]
pub trait ObservationProvider: Send + Sync + Debug {
    async fn fetch(&self, coord: &Coordinate) -> Result<RawObservation, CycleError>;
}

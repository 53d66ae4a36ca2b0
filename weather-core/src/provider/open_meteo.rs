use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::CycleError,
    model::{Coordinate, RawObservation},
};

use super::{GeocodingProvider, ObservationProvider};

/// Geocoding client for the Open-Meteo search endpoint.
///
/// Always requests a single candidate in a fixed result language; the first
/// (best) match wins.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    base_url: String,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoGeocoder {
    async fn resolve(&self, place: &str) -> Result<Coordinate, CycleError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("name", place),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| CycleError::transport("geocoding", e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(CycleError::Transport {
                service: "geocoding",
                message: format!("unexpected status {status}"),
            });
        }

        let parsed: GeocodeResponse = res
            .json()
            .await
            .map_err(|e| CycleError::transport("geocoding", e))?;

        first_candidate(parsed, place)
    }
}

/// Pick the best (first) candidate out of a geocoding response.
fn first_candidate(response: GeocodeResponse, place: &str) -> Result<Coordinate, CycleError> {
    response
        .results
        .into_iter()
        .flatten()
        .next()
        .map(|c| Coordinate {
            latitude: c.latitude,
            longitude: c.longitude,
            name: c.name,
        })
        .ok_or_else(|| CycleError::LocationNotFound(place.to_string()))
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    // Open-Meteo omits the key entirely when nothing matched.
    results: Option<Vec<GeocodeCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeCandidate {
    latitude: f64,
    longitude: f64,
    name: String,
}

/// Current-weather client for the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoFetcher {
    base_url: String,
    http: Client,
}

impl OpenMeteoFetcher {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ObservationProvider for OpenMeteoFetcher {
    async fn fetch(&self, coord: &Coordinate) -> Result<RawObservation, CycleError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", coord.latitude.to_string().as_str()),
                ("longitude", coord.longitude.to_string().as_str()),
                ("current_weather", "true"),
                ("hourly", "precipitation_probability,relativehumidity_2m"),
            ])
            .send()
            .await
            .map_err(|e| CycleError::transport("weather", e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(CycleError::Transport {
                service: "weather",
                message: format!("unexpected status {status}"),
            });
        }

        res.json()
            .await
            .map_err(|e| CycleError::transport("weather", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_takes_element_zero() {
        let response: GeocodeResponse = serde_json::from_str(
            r#"{"results":[
                {"latitude":39.78,"longitude":-89.65,"name":"Springfield"},
                {"latitude":42.1,"longitude":-72.59,"name":"Springfield"}
            ]}"#,
        )
        .unwrap();

        let coord = first_candidate(response, "springfield").unwrap();
        assert_eq!(coord.latitude, 39.78);
        assert_eq!(coord.longitude, -89.65);
        assert_eq!(coord.name, "Springfield");
        assert!(!coord.name.is_empty());
    }

    #[test]
    fn empty_results_is_location_not_found() {
        let response: GeocodeResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        let err = first_candidate(response, "atlantis").unwrap_err();
        assert!(matches!(err, CycleError::LocationNotFound(ref c) if c == "atlantis"));
    }

    #[test]
    fn absent_results_key_is_location_not_found() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        let err = first_candidate(response, "atlantis").unwrap_err();
        assert!(matches!(err, CycleError::LocationNotFound(_)));
    }

    #[test]
    fn observation_response_parses() {
        let raw: RawObservation = serde_json::from_str(
            r#"{
                "current_weather": {
                    "time": "2024-01-01T12:00",
                    "temperature": 21.5,
                    "windspeed": 8.0,
                    "weathercode": 1
                },
                "hourly": {
                    "time": ["2024-01-01T11:00", "2024-01-01T12:00"],
                    "precipitation_probability": [10, 20],
                    "relativehumidity_2m": [50, 55]
                }
            }"#,
        )
        .unwrap();

        let current = raw.current_weather.unwrap();
        assert_eq!(current.time.as_deref(), Some("2024-01-01T12:00"));
        assert_eq!(current.weathercode, Some(1));
        assert_eq!(raw.hourly.unwrap().precipitation_probability, vec![10, 20]);
    }
}

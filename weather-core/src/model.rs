use serde::{Deserialize, Serialize};

/// A resolved location. Produced by the geocoding provider once per cycle and
/// consumed immediately by the observation provider; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Canonical display name from the geocoder, which may differ from the
    /// configured spelling/casing.
    pub name: String,
}

/// Raw weather payload as returned by the collaborator.
///
/// Every field is optional: the fetcher does no shape validation, so a
/// response missing pieces deserializes fine here and is rejected by the
/// normalizer instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawObservation {
    pub current_weather: Option<CurrentWeather>,
    pub hourly: Option<HourlySeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeather {
    pub time: Option<String>,
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub weathercode: Option<u16>,
}

/// Parallel arrays indexed by position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub precipitation_probability: Vec<i64>,
    #[serde(default)]
    pub relativehumidity_2m: Vec<i64>,
}

/// The canonical record published each cycle; the only entity that crosses
/// the system boundary. Field names are part of the queue contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// UTC instant of record creation (not the observation's own timestamp),
    /// RFC 3339 with a literal `Z` suffix.
    pub timestamp: String,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition_code: u16,
    pub condition_text: String,
    /// Present together with `humidity` or null together with it; no
    /// `skip_serializing_if` so the null is explicit on the wire.
    pub rain_probability: Option<i64>,
    pub humidity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_explicit_nulls() {
        let record = WeatherRecord {
            city: "Springfield".to_string(),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            temperature_c: 21.5,
            wind_speed_kmh: 8.0,
            condition_code: 1,
            condition_text: "Mainly clear".to_string(),
            rain_probability: None,
            humidity: None,
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();

        assert!(json["rain_probability"].is_null());
        assert!(json["humidity"].is_null());
        assert_eq!(json["city"], "Springfield");
        assert_eq!(json["condition_code"], 1);
    }

    #[test]
    fn record_field_names_match_queue_contract() {
        let record = WeatherRecord {
            city: "Lisboa".to_string(),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            temperature_c: 18.0,
            wind_speed_kmh: 12.5,
            condition_code: 61,
            condition_text: "Slight rain".to_string(),
            rain_probability: Some(70),
            humidity: Some(85),
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        let mut expected = vec![
            "city",
            "timestamp",
            "temperature_c",
            "wind_speed_kmh",
            "condition_code",
            "condition_text",
            "rain_probability",
            "humidity",
        ];
        expected.sort_unstable();
        let mut actual = keys;
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn raw_observation_tolerates_missing_pieces() {
        let raw: RawObservation = serde_json::from_str("{}").unwrap();
        assert!(raw.current_weather.is_none());
        assert!(raw.hourly.is_none());

        let raw: RawObservation =
            serde_json::from_str(r#"{"current_weather":{"temperature":3.2}}"#).unwrap();
        let current = raw.current_weather.unwrap();
        assert_eq!(current.temperature, Some(3.2));
        assert!(current.time.is_none());
    }
}

//! Turns a raw observation into the canonical [`WeatherRecord`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    conditions,
    error::CycleError,
    model::{RawObservation, WeatherRecord},
};

/// Build the canonical record for one cycle.
///
/// `city` is the geocoder's display name, not the configured input. `now` is
/// injected so the result is deterministic under test; the record is stamped
/// with it rather than with the observation's own time.
///
/// Rain probability and humidity are copied from the hourly series only when
/// the current observation's timestamp has an exact match there (first
/// occurrence). No nearest-hour fallback: a format mismatch leaves both null,
/// never just one of them.
pub fn normalize(
    city: &str,
    raw: &RawObservation,
    now: DateTime<Utc>,
) -> Result<WeatherRecord, CycleError> {
    let current = raw
        .current_weather
        .as_ref()
        .ok_or(CycleError::MalformedObservation("current_weather"))?;

    let observed_at = current
        .time
        .as_deref()
        .ok_or(CycleError::MalformedObservation("current_weather.time"))?;
    let temperature_c = current
        .temperature
        .ok_or(CycleError::MalformedObservation("current_weather.temperature"))?;
    let wind_speed_kmh = current
        .windspeed
        .ok_or(CycleError::MalformedObservation("current_weather.windspeed"))?;
    let condition_code = current
        .weathercode
        .ok_or(CycleError::MalformedObservation("current_weather.weathercode"))?;

    let (rain_probability, humidity) = raw
        .hourly
        .as_ref()
        .and_then(|hourly| {
            let i = hourly.time.iter().position(|t| t == observed_at)?;
            // Both values or neither, even if the parallel arrays are ragged.
            match (
                hourly.precipitation_probability.get(i),
                hourly.relativehumidity_2m.get(i),
            ) {
                (Some(p), Some(h)) => Some((Some(*p), Some(*h))),
                _ => None,
            }
        })
        .unwrap_or((None, None));

    Ok(WeatherRecord {
        city: city.to_string(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        temperature_c,
        wind_speed_kmh,
        condition_code,
        condition_text: conditions::describe(condition_code).to_string(),
        rain_probability,
        humidity,
    })
}

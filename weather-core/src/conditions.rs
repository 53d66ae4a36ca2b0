//! Static translation of WMO weather codes to display text.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Returned for any code not in the table.
pub const UNKNOWN_CONDITION: &str = "Unknown";

static CONDITIONS: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "Clear sky"),
        (1, "Mainly clear"),
        (2, "Partly cloudy"),
        (3, "Overcast"),
        (45, "Fog"),
        (48, "Depositing rime fog"),
        (51, "Light drizzle"),
        (53, "Moderate drizzle"),
        (55, "Dense drizzle"),
        (61, "Slight rain"),
        (63, "Moderate rain"),
        (65, "Heavy rain"),
        (71, "Slight snowfall"),
        (73, "Moderate snowfall"),
        (75, "Heavy snowfall"),
        (80, "Slight rain showers"),
        (81, "Moderate rain showers"),
        (82, "Violent rain showers"),
    ])
});

/// Translate a weather code into display text. Never fails: codes outside
/// the table map to [`UNKNOWN_CONDITION`].
pub fn describe(code: u16) -> &'static str {
    CONDITIONS.get(&code).copied().unwrap_or(UNKNOWN_CONDITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_translate() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(1), "Mainly clear");
        assert_eq!(describe(3), "Overcast");
        assert_eq!(describe(55), "Dense drizzle");
        assert_eq!(describe(75), "Heavy snowfall");
        assert_eq!(describe(82), "Violent rain showers");
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (code, text) in CONDITIONS.iter() {
            assert_eq!(describe(*code), *text);
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(describe(4), UNKNOWN_CONDITION);
        assert_eq!(describe(999), UNKNOWN_CONDITION);
        assert_eq!(describe(u16::MAX), UNKNOWN_CONDITION);
    }
}

use crate::error::ValidationError;

/// A city name as submitted by the user: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Snapshot of current conditions, as returned by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub location_name: String,
    pub condition: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}

impl WeatherReading {
    /// Always derived from the Celsius value.
    pub fn temperature_f(&self) -> f64 {
        celsius_to_fahrenheit(self.temperature_c)
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// One decimal place, ties rounded away from zero (`format!` alone rounds
/// them to even).
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

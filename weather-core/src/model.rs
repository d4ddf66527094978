use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::QueryError, icon::IconCategory};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// One user-initiated lookup. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub api_key: String,
}

impl WeatherQuery {
    /// Surrounding whitespace is stripped from `city`. An empty city is kept as-is.
    pub fn new(city: &str, api_key: impl Into<String>) -> Self {
        Self {
            city: city.trim().to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Normalized current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub temperature_celsius: f64,
    pub condition_code: i64,
    pub description: String,
    pub icon_category: Option<IconCategory>,
    /// Location name as resolved by the provider, when reported.
    pub location_name: Option<String>,
    pub observation_time: Option<DateTime<Utc>>,
}

/// Outcome of a single query.
pub type WeatherResult = Result<WeatherReport, QueryError>;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

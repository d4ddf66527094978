use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::{WeatherQuery, WeatherResult};

pub mod openweather;

pub use openweather::OpenWeatherService;

/// Source of current weather for a city.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    /// Issue one request and classify its outcome. Never retries.
    async fn fetch_weather(&self, query: &WeatherQuery) -> WeatherResult;
}

/// One-shot lookup against the public OpenWeather endpoint.
pub async fn fetch_weather(city: &str, api_key: &str) -> WeatherResult {
    OpenWeatherService::new()
        .fetch_weather(&WeatherQuery::new(city, api_key))
        .await
}

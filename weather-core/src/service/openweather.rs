use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::{ErrorKind, QueryError},
    icon::resolve_icon,
    model::{WeatherQuery, WeatherReport, WeatherResult, kelvin_to_celsius},
};

use super::WeatherService;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Current-weather lookups against OpenWeather.
#[derive(Debug, Clone)]
pub struct OpenWeatherService {
    http: Client,
    endpoint: String,
}

impl Default for OpenWeatherService {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherService {
    pub fn new() -> Self {
        Self::with_client(Client::new(), DEFAULT_ENDPOINT)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Build a service honoring the configured endpoint and time budget.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self::with_client(http, config.endpoint()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> WeatherResult {
        debug!(city = %query.city, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query.city.as_str()), ("appid", query.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");

        if let Some(err) = classify_status(status) {
            return Err(err);
        }

        let body = res.text().await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| QueryError::request_failure(e.to_string()))?;

        parsed.into_report()
    }
}

/// Error for statuses that end the query before the body is read.
fn classify_status(status: StatusCode) -> Option<QueryError> {
    if let Some(kind) = ErrorKind::from_status(status.as_u16()) {
        return Some(QueryError::new(kind));
    }
    if status.is_client_error() || status.is_server_error() {
        return Some(QueryError::request_failure(status.to_string()));
    }
    None
}

/// `cod` is a number on success but a string in many error payloads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCod {
    Number(i64),
    Text(String),
}

impl OwCod {
    fn is_ok(&self) -> bool {
        match self {
            OwCod::Number(n) => *n == 200,
            OwCod::Text(s) => s.trim() == "200",
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    cod: Option<OwCod>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
    name: Option<String>,
    dt: Option<i64>,
}

impl OwCurrentResponse {
    fn into_report(self) -> WeatherResult {
        if !self.cod.as_ref().is_some_and(OwCod::is_ok) {
            debug!(cod = ?self.cod, "payload is not a current-weather record");
            return Err(QueryError::new(ErrorKind::UnexpectedPayload));
        }

        let (Some(main), Some(weather)) = (self.main, self.weather.into_iter().next()) else {
            return Err(QueryError::new(ErrorKind::UnexpectedPayload));
        };

        Ok(WeatherReport {
            temperature_celsius: kelvin_to_celsius(main.temp),
            condition_code: weather.id,
            icon_category: resolve_icon(weather.id),
            description: weather.description,
            location_name: self.name.filter(|n| !n.is_empty()),
            observation_time: self.dt.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        })
    }
}

#[async_trait]
impl WeatherService for OpenWeatherService {
    async fn fetch_weather(&self, query: &WeatherQuery) -> WeatherResult {
        let result = self.fetch_current(query).await;

        match &result {
            Ok(report) => debug!(code = report.condition_code, "weather query succeeded"),
            Err(err) => debug!(kind = ?err.kind, "weather query failed"),
        }

        result
    }
}

//! Core library for the `cityweather` client.
//!
//! This crate defines:
//! - Configuration & API key resolution
//! - The OpenWeather query service and its outcome classification
//! - The condition-code to icon resolver
//! - The [`DisplaySurface`] seam that front-ends implement to render results
//!
//! It is used by `cityweather-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod display;
pub mod error;
pub mod icon;
pub mod model;
pub mod service;

pub use config::Config;
pub use display::{DisplaySurface, render};
pub use error::{ErrorKind, QueryError};
pub use icon::{IconCategory, resolve_icon};
pub use model::{WeatherQuery, WeatherReport, WeatherResult, kelvin_to_celsius};
pub use service::{OpenWeatherService, WeatherService, fetch_weather};

//! Weather lookups for talking-bot.
//!
//! This crate provides:
//!
//! - **Weather service trait**: current conditions, coordinate lookup and
//!   historical hourly observations for a free-text place name
//! - **OpenWeatherMap client**: the HTTP implementation of that trait
//! - **Observation types**: values whose `Display` is the user-facing text

pub mod error;
pub mod observation;
pub mod openweather;
pub mod service;

pub use error::WeatherError;
pub use observation::{Coordinates, CurrentWeather, HourlyObservation, PastWeather};
pub use openweather::{OpenWeatherClient, WeatherConfig};
pub use service::WeatherService;

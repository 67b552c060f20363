//! OpenWeatherMap client.
//!
//! Three GET endpoints back the [`WeatherService`] operations:
//!
//! - `{base}/weather?q=&units=&appid=` for current conditions
//! - `{base}/weather?q=&appid=` for coordinate lookup
//! - `{base}/onecall/timemachine?lat=&lon=&units=&dt=&appid=` for history
//!
//! Presence of the `main`/`weather`, `coord` and `hourly` keys decides
//! success. The HTTP status is not consulted: the provider reports unknown
//! places as a JSON body without those keys.

use crate::error::WeatherError;
use crate::observation::{Coordinates, CurrentWeather, HourlyObservation};
use crate::service::WeatherService;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use talking_bot_core::Result;
use tracing::{debug, instrument, warn};

/// Configuration for the OpenWeatherMap client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key passed as the `appid` query parameter.
    pub api_key: String,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unit system for temperatures.
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

impl WeatherConfig {
    /// Creates a configuration with the default endpoint and metric units.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            units: default_units(),
        }
    }

    /// Points the client at a different endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentReply {
    main: Option<MainBlock>,
    weather: Option<Vec<Condition>>,
}

#[derive(Debug, Deserialize)]
struct CoordReply {
    coord: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
struct HourReply {
    dt: i64,
    temp: f64,
    humidity: f64,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct HistoryReply {
    hourly: Option<Vec<HourReply>>,
}

fn first_description(conditions: Vec<Condition>) -> Option<String> {
    conditions.into_iter().next().map(|c| c.description)
}

/// OpenWeatherMap HTTP client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Creates a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::InvalidConfig` if the API key is empty.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::InvalidConfig {
                reason: "api_key must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issues a GET and decodes the body, whatever the status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed {
                // The URL carries the API key.
                reason: e.without_url().to_string(),
            })?;

        debug!(status = %response.status(), endpoint, "weather reply");

        let body = response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::MalformedResponse {
                reason: e.without_url().to_string(),
            })?;
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn fetch_current(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        let reply: CurrentReply = self
            .get_json(
                "weather",
                &[
                    ("q", location.to_string()),
                    ("units", self.config.units.clone()),
                ],
            )
            .await?;

        let main = reply.main.ok_or(WeatherError::MissingField { field: "main" })?;
        let description = reply
            .weather
            .and_then(first_description)
            .ok_or(WeatherError::MissingField { field: "weather" })?;

        Ok(CurrentWeather {
            location: location.to_string(),
            description,
            temperature: main.temp,
        })
    }

    #[instrument(skip(self))]
    async fn fetch_coordinates(&self, location: &str) -> Result<Coordinates, WeatherError> {
        let reply: CoordReply = self
            .get_json("weather", &[("q", location.to_string())])
            .await?;
        Ok(reply
            .coord
            .ok_or(WeatherError::MissingField { field: "coord" })?)
    }

    #[instrument(skip(self))]
    async fn fetch_history(
        &self,
        coordinates: Coordinates,
        at: DateTime<Utc>,
    ) -> Result<Vec<HourlyObservation>, WeatherError> {
        let reply: HistoryReply = self
            .get_json(
                "onecall/timemachine",
                &[
                    ("lat", coordinates.lat.to_string()),
                    ("lon", coordinates.lon.to_string()),
                    ("units", self.config.units.clone()),
                    ("dt", at.timestamp().to_string()),
                ],
            )
            .await?;

        let mut hours = Vec::new();
        for hour in reply.hourly.unwrap_or_default() {
            let timestamp =
                DateTime::from_timestamp(hour.dt, 0).ok_or_else(|| {
                    WeatherError::MalformedResponse {
                        reason: format!("hour timestamp {} out of range", hour.dt),
                    }
                })?;
            let description = first_description(hour.weather)
                .ok_or(WeatherError::MissingField { field: "weather" })?;
            hours.push(HourlyObservation {
                timestamp,
                description,
                temperature: hour.temp,
                humidity: hour.humidity,
            });
        }
        Ok(hours)
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current_weather(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        self.fetch_current(location)
            .await
            .inspect_err(|e| warn!(error = %e, location, "error fetching current weather data"))
    }

    async fn coordinates(&self, location: &str) -> Result<Coordinates, WeatherError> {
        self.fetch_coordinates(location)
            .await
            .inspect_err(|e| warn!(error = %e, location, "error fetching location coordinates"))
    }

    async fn hourly_history(
        &self,
        coordinates: Coordinates,
        at: DateTime<Utc>,
    ) -> Result<Vec<HourlyObservation>, WeatherError> {
        self.fetch_history(coordinates, at)
            .await
            .inspect_err(|e| warn!(error = %e, "error fetching weather data"))
    }
}

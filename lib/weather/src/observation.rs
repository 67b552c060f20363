//! Weather observation values.
//!
//! These are ephemeral: fetched for one turn, rendered to text through
//! `Display`, then dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour timestamps are rendered in this layout.
const HOUR_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A resolved point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Current conditions at a named location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// The location as the user wrote it.
    pub location: String,
    /// Free-text description, e.g. "light rain".
    pub description: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
}

impl fmt::Display for CurrentWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current weather in {}: {}. Temperature: {}°C",
            self.location, self.description, self.temperature
        )
    }
}

/// One hour of a historical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    /// Start of the hour.
    pub timestamp: DateTime<Utc>,
    /// Free-text description.
    pub description: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

impl fmt::Display for HourlyObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}. Temperature: {}°C, Humidity: {}%",
            self.timestamp.format(HOUR_FORMAT),
            self.description,
            self.temperature,
            self.humidity
        )
    }
}

/// Hourly history for a location some days back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastWeather {
    /// The location as the user wrote it.
    pub location: String,
    /// How many days before now the record starts.
    pub days_ago: u64,
    /// Observations, in provider order. May be empty.
    pub hours: Vec<HourlyObservation>,
}

impl fmt::Display for PastWeather {
    /// The header line is always followed by a newline, even when there are
    /// no hours to list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather in {} {} days ago:", self.location, self.days_ago)?;
        for (i, hour) in self.hours.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{hour}")?;
        }
        Ok(())
    }
}

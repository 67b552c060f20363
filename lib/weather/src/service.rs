//! Weather service trait.
//!
//! The router depends on this trait rather than on a concrete HTTP client,
//! so tests can substitute an in-memory service.

use crate::error::WeatherError;
use crate::observation::{Coordinates, CurrentWeather, HourlyObservation, PastWeather};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use talking_bot_core::Result;

/// Trait for weather providers.
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Fetches current conditions for a free-text location.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a malformed reply, or a reply
    /// without the expected fields.
    async fn current_weather(&self, location: &str) -> Result<CurrentWeather, WeatherError>;

    /// Resolves a free-text location to coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be resolved.
    async fn coordinates(&self, location: &str) -> Result<Coordinates, WeatherError>;

    /// Fetches hourly observations around a point in time.
    ///
    /// A reply without hourly data yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed reply.
    async fn hourly_history(
        &self,
        coordinates: Coordinates,
        at: DateTime<Utc>,
    ) -> Result<Vec<HourlyObservation>, WeatherError>;

    /// Fetches the hourly record for `location` starting `days_ago` days
    /// before now.
    ///
    /// # Errors
    ///
    /// Returns an error if coordinates cannot be resolved or the history
    /// lookup fails.
    async fn past_days_weather(
        &self,
        location: &str,
        days_ago: u64,
    ) -> Result<PastWeather, WeatherError> {
        let at = days_before(Utc::now(), days_ago)?;
        let coordinates = self.coordinates(location).await?;
        let hours = self.hourly_history(coordinates, at).await?;

        Ok(PastWeather {
            location: location.to_string(),
            days_ago,
            hours,
        })
    }
}

/// Subtracts whole days from `now`, refusing values outside chrono's range.
pub(crate) fn days_before(
    now: DateTime<Utc>,
    days_ago: u64,
) -> Result<DateTime<Utc>, WeatherError> {
    let out_of_range = || WeatherError::InvalidRequest {
        reason: format!("{days_ago} days ago is out of range"),
    };
    let span = i64::try_from(days_ago)
        .ok()
        .and_then(Duration::try_days)
        .ok_or_else(out_of_range)?;
    Ok(now.checked_sub_signed(span).ok_or_else(out_of_range)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the history timestamp it was asked for.
    struct Recording {
        coordinates: Option<Coordinates>,
        asked_at: Mutex<Option<DateTime<Utc>>>,
    }

    #[async_trait]
    impl WeatherService for Recording {
        async fn current_weather(&self, _location: &str) -> Result<CurrentWeather, WeatherError> {
            Err(WeatherError::MissingField { field: "main" }.into())
        }

        async fn coordinates(&self, _location: &str) -> Result<Coordinates, WeatherError> {
            self.coordinates
                .ok_or_else(|| WeatherError::MissingField { field: "coord" }.into())
        }

        async fn hourly_history(
            &self,
            _coordinates: Coordinates,
            at: DateTime<Utc>,
        ) -> Result<Vec<HourlyObservation>, WeatherError> {
            *self.asked_at.lock().expect("lock") = Some(at);
            Ok(Vec::new())
        }
    }

    #[test]
    fn days_before_subtracts_whole_days() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        let then = days_before(now, 3).expect("in range");
        assert_eq!((now - then).num_days(), 3);
    }

    #[test]
    fn days_before_rejects_absurd_offsets() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        assert!(days_before(now, 99_999_999_999).is_err());
        assert!(days_before(now, u64::MAX).is_err());
    }

    #[tokio::test]
    async fn past_days_weather_queries_the_shifted_time() {
        let service = Recording {
            coordinates: Some(Coordinates {
                lat: 48.85,
                lon: 2.35,
            }),
            asked_at: Mutex::new(None),
        };

        let past = service
            .past_days_weather("paris", 2)
            .await
            .expect("past weather");

        assert_eq!(past.location, "paris");
        assert_eq!(past.days_ago, 2);
        assert!(past.hours.is_empty());

        let asked = *service.asked_at.lock().expect("lock");
        let elapsed = Utc::now() - asked.expect("history was queried");
        assert_eq!(elapsed.num_days(), 2);
    }

    #[tokio::test]
    async fn past_days_weather_stops_without_coordinates() {
        let service = Recording {
            coordinates: None,
            asked_at: Mutex::new(None),
        };

        assert!(service.past_days_weather("atlantis", 1).await.is_err());
        assert!(service.asked_at.lock().expect("lock").is_none());
    }
}

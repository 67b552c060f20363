//! Error handling foundation for talking-bot.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain-specific error types in its own
//! error module and wraps them in a [`Report`] at the point of failure.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// The second parameter names the crate-level error context, e.g.
/// `Result<CurrentWeather, WeatherError>`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }
}

//! Location and day-offset extraction from raw message text.
//!
//! Both extractors expect text that has already been trimmed and
//! lower-cased by the router.

/// Phrases that introduce a location, tried in order.
pub const LOCATION_TRIGGERS: [&str; 3] = [
    "weather in",
    "what's the weather in",
    "what is the weather in",
];

/// Returns the text following the first matching trigger phrase.
///
/// The trigger may sit anywhere in the text; words before it are dropped
/// and only its first occurrence is consumed. A remainder that is empty
/// after trimming counts as no location.
#[must_use]
pub fn location(text: &str) -> Option<String> {
    let (_, remainder) = LOCATION_TRIGGERS
        .iter()
        .find_map(|trigger| text.split_once(trigger))?;
    let remainder = remainder.trim();
    (!remainder.is_empty()).then(|| remainder.to_string())
}

/// Returns the number following the first `days <digits>` word pair.
///
/// Counts too large for `u64` saturate; the caller decides whether the
/// offset is usable.
#[must_use]
pub fn days_ago(text: &str) -> Option<u64> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.windows(2).find_map(|pair| match pair {
        ["days", count] if is_digits(count) => Some(count.parse().unwrap_or(u64::MAX)),
        _ => None,
    })
}

fn is_digits(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_after_leading_trigger() {
        assert_eq!(location("weather in paris now").as_deref(), Some("paris now"));
        assert_eq!(
            location("weather in new york").as_deref(),
            Some("new york")
        );
    }

    #[test]
    fn location_after_a_mid_sentence_trigger() {
        assert_eq!(
            location("what's the weather in paris now").as_deref(),
            Some("paris now")
        );
        assert_eq!(
            location("tell me the weather in rome days 2").as_deref(),
            Some("rome days 2")
        );
    }

    #[test]
    fn location_strips_only_the_first_occurrence() {
        assert_eq!(
            location("weather in weather in oslo").as_deref(),
            Some("weather in oslo")
        );
    }

    #[test]
    fn location_absent_without_trigger() {
        assert_eq!(location("how is the weather today"), None);
        assert_eq!(location("weather for berlin now"), None);
    }

    #[test]
    fn location_absent_when_nothing_remains() {
        assert_eq!(location("weather in"), None);
        assert_eq!(location("   weather in   "), None);
    }

    #[test]
    fn days_ago_reads_the_word_after_days() {
        assert_eq!(days_ago("weather days 3 ago"), Some(3));
        assert_eq!(days_ago("weather in london days 10"), Some(10));
    }

    #[test]
    fn days_ago_absent_cases() {
        assert_eq!(days_ago("weather ago"), None);
        assert_eq!(days_ago("weather 3 days ago"), None);
        assert_eq!(days_ago("weather days three"), None);
        assert_eq!(days_ago("weather days -2"), None);
        assert_eq!(days_ago("days"), None);
    }

    #[test]
    fn days_ago_takes_the_first_numeric_pair() {
        assert_eq!(days_ago("days x days 4 days 9"), Some(4));
    }

    #[test]
    fn days_ago_keeps_the_first_count_even_when_huge() {
        assert_eq!(
            days_ago("weather in oslo days 99999999999 days 2"),
            Some(99_999_999_999)
        );
        assert_eq!(
            days_ago("weather days 123456789012345678901234567890"),
            Some(u64::MAX)
        );
    }
}

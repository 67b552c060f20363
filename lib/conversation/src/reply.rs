//! Fixed reply texts and the chit-chat system prompt.

/// System prompt sent with every chit-chat completion.
pub const CHAT_SYSTEM_PROMPT: &str = "You are chatting with an AI. Feel free to ask me any questions or talk about any topic you like, and I'll do my best to respond in a natural, conversational manner. Whether it's about science, technology, history, or just casual chit-chat, I'm here to chat with you!

Additionally, I can provide you with the current weather information for any city or town. Just ask me something like 'What's the weather in London?' or 'Tell me the weather forecast for New York.' I'll fetch the latest weather data for you.

If you ever want to end the conversation, simply say 'Goodbye' or 'Exit.' Now, let's have a pleasant chat!
";

/// Asked when a weather request names no place.
pub const ASK_LOCATION: &str = "Please provide a valid location for weather information.";

/// Asked when a historical weather request names no day count.
pub const ASK_DAYS: &str = "Please specify the number of days you want to know the weather for.";

/// Opens the stylist sub-dialogue.
pub const ASK_FAVORITE_COLOR: &str =
    "I'd love to be your personal stylist! To get started, what's your favorite color?";

/// Opens the health sub-dialogue.
pub const ASK_HEALTH_FOCUS: &str = "Happy to help you stay healthy! Would you like tips on nutrition, exercise, or general wellness?";

/// Sent when the language model cannot produce a reply.
pub const CHAT_UNAVAILABLE: &str =
    "Sorry, I'm having trouble coming up with a reply right now. Please try again.";

/// Apology for a failed current-weather lookup.
#[must_use]
pub fn current_weather_failed(location: &str) -> String {
    format!("Sorry, I couldn't fetch the current weather for {location}. Please try again.")
}

/// Apology for a failed historical-weather lookup.
#[must_use]
pub fn past_weather_failed(days_ago: u64, location: &str) -> String {
    format!(
        "Sorry, I couldn't fetch weather information for {days_ago} days ago in {location}. Please try again."
    )
}

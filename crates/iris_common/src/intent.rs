//! Intent classification - maps user utterances to service intents
//!
//! Ordered substring matching over a fixed keyword table. The table order
//! is a routing tie-break, not an implementation detail: an utterance that
//! matches several keyword sets is classified by the first entry that
//! matches, so "what time is it plus 2" is Time, never Calculation.

use serde::{Deserialize, Serialize};

/// Known intents with a dedicated handler in the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Current conditions for a city => WeatherProvider
    Weather,
    /// Current date/time => clock service
    Time,
    /// Open question or request for analysis => LLM backend
    AiChat,
    /// Arithmetic request => calculator
    Calculation,
    /// Anything else => LLM backend when configured, canned replies otherwise
    GeneralChat,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Weather => "weather",
            Self::Time => "time",
            Self::AiChat => "ai_chat",
            Self::Calculation => "calculation",
            Self::GeneralChat => "general_chat",
        };
        write!(f, "{}", s)
    }
}

/// Trigger keywords per intent, in classification priority order.
///
/// Weather outranks Time outranks AiChat outranks Calculation. Changing
/// the order changes routing for mixed utterances; keep the regression
/// tests in sync.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Weather,
        &["weather", "temperature", "forecast", "rain", "sunny", "cloudy"],
    ),
    (
        Intent::Time,
        &["time", "date", "what time", "current time"],
    ),
    (
        Intent::AiChat,
        &["tell me", "explain", "what do you think", "opinion", "advice"],
    ),
    (
        Intent::Calculation,
        &["calculate", "math", "plus", "minus", "multiply", "divide"],
    ),
];

/// Classify an utterance to an intent.
///
/// Case-insensitive, first match in `INTENT_KEYWORDS` wins, no match
/// falls through to `GeneralChat`. Pure and deterministic.
pub fn classify(input: &str) -> Intent {
    let lower = input.to_lowercase();

    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *intent;
        }
    }

    Intent::GeneralChat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_intent() {
        assert_eq!(classify("What's the weather in Paris?"), Intent::Weather);
        assert_eq!(classify("will it rain tomorrow"), Intent::Weather);
        assert_eq!(classify("FORECAST please"), Intent::Weather);
    }

    #[test]
    fn test_time_intent() {
        assert_eq!(classify("What time is it?"), Intent::Time);
        assert_eq!(classify("today's date"), Intent::Time);
    }

    #[test]
    fn test_ai_chat_intent() {
        assert_eq!(classify("tell me about rust"), Intent::AiChat);
        assert_eq!(classify("Explain ownership"), Intent::AiChat);
        assert_eq!(classify("I need some advice"), Intent::AiChat);
    }

    #[test]
    fn test_calculation_intent() {
        assert_eq!(classify("Calculate 15 * 23"), Intent::Calculation);
        assert_eq!(classify("2 plus 2"), Intent::Calculation);
        assert_eq!(classify("help with math"), Intent::Calculation);
    }

    #[test]
    fn test_general_chat_default() {
        assert_eq!(classify("hello there"), Intent::GeneralChat);
        assert_eq!(classify(""), Intent::GeneralChat);
        assert_eq!(classify("asdfasdf"), Intent::GeneralChat);
    }

    #[test]
    fn test_priority_weather_beats_time() {
        // Contains both "temperature" (Weather) and "time" (Time);
        // Weather is earlier in the table.
        assert_eq!(
            classify("temperature over time"),
            Intent::Weather
        );
    }

    #[test]
    fn test_priority_time_beats_calculation() {
        // Contains both "time" (Time) and "plus" (Calculation).
        assert_eq!(classify("what time is it plus 2 hours"), Intent::Time);
    }

    #[test]
    fn test_priority_weather_beats_calculation() {
        assert_eq!(classify("calculate the rain chance"), Intent::Weather);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let inputs = ["weather in Oslo", "what time", "calculate 1+1", "hi"];
        for input in inputs {
            assert_eq!(classify(input), classify(input));
        }
    }
}

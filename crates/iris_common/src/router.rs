//! Service router - dispatches classified utterances to capabilities
//!
//! Owns the degradation policy: a missing credential, a timeout, or a
//! failed external call is converted to reply text here and never escapes
//! to the caller. The interactive loop only ever sees text.

use tracing::{debug, warn};

use crate::calculator::{self, CalcError};
use crate::clock;
use crate::config::ServiceAvailability;
use crate::fallback::{FallbackPicker, AI_CHAT_POOL, GENERAL_CHAT_POOL};
use crate::history::{ConversationHistory, ConversationTurn};
use crate::intent::{self, Intent};
use crate::llm::{ChatBackend, ChatError, ChatMessage};
use crate::weather::{WeatherError, WeatherProvider, WeatherReport};

/// City used when the utterance names none
pub const DEFAULT_CITY: &str = "London";

/// Prepositions that introduce a city name ("weather in Paris")
const CITY_PREPOSITIONS: &[&str] = &["in", "at", "for"];

/// System preamble heading every LLM context
const SYSTEM_PREAMBLE: &str =
    "You are a helpful AI assistant built into a command-line chatbot. Be concise but informative.";

const MISSING_WEATHER_KEY_REPLY: &str =
    "I'd love to check the weather, but I need a weather API key to access current data.";

const CALC_OPERATIONS_REPLY: &str =
    "I can only handle basic math operations (+, -, *, /, parentheses)";

const CALC_FORMAT_REPLY: &str =
    "I couldn't calculate that. Please use a format like '2 + 3' or '10 * 5'";

/// Routes utterances to capabilities and applies the degradation policy.
///
/// Providers are present exactly when their credential was resolved at
/// session start. The fallback picker is injected; tests seed it.
pub struct ServiceRouter {
    weather: Option<Box<dyn WeatherProvider>>,
    llm: Option<Box<dyn ChatBackend>>,
    fallback: FallbackPicker,
}

impl ServiceRouter {
    pub fn new(
        weather: Option<Box<dyn WeatherProvider>>,
        llm: Option<Box<dyn ChatBackend>>,
        fallback: FallbackPicker,
    ) -> Self {
        Self {
            weather,
            llm,
            fallback,
        }
    }

    /// Which external services this router can actually call
    pub fn availability(&self) -> ServiceAvailability {
        ServiceAvailability {
            weather: self.weather.is_some(),
            llm: self.llm.is_some(),
        }
    }

    /// Route one utterance and produce the reply plus the turn to record.
    ///
    /// The router reads history for LLM context but never owns its
    /// storage; the caller appends the returned turn.
    pub fn handle(
        &mut self,
        input: &str,
        history: &ConversationHistory,
    ) -> (String, ConversationTurn) {
        let intent = intent::classify(input);
        debug!("classified intent={}", intent);

        let reply = match intent {
            Intent::Weather => self.handle_weather(input),
            Intent::Time => clock::current_time_reply(),
            Intent::Calculation => handle_calculation(input),
            Intent::AiChat => self.handle_chat(input, history, AI_CHAT_POOL),
            Intent::GeneralChat => self.handle_chat(input, history, GENERAL_CHAT_POOL),
        };

        let turn = ConversationTurn::new(input, reply.clone());
        (reply, turn)
    }

    fn handle_weather(&self, input: &str) -> String {
        let city = extract_city(input);

        let Some(provider) = &self.weather else {
            return MISSING_WEATHER_KEY_REPLY.to_string();
        };

        match provider.current(&city) {
            Ok(report) => format_weather_reply(&city, &report),
            Err(WeatherError::BadStatus(status)) => {
                warn!("weather lookup for {} failed with status {}", city, status);
                format!(
                    "Sorry, I couldn't get weather data for {}. Please check the city name.",
                    city
                )
            }
            Err(e) => {
                warn!("weather service unavailable: {}", e);
                format!("Weather service is currently unavailable: {}", e)
            }
        }
    }

    fn handle_chat(
        &mut self,
        input: &str,
        history: &ConversationHistory,
        pool: &'static [&'static str],
    ) -> String {
        let Some(backend) = &self.llm else {
            return self.fallback.pick(pool).to_string();
        };

        let messages = build_context(history, input);
        match backend.complete(&messages) {
            Ok(reply) => reply,
            Err(ChatError::BadStatus(status)) => {
                warn!("chat backend returned status {}", status);
                format!("AI service temporarily unavailable (Status: {})", status)
            }
            Err(e) => {
                warn!("chat backend failed: {}", e);
                format!("AI service error: {}", e)
            }
        }
    }
}

fn handle_calculation(input: &str) -> String {
    match calculator::evaluate(input) {
        Ok(value) => format!("The answer is: {}", calculator::format_number(value)),
        Err(CalcError::UnsupportedCharacter(c)) => {
            debug!("calculation rejected: unsupported character '{}'", c);
            CALC_OPERATIONS_REPLY.to_string()
        }
        Err(e) => {
            debug!("calculation rejected: {}", e);
            CALC_FORMAT_REPLY.to_string()
        }
    }
}

/// Extract a city from the utterance.
///
/// Deliberately naive: the token after the first whitespace-delimited
/// "in"/"at"/"for" that has one, no punctuation trimming, no multi-word
/// cities. Falls back to `DEFAULT_CITY`.
fn extract_city(input: &str) -> String {
    let words: Vec<&str> = input.split_whitespace().collect();

    for (i, word) in words.iter().enumerate() {
        if CITY_PREPOSITIONS.contains(&word.to_lowercase().as_str()) {
            if let Some(city) = words.get(i + 1) {
                return (*city).to_string();
            }
        }
    }

    DEFAULT_CITY.to_string()
}

/// System preamble, then the recent window expanded to alternating
/// user/assistant messages in order, then the current utterance.
fn build_context(history: &ConversationHistory, input: &str) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(SYSTEM_PREAMBLE)];

    for turn in history.recent() {
        messages.push(ChatMessage::user(&turn.user_text));
        messages.push(ChatMessage::assistant(&turn.bot_text));
    }

    messages.push(ChatMessage::user(input));
    messages
}

fn format_weather_reply(city: &str, report: &WeatherReport) -> String {
    format!(
        "Weather in {}: {}, {}°C (feels like {}°C), humidity {}%",
        city,
        capitalize(&report.description),
        report.temp_c,
        report.feels_like_c,
        report.humidity
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_city_after_preposition() {
        assert_eq!(extract_city("weather in Paris"), "Paris");
        assert_eq!(extract_city("forecast FOR Oslo please"), "Oslo");
        assert_eq!(extract_city("what's it like at Bergen"), "Bergen");
    }

    #[test]
    fn test_extract_city_default() {
        assert_eq!(extract_city("weather"), DEFAULT_CITY);
        assert_eq!(extract_city("how's the weather in"), DEFAULT_CITY);
    }

    #[test]
    fn test_extract_city_keeps_punctuation() {
        // The heuristic is deliberately naive; trailing punctuation stays.
        assert_eq!(extract_city("weather in Paris?"), "Paris?");
    }

    #[test]
    fn test_extract_city_takes_first_preposition_with_follower() {
        assert_eq!(extract_city("weather in Tokyo for tomorrow"), "Tokyo");
    }

    #[test]
    fn test_build_context_empty_history() {
        let history = ConversationHistory::new();
        let messages = build_context(&history, "hello");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system(SYSTEM_PREAMBLE));
        assert_eq!(messages[1], ChatMessage::user("hello"));
    }

    #[test]
    fn test_build_context_expands_turns_in_order() {
        let mut history = ConversationHistory::new();
        history.push(ConversationTurn::new("q1", "a1"));
        history.push(ConversationTurn::new("q2", "a2"));

        let messages = build_context(&history, "q3");
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[1], ChatMessage::user("q1"));
        assert_eq!(messages[2], ChatMessage::assistant("a1"));
        assert_eq!(messages[3], ChatMessage::user("q2"));
        assert_eq!(messages[4], ChatMessage::assistant("a2"));
        assert_eq!(messages[5], ChatMessage::user("q3"));
    }

    #[test]
    fn test_format_weather_reply() {
        let report = WeatherReport {
            description: "scattered clouds".to_string(),
            temp_c: 14.0,
            feels_like_c: 12.5,
            humidity: 72,
        };
        assert_eq!(
            format_weather_reply("Paris", &report),
            "Weather in Paris: Scattered clouds, 14°C (feels like 12.5°C), humidity 72%"
        );
    }

    #[test]
    fn test_handle_calculation_messages() {
        assert_eq!(handle_calculation("Calculate 15 * 23"), "The answer is: 345");
        assert_eq!(handle_calculation("2 + a"), CALC_OPERATIONS_REPLY);
        assert_eq!(handle_calculation("calculate 2 +"), CALC_FORMAT_REPLY);
    }
}

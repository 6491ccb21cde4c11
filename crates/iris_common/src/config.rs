//! Session configuration - credentials and service availability
//!
//! Credentials are resolved once at session start. A missing key is never
//! fatal; it switches the affected service to its fallback path.

/// Env var gating the weather provider
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Env var gating the LLM chat backend
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Credentials for the session, resolved once at startup
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub weather_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl SessionConfig {
    /// Read credentials from the environment; absent keys are tolerated
    pub fn from_env() -> Self {
        Self {
            weather_api_key: read_secret(WEATHER_API_KEY_VAR),
            openai_api_key: read_secret(OPENAI_API_KEY_VAR),
        }
    }
}

/// Which external collaborators can actually be called this session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceAvailability {
    pub weather: bool,
    pub llm: bool,
}

impl ServiceAvailability {
    /// Human-readable service list for the welcome banner.
    ///
    /// Time/Date and Calculator are local and always available.
    pub fn service_names(&self) -> Vec<&'static str> {
        let mut services = Vec::new();
        if self.weather {
            services.push("Weather");
        }
        if self.llm {
            services.push("AI Chat");
        }
        services.push("Time/Date");
        services.push("Calculator");
        services
    }
}

fn read_secret(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

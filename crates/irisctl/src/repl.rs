//! REPL - interactive chat loop
//!
//! Reads one trimmed line per turn, recognizes exit keywords, skips blank
//! input without invoking the router, and prints replies with the
//! assistant label. History lives here for the lifetime of the session;
//! the router only reads it.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use iris_common::config::SessionConfig;
use iris_common::display;
use iris_common::fallback::FallbackPicker;
use iris_common::history::ConversationHistory;
use iris_common::llm::{ChatBackend, ChatConfig, OpenAiChatClient};
use iris_common::router::ServiceRouter;
use iris_common::weather::{OpenWeatherClient, WeatherConfig, WeatherProvider};

/// Inputs that end the session, matched case-insensitively
pub const EXIT_KEYWORDS: &[&str] = &["quit", "exit", "goodbye"];

/// Start an interactive session on stdin/stdout
pub fn run(config: &SessionConfig) -> Result<()> {
    let router = build_router(config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_loop(router, &mut input, &mut output)
}

/// Build the session router from resolved credentials.
///
/// A provider exists exactly when its credential does; everything else
/// degrades inside the router.
pub fn build_router(config: &SessionConfig) -> Result<ServiceRouter> {
    let weather = match &config.weather_api_key {
        Some(key) => Some(Box::new(OpenWeatherClient::new(WeatherConfig::new(key.as_str()))?)
            as Box<dyn WeatherProvider>),
        None => None,
    };

    let llm = match &config.openai_api_key {
        Some(key) => Some(
            Box::new(OpenAiChatClient::new(ChatConfig::new(key.as_str()))?) as Box<dyn ChatBackend>,
        ),
        None => None,
    };

    Ok(ServiceRouter::new(weather, llm, FallbackPicker::new()))
}

/// Main REPL loop (factored out so tests can drive a whole session)
pub fn run_loop(
    mut router: ServiceRouter,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut history = ConversationHistory::new();
    let services = router.availability().service_names();
    writeln!(output, "{}", display::welcome_banner(&services))?;

    loop {
        write!(output, "{}", display::PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if EXIT_KEYWORDS.contains(&line.to_lowercase().as_str()) {
            writeln!(output, "{}", display::goodbye())?;
            break;
        }

        let (reply, turn) = router.handle(line, &history);
        writeln!(output, "{}", display::format_reply(&reply))?;
        history.push(turn);
    }

    Ok(())
}

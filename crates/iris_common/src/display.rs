//! Display helpers - Iris's voice on the terminal
//!
//! Every user-visible string the chat surface prints is formatted here so
//! the REPL can stay generic over its output writer.

use owo_colors::OwoColorize;

/// Label prefixed to every assistant line
pub const ASSISTANT_LABEL: &str = "Iris";

/// Prompt shown before each user line (no trailing newline)
pub const PROMPT: &str = "You: ";

/// Welcome banner printed at session start, listing available services
pub fn welcome_banner(services: &[&str]) -> String {
    format!(
        "{} Hello! I'm connected to various online services.\n\
         I can check weather, tell time, do calculations, and have intelligent conversations.\n\
         Try asking: 'What's the weather in Paris?' or 'What time is it?' or 'Calculate 15 * 23'\n\
         Type 'quit' to exit.\n\
         {}\n\
         Available services: {}\n\
         {}",
        label(),
        rule(),
        services.join(", "),
        rule()
    )
}

/// One assistant reply line
pub fn format_reply(text: &str) -> String {
    format!("{} {}", label(), text)
}

/// Farewell printed when an exit keyword ends the session
pub fn goodbye() -> String {
    format!("{} Thanks for chatting! Stay connected!", label())
}

fn label() -> String {
    format!("{}:", ASSISTANT_LABEL.cyan().bold())
}

fn rule() -> String {
    "-".repeat(80)
}

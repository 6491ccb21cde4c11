//! Status command - which services the current environment enables

use owo_colors::OwoColorize;

use iris_common::config::{SessionConfig, OPENAI_API_KEY_VAR, WEATHER_API_KEY_VAR};

/// Render the service availability summary
pub fn render(config: &SessionConfig) -> String {
    let mut lines = vec!["Service availability:".to_string()];

    lines.push(service_line(
        "Weather",
        config.weather_api_key.is_some(),
        WEATHER_API_KEY_VAR,
    ));
    lines.push(service_line(
        "AI Chat",
        config.openai_api_key.is_some(),
        OPENAI_API_KEY_VAR,
    ));
    lines.push(format!("  {} Time/Date (built in)", "✓".green()));
    lines.push(format!("  {} Calculator (built in)", "✓".green()));

    lines.join("\n")
}

fn service_line(name: &str, available: bool, env_var: &str) -> String {
    if available {
        format!("  {} {} ({} set)", "✓".green(), name, env_var)
    } else {
        format!("  {} {} (set {} to enable)", "✗".red(), name, env_var)
    }
}

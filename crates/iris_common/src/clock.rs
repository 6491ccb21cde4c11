//! Clock service - current date/time replies

use chrono::Local;

/// Timestamp format shown to the user
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local date and time as a full reply sentence
pub fn current_time_reply() -> String {
    format!(
        "Current date and time: {}",
        Local::now().format(TIME_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_reply_has_prefix_and_parseable_timestamp() {
        let reply = current_time_reply();
        let timestamp = reply
            .strip_prefix("Current date and time: ")
            .expect("reply should carry the fixed prefix");
        assert!(NaiveDateTime::parse_from_str(timestamp, TIME_FORMAT).is_ok());
    }
}

//! Regression tests driving whole REPL sessions through an in-memory
//! reader and writer.

use std::io::Cursor;

use iris_common::fallback::{FallbackPicker, GENERAL_CHAT_POOL};
use iris_common::router::ServiceRouter;
use irisctl::repl::{run_loop, EXIT_KEYWORDS};

fn offline_router() -> ServiceRouter {
    ServiceRouter::new(None, None, FallbackPicker::with_seed(7))
}

fn run_session(input: &str) -> String {
    let mut reader = Cursor::new(input.to_string());
    let mut output = Vec::new();
    run_loop(offline_router(), &mut reader, &mut output).expect("session should not error");
    String::from_utf8(output).expect("output should be UTF-8")
}

#[test]
fn quit_terminates_without_invoking_the_router() {
    let output = run_session("quit\n");

    assert!(output.contains("Thanks for chatting"));
    // "quit" carries no intent keywords, so a routed reply would have come
    // from the general-chat fallback pool. None of it may appear.
    for canned in GENERAL_CHAT_POOL {
        assert!(!output.contains(canned), "router was invoked for 'quit'");
    }
}

#[test]
fn exit_keywords_are_case_insensitive() {
    for keyword in EXIT_KEYWORDS {
        let output = run_session(&format!("{}\n", keyword.to_uppercase()));
        assert!(
            output.contains("Thanks for chatting"),
            "'{}' did not end the session",
            keyword
        );
    }
}

#[test]
fn blank_lines_are_skipped_without_replies() {
    let output = run_session("\n   \nquit\n");

    // Three prompts (two skipped lines plus the quit), no routed reply.
    assert_eq!(output.matches("You: ").count(), 3);
    for canned in GENERAL_CHAT_POOL {
        assert!(!output.contains(canned), "blank input reached the router");
    }
}

#[test]
fn eof_ends_the_session() {
    let output = run_session("");
    assert!(output.contains("Available services:"));
}

#[test]
fn calculation_round_trip() {
    let output = run_session("Calculate 15 * 23\nquit\n");
    assert!(output.contains("345"), "output: {}", output);
}

#[test]
fn time_round_trip() {
    let output = run_session("What time is it?\nquit\n");
    assert!(output.contains("Current date and time: "), "output: {}", output);
}

#[test]
fn banner_lists_local_services_when_offline() {
    let output = run_session("quit\n");
    assert!(output.contains("Available services: Time/Date, Calculator"));
}

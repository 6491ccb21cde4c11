//! Iris Control - command-line chat client for the Iris assistant

pub mod repl;
pub mod status;

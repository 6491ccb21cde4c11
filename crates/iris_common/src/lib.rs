//! Iris Common - Core chat logic shared by the Iris binaries
//!
//! Intent classification, service routing, conversation history, and the
//! external collaborator interfaces (weather lookup, LLM chat), plus the
//! degradation policy that keeps the session alive when a credential is
//! missing or an external call fails.

pub mod calculator;
pub mod clock;
pub mod config;
pub mod display;
pub mod fallback;
pub mod history;
pub mod intent;
pub mod llm;
pub mod router;
pub mod weather;

pub use history::{ConversationHistory, ConversationTurn};
pub use intent::Intent;
pub use router::ServiceRouter;

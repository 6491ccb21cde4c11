//! Conversation history - append-only log of completed exchanges
//!
//! Storage grows without bound for the lifetime of the session; only a
//! bounded window of the most recent turns is ever read back when
//! building LLM context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of recent turns included when assembling LLM context
pub const CONTEXT_WINDOW_TURNS: usize = 3;

/// One completed exchange: what the user said and what Iris replied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_text: String,
    pub bot_text: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// Record an exchange, stamped with the current time
    pub fn new(user_text: impl Into<String>, bot_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            bot_text: bot_text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered record of the session's exchanges.
///
/// Append-only: turns are never reordered, mutated, or dropped from
/// storage. Truncation happens only in the `recent()` view.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent `CONTEXT_WINDOW_TURNS` turns, oldest first
    pub fn recent(&self) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(CONTEXT_WINDOW_TURNS);
        &self.turns[start..]
    }
}

//! Canned fallback replies for degraded operation
//!
//! When no LLM credential is configured, chat intents are answered from
//! fixed local pools. Selection is randomized but the source is seedable
//! so tests can pin the exact reply.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replies for general chat when no LLM is configured
pub const GENERAL_CHAT_POOL: &[&str] = &[
    "That's interesting! Tell me more about what you're thinking.",
    "I'd love to hear more about that topic from your perspective.",
    "Great point! What led you to think about this?",
    "That's a fascinating subject! What aspects interest you most?",
];

/// Replies for AI-chat requests when no LLM is configured.
///
/// Distinct pool from `GENERAL_CHAT_POOL`: these acknowledge that a more
/// capable model would be needed. Never conflate the two.
pub const AI_CHAT_POOL: &[&str] = &[
    "That's a thoughtful question! I'd need access to advanced AI models to give you a comprehensive answer.",
    "Interesting topic! For detailed analysis like this, I'd typically use more advanced language models.",
    "Great question! This is the kind of complex query that benefits from larger AI models with extensive training.",
    "I find that fascinating! For in-depth responses like this, I'd normally leverage more sophisticated AI systems.",
];

/// Seedable picker over fallback pools
#[derive(Debug)]
pub struct FallbackPicker {
    rng: StdRng,
}

impl FallbackPicker {
    /// Entropy-seeded picker for production use
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed picker so tests can assert exact replies
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform pick from a pool
    pub fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}

impl Default for FallbackPicker {
    fn default() -> Self {
        Self::new()
    }
}

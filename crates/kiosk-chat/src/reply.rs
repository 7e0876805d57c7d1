//! Canned reply pools, quick-reply chips, and reply selection.
//!
//! Greeting and goodbye replies are drawn from small fixed pools through
//! a pluggable [`ReplySelector`], so tests can swap the default random
//! strategy for a deterministic one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Reply pools and fixed texts
// =============================================================================

/// Greeting replies, one chosen per GREETING response.
pub static GREETING_REPLIES: &[&str] = &[
    "👋 Hi! I’m the Campus Chatbot. How can I help you today?",
    "Hello there! 😊 What can I do for you?",
    "Hey! Need help with campus info?",
    "Hi! I'm here to assist you with anything about the campus.",
    "Welcome! 👋 Ask me anything about library hours, modules, or campus services.",
];

/// Goodbye replies, one chosen per GOODBYE response.
pub static GOODBYE_REPLIES: &[&str] = &[
    "👋 Goodbye! Feel free to ask again anytime.",
    "See you! If you need anything later, just ask.",
    "Take care! I'm here when you need help.",
    "Bye! Hope that helped come back if you need more info.",
];

pub const EMPTY_INPUT_REPLY: &str = "Please type something so I can help 😊";
pub const TOO_SHORT_REPLY: &str = "Can you please provide a complete question? 😊";
pub const MID_CONFIDENCE_REPLY: &str = "I'm not fully sure 🤔 Did you mean one of these?";
pub const LOW_CONFIDENCE_REPLY: &str =
    "I'm not fully sure about that 🤔. Could you rephrase your question?";
pub const FOLLOW_UP_PROMPT: &str = "Is there anything else I can help you with? 😊";
pub const FALLBACK_REPLY: &str =
    "I'm having trouble understanding right now 🙏 Please try again in a moment.";

/// Quick-reply chips per branch.
pub static GREETING_QUICK_REPLIES: &[&str] = &["Library Hours", "Campus Map", "Exam Info"];
pub static GOODBYE_QUICK_REPLIES: &[&str] =
    &["Library Hours", "Admissions FAQ", "Campus Services"];
pub static LOW_CONFIDENCE_QUICK_REPLIES: &[&str] =
    &["Library Hours", "Semester Dates", "Student Portal"];

// =============================================================================
// Selection strategies
// =============================================================================

/// Strategy for picking one reply out of a fixed pool.
pub trait ReplySelector: Send + Sync {
    fn pick<'a>(&self, pool: &[&'a str]) -> &'a str;
}

/// Uniform random selection. Seedable for reproducible sequences.
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplySelector for RandomSelector {
    fn pick<'a>(&self, pool: &[&'a str]) -> &'a str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pool[rng.random_range(0..pool.len())]
    }
}

/// Deterministic cycling selection, used in tests.
#[derive(Default)]
pub struct RoundRobinSelector {
    next: AtomicUsize,
}

impl RoundRobinSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplySelector for RoundRobinSelector {
    fn pick<'a>(&self, pool: &[&'a str]) -> &'a str {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        pool[index % pool.len()]
    }
}

// =============================================================================
// Tests
// =============================================================================

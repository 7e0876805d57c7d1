//! Query text normalization and intent keyword detection.
//!
//! Normalization produces the canonical form used for keyword matching
//! and for suggestion deduplication keys. Follow-up detection is a
//! heuristic over phrasal patterns and anaphoric pronouns; false
//! positives on genuinely new topics are rare but accepted.

use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Compiled regex sets (compiled once, reused across calls)
// =============================================================================

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

struct FollowUpPatterns {
    phrasal: Vec<Regex>,
    pronouns: Regex,
}

static FOLLOW_UP_PATTERNS: LazyLock<FollowUpPatterns> = LazyLock::new(|| {
    let mk = |pats: &[&str]| -> Vec<Regex> {
        pats.iter()
            .map(|p| Regex::new(p).expect("Invalid follow-up regex"))
            .collect()
    };

    FollowUpPatterns {
        // Time/hours/schedule phrasings that omit their subject
        phrasal: mk(&[
            r"(?i)\bwhen\s+(?:does|do|did|is|are|will)\b",
            r"(?i)\bwhat\s+time\b",
            r"(?i)\bopening\s+(?:hours?|times?)\b",
            r"(?i)\bclosing\s+(?:hours?|times?)\b",
            r"(?i)\bhow\s+late\b",
            r"(?i)\bhow\s+long\b",
            r"(?i)\bstill\s+open\b",
            r"(?i)\buntil\s+when\b",
        ]),
        pronouns: Regex::new(r"(?i)\b(?:it|that|they|them|this|those)\b").unwrap(),
    }
});

// =============================================================================
// Keyword sets
// =============================================================================

/// Words that mark a short query as a greeting.
static GREETING_WORDS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "yo",
    "hii",
    "good",
    "morning",
    "afternoon",
    "evening",
];

/// Words that mark a short query as a goodbye.
static GOODBYE_WORDS: &[&str] = &[
    "bye",
    "goodbye",
    "see",
    "you",
    "cya",
    "chao",
    "take",
    "care",
    "farewell",
    "night",
];

// =============================================================================
// Public API
// =============================================================================

/// Normalize raw query text: lowercase, strip punctuation, collapse
/// whitespace runs to single spaces, trim.
///
/// Pure function; the result doubles as the deduplication key for
/// did-you-mean suggestions.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// True if any word of the normalized query is a greeting keyword.
pub fn contains_greeting(normalized: &str) -> bool {
    normalized
        .split_whitespace()
        .any(|w| GREETING_WORDS.contains(&w))
}

/// True if any word of the normalized query is a goodbye keyword.
pub fn contains_goodbye(normalized: &str) -> bool {
    normalized
        .split_whitespace()
        .any(|w| GOODBYE_WORDS.contains(&w))
}

/// Heuristic follow-up detection.
///
/// Fires on time/hours phrasings ("when does", "what time", "opening
/// hours") or on anaphoric pronouns (it/that/they/them/this/those) as
/// whole words. The caller still requires a bound previous match before
/// resolving, so a stray pronoun on a fresh session is harmless.
pub fn is_follow_up(text: &str) -> bool {
    let pats = &*FOLLOW_UP_PATTERNS;
    if pats.phrasal.iter().any(|re| re.is_match(text)) {
        return true;
    }
    pats.pronouns.is_match(text)
}

// =============================================================================
// Tests
// =============================================================================

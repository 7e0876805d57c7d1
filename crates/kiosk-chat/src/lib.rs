//! Dialogue layer for Kiosk.
//!
//! Runs the per-request branch ladder (greeting, goodbye, too-short,
//! follow-up, confidence-tiered matching), keeps per-session conversation
//! memory, and shapes structured replies for the HTTP surface.

pub mod engine;
pub mod normalize;
pub mod reply;
pub mod session;
pub mod translate;
pub mod types;
pub mod unknown;

pub use engine::ChatEngine;
pub use normalize::{contains_goodbye, contains_greeting, is_follow_up, normalize};
pub use reply::{RandomSelector, ReplySelector, RoundRobinSelector};
pub use session::{SessionMemory, SessionStore};
pub use translate::{NoopTranslator, Translator};
pub use types::{Branch, HealthInfo, Reply, Suggestion};
pub use unknown::UnknownLog;

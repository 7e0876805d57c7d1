//! Kiosk match crate - embedding service trait and cosine-similarity ranking.
//!
//! Provides the injected-embedder seam (trait + deterministic hash-based
//! default) and the two ranking primitives the dialogue policy consumes:
//! best-match and filtered top-k.

pub mod embedding;
pub mod similarity;

pub use embedding::{DynEmbedder, Embedder, HashEmbedder};
pub use similarity::{best_match, cosine_similarity, top_k_filtered, MatchResult};

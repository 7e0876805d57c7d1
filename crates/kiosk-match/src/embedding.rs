//! Embedding service trait and the default hash-based implementation.
//!
//! The embedding model is an injected collaborator: the engine only ever sees
//! the [`Embedder`] trait. `HashEmbedder` is the out-of-the-box backend — a
//! deterministic feature-hashing scheme that needs no model files and gives
//! token-overlap similarity, which is enough for exact and near-exact phrase
//! matching. A real sentence-transformer backend plugs in behind the same
//! trait.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use kiosk_core::error::KioskError;

/// Service for generating text embeddings.
///
/// Implementations convert text into fixed-dimensional vectors that capture
/// semantic meaning. Used both at startup (catalog questions) and per query.
pub trait Embedder: Send + Sync {
    /// Generate an embedding vector for the given text.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, KioskError>> + Send;

    /// Return the dimensionality of vectors produced by this service.
    fn dimensions(&self) -> usize;
}

/// Object-safe version of [`Embedder`] for dynamic dispatch.
///
/// Because `Embedder::embed` returns `impl Future` it is not object-safe.
/// This trait uses a boxed future instead, allowing `Box<dyn DynEmbedder>`
/// to be stored in structs without generics.
///
/// A blanket implementation is provided so that every `Embedder`
/// automatically implements `DynEmbedder`.
pub trait DynEmbedder: Send + Sync {
    /// Generate an embedding vector for the given text (boxed future).
    fn embed_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<f32>, KioskError>> + Send + 'a>>;

    /// Return the dimensionality of vectors produced by this service.
    fn dimensions(&self) -> usize;
}

/// Blanket impl: any `Embedder` automatically implements `DynEmbedder`.
impl<T: Embedder> DynEmbedder for T {
    fn embed_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<f32>, KioskError>> + Send + 'a>>
    {
        Box::pin(self.embed(text))
    }

    fn dimensions(&self) -> usize {
        Embedder::dimensions(self)
    }
}

// ---------------------------------------------------------------------------
// HashEmbedder - deterministic feature-hashing vectors
// ---------------------------------------------------------------------------

/// Feature-hashing embedder: each lowercased whitespace token is hashed into
/// one vector slot with a hash-derived sign, and the result is L2-normalized.
///
/// Identical texts always produce identical vectors, and texts sharing tokens
/// score positive cosine similarity against each other. No semantic model is
/// involved.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn hash_to_vector(&self, text: &str) -> Vec<f32> {
        let mut result = vec![0.0f32; self.dimensions];
        for token in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let h = hasher.finish();
            let slot = (h % self.dimensions as u64) as usize;
            let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
            result[slot] += sign;
        }

        // L2-normalize so cosine scores stay in [-1, 1] regardless of length.
        let norm: f32 = result.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in &mut result {
                *val /= norm;
            }
        }

        result
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(384)
    }
}

impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, KioskError> {
        if text.is_empty() {
            return Err(KioskError::Embedding(
                "Cannot embed empty text".to_string(),
            ));
        }
        Ok(self.hash_to_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::cosine_similarity;

    #[tokio::test]
    async fn test_hash_embedder_dimension() {
        let service = HashEmbedder::default();
        let vec = service.embed("hello world").await.unwrap();
        assert_eq!(vec.len(), 384);
    }

    #[tokio::test]
    async fn test_hash_embedder_custom_dimension() {
        let service = HashEmbedder::new(64);
        let vec = service.embed("hello world").await.unwrap();
        assert_eq!(vec.len(), 64);
        assert_eq!(Embedder::dimensions(&service), 64);
    }

    #[tokio::test]
    async fn test_hash_embedder_deterministic() {
        let service = HashEmbedder::default();
        let v1 = service.embed("same text").await.unwrap();
        let v2 = service.embed("same text").await.unwrap();
        assert_eq!(v1, v2);
    }

    #[tokio::test]
    async fn test_hash_embedder_case_insensitive_tokens() {
        let service = HashEmbedder::default();
        let v1 = service.embed("Library Hours").await.unwrap();
        let v2 = service.embed("library hours").await.unwrap();
        assert_eq!(v1, v2);
    }

    #[tokio::test]
    async fn test_hash_embedder_different_inputs() {
        let service = HashEmbedder::default();
        let v1 = service.embed("text one").await.unwrap();
        let v2 = service.embed("text two").await.unwrap();
        assert_ne!(v1, v2);
    }

    #[tokio::test]
    async fn test_hash_embedder_empty_text() {
        let service = HashEmbedder::default();
        let result = service.embed("").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_hash_embedder_unit_norm() {
        let service = HashEmbedder::default();
        let vec = service.embed("normalize me please").await.unwrap();
        let norm: f32 = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {}", norm);
    }

    #[tokio::test]
    async fn test_shared_tokens_score_higher_than_disjoint() {
        let service = HashEmbedder::default();
        let base = service.embed("library opening hours").await.unwrap();
        let overlapping = service.embed("library closing hours").await.unwrap();
        let disjoint = service.embed("cafeteria menu today").await.unwrap();

        let close = cosine_similarity(&base, &overlapping);
        let far = cosine_similarity(&base, &disjoint);
        assert!(close > far, "close={} far={}", close, far);
    }

    #[tokio::test]
    async fn test_identical_text_scores_one() {
        let service = HashEmbedder::default();
        let a = service.embed("exam schedule").await.unwrap();
        let b = service.embed("exam schedule").await.unwrap();
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_dyn_embedder_blanket_impl() {
        let service: Box<dyn DynEmbedder> = Box::new(HashEmbedder::default());
        let vec = service.embed_boxed("boxed call").await.unwrap();
        assert_eq!(vec.len(), service.dimensions());
    }
}

//! The immutable FAQ catalog: validated records, their embeddings, and the
//! related-question index.

use kiosk_core::error::KioskError;
use kiosk_match::DynEmbedder;
use thiserror::Error;
use tracing::info;

use crate::related::{build_related, RELATED_CAP};
use crate::types::{FaqEntry, RawFaq};

/// Errors raised while building or reading the catalog.
///
/// Build-time variants are fatal: the service must not start without a
/// usable catalog. `EntryNotFound` can only arise from an id that never came
/// out of this catalog and indicates a logic bug in the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("FAQ catalog has no entries")]
    Empty,

    #[error("Catalog entry {index} is missing a usable {field}")]
    MalformedEntry { index: usize, field: &'static str },

    #[error("No catalog entry with id {0}")]
    EntryNotFound(usize),

    #[error("Failed to embed catalog question {index}: {source}")]
    Embedding { index: usize, source: KioskError },

    #[error("Invalid catalog JSON: {0}")]
    Parse(String),
}

impl From<CatalogError> for KioskError {
    fn from(err: CatalogError) -> Self {
        KioskError::Catalog(err.to_string())
    }
}

/// Immutable collection of FAQ entries, their embeddings, and per-entry
/// related-question ids. Built once at startup; safe to share across request
/// tasks without synchronization.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<FaqEntry>,
    related: Vec<Vec<usize>>,
}

impl Catalog {
    /// Parse a JSON array of records and build the catalog from it.
    pub async fn from_json(json: &str, embedder: &dyn DynEmbedder) -> Result<Self, CatalogError> {
        let records: Vec<RawFaq> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::build(records, embedder).await
    }

    /// Validate records, embed every question, and precompute the related
    /// index.
    ///
    /// Fails on an empty record set, on any record with a blank/missing
    /// question or answer, and on any embedding failure — all fatal at
    /// startup by contract.
    pub async fn build(
        records: Vec<RawFaq>,
        embedder: &dyn DynEmbedder,
    ) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.question.trim().is_empty() {
                return Err(CatalogError::MalformedEntry {
                    index,
                    field: "question",
                });
            }
            if record.answer.trim().is_empty() {
                return Err(CatalogError::MalformedEntry {
                    index,
                    field: "answer",
                });
            }

            let embedding = embedder
                .embed_boxed(&record.question)
                .await
                .map_err(|source| CatalogError::Embedding { index, source })?;

            entries.push(FaqEntry {
                id: index,
                question: record.question,
                answer: record.answer,
                embedding,
                resources: record.resources,
            });
        }

        let related = build_related(&entries, RELATED_CAP);
        info!(entries = entries.len(), "FAQ catalog built");

        Ok(Self { entries, related })
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: usize) -> Result<&FaqEntry, CatalogError> {
        self.entries.get(id).ok_or(CatalogError::EntryNotFound(id))
    }

    /// All embeddings in id order, index-aligned with entry ids.
    pub fn all_embeddings(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.entries.iter().map(|e| e.embedding.as_slice())
    }

    /// Up to `k` related entry ids for `id`, best first. A prefix of the
    /// precomputed ranking; empty for unknown ids.
    pub fn related(&self, id: usize, k: usize) -> &[usize] {
        match self.related.get(id) {
            Some(neighbors) => &neighbors[..neighbors.len().min(k)],
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

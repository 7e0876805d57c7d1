//! Precomputed related-question index.
//!
//! Built once at startup with an O(N²) pairwise pass over the catalog
//! embeddings. N is FAQ-scale, so the quadratic cost is a few milliseconds.

use kiosk_match::cosine_similarity;

use crate::types::FaqEntry;

/// Neighbors stored per entry.
pub(crate) const RELATED_CAP: usize = 5;

/// For each entry, the ids of its most similar other entries, descending by
/// similarity with ties broken by ascending id, self excluded, at most `cap`.
pub(crate) fn build_related(entries: &[FaqEntry], cap: usize) -> Vec<Vec<usize>> {
    entries
        .iter()
        .map(|entry| {
            let mut scored: Vec<(usize, f32)> = entries
                .iter()
                .filter(|other| other.id != entry.id)
                .map(|other| {
                    (
                        other.id,
                        cosine_similarity(&entry.embedding, &other.embedding),
                    )
                })
                .collect();
            scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
            scored.truncate(cap);
            scored.into_iter().map(|(id, _)| id).collect()
        })
        .collect()
}

//! Cosine-similarity ranking over catalog embeddings.
//!
//! Brute-force O(N·D) scans: the catalog is FAQ-scale (tens to low hundreds
//! of entries), so an approximate index would be overhead without benefit.

/// A scored reference to one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Index of the entry in the catalog.
    pub entry_id: usize,
    /// Cosine similarity in [-1, 1].
    pub score: f32,
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for empty, length-mismatched, or zero-norm inputs; ranking
/// code treats those as "no signal" rather than an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b.iter()).fold(
        (0.0f32, 0.0f32, 0.0f32),
        |(dot, na, nb), (x, y)| (dot + x * y, na + x * x, nb + y * y),
    );

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Score every embedding and return the single best entry.
///
/// Ties go to the lowest entry id (first occurrence in iteration order), so
/// results are deterministic. Returns `None` only for an empty embedding set.
pub fn best_match<'a, I>(query: &[f32], embeddings: I) -> Option<MatchResult>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut best: Option<MatchResult> = None;
    for (entry_id, embedding) in embeddings.into_iter().enumerate() {
        let score = cosine_similarity(query, embedding);
        match best {
            Some(ref current) if score <= current.score => {}
            _ => best = Some(MatchResult { entry_id, score }),
        }
    }
    best
}

/// Top-k candidates filtered by an absolute floor and a pool-relative ratio.
///
/// The scores are ranked descending (ties by ascending id), the top `k` form
/// the candidate pool, and a candidate survives only if
/// `score >= min_score` AND `score >= pool_best * ratio`, where `pool_best`
/// is the best score within the pool — deliberately not whatever global best
/// the caller's confidence decision used. Returns an empty vector when fewer
/// than `k` embeddings exist or nothing passes both filters.
pub fn top_k_filtered<'a, I>(
    query: &[f32],
    embeddings: I,
    k: usize,
    min_score: f32,
    ratio: f32,
) -> Vec<MatchResult>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut scored: Vec<MatchResult> = embeddings
        .into_iter()
        .enumerate()
        .map(|(entry_id, embedding)| MatchResult {
            entry_id,
            score: cosine_similarity(query, embedding),
        })
        .collect();

    if k == 0 || scored.len() < k {
        return Vec::new();
    }

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.entry_id.cmp(&b.entry_id))
    });
    scored.truncate(k);

    let pool_best = scored[0].score;
    scored.retain(|m| m.score >= min_score && m.score >= pool_best * ratio);
    scored
}

//! Dialogue engine: confidence-tiered response policy over the catalog.
//!
//! Each request runs the same branch ladder: empty input, greeting, goodbye,
//! too-short, follow-up resolution, then semantic matching split into
//! HIGH / MID / LOW confidence tiers. The first applicable branch wins.
//! Collaborator failures (translation, embedding) degrade to safe replies;
//! `handle` itself never fails.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, warn};
use uuid::Uuid;

use kiosk_catalog::Catalog;
use kiosk_core::config::{KioskConfig, PolicyConfig};
use kiosk_match::{best_match, top_k_filtered, DynEmbedder, MatchResult};

use crate::normalize::{contains_goodbye, contains_greeting, is_follow_up, normalize};
use crate::reply::{
    ReplySelector, EMPTY_INPUT_REPLY, FALLBACK_REPLY, FOLLOW_UP_PROMPT, GOODBYE_QUICK_REPLIES,
    GOODBYE_REPLIES, GREETING_QUICK_REPLIES, GREETING_REPLIES, LOW_CONFIDENCE_QUICK_REPLIES,
    LOW_CONFIDENCE_REPLY, MID_CONFIDENCE_REPLY, TOO_SHORT_REPLY,
};
use crate::session::SessionStore;
use crate::translate::Translator;
use crate::types::{Branch, HealthInfo, Reply, Suggestion};
use crate::unknown::UnknownLog;

// =============================================================================
// ChatEngine
// =============================================================================

/// The dialogue policy plus its collaborators and session state.
///
/// The catalog is shared read-only; the session store is the only mutable
/// state and is internally synchronized. One engine serves all requests.
pub struct ChatEngine {
    catalog: Arc<Catalog>,
    embedder: Box<dyn DynEmbedder>,
    translator: Box<dyn Translator>,
    selector: Box<dyn ReplySelector>,
    sessions: SessionStore,
    unknown: UnknownLog,
    policy: PolicyConfig,
    end_convo_timeout: u64,
    model_name: String,
}

impl ChatEngine {
    pub fn new(
        catalog: Arc<Catalog>,
        embedder: Box<dyn DynEmbedder>,
        translator: Box<dyn Translator>,
        selector: Box<dyn ReplySelector>,
        unknown: UnknownLog,
        config: &KioskConfig,
    ) -> Self {
        Self {
            catalog,
            embedder,
            translator,
            selector,
            sessions: SessionStore::new(config.session.ttl_minutes),
            unknown,
            policy: config.policy.clone(),
            end_convo_timeout: config.session.end_convo_timeout_secs,
            model_name: config.embedding.model.clone(),
        }
    }

    /// Answer one query. Infallible: every path, including collaborator
    /// failures, produces a structured reply.
    pub async fn handle(&self, query: &str, session_id: Option<&str>) -> Reply {
        self.sessions.cleanup_expired(Utc::now());

        let sid = match session_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        self.sessions.touch(&sid);

        // Empty input is decided before any collaborator is consulted.
        let raw_query = query.trim();
        if raw_query.is_empty() {
            return Reply::new(Branch::EmptyInput, EMPTY_INPUT_REPLY, &sid);
        }

        let user_lang = match self.translator.detect(raw_query).await {
            Ok(lang) => lang,
            Err(e) => {
                warn!(error = %e, "Language detection failed; assuming English");
                "en".to_string()
            }
        };

        // Match against English text; serve the original on failure.
        let query_en = if user_lang == "en" {
            raw_query.to_string()
        } else {
            match self.translator.translate(raw_query, &user_lang, "en").await {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "Query translation failed; matching original text");
                    raw_query.to_string()
                }
            }
        };

        let normalized = normalize(&query_en);
        let word_count = normalized.split_whitespace().count();

        if word_count <= 3 && contains_greeting(&normalized) {
            let mut reply =
                Reply::new(Branch::Greeting, self.selector.pick(GREETING_REPLIES), &sid);
            reply.confidence = Some("1.0".to_string());
            reply.quick_replies = to_strings(GREETING_QUICK_REPLIES);
            return self.finish(reply, &user_lang).await;
        }

        if word_count <= 3 && contains_goodbye(&normalized) {
            let mut reply =
                Reply::new(Branch::Goodbye, self.selector.pick(GOODBYE_REPLIES), &sid);
            reply.confidence = Some("1.0".to_string());
            reply.quick_replies = to_strings(GOODBYE_QUICK_REPLIES);
            return self.finish(reply, &user_lang).await;
        }

        if normalized.chars().count() < 3 {
            let reply = Reply::new(Branch::TooShort, TOO_SHORT_REPLY, &sid);
            return self.finish(reply, &user_lang).await;
        }

        // Follow-up resolution re-serves the bound entry and skips the
        // embedding call entirely.
        if is_follow_up(&normalized) {
            if let Some(entry_id) = self.sessions.get(&sid).and_then(|memory| memory.last_faq) {
                if let Some(reply) = self.resolve_follow_up(&sid, entry_id, &normalized) {
                    return self.finish(reply, &user_lang).await;
                }
            }
        }

        let query_vec = match self.embedder.embed_boxed(&query_en).await {
            Ok(vec) => vec,
            Err(e) => {
                warn!(error = %e, "Embedding failed; serving fallback reply");
                let reply = Reply::new(Branch::Fallback, FALLBACK_REPLY, &sid);
                return self.finish(reply, &user_lang).await;
            }
        };

        let Some(best) = best_match(&query_vec, self.catalog.all_embeddings()) else {
            // Catalog construction rejects empty inputs, so this is unreachable.
            error!("Best-match ranking saw an empty catalog");
            let reply = Reply::new(Branch::Fallback, FALLBACK_REPLY, &sid);
            return self.finish(reply, &user_lang).await;
        };

        debug!(
            session_id = %sid,
            entry_id = best.entry_id,
            score = best.score,
            "Best match"
        );

        let reply = if best.score >= self.policy.high_confidence {
            self.serve_entry(&sid, best, &normalized)
        } else if best.score >= self.policy.low_confidence {
            self.unknown.record(raw_query);
            self.suggest(&sid, Branch::MidConfidenceSuggest, &query_vec, best.score)
        } else {
            self.unknown.record(raw_query);
            let mut reply =
                self.suggest(&sid, Branch::LowConfidenceSuggest, &query_vec, best.score);
            reply.quick_replies = to_strings(LOW_CONFIDENCE_QUICK_REPLIES);
            reply
        };

        self.finish(reply, &user_lang).await
    }

    /// Catalog size and readiness. Read-only; never touches session state.
    pub fn health(&self) -> HealthInfo {
        HealthInfo {
            status: "running".to_string(),
            faq_count: self.catalog.len(),
            model: self.model_name.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Branch assembly
    // -------------------------------------------------------------------------

    /// FOLLOW_UP_RESOLVED: re-serve the bound entry. Returns `None` if the
    /// bound id no longer resolves, handing the query back to the semantic
    /// path.
    fn resolve_follow_up(&self, sid: &str, entry_id: usize, normalized: &str) -> Option<Reply> {
        let entry = match self.catalog.entry(entry_id) {
            Ok(entry) => entry,
            Err(e) => {
                // The store only ever binds ids served from this catalog.
                debug_assert!(false, "session bound to missing entry: {}", e);
                error!(entry_id, "Follow-up referenced a missing catalog entry");
                return None;
            }
        };

        self.sessions.record_match(sid, entry_id, normalized);

        let mut reply = Reply::new(Branch::FollowUpResolved, entry.answer.clone(), sid);
        reply.confidence = Some("1.0".to_string());
        reply.resources = entry.resources.clone();
        reply.related = self.related_questions(entry_id);
        reply.follow_up_text = Some(FOLLOW_UP_PROMPT.to_string());
        reply.end_convo_timeout = Some(self.end_convo_timeout);
        Some(reply)
    }

    /// HIGH_CONFIDENCE_MATCH: serve the best entry and bind the session to it.
    fn serve_entry(&self, sid: &str, best: MatchResult, normalized: &str) -> Reply {
        let entry = match self.catalog.entry(best.entry_id) {
            Ok(entry) => entry,
            Err(e) => {
                debug_assert!(false, "best match points outside catalog: {}", e);
                error!(entry_id = best.entry_id, "Best match missing from catalog");
                return Reply::new(Branch::Fallback, FALLBACK_REPLY, sid);
            }
        };

        self.sessions.record_match(sid, best.entry_id, normalized);

        let mut reply = Reply::new(Branch::HighConfidence, entry.answer.clone(), sid);
        reply.confidence = Some(format!("{:.2}", best.score));
        reply.resources = entry.resources.clone();
        reply.follow_up_text = Some(FOLLOW_UP_PROMPT.to_string());
        reply.end_convo_timeout = Some(self.end_convo_timeout);
        reply
    }

    /// MID/LOW_CONFIDENCE_SUGGEST: did-you-mean candidates plus related
    /// questions for the top candidate. `last_faq` is deliberately left
    /// unchanged: a low-confidence guess must not anchor future follow-ups.
    fn suggest(&self, sid: &str, branch: Branch, query_vec: &[f32], best_score: f32) -> Reply {
        let (text, k, floor, ratio) = if branch == Branch::MidConfidenceSuggest {
            (
                MID_CONFIDENCE_REPLY,
                self.policy.mid_suggest_k,
                self.policy.mid_suggest_floor,
                self.policy.mid_suggest_ratio,
            )
        } else {
            (
                LOW_CONFIDENCE_REPLY,
                self.policy.low_suggest_k,
                self.policy.low_suggest_floor,
                self.policy.low_suggest_ratio,
            )
        };

        let candidates =
            top_k_filtered(query_vec, self.catalog.all_embeddings(), k, floor, ratio);
        let suggestions = self.build_suggestions(&candidates);

        let mut reply = Reply::new(branch, text, sid);
        reply.confidence = Some(format!("{:.2}", best_score));
        if let Some(top) = suggestions.first() {
            reply.related = self.related_questions(top.entry_id);
        }
        reply.suggestions = suggestions;
        reply
    }

    /// Hydrate match results into suggestions, deduplicating by normalized
    /// question text so rephrasings of one catalog question appear once.
    fn build_suggestions(&self, candidates: &[MatchResult]) -> Vec<Suggestion> {
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();
        for candidate in candidates {
            let entry = match self.catalog.entry(candidate.entry_id) {
                Ok(entry) => entry,
                Err(e) => {
                    debug_assert!(false, "candidate points outside catalog: {}", e);
                    error!(entry_id = candidate.entry_id, "Candidate missing from catalog");
                    continue;
                }
            };
            if seen.insert(normalize(&entry.question)) {
                suggestions.push(Suggestion {
                    question: entry.question.clone(),
                    entry_id: candidate.entry_id,
                    score: candidate.score,
                    resources: entry.resources.clone(),
                });
            }
        }
        suggestions
    }

    /// Question texts of the precomputed related entries, capped by config.
    fn related_questions(&self, entry_id: usize) -> Vec<String> {
        self.catalog
            .related(entry_id, self.policy.related_count)
            .iter()
            .filter_map(|&id| self.catalog.entry(id).ok())
            .map(|entry| entry.question.clone())
            .collect()
    }

    /// Translate the answer text back to the user's language. Suggestions,
    /// related questions, and quick replies mirror catalog text and stay
    /// untranslated.
    async fn finish(&self, mut reply: Reply, user_lang: &str) -> Reply {
        if user_lang != "en" {
            match self.translator.translate(&reply.answer, "en", user_lang).await {
                Ok(text) => reply.answer = text,
                Err(e) => {
                    warn!(error = %e, "Answer translation failed; serving English text");
                }
            }
        }
        reply
    }
}

fn to_strings(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Tests
// =============================================================================

//! Record types for the FAQ catalog.

use serde::{Deserialize, Serialize};

/// Optional attachments a catalog entry can carry.
///
/// Copied verbatim onto responses that serve the entry; never interpreted by
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.link.is_none() && self.image.is_none()
    }
}

/// One record as it appears in the catalog JSON file.
///
/// `question` and `answer` default to empty strings so that a missing field
/// surfaces as a validation error with the record's index instead of a bare
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFaq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(flatten)]
    pub resources: Resources,
}

/// One immutable catalog entry: the raw record plus its precomputed
/// embedding. `id` is the record's index in the catalog file.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub id: usize,
    pub question: String,
    pub answer: String,
    pub embedding: Vec<f32>,
    pub resources: Resources,
}

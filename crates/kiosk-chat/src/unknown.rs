//! Append-only log of unanswered queries.
//!
//! Every MID/LOW confidence query lands here so catalog gaps can be reviewed
//! later. Writes are best-effort: a failed append is logged at `warn` and
//! swallowed, never failing the request.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use tracing::warn;

/// Line-oriented sink for queries the policy could not answer directly.
///
/// Format: `<ISO-8601 timestamp> | <raw query>`, one line per query.
pub enum UnknownLog {
    File(PathBuf),
    Disabled,
}

impl UnknownLog {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        UnknownLog::File(path.into())
    }

    pub fn disabled() -> Self {
        UnknownLog::Disabled
    }

    /// Append one unanswered query. Best-effort.
    pub fn record(&self, raw_query: &str) {
        let UnknownLog::File(path) = self else {
            return;
        };

        let line = format!(
            "{} | {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            raw_query
        );
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = result {
            warn!(error = %e, "Failed to append unknown query to {}", path.display());
        }
    }
}

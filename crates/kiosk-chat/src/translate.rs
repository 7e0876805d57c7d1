//! Translation collaborator seam.
//!
//! Language detection and translation are external, fallible, possibly slow
//! services. The dialogue engine treats every failure as recoverable:
//! detection failure assumes English, translation failure falls back to the
//! untranslated text.

use async_trait::async_trait;

use kiosk_core::Result;

/// Best-effort language detection and translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Detect the language of `text` as a lowercase ISO 639-1 code.
    async fn detect(&self, text: &str) -> Result<String>;

    /// Translate `text` from `source` to `dest`.
    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String>;
}

/// Identity translator: reports every text as English and returns it
/// unchanged. The default backend; a real service plugs in behind
/// [`Translator`].
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn detect(&self, _text: &str) -> Result<String> {
        Ok("en".to_string())
    }

    async fn translate(&self, text: &str, _source: &str, _dest: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

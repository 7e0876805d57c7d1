//! Kiosk catalog crate - validated FAQ records, startup embeddings, and the
//! precomputed related-question index.
//!
//! The catalog is read-only after a successful build and is shared freely
//! across request tasks.

pub mod catalog;
pub mod related;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{FaqEntry, RawFaq, Resources};

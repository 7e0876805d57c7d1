//! Kiosk core crate - configuration and the shared error type.

pub mod config;
pub mod error;

pub use config::KioskConfig;
pub use error::{KioskError, Result};

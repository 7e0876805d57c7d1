use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{KioskError, Result};

/// Top-level configuration for the Kiosk application.
///
/// Loaded from `kiosk.toml` by default. Each section corresponds to a
/// bounded context or cross-cutting concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            catalog: CatalogConfig::default(),
            embedding: EmbeddingConfig::default(),
            policy: PolicyConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl KioskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: KioskConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| KioskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// FAQ catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file.
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "faqs.json".to_string(),
        }
    }
}

/// Embedding backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding model name (reported by /health).
    pub model: String,
    /// Embedding dimension.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "all-MiniLM-L6-v2".to_string(),
            dimensions: 384,
        }
    }
}

/// Confidence tiers and suggestion filtering.
///
/// `high_confidence` and `low_confidence` split best-match scores into the
/// HIGH / MID / LOW bands. The `*_suggest_*` knobs parameterize the
/// did-you-mean candidate pools per band: pool size `k`, an absolute score
/// floor, and a ratio relative to the best score within the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Best-match score at or above which the entry is served directly.
    pub high_confidence: f32,
    /// Best-match score at or above which suggestions are offered.
    pub low_confidence: f32,
    /// Candidate pool size for the MID band.
    pub mid_suggest_k: usize,
    /// Absolute score floor for MID-band suggestions.
    pub mid_suggest_floor: f32,
    /// Pool-relative ratio for MID-band suggestions.
    pub mid_suggest_ratio: f32,
    /// Candidate pool size for the LOW band.
    pub low_suggest_k: usize,
    /// Absolute score floor for LOW-band suggestions.
    pub low_suggest_floor: f32,
    /// Pool-relative ratio for LOW-band suggestions.
    pub low_suggest_ratio: f32,
    /// Related questions attached per response.
    pub related_count: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            high_confidence: 0.60,
            low_confidence: 0.30,
            mid_suggest_k: 2,
            mid_suggest_floor: 0.06,
            mid_suggest_ratio: 0.65,
            low_suggest_k: 10,
            low_suggest_floor: 0.05,
            low_suggest_ratio: 0.60,
            related_count: 3,
        }
    }
}

/// Session lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle minutes before a session expires.
    pub ttl_minutes: u32,
    /// Inactivity timeout (seconds) sent to the client as a UI cue.
    pub end_convo_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: 30,
            end_convo_timeout_secs: 60,
        }
    }
}

/// Side-channel logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append-only file receiving unanswered queries.
    pub unknown_queries: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            unknown_queries: "unknown_questions.log".to_string(),
        }
    }
}

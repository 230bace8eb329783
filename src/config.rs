//! Engine configuration
//!
//! Loads operational knobs from an optional `biaslens.toml`. Scoring
//! weights and fusion constants are deliberately not configurable here;
//! they live as named constants next to the logic they tune.
//!
//! ```toml
//! # biaslens.toml
//! [load]
//! retry_attempts = 50
//! retry_interval_ms = 100
//!
//! [analysis]
//! history_window = 5
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Default polling interval while waiting for the lexicon source.
pub const DEFAULT_RETRY_INTERVAL_MS: u64 = 100;
/// Default retry budget before the engine degrades to empty tables.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 50;
/// Default number of prior turns consulted for the repetition signal.
pub const DEFAULT_HISTORY_WINDOW: usize = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub retry_attempts: u32,
    pub retry_interval_ms: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_interval_ms: DEFAULT_RETRY_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub history_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub load: LoadConfig,
    pub analysis: AnalysisConfig,
}

impl EngineConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.load.retry_interval_ms)
    }
}

/// Load `biaslens.toml` from `dir` if present.
///
/// A missing file is the normal case and yields defaults; a malformed file
/// logs a warning and yields defaults rather than failing the host.
pub fn load_config(dir: &Path) -> EngineConfig {
    let path = dir.join("biaslens.toml");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => {
            debug!("no biaslens.toml at {}, using defaults", path.display());
            return EngineConfig::default();
        }
    };
    match toml::from_str(&content) {
        Ok(config) => {
            debug!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            warn!("ignoring malformed {}: {err}", path.display());
            EngineConfig::default()
        }
    }
}

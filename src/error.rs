//! Error taxonomy for the engine
//!
//! There are no fatal errors in this subsystem: an unavailable lexicon
//! degrades to empty tables, and a malformed pattern entry is skipped.
//! These variants exist so the degradation points are logged with a typed
//! cause rather than swallowed silently.

use thiserror::Error;

/// Errors that can occur while loading or compiling the lexicon
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("lexicon data source never became ready after {attempts} attempts")]
    LexiconUnavailable { attempts: u32 },

    #[error("pattern '{source_text}' for category '{category}' failed to compile: {reason}")]
    InvalidPattern {
        source_text: String,
        category: String,
        reason: String,
    },

    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

//! Engine façade
//!
//! `BiasEngine` is the single entry point the host calls. It owns the
//! lexicon lifecycle (one bounded load per process) and exposes the pure
//! analysis operation. Per-call state is local, and the compiled lexicon
//! is an immutable `Arc` snapshot, so concurrent `analyze` calls need no
//! synchronization.

use crate::analyzer;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::fusion;
use crate::lexicon::{load_with_retry, LexiconSource, LexiconTables, LoadState, RawLexicon};
use crate::matcher;
use crate::models::AnalysisResult;
use crate::scoring;
use std::sync::Arc;
use tracing::{info, warn};

pub struct BiasEngine {
    tables: Arc<LexiconTables>,
    state: LoadState,
    config: EngineConfig,
}

impl BiasEngine {
    /// An engine with no lexicon yet. Analysis degrades to empty results
    /// until [`load`](Self::load) completes.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            tables: Arc::new(LexiconTables::empty()),
            state: LoadState::Unloaded,
            config,
        }
    }

    /// Build an engine directly from already-fetched lexicon data.
    pub fn with_lexicon(config: EngineConfig, raw: RawLexicon) -> Self {
        Self {
            tables: Arc::new(LexiconTables::compile(raw)),
            state: LoadState::Ready,
            config,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Shared snapshot of the compiled tables.
    pub fn tables(&self) -> Arc<LexiconTables> {
        Arc::clone(&self.tables)
    }

    /// Load the lexicon from `source`, polling within the configured retry
    /// budget. Awaited once by the host.
    ///
    /// Exhausting the budget is not fatal: the engine records
    /// `Unavailable`, keeps empty tables, and every analysis returns "no
    /// findings" for the rest of the process lifetime.
    pub async fn load(&mut self, source: &dyn LexiconSource) -> EngineResult<()> {
        self.state = LoadState::Loading;
        match load_with_retry(
            source,
            self.config.load.retry_attempts,
            self.config.retry_interval(),
        )
        .await
        {
            Ok(raw) => {
                self.tables = Arc::new(LexiconTables::compile(raw));
                self.state = LoadState::Ready;
                info!("lexicon ready");
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Unavailable;
                warn!("lexicon unavailable, degrading to empty tables: {err}");
                Err(err)
            }
        }
    }

    /// Analyze `text` with up to the configured window of prior turns.
    ///
    /// Pure function of (text, history, loaded lexicon): identical inputs
    /// yield identical results. Never fails; degraded states simply
    /// produce no findings.
    pub fn analyze(&self, text: &str, history: &[String]) -> AnalysisResult {
        let raw_matches = matcher::scan(&self.tables, text);
        let scored = scoring::score_matches(&raw_matches);
        let mathematical = analyzer::analyze(
            &self.tables,
            text,
            history,
            self.config.analysis.history_window,
        );
        fusion::fuse(&self.tables, &scored, &mathematical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn lexicon(json: &str) -> RawLexicon {
        serde_json::from_str(json).expect("parse lexicon JSON")
    }

    fn engine(json: &str) -> BiasEngine {
        BiasEngine::with_lexicon(EngineConfig::default(), lexicon(json))
    }

    #[test]
    fn test_unloaded_engine_returns_empty_verdict() {
        let engine = BiasEngine::new(EngineConfig::default());
        assert_eq!(engine.load_state(), LoadState::Unloaded);
        let result = engine.analyze("you always fail, urgent!", &[]);
        assert_eq!(result.unified_score, 0.0);
        assert_eq!(result.severity, Severity::Low);
        assert!(result.detected_terms.is_empty());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let engine = engine(
            r#"{"words": {"always": "absolutism", "urgent": "urgency"},
                "suggestions": {"absolutism": "Avoid absolutes."}}"#,
        );
        let history = vec!["it was urgent".to_string()];
        let a = engine.analyze("You always say it's urgent.", &history);
        let b = engine.analyze("You always say it's urgent.", &history);
        assert_eq!(
            serde_json::to_string(&a).expect("serialize"),
            serde_json::to_string(&b).expect("serialize"),
        );
    }

    #[test]
    fn test_end_to_end_always_scenario() {
        let engine = engine(r#"{"words": {"always": "absolutism"}}"#);
        let result = engine.analyze("You always fail.", &[]);

        assert_eq!(result.matches.len(), 1);
        let m = &result.matches[0];
        assert!((m.score - 2.2).abs() < 1e-9);
        assert_eq!(m.severity, Severity::Low);
        assert_eq!(result.detected_terms, vec!["always"]);
        assert_eq!(result.categories, vec!["absolutism"]);

        // traditional = 2.2/100; mathematical = (1.2 × 2.8)/20
        let expected = (0.022 + 3.36 / 20.0) / 2.0;
        assert!((result.unified_score - expected).abs() < 1e-9);
        assert_eq!(result.severity, Severity::Low);
    }

    #[tokio::test]
    async fn test_load_failure_degrades_permanently() {
        struct NeverReady;
        impl LexiconSource for NeverReady {
            fn fetch(&self) -> Option<RawLexicon> {
                None
            }
        }

        let mut config = EngineConfig::default();
        config.load.retry_attempts = 3;
        config.load.retry_interval_ms = 0;
        let mut engine = BiasEngine::new(config);

        let result = engine.load(&NeverReady).await;
        assert!(result.is_err());
        assert_eq!(engine.load_state(), LoadState::Unavailable);

        let verdict = engine.analyze("always never urgent", &[]);
        assert_eq!(verdict.unified_score, 0.0);
        assert!(verdict.matches.is_empty());
    }

    #[tokio::test]
    async fn test_load_success_transitions_to_ready() {
        struct Immediate;
        impl LexiconSource for Immediate {
            fn fetch(&self) -> Option<RawLexicon> {
                Some(
                    serde_json::from_str(r#"{"words": {"always": "absolutism"}}"#)
                        .expect("parse lexicon JSON"),
                )
            }
        }

        let mut engine = BiasEngine::new(EngineConfig::default());
        engine.load(&Immediate).await.expect("load succeeds");
        assert_eq!(engine.load_state(), LoadState::Ready);
        let verdict = engine.analyze("always", &[]);
        assert_eq!(verdict.detected_terms, vec!["always"]);
    }
}

//! Biaslens - lexicon-driven bias scoring engine
//!
//! A deterministic, rule-and-weight text analysis engine. Raw text flows
//! one way: tokens and phrase windows become raw matches, raw matches
//! become weighted per-match scores, two independent scoring branches run
//! over the same text, and a fusion step merges them into one unified
//! verdict with remediation hints.
//!
//! The lexicon (word/phrase/pattern → category tables plus category →
//! suggestion texts) is loaded once per process and shared read-only; see
//! [`lexicon`] for the bounded-poll load lifecycle.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod fusion;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod reporters;
pub mod scoring;

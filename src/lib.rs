//! MoOn Match - compatibility scoring for the MoOn roommate and listing matcher
//!
//! This library provides the scoring engine that compares two profiles and
//! produces a bounded 0-100 score, either as owner/tenant "listing-match" or
//! tenant/tenant "roommate-match".

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{compatibility_breakdown, compatibility_score, normalize, CompatibilityEngine, RankOptions, RankResult};
pub use models::{ComparableProfile, EngineWeights, RawProfile, ScoreBreakdown, Strategy};

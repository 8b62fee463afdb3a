// Core algorithm exports
pub mod aggregator;
pub mod breakdown;
pub mod dimensions;
pub mod engine;
pub mod normalizer;
pub mod strategy;

pub use aggregator::{aggregate, clamp_score, MAX_SCORE};
pub use breakdown::build_breakdown;
pub use engine::{compatibility_breakdown, compatibility_score, CompatibilityEngine, RankOptions, RankResult};
pub use normalizer::normalize;

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ComparableProfile, Dimension, EngineWeights, LabelSet, ListingWeights, NoiseLevel,
    RankedCandidate, RawNoise, RawProfile, RoommateWeights, ScoreBreakdown, Strategy,
    StrategyParseError, SubScore,
};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, ScoreResponse};

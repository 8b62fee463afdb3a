use crate::core::{aggregator::aggregate, breakdown::build_breakdown, normalizer::normalize};
use crate::models::{ComparableProfile, EngineWeights, RankedCandidate, RawProfile, ScoreBreakdown, Strategy};

/// Options for ranking candidates against a subject
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    pub limit: usize,
    /// Candidates scoring below this are dropped
    pub min_score: u8,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            min_score: 0,
        }
    }
}

/// Result of ranking a candidate list
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Compatibility scoring engine
///
/// Holds one weight table per strategy and nothing else, so a single engine
/// can be cloned into every worker and called concurrently.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    weights: EngineWeights,
}

impl CompatibilityEngine {
    pub fn new(weights: EngineWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: EngineWeights::default(),
        }
    }

    pub fn weights(&self) -> &EngineWeights {
        &self.weights
    }

    /// Final score in [0, 100] for a pair of profiles
    pub fn score(&self, a: &ComparableProfile, b: &ComparableProfile, strategy: Strategy) -> u8 {
        let components = strategy.sub_scores(a, b, &self.weights);
        aggregate(&components, strategy.base_offset(&self.weights))
    }

    /// Same computation as [`score`](Self::score), reported per dimension
    pub fn breakdown(
        &self,
        a: &ComparableProfile,
        b: &ComparableProfile,
        strategy: Strategy,
    ) -> ScoreBreakdown {
        build_breakdown(a, b, strategy, &self.weights)
    }

    /// Score raw records, normalizing both first
    pub fn score_raw(&self, a: &RawProfile, b: &RawProfile, strategy: Strategy) -> u8 {
        self.score(&normalize(a), &normalize(b), strategy)
    }

    /// Rank candidates for a subject
    ///
    /// # Pipeline Stages
    /// 1. Drop the subject itself
    /// 2. Score each remaining candidate
    /// 3. Drop candidates under `min_score`
    /// 4. Sort descending by score; ties keep input order
    /// 5. Truncate to `limit`
    pub fn rank(
        &self,
        subject: &RawProfile,
        candidates: &[RawProfile],
        strategy: Strategy,
        options: RankOptions,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let subject_view = normalize(subject);

        let mut matches: Vec<RankedCandidate> = candidates
            .iter()
            .filter(|candidate| !is_same_user(subject, candidate))
            .filter_map(|candidate| {
                let view = normalize(candidate);
                let score = self.score(&subject_view, &view, strategy);

                if score >= options.min_score {
                    Some(RankedCandidate {
                        user_id: candidate.user_id.clone(),
                        score,
                        shared_interests: subject_view.interests.shared_with(&view.interests),
                        shared_lifestyle: subject_view.lifestyle.shared_with(&view.lifestyle),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps input order among equal scores
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(options.limit);

        RankResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn is_same_user(subject: &RawProfile, candidate: &RawProfile) -> bool {
    match (&subject.user_id, &candidate.user_id) {
        (Some(s), Some(c)) => s == c,
        _ => false,
    }
}

/// Score two raw profiles with the default weight tables
pub fn compatibility_score(a: &RawProfile, b: &RawProfile, strategy: Strategy) -> u8 {
    CompatibilityEngine::with_default_weights().score_raw(a, b, strategy)
}

/// Breakdown of two raw profiles with the default weight tables
pub fn compatibility_breakdown(a: &RawProfile, b: &RawProfile, strategy: Strategy) -> ScoreBreakdown {
    build_breakdown(&normalize(a), &normalize(b), strategy, &EngineWeights::default())
}

use crate::core::aggregator::aggregate;
use crate::models::{ComparableProfile, EngineWeights, ScoreBreakdown, Strategy};

/// Explain a score: the strategy's sub-scores, the aggregate they produce and
/// the labels both profiles share
pub fn build_breakdown(
    a: &ComparableProfile,
    b: &ComparableProfile,
    strategy: Strategy,
    weights: &EngineWeights,
) -> ScoreBreakdown {
    let components = strategy.sub_scores(a, b, weights);
    let base_offset = strategy.base_offset(weights);
    let score = aggregate(&components, base_offset);

    ScoreBreakdown {
        strategy,
        score,
        components,
        base_offset,
        shared_interests: a.interests.shared_with(&b.interests),
        shared_lifestyle: a.lifestyle.shared_with(&b.lifestyle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize;
    use crate::models::{Dimension, RawNoise, RawProfile};

    fn raw(interests: &[&str], lifestyle: &[&str]) -> RawProfile {
        RawProfile {
            noise_preference: Some(RawNoise::Label("Medio".to_string())),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            lifestyle_tags: lifestyle.iter().map(|s| s.to_string()).collect(),
            ..RawProfile::default()
        }
    }

    #[test]
    fn test_breakdown_lists_shared_labels() {
        let a = normalize(&raw(&["Yoga", "Cine"], &["Deportista", "Social"]));
        let b = normalize(&raw(&["cine", "Lectura"], &["Social", "Creativo"]));

        let breakdown = build_breakdown(&a, &b, Strategy::RoommateMatch, &EngineWeights::default());

        assert_eq!(breakdown.shared_interests, vec!["Cine"]);
        assert_eq!(breakdown.shared_lifestyle, vec!["Social"]);
        assert_eq!(breakdown.component(Dimension::Interests), Some(2.0));
        assert_eq!(breakdown.component(Dimension::City), None);
        assert_eq!(breakdown.base_offset, 10.0);
    }

    #[test]
    fn test_breakdown_listing_has_no_offset() {
        let a = normalize(&raw(&[], &["tech"]));
        let breakdown = build_breakdown(&a, &a, Strategy::ListingMatch, &EngineWeights::default());

        assert_eq!(breakdown.base_offset, 0.0);
        assert_eq!(breakdown.components.len(), 3);
        assert_eq!(breakdown.component(Dimension::Lifestyle), Some(15.0));
        // No city on either side, same noise
        assert_eq!(breakdown.score, 35);
    }
}

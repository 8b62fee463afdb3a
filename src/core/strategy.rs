use crate::core::dimensions::{
    city_match, commute_proximity, lifestyle_overlap, listing_noise, noise_compatibility,
    shared_interests, tag_overlap,
};
use crate::models::{ComparableProfile, Dimension, EngineWeights, Strategy, SubScore};

impl Strategy {
    /// Dimensions this strategy scores, in reporting order
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            Strategy::ListingMatch => &[Dimension::City, Dimension::Lifestyle, Dimension::Noise],
            Strategy::RoommateMatch => &[
                Dimension::Noise,
                Dimension::Lifestyle,
                Dimension::Interests,
                Dimension::Commute,
            ],
        }
    }

    /// Constant added on top of the sub-scores
    pub fn base_offset(&self, weights: &EngineWeights) -> f64 {
        match self {
            Strategy::ListingMatch => 0.0,
            Strategy::RoommateMatch => weights.roommate.base_offset,
        }
    }

    /// Score every dimension of this strategy for a pair of profiles
    pub fn sub_scores(
        &self,
        a: &ComparableProfile,
        b: &ComparableProfile,
        weights: &EngineWeights,
    ) -> Vec<SubScore> {
        self.dimensions()
            .iter()
            .map(|&dimension| self.sub_score(dimension, a, b, weights))
            .collect()
    }

    fn sub_score(
        &self,
        dimension: Dimension,
        a: &ComparableProfile,
        b: &ComparableProfile,
        weights: &EngineWeights,
    ) -> SubScore {
        let (score, max) = match (self, dimension) {
            (Strategy::ListingMatch, Dimension::City) => {
                let w = &weights.listing;
                (city_match(a, b, w), w.city_match)
            }
            (Strategy::ListingMatch, Dimension::Lifestyle) => {
                let w = &weights.listing;
                (tag_overlap(a, b, w), w.tag_max)
            }
            (Strategy::ListingMatch, Dimension::Noise) => {
                let w = &weights.listing;
                (listing_noise(a, b, w), w.noise_max)
            }
            (Strategy::RoommateMatch, Dimension::Noise) => {
                let w = &weights.roommate;
                (noise_compatibility(a, b, w), w.noise_max)
            }
            (Strategy::RoommateMatch, Dimension::Lifestyle) => {
                let w = &weights.roommate;
                (lifestyle_overlap(a, b, w), w.lifestyle_max())
            }
            (Strategy::RoommateMatch, Dimension::Interests) => {
                let w = &weights.roommate;
                (shared_interests(a, b, w), w.interest_max())
            }
            (Strategy::RoommateMatch, Dimension::Commute) => {
                let w = &weights.roommate;
                (commute_proximity(a, b, w), w.commute_max)
            }
            // Dimensions outside the strategy's table contribute nothing
            _ => (0.0, 0.0),
        };

        SubScore {
            dimension,
            score,
            max: max.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_dimensions() {
        assert!(!Strategy::ListingMatch.dimensions().contains(&Dimension::Commute));
        assert!(Strategy::ListingMatch.dimensions().contains(&Dimension::City));
        assert!(!Strategy::RoommateMatch.dimensions().contains(&Dimension::City));
    }

    #[test]
    fn test_default_maxima_sum_to_hundred() {
        let weights = EngineWeights::default();
        let empty = ComparableProfile::default();

        for strategy in [Strategy::ListingMatch, Strategy::RoommateMatch] {
            let max: f64 = strategy
                .sub_scores(&empty, &empty, &weights)
                .iter()
                .map(|s| s.max)
                .sum::<f64>()
                + strategy.base_offset(&weights);
            assert_eq!(max, 100.0, "{} maxima", strategy);
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("listing-match".parse::<Strategy>(), Ok(Strategy::ListingMatch));
        assert_eq!("Roommate_Match".parse::<Strategy>(), Ok(Strategy::RoommateMatch));
        assert_eq!("roommate".parse::<Strategy>(), Ok(Strategy::RoommateMatch));
        assert!("tenant".parse::<Strategy>().is_err());
        assert_eq!(Strategy::ListingMatch.to_string(), "listing-match");
    }
}

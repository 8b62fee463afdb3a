use crate::models::SubScore;

/// Upper bound of every aggregate score
pub const MAX_SCORE: u8 = 100;

/// Sum sub-scores plus the base offset, round to the nearest integer and
/// clamp into [0, 100]
pub fn aggregate(components: &[SubScore], base_offset: f64) -> u8 {
    let total: f64 = components.iter().map(|c| c.score).sum::<f64>() + base_offset;
    clamp_score(total)
}

/// Round half away from zero, then clamp into [0, 100]
#[inline]
pub fn clamp_score(total: f64) -> u8 {
    if total.is_nan() {
        return 0;
    }
    total.round().clamp(0.0, MAX_SCORE as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimension;

    fn component(dimension: Dimension, score: f64) -> SubScore {
        SubScore { dimension, score, max: score }
    }

    #[test]
    fn test_aggregate_adds_offset() {
        let components = [
            component(Dimension::Noise, 30.0),
            component(Dimension::Lifestyle, 5.0),
            component(Dimension::Interests, 2.0),
            component(Dimension::Commute, 14.0),
        ];

        assert_eq!(aggregate(&components, 10.0), 61);
        assert_eq!(aggregate(&components, 0.0), 51);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(42.5), 43);
        assert_eq!(clamp_score(42.49), 42);
        assert_eq!(clamp_score(f64::NAN), 0);
        assert_eq!(clamp_score(f64::INFINITY), 100);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[], 0.0), 0);
        assert_eq!(aggregate(&[], 10.0), 10);
    }
}

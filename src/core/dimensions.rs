use crate::models::{ComparableProfile, ListingWeights, RoommateWeights};

// Every scorer compares the two profiles through symmetric operations
// (absolute differences, set intersections), so argument order never matters.

/// Roommate noise compatibility: full marks for equal levels, half for one step apart
#[inline]
pub fn noise_compatibility(a: &ComparableProfile, b: &ComparableProfile, weights: &RoommateWeights) -> f64 {
    let max = weights.noise_max.max(0.0);
    match a.noise.steps_from(b.noise) {
        0 => max,
        1 => max / 2.0,
        _ => 0.0,
    }
}

/// Roommate lifestyle overlap: points per shared tag up to the cap
#[inline]
pub fn lifestyle_overlap(a: &ComparableProfile, b: &ComparableProfile, weights: &RoommateWeights) -> f64 {
    if a.lifestyle.is_empty() || b.lifestyle.is_empty() {
        return 0.0;
    }
    let shared = a.lifestyle.shared_count(&b.lifestyle).min(weights.lifestyle_shared_cap);
    bounded(shared as f64 * weights.lifestyle_per_shared, weights.lifestyle_max())
}

/// Roommate shared interests: points per shared interest up to the cap
#[inline]
pub fn shared_interests(a: &ComparableProfile, b: &ComparableProfile, weights: &RoommateWeights) -> f64 {
    if a.interests.is_empty() || b.interests.is_empty() {
        return 0.0;
    }
    let shared = a.interests.shared_count(&b.interests).min(weights.interest_shared_cap);
    bounded(shared as f64 * weights.interest_per_shared, weights.interest_max())
}

/// Roommate commute proximity.
///
/// One point is lost per `commute_step` of difference (floored). A missing
/// distance on either side yields the neutral value.
#[inline]
pub fn commute_proximity(a: &ComparableProfile, b: &ComparableProfile, weights: &RoommateWeights) -> f64 {
    let max = weights.commute_max.max(0.0);
    match (a.commute, b.commute) {
        (Some(da), Some(db)) => {
            let step = if weights.commute_step > 0.0 { weights.commute_step } else { 1.0 };
            let penalty = ((da - db).abs() / step).floor();
            bounded(max - penalty, max)
        }
        _ => bounded(weights.commute_neutral, max),
    }
}

/// Listing city match: case-insensitive equality, nothing when either is unknown
#[inline]
pub fn city_match(a: &ComparableProfile, b: &ComparableProfile, weights: &ListingWeights) -> f64 {
    match (&a.city, &b.city) {
        (Some(ca), Some(cb)) if ca == cb => weights.city_match.max(0.0),
        _ => 0.0,
    }
}

/// Listing tag overlap over lifestyle tags
#[inline]
pub fn tag_overlap(a: &ComparableProfile, b: &ComparableProfile, weights: &ListingWeights) -> f64 {
    let shared = a.lifestyle.shared_count(&b.lifestyle);
    bounded(shared as f64 * weights.tag_per_shared, weights.tag_max)
}

/// Listing noise: fixed penalty per step of difference
#[inline]
pub fn listing_noise(a: &ComparableProfile, b: &ComparableProfile, weights: &ListingWeights) -> f64 {
    let steps = a.noise.steps_from(b.noise) as f64;
    bounded(weights.noise_max - steps * weights.noise_step_penalty, weights.noise_max)
}

/// Clamp a sub-score into [0, max]
#[inline]
fn bounded(score: f64, max: f64) -> f64 {
    score.min(max).max(0.0)
}

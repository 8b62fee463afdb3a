use crate::models::{ComparableProfile, LabelSet, NoiseLevel, RawNoise, RawProfile};

/// Build the comparable view of a raw profile.
///
/// Total over all inputs: absent attributes take their defaults and
/// out-of-range numbers are clamped, never rejected.
pub fn normalize(raw: &RawProfile) -> ComparableProfile {
    ComparableProfile {
        noise: normalize_noise(raw.noise_preference.as_ref()),
        interests: LabelSet::from_labels(&raw.interests),
        lifestyle: LabelSet::from_labels(&raw.lifestyle_tags),
        city: normalize_city(raw.city.as_deref()),
        commute: normalize_distance(raw.commute_or_search_distance),
    }
}

impl From<&RawProfile> for ComparableProfile {
    fn from(raw: &RawProfile) -> Self {
        normalize(raw)
    }
}

/// Map a label or number onto the 1-5 noise scale, midpoint when unknown
pub fn normalize_noise(noise: Option<&RawNoise>) -> NoiseLevel {
    match noise {
        Some(RawNoise::Level(level)) => noise_from_number(*level),
        Some(RawNoise::Label(label)) => noise_from_label(label),
        None => NoiseLevel::default(),
    }
}

fn noise_from_number(level: f64) -> NoiseLevel {
    if !level.is_finite() {
        return NoiseLevel::default();
    }
    let clamped = level
        .round()
        .clamp(NoiseLevel::MIN.value() as f64, NoiseLevel::MAX.value() as f64);
    NoiseLevel::new(clamped as u8)
}

fn noise_from_label(label: &str) -> NoiseLevel {
    let key = label.trim().to_lowercase();
    match key.as_str() {
        "bajo" | "baja" | "low" | "tranquilo" => NoiseLevel::new(1),
        "medio" | "media" | "medium" | "moderado" => NoiseLevel::new(2),
        "alto" | "alta" | "high" | "ruidoso" => NoiseLevel::new(3),
        other => other
            .parse::<f64>()
            .map(noise_from_number)
            .unwrap_or_default(),
    }
}

/// Case-insensitive city key; blank names count as absent
pub fn normalize_city(city: Option<&str>) -> Option<String> {
    city.map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
}

/// Non-negative distance; non-finite values count as absent
pub fn normalize_distance(distance: Option<f64>) -> Option<f64> {
    distance
        .filter(|d| d.is_finite())
        .map(|d| d.max(0.0))
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Profile record as stored by the surrounding application.
///
/// Every attribute is optional; the normalizer fills the gaps. Records are
/// read through `RawProfileRecord` so rows carrying several spellings of a
/// column (`id` and `user_id`, `tags` and `lifestyle`) are merged instead of
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProfileRecord")]
pub struct RawProfile {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "noisePreference")]
    pub noise_preference: Option<RawNoise>,
    pub interests: Vec<String>,
    #[serde(rename = "lifestyleTags")]
    pub lifestyle_tags: Vec<String>,
    pub city: Option<String>,
    #[serde(rename = "commuteOrSearchDistance")]
    pub commute_or_search_distance: Option<f64>,
}

impl RawProfile {
    /// Shorthand for a profile carrying only an id
    pub fn with_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }
}

/// Wire shape of a profile: one field per accepted column name.
///
/// Scalars take the first present spelling in declaration order (camelCase
/// API name, then camelCase column, then snake_case column). Label lists are
/// unioned.
#[derive(Debug, Default, Deserialize)]
struct RawProfileRecord {
    #[serde(rename = "userId")]
    user_id_api: Option<String>,
    user_id: Option<String>,
    id: Option<String>,
    #[serde(rename = "noisePreference")]
    noise_preference: Option<RawNoise>,
    #[serde(rename = "noiseLevel")]
    noise_level_api: Option<RawNoise>,
    noise_level: Option<RawNoise>,
    interests: Option<Vec<String>>,
    #[serde(rename = "lifestyleTags")]
    lifestyle_tags: Option<Vec<String>>,
    lifestyle: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    city: Option<String>,
    #[serde(rename = "commuteOrSearchDistance")]
    commute_or_search_distance: Option<f64>,
    #[serde(rename = "commuteDistance")]
    commute_distance_api: Option<f64>,
    commute_distance: Option<f64>,
    #[serde(rename = "searchDistance")]
    search_distance: Option<f64>,
}

impl From<RawProfileRecord> for RawProfile {
    fn from(record: RawProfileRecord) -> Self {
        let lifestyle_tags = [record.lifestyle_tags, record.lifestyle, record.tags]
            .into_iter()
            .flatten()
            .flatten()
            .collect();

        Self {
            user_id: record.user_id_api.or(record.user_id).or(record.id),
            noise_preference: record
                .noise_preference
                .or(record.noise_level_api)
                .or(record.noise_level),
            interests: record.interests.unwrap_or_default(),
            lifestyle_tags,
            city: record.city,
            commute_or_search_distance: record
                .commute_or_search_distance
                .or(record.commute_distance_api)
                .or(record.commute_distance)
                .or(record.search_distance),
        }
    }
}

/// Noise preference as it arrives: either a label ("Medio") or a number (1-5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNoise {
    Level(f64),
    Label(String),
}

/// Ordinal noise preference on the 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoiseLevel(u8);

impl NoiseLevel {
    pub const MIN: NoiseLevel = NoiseLevel(1);
    pub const MAX: NoiseLevel = NoiseLevel(5);
    /// Default for an absent or unreadable preference.
    ///
    /// This is the middle of the numeric scale, which coincides with the
    /// "Alto"/"High" label: a profile without a preference matches a loud
    /// tenant fully and a "Medio" one at half marks.
    pub const MIDPOINT: NoiseLevel = NoiseLevel(3);

    /// Builds a level, clamping into the 1-5 scale
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of ordinal steps between two levels
    pub fn steps_from(self, other: NoiseLevel) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl Default for NoiseLevel {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

/// Set of free-text labels compared case-insensitively.
///
/// Keys are trimmed and lowercased; the first spelling seen for a key is kept
/// for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: BTreeMap<String, String>,
}

impl LabelSet {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeMap::new();
        for label in labels {
            let display = label.as_ref().trim();
            if display.is_empty() {
                continue;
            }
            set.entry(label_key(display))
                .or_insert_with(|| display.to_string());
        }
        Self { labels: set }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(&label_key(label))
    }

    /// Number of labels present in both sets
    pub fn shared_count(&self, other: &LabelSet) -> usize {
        self.labels
            .keys()
            .filter(|key| other.labels.contains_key(*key))
            .count()
    }

    /// Labels present in both sets, sorted by key.
    ///
    /// When the two sides spell a label differently the smaller spelling is
    /// reported so the result does not depend on argument order.
    pub fn shared_with(&self, other: &LabelSet) -> Vec<String> {
        self.labels
            .iter()
            .filter_map(|(key, display)| {
                other
                    .labels
                    .get(key)
                    .map(|other_display| display.min(other_display).clone())
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.values().map(String::as_str)
    }
}

/// Comparison key for a free-text label
fn label_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Normalized, default-filled view of a profile used by the scorers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparableProfile {
    pub noise: NoiseLevel,
    pub interests: LabelSet,
    pub lifestyle: LabelSet,
    /// Lowercased comparison key, `None` when blank or absent
    pub city: Option<String>,
    /// Non-negative minutes or km, `None` when absent
    pub commute: Option<f64>,
}

/// Aggregation policy selected by the caller
///
/// Deserialization goes through [`FromStr`], so the HTTP body and
/// `str::parse` accept the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Strategy {
    /// Owner/tenant cross-matching: city, shared tags and noise
    ListingMatch,
    /// Tenant/tenant matching: noise, lifestyle, interests, commute plus a base offset
    #[default]
    RoommateMatch,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ListingMatch => "listing-match",
            Strategy::RoommateMatch => "roommate-match",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}', expected listing-match or roommate-match")]
pub struct StrategyParseError(pub String);

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "listing-match" | "listing" => Ok(Strategy::ListingMatch),
            "roommate-match" | "roommate" => Ok(Strategy::RoommateMatch),
            _ => Err(StrategyParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = StrategyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Comparison dimension contributing a sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Noise,
    Lifestyle,
    Interests,
    Commute,
    City,
}

/// Contribution of one dimension to the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub dimension: Dimension,
    pub score: f64,
    pub max: f64,
}

/// Per-dimension audit of how a score was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub strategy: Strategy,
    pub score: u8,
    pub components: Vec<SubScore>,
    #[serde(rename = "baseOffset")]
    pub base_offset: f64,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
    #[serde(rename = "sharedLifestyle")]
    pub shared_lifestyle: Vec<String>,
}

impl ScoreBreakdown {
    /// Sub-score for a dimension, if the strategy uses it
    pub fn component(&self, dimension: Dimension) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.dimension == dimension)
            .map(|c| c.score)
    }
}

/// Candidate scored against a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub score: u8,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
    #[serde(rename = "sharedLifestyle")]
    pub shared_lifestyle: Vec<String>,
}

/// Roommate-match weight table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoommateWeights {
    /// Awarded for identical noise levels; half of it for one step apart
    pub noise_max: f64,
    pub lifestyle_per_shared: f64,
    pub lifestyle_shared_cap: usize,
    pub interest_per_shared: f64,
    pub interest_shared_cap: usize,
    pub commute_max: f64,
    /// Distance difference costing one commute point
    pub commute_step: f64,
    /// Commute sub-score when either side has no distance
    pub commute_neutral: f64,
    pub base_offset: f64,
}

impl RoommateWeights {
    pub fn lifestyle_max(&self) -> f64 {
        self.lifestyle_per_shared * self.lifestyle_shared_cap as f64
    }

    pub fn interest_max(&self) -> f64 {
        self.interest_per_shared * self.interest_shared_cap as f64
    }
}

impl Default for RoommateWeights {
    fn default() -> Self {
        Self {
            noise_max: 30.0,
            lifestyle_per_shared: 5.0,
            lifestyle_shared_cap: 5,
            interest_per_shared: 2.0,
            interest_shared_cap: 10,
            commute_max: 15.0,
            commute_step: 2.0,
            commute_neutral: 7.0,
            base_offset: 10.0,
        }
    }
}

/// Listing-match weight table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingWeights {
    pub city_match: f64,
    pub tag_per_shared: f64,
    pub tag_max: f64,
    pub noise_max: f64,
    /// Points lost per noise step
    pub noise_step_penalty: f64,
}

impl Default for ListingWeights {
    fn default() -> Self {
        Self {
            city_match: 20.0,
            tag_per_shared: 15.0,
            tag_max: 60.0,
            noise_max: 20.0,
            noise_step_penalty: 10.0,
        }
    }
}

/// Both weight tables, one per strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineWeights {
    pub roommate: RoommateWeights,
    pub listing: ListingWeights,
}

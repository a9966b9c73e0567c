use nlp_profiler_preprocessing::NOT_APPLICABLE;
use serde::{Deserialize, Serialize, Serializer};

use crate::sentiment::{PolarityCategory, PolaritySummary};

/// Which feature groups a [`Profiler`](crate::Profiler) computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerParams {
    /// Sentiment polarity score, category and summary.
    high_level: bool,
    /// Character, word, punctuation and stop-word counts.
    granular: bool,
}

impl ProfilerParams {
    #[must_use]
    pub fn new(high_level: bool, granular: bool) -> Self {
        Self {
            high_level,
            granular,
        }
    }

    #[must_use]
    pub fn high_level(&self) -> bool {
        self.high_level
    }

    #[must_use]
    pub fn granular(&self) -> bool {
        self.granular
    }
}

impl Default for ProfilerParams {
    fn default() -> Self {
        Self {
            high_level: true,
            granular: true,
        }
    }
}

impl From<(bool, bool)> for ProfilerParams {
    fn from(value: (bool, bool)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Every feature computed for one text.
///
/// `None` means the feature was either disabled by [`ProfilerParams`] or is
/// not applicable to the input; it serializes as `"N/A"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TextProfile {
    #[serde(serialize_with = "or_not_applicable")]
    pub sentiment_polarity_score: Option<f64>,
    #[serde(serialize_with = "or_not_applicable")]
    pub sentiment_polarity: Option<PolarityCategory>,
    #[serde(serialize_with = "or_not_applicable")]
    pub sentiment_polarity_summarised: Option<PolaritySummary>,
    #[serde(serialize_with = "or_not_applicable")]
    pub characters_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub characters_excluding_spaces_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub spaces_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub words_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub whole_numbers_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub alpha_numeric_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub non_alpha_numeric_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub punctuations_count: Option<usize>,
    #[serde(serialize_with = "or_not_applicable")]
    pub stop_words_count: Option<usize>,
}

fn or_not_applicable<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(NOT_APPLICABLE),
    }
}

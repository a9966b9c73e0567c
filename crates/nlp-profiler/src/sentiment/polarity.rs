use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::LabelError;

/// Fine-grained sentiment band of a polarity score.
///
/// Variants are declared from most negative to most positive, so the derived
/// `Ord` follows the score range rather than the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PolarityCategory {
    #[serde(rename = "Very negative")]
    VeryNegative,
    #[serde(rename = "Quite negative")]
    QuiteNegative,
    #[serde(rename = "Pretty negative")]
    PrettyNegative,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Pretty positive")]
    PrettyPositive,
    #[serde(rename = "Quite positive")]
    QuitePositive,
    #[serde(rename = "Very positive")]
    VeryPositive,
}

/// Inclusive lower bounds, tested top-down; the first bound a score meets wins.
///
/// The bounds are the "words of estimative probability" chance bands applied
/// to the score rescaled onto 0..=100 (`(score + 1) / 2 * 100`); the band
/// edges in that scale are noted alongside. Anything under the last bound,
/// including scores below -1, is `VeryNegative`.
const POLARITY_BANDS: [(f64, PolarityCategory); 7] = [
    (0.98, PolarityCategory::VeryPositive),    // 99..=100
    (0.74, PolarityCategory::QuitePositive),   // 87..99
    (0.02, PolarityCategory::PrettyPositive),  // 51..87
    (-0.02, PolarityCategory::Neutral),        // 49..51
    (-0.76, PolarityCategory::PrettyNegative), // 12..49
    (-0.96, PolarityCategory::QuiteNegative),  // 2..12
    (-1.0, PolarityCategory::VeryNegative),    // 0..2
];

impl PolarityCategory {
    pub const ALL: [Self; 7] = [
        Self::VeryNegative,
        Self::QuiteNegative,
        Self::PrettyNegative,
        Self::Neutral,
        Self::PrettyPositive,
        Self::QuitePositive,
        Self::VeryPositive,
    ];

    /// Category of a defined polarity score.
    ///
    /// Out-of-range scores land in the outermost bands. `NaN` is not a score:
    /// go through [`sentiment_polarity`] when the score may be missing.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        debug_assert!(!score.is_nan(), "NaN must be filtered before categorizing");
        POLARITY_BANDS
            .iter()
            .find(|(lower_bound, _)| score >= *lower_bound)
            .map_or(Self::VeryNegative, |&(_, category)| category)
    }

    #[must_use]
    pub fn summary(self) -> PolaritySummary {
        match self {
            Self::VeryPositive | Self::QuitePositive | Self::PrettyPositive => {
                PolaritySummary::Positive
            }
            Self::VeryNegative | Self::QuiteNegative | Self::PrettyNegative => {
                PolaritySummary::Negative
            }
            Self::Neutral => PolaritySummary::Neutral,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryNegative => "Very negative",
            Self::QuiteNegative => "Quite negative",
            Self::PrettyNegative => "Pretty negative",
            Self::Neutral => "Neutral",
            Self::PrettyPositive => "Pretty positive",
            Self::QuitePositive => "Quite positive",
            Self::VeryPositive => "Very positive",
        }
    }
}

impl fmt::Display for PolarityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolarityCategory {
    type Err = LabelError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == label)
            .ok_or_else(|| LabelError::UnknownCategory(label.to_owned()))
    }
}

/// Coarse three-way collapse of [`PolarityCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolaritySummary {
    Positive,
    Negative,
    Neutral,
}

impl PolaritySummary {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for PolaritySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolaritySummary {
    type Err = LabelError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Positive" => Ok(Self::Positive),
            "Negative" => Ok(Self::Negative),
            "Neutral" => Ok(Self::Neutral),
            _ => Err(LabelError::UnknownSummary(label.to_owned())),
        }
    }
}

impl From<PolarityCategory> for PolaritySummary {
    fn from(category: PolarityCategory) -> Self {
        category.summary()
    }
}

/// Category of a raw polarity score; a missing (`None` or `NaN`) score stays
/// not applicable.
#[must_use]
pub fn sentiment_polarity(score: Option<f64>) -> Option<PolarityCategory> {
    let category = score
        .filter(|score| !score.is_nan())
        .map(PolarityCategory::from_score);
    debug!(?score, ?category, "Categorized sentiment polarity");
    category
}

/// Summary of a polarity category; not applicable stays not applicable.
#[must_use]
pub fn sentiment_polarity_summarised(
    category: Option<PolarityCategory>,
) -> Option<PolaritySummary> {
    category.map(PolarityCategory::summary)
}

//! # nlp-profiler
//!
//! Lightweight lexical and sentiment features for short free-text inputs.
//!
//! Every feature is a pure function of one text cell. Inputs that are not
//! usable text (a missing cell, a `NaN` marker, or an empty string where a
//! sentiment score is asked for) produce "not applicable" (`None`) instead of
//! an error; extractors produce an empty list.
//!
//! ## Quick Start
//!
//! ```rust
//! use nlp_profiler::{PolarityCategory, PolaritySummary, Profiler};
//!
//! let profiler = Profiler::new();
//! let profile = profiler.profile("This is a good day");
//!
//! assert_eq!(profile.sentiment_polarity, Some(PolarityCategory::PrettyPositive));
//! assert_eq!(profile.sentiment_polarity_summarised, Some(PolaritySummary::Positive));
//! assert_eq!(profile.stop_words_count, Some(3));
//! ```
//!
//! ## Sentiment Pipeline
//!
//! The three stages can be used on their own, with any scorer upstream:
//!
//! ```rust
//! use nlp_profiler::{
//!     PolarityCategory, PolaritySummary, sentiment_polarity, sentiment_polarity_summarised,
//! };
//!
//! let category = sentiment_polarity(Some(0.375));
//! assert_eq!(category, Some(PolarityCategory::PrettyPositive));
//! assert_eq!(sentiment_polarity_summarised(category), Some(PolaritySummary::Positive));
//!
//! // not applicable passes straight through
//! assert_eq!(sentiment_polarity(None), None);
//! ```
//!
//! ## Custom Lexicon
//!
//! ```rust
//! use nlp_profiler::Profiler;
//!
//! let profiler = Profiler::new().with_lexicon_json(r#"{"polarity": {"bullish": 0.8}}"#)?;
//! assert_eq!(profiler.polarity_score("Very bullish"), Some(0.8));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod errors;
mod profile;
pub mod sentiment;

use std::sync::Arc;

use anyhow::Context;
use nlp_profiler_preprocessing::pre_processor;
use tracing::debug;

pub use errors::{LabelError, LexiconError};
pub use nlp_profiler_preprocessing::{
    InputText, NOT_APPLICABLE,
    pre_processor::{
        StopWords, count_alpha_numeric, count_characters, count_characters_excluding_spaces,
        count_non_alpha_numeric, count_punctuations, count_spaces, count_stop_words,
        count_whole_numbers, count_words, gather_punctuations, gather_stop_words,
    },
};
pub use profile::{ProfilerParams, TextProfile};
pub use sentiment::{
    Lexicon, LexiconScorer, PolarityCategory, PolarityScorer, PolaritySummary, sentiment_polarity,
    sentiment_polarity_score, sentiment_polarity_summarised,
};

/// Builder struct for configuring and running text profiling.
///
/// Use `Profiler::new()` for the embedded lexicon, English stop words and
/// every feature group, then chain `with_*` methods to customize.
///
/// # Examples
///
/// ```rust
/// use nlp_profiler::{Profiler, ProfilerParams};
///
/// let profiler = Profiler::new().with_params(ProfilerParams::new(false, true));
/// let profile = profiler.profile("Hello, world!");
///
/// assert_eq!(profile.punctuations_count, Some(2));
/// assert_eq!(profile.sentiment_polarity, None);
/// ```
#[derive(Clone)]
pub struct Profiler {
    params: ProfilerParams,
    scorer: Arc<dyn PolarityScorer>,
    stop_words: StopWords,
}

impl Profiler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: ProfilerParams::default(),
            scorer: Arc::new(LexiconScorer::default()),
            stop_words: StopWords::english().clone(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: impl Into<ProfilerParams>) -> Self {
        self.params = params.into();
        self
    }

    /// Replace the sentiment scorer.
    ///
    /// The categorization downstream does not depend on which scorer produced
    /// the score, only on the score itself.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    #[must_use]
    pub fn with_lexicon(self, lexicon: Lexicon) -> Self {
        self.with_scorer(LexiconScorer::new(lexicon))
    }

    /// Score sentiment with a lexicon parsed from JSON.
    ///
    /// See [`Lexicon::from_json`] for the expected shape.
    pub fn with_lexicon_json(self, json: &str) -> anyhow::Result<Self> {
        let lexicon =
            Lexicon::from_json(json).with_context(|| "Failed to load sentiment lexicon")?;
        Ok(self.with_lexicon(lexicon))
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    #[must_use]
    pub fn params(&self) -> ProfilerParams {
        self.params
    }

    /// Polarity score of `text` from the configured scorer.
    pub fn polarity_score<'a>(&self, text: impl Into<InputText<'a>>) -> Option<f64> {
        sentiment::score_with(self.scorer.as_ref(), text)
    }

    /// Compute every enabled feature for a single text.
    pub fn profile<'a>(&self, text: impl Into<InputText<'a>>) -> TextProfile {
        let text = text.into();
        let mut profile = TextProfile::default();

        if self.params.high_level() {
            let score = self.polarity_score(text);
            let category = sentiment_polarity(score);
            profile.sentiment_polarity_score = score;
            profile.sentiment_polarity = category;
            profile.sentiment_polarity_summarised = sentiment_polarity_summarised(category);
        }

        if self.params.granular() {
            profile.characters_count = pre_processor::count_characters(text);
            profile.characters_excluding_spaces_count =
                pre_processor::count_characters_excluding_spaces(text);
            profile.spaces_count = pre_processor::count_spaces(text);
            profile.words_count = pre_processor::count_words(text);
            profile.whole_numbers_count = pre_processor::count_whole_numbers(text);
            profile.alpha_numeric_count = pre_processor::count_alpha_numeric(text);
            profile.non_alpha_numeric_count = pre_processor::count_non_alpha_numeric(text);
            profile.punctuations_count = pre_processor::count_punctuations(text);
            profile.stop_words_count = text
                .as_text()
                .map(|text| self.stop_words.gather(text).len());
        }

        debug!(
            valid = text.is_valid(),
            high_level = self.params.high_level(),
            granular = self.params.granular(),
            "Profiled text"
        );
        profile
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use ahash::{AHashMap, AHashSet};
use serde::Deserialize;
use tracing::debug;

use crate::errors::LexiconError;

static DEFAULT_LEXICON_JSON: &str = include_str!("../../data/lexicon.json");

pub(crate) static DEFAULT_LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    Arc::new(
        Lexicon::from_json(DEFAULT_LEXICON_JSON)
            .expect("Unable to load embedded sentiment lexicon"),
    )
});

/// On-disk shape of a lexicon.
#[derive(Deserialize)]
struct LexiconFile {
    polarity: HashMap<String, f64>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    negations: Vec<String>,
}

/// Word level sentiment knowledge used by [`LexiconScorer`](super::LexiconScorer).
///
/// - `polarity`: word → polarity in [-1.0, 1.0]
/// - `intensifiers`: word → factor applied to the next sentiment word
/// - `negations`: words that flip the next sentiment word
///
/// All words are stored lower-cased.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    polarity: AHashMap<String, f64>,
    intensifiers: AHashMap<String, f64>,
    negations: AHashSet<String>,
}

impl Lexicon {
    /// Parse a lexicon from JSON:
    ///
    /// ```json
    /// {
    ///   "polarity": { "good": 0.7, "bad": -0.7 },
    ///   "intensifiers": { "very": 1.3 },
    ///   "negations": ["not", "n't"]
    /// }
    /// ```
    ///
    /// `intensifiers` and `negations` may be omitted.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;

        if let Some((word, &polarity)) = file
            .polarity
            .iter()
            .find(|(_, polarity)| !(-1.0..=1.0).contains(*polarity))
        {
            return Err(LexiconError::PolarityOutOfRange {
                word: word.clone(),
                polarity,
            });
        }
        if let Some((word, &factor)) = file
            .intensifiers
            .iter()
            .find(|(_, factor)| !factor.is_finite() || **factor <= 0.0)
        {
            return Err(LexiconError::InvalidIntensifier {
                word: word.clone(),
                factor,
            });
        }

        let lexicon = Self {
            polarity: lower_keys(file.polarity),
            intensifiers: lower_keys(file.intensifiers),
            negations: file
                .negations
                .into_iter()
                .map(|word| word.to_lowercase())
                .collect(),
        };
        debug!(
            num_polarity_words = lexicon.polarity.len(),
            num_intensifiers = lexicon.intensifiers.len(),
            num_negations = lexicon.negations.len(),
            "Loaded sentiment lexicon"
        );
        Ok(lexicon)
    }

    /// The lexicon shipped with the crate.
    #[must_use]
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    #[must_use]
    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    #[must_use]
    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    #[must_use]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Number of sentiment-bearing words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

fn lower_keys(map: HashMap<String, f64>) -> AHashMap<String, f64> {
    map.into_iter()
        .map(|(word, value)| (word.to_lowercase(), value))
        .collect()
}

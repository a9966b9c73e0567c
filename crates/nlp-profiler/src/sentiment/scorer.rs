use std::sync::{Arc, LazyLock};

use nlp_profiler_preprocessing::{
    InputText,
    pre_processor::{is_punctuation, tokenize},
};
use tracing::{debug, trace};

use super::lexicon::{DEFAULT_LEXICON, Lexicon};

static DEFAULT_SCORER: LazyLock<LexiconScorer> = LazyLock::new(LexiconScorer::default);

/// A negated sentiment word flips sign and loses half its strength.
const NEGATION_FACTOR: f64 = -0.5;

/// Maps text to a raw polarity score, nominally in [-1.0, 1.0].
///
/// Implementations only ever see text that passed the input guard, i.e. a
/// non-empty string. Closures
/// `Fn(&str) -> f64` implement this trait too.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Averages lexicon polarities of the sentiment words in a text.
///
/// Intensifiers scale the next sentiment word, negations flip it by
/// [`NEGATION_FACTOR`]; both are forgotten at punctuation. Text without
/// sentiment words scores 0.0, and the average is clamped to [-1.0, 1.0].
#[derive(Clone, Debug)]
pub struct LexiconScorer {
    lexicon: Arc<Lexicon>,
}

impl LexiconScorer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            lexicon: Arc::clone(&DEFAULT_LEXICON),
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut word_scores = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for token in &tokens {
            if token.chars().all(is_punctuation) {
                intensity = 1.0;
                negated = false;
                continue;
            }
            let word = token.to_lowercase();
            if self.lexicon.is_negation(&word) {
                negated = true;
            } else if let Some(polarity) = self.lexicon.polarity(&word) {
                let mut score = polarity * intensity;
                if negated {
                    score *= NEGATION_FACTOR;
                }
                trace!(word = word.as_str(), polarity, score, "Scored sentiment word");
                word_scores.push(score);
                intensity = 1.0;
                negated = false;
            } else if let Some(factor) = self.lexicon.intensity(&word) {
                intensity *= factor;
            }
        }

        if word_scores.is_empty() {
            return 0.0;
        }
        let mean = word_scores.iter().sum::<f64>() / word_scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Run `scorer` on `text` behind the input guard.
///
/// Missing, numeric and empty inputs are not applicable, as is a `NaN`
/// coming back from the scorer.
pub fn score_with<'a, S>(scorer: &S, text: impl Into<InputText<'a>>) -> Option<f64>
where
    S: PolarityScorer + ?Sized,
{
    let text = text.into().as_scorable_text()?;
    let score = scorer.polarity(text);
    debug!(score, num_chars = text.chars().count(), "Scored sentiment polarity");
    (!score.is_nan()).then_some(score)
}

/// Polarity score of `text` using the embedded lexicon.
pub fn sentiment_polarity_score<'a>(text: impl Into<InputText<'a>>) -> Option<f64> {
    score_with(&*DEFAULT_SCORER, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_averages_sentiment_words() {
        let scorer = LexiconScorer::default();
        assert_close(scorer.polarity("This is a good day"), 0.7);
        assert_close(scorer.polarity("good food, bad service"), 0.0);
        assert_close(scorer.polarity("GOOD"), 0.7);
    }

    #[test]
    fn test_text_without_sentiment_words_is_zero() {
        let scorer = LexiconScorer::default();
        assert_close(scorer.polarity("The product arrived on time"), 0.0);
        assert_close(
            scorer.polarity("Today's date is 04/28/2020 for format mm/dd/yyyy, not 28/04/2020."),
            0.0,
        );
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let scorer = LexiconScorer::default();
        assert_close(scorer.polarity("It is not a good area."), -0.35);
        assert_close(scorer.polarity("It isn't good"), -0.35);
    }

    #[test]
    fn test_modifiers_stop_at_punctuation() {
        let scorer = LexiconScorer::default();
        assert_close(scorer.polarity("not. good"), 0.7);
        assert_close(scorer.polarity("very. good"), 0.7);
    }

    #[test]
    fn test_intensifier_scales_and_result_is_clamped() {
        let scorer = LexiconScorer::default();
        assert_close(scorer.polarity("very good"), 0.7 * 1.3);
        assert_close(scorer.polarity("extremely excellent"), 1.0);
        assert_close(scorer.polarity("absolutely terrible"), -1.0);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_json(r#"{"polarity": {"stonks": 0.9}}"#).unwrap();
        let scorer = LexiconScorer::new(lexicon);
        assert_close(scorer.polarity("stonks"), 0.9);
        assert_close(scorer.polarity("good"), 0.0);
    }

    #[test]
    fn test_guard_short_circuits_before_the_scorer() {
        let scorer = |_: &str| -> f64 { panic!("scorer must not be called") };
        assert_eq!(score_with(&scorer, ""), None);
        assert_eq!(score_with(&scorer, None::<&str>), None);
        assert_eq!(score_with(&scorer, f64::NAN), None);
    }

    #[test]
    fn test_nan_from_scorer_is_not_applicable() {
        let scorer = |_: &str| f64::NAN;
        assert_eq!(score_with(&scorer, "anything"), None);
    }

    #[test]
    fn test_default_entry_point() {
        assert_eq!(sentiment_polarity_score("This is a good day"), Some(0.7));
        assert_eq!(sentiment_polarity_score(""), None);
    }

    #[test]
    fn test_whitespace_only_text_is_scored() {
        assert_eq!(sentiment_polarity_score("   "), Some(0.0));
        assert_eq!(score_with(&|_: &str| 0.5, " \t\n"), Some(0.5));
    }
}

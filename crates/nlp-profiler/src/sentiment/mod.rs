//! Sentiment polarity pipeline: score → category → summary.

mod lexicon;
mod polarity;
mod scorer;

pub use lexicon::Lexicon;
pub use polarity::{
    PolarityCategory, PolaritySummary, sentiment_polarity, sentiment_polarity_summarised,
};
pub use scorer::{LexiconScorer, PolarityScorer, score_with, sentiment_polarity_score};

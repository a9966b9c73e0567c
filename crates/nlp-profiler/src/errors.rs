use thiserror::Error;

/// Failure to load a sentiment lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("malformed lexicon json: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("polarity of '{word}' is {polarity}, expected a value in [-1.0, 1.0]")]
    PolarityOutOfRange { word: String, polarity: f64 },
    #[error("intensifier '{word}' has factor {factor}, expected a positive finite value")]
    InvalidIntensifier { word: String, factor: f64 },
}

/// A label that is not one of the known polarity categories or summaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unknown sentiment polarity category '{0}'")]
    UnknownCategory(String),
    #[error("unknown sentiment polarity summary '{0}'")]
    UnknownSummary(String),
}

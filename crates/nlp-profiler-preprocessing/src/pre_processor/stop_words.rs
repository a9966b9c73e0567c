use std::sync::LazyLock;

use ahash::AHashSet;
use tracing::debug;

use super::tokenizer;
use crate::input::InputText;

/// English stop words, NLTK flavour (179 words, contraction fragments included).
pub const ENGLISH_STOP_WORDS: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "you're", "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "she's", "her", "hers", "herself",
    "it", "it's", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "that'll", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out",
    "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y",
    "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
    "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static ENGLISH: LazyLock<StopWords> = LazyLock::new(|| StopWords::new(ENGLISH_STOP_WORDS));

/// A set of stop words, matched case-insensitively.
///
/// With the `serde` feature it (de)serializes as a plain list of words.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopWords {
    /// Stored lower-cased
    words: AHashSet<String>,
}

impl StopWords {
    /// Build a set from any list of words; they are lower-cased on the way in.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// The shared English set.
    #[must_use]
    pub fn english() -> &'static Self {
        &ENGLISH
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Stop words found in `text`, original spelling, in order, duplicates kept.
    pub fn gather(&self, text: &str) -> Vec<String> {
        let tokens = tokenizer::tokenize(text);
        let found = tokens
            .iter()
            .filter(|token| self.contains(token))
            .map(|token| (*token).to_owned())
            .collect::<Vec<_>>();
        debug!(
            num_tokens = tokens.len(),
            num_stop_words = found.len(),
            "Gathered stop words"
        );
        found
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

/// English stop words of `text`; invalid input yields an empty list.
pub fn gather_stop_words<'a>(text: impl Into<InputText<'a>>) -> Vec<String> {
    text.into()
        .as_text()
        .map(|text| ENGLISH.gather(text))
        .unwrap_or_default()
}

/// Number of English stop words in `text`, `None` for invalid input.
pub fn count_stop_words<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    let text = text.into();
    text.is_valid().then(|| gather_stop_words(text).len())
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop_words: StopWords) -> Self {
        let mut words = stop_words.words.into_iter().collect::<Vec<_>>();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_set_has_every_listed_word() {
        assert_eq!(StopWords::english().len(), ENGLISH_STOP_WORDS.len());
        assert!(StopWords::english().contains("the"));
        assert!(!StopWords::english().contains("people"));
    }

    #[test]
    fn test_matching_is_case_insensitive_but_keeps_spelling() {
        assert_eq!(
            gather_stop_words("This is THE end"),
            vec!["This", "is", "THE"]
        );
    }

    #[test]
    fn test_contractions_are_split_before_matching() {
        assert_eq!(gather_stop_words("It doesn't"), vec!["It", "does"]);
        assert_eq!(gather_stop_words("don't"), vec!["do"]);
    }

    #[test]
    fn test_custom_set() {
        let words = StopWords::new(["Foo", "bar"]);
        assert!(words.contains("FOO"));
        assert_eq!(words.gather("foo baz bar foo"), vec!["foo", "bar", "foo"]);
    }

    #[test]
    fn test_invalid_text() {
        assert!(gather_stop_words(None::<&str>).is_empty());
        assert_eq!(count_stop_words(f64::NAN), None);
        assert_eq!(count_stop_words(""), Some(0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let words = StopWords::new(["The", "an"]);
        let json = serde_json::to_string(&words).unwrap();
        assert_eq!(json, r#"["an","the"]"#);
        let restored: StopWords = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, words);
        assert!(restored.contains("the"));
    }
}

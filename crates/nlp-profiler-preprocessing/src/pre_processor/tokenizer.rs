use tracing::trace;

use super::punctuation::is_punctuation;

/// Clitics split off the end of a word, treebank style.
const CONTRACTION_SUFFIXES: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];
const NEGATION_SUFFIX: &str = "n't";

/// Split `text` into word and punctuation tokens.
///
/// Whitespace separates chunks; punctuation at either edge of a chunk becomes
/// one token per character, and English contractions are split in two
/// (`doesn't` → `does`, `n't`). Punctuation inside a chunk is kept, so
/// `semi-colons` and `04/28/2020` stay whole.
///
/// Tokens borrow from `text`; nothing is lower-cased here.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        push_chunk(chunk, &mut tokens);
    }
    trace!(num_tokens = tokens.len(), "Tokenized text");
    tokens
}

fn push_chunk<'a>(chunk: &'a str, tokens: &mut Vec<&'a str>) {
    let without_leading = chunk.trim_start_matches(is_punctuation);
    let leading = &chunk[..chunk.len() - without_leading.len()];
    let word = without_leading.trim_end_matches(is_punctuation);
    let trailing = &without_leading[word.len()..];

    push_chars(leading, tokens);
    if !word.is_empty() {
        let (stem, clitic) = split_contraction(word);
        tokens.push(stem);
        tokens.extend(clitic);
    }
    push_chars(trailing, tokens);
}

fn push_chars<'a>(run: &'a str, tokens: &mut Vec<&'a str>) {
    tokens.extend(
        run.char_indices()
            .map(|(idx, c)| &run[idx..idx + c.len_utf8()]),
    );
}

/// Returns the word stem and, for a contraction, the split-off clitic.
fn split_contraction(word: &str) -> (&str, Option<&str>) {
    let lower = word.to_ascii_lowercase();
    let suffix_len = if lower.len() > NEGATION_SUFFIX.len() && lower.ends_with(NEGATION_SUFFIX) {
        Some(NEGATION_SUFFIX.len())
    } else {
        CONTRACTION_SUFFIXES
            .iter()
            .find(|suffix| lower.len() > suffix.len() && lower.ends_with(*suffix))
            .map(|suffix| suffix.len())
    };

    // ASCII lower-casing keeps byte offsets, and every suffix is ASCII
    match suffix_len {
        Some(len) => {
            let (stem, clitic) = word.split_at(word.len() - len);
            (stem, Some(clitic))
        }
        None => (word, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_edge_punctuation_into_single_tokens() {
        assert_eq!(
            tokenize("semi-colons (;)."),
            vec!["semi-colons", "(", ";", ")", "."]
        );
    }

    #[test]
    fn test_splits_contractions() {
        assert_eq!(tokenize("doesn't"), vec!["does", "n't"]);
        assert_eq!(tokenize("Today's"), vec!["Today", "'s"]);
        assert_eq!(tokenize("we'll they've"), vec!["we", "'ll", "they", "'ve"]);
    }

    #[test]
    fn test_keeps_inner_punctuation() {
        assert_eq!(
            tokenize("04/28/2020, mm/dd/yyyy"),
            vec!["04/28/2020", ",", "mm/dd/yyyy"]
        );
    }

    #[test]
    fn test_plain_sentence() {
        assert_eq!(
            tokenize("2833047 people live in this area"),
            vec!["2833047", "people", "live", "in", "this", "area"]
        );
    }

    #[test]
    fn test_empty_and_blank_text_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_non_ascii_words_are_untouched() {
        assert_eq!(tokenize("naïve café!"), vec!["naïve", "café", "!"]);
    }
}

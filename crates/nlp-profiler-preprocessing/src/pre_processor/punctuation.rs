use tracing::debug;

use crate::input::InputText;

/// ASCII punctuation: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
#[inline]
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Punctuation marks of `text`, in order of appearance, duplicates kept.
///
/// Invalid input yields an empty list.
pub fn gather_punctuations<'a>(text: impl Into<InputText<'a>>) -> Vec<char> {
    let Some(text) = text.into().as_text() else {
        return Vec::new();
    };
    let found = text.chars().filter(|&c| is_punctuation(c)).collect::<Vec<_>>();
    debug!(num_punctuations = found.len(), "Gathered punctuations");
    found
}

/// Number of punctuation marks in `text`, `None` for invalid input.
pub fn count_punctuations<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    let text = text.into();
    text.is_valid().then(|| gather_punctuations(text).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gathers_in_order_with_duplicates() {
        assert_eq!(gather_punctuations("a,b,,c!"), vec![',', ',', ',', '!']);
    }

    #[test]
    fn test_unicode_punctuation_is_not_counted() {
        assert_eq!(gather_punctuations("«quoted» — dash…"), Vec::<char>::new());
        assert_eq!(count_punctuations("«quoted» — dash…"), Some(0));
    }

    #[test]
    fn test_empty_text_counts_zero() {
        assert_eq!(gather_punctuations(""), Vec::<char>::new());
        assert_eq!(count_punctuations(""), Some(0));
    }

    #[test]
    fn test_invalid_text() {
        assert!(gather_punctuations(f64::NAN).is_empty());
        assert_eq!(count_punctuations(None::<&str>), None);
    }
}

//! Character and word level counters.
//!
//! Every counter shares one contract: `Some(count)` for any string, the empty
//! one included, and `None` when the input is missing or numeric.

use crate::input::InputText;

#[inline]
fn count_with<'a>(
    text: impl Into<InputText<'a>>,
    counter: impl FnOnce(&str) -> usize,
) -> Option<usize> {
    text.into().as_text().map(counter)
}

/// Unicode scalar values, whitespace included.
pub fn count_characters<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| text.chars().count())
}

/// Characters other than whitespace.
pub fn count_characters_excluding_spaces<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| text.chars().filter(|c| !c.is_whitespace()).count())
}

/// Whitespace characters of any kind (spaces, tabs, newlines).
pub fn count_spaces<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| text.chars().filter(|c| c.is_whitespace()).count())
}

/// Whitespace separated words.
pub fn count_words<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| text.split_whitespace().count())
}

/// Runs of ASCII digits standing on their own, e.g. `04/28/2020` holds three.
pub fn count_whole_numbers<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|piece| !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()))
            .count()
    })
}

/// Alphabetic or numeric characters, any script.
pub fn count_alpha_numeric<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| text.chars().filter(|c| c.is_alphanumeric()).count())
}

/// Characters that are neither alpha-numeric nor whitespace.
pub fn count_non_alpha_numeric<'a>(text: impl Into<InputText<'a>>) -> Option<usize> {
    count_with(text, |text| {
        text.chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count()
    })
}

use core::fmt;

/// Rendered form of a feature that could not be computed for an input.
///
/// In the Rust API "not applicable" is `None`; this label is what a `None`
/// turns into when a profile is displayed or serialized.
pub const NOT_APPLICABLE: &str = "N/A";

/// A single text cell handed to the profiler.
///
/// Text coming out of a table is not always text: a cell can be empty, or
/// hold a floating point marker (usually `NaN`) where a string was expected.
/// Every public operation classifies its input through this type first.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputText<'a> {
    Text(&'a str),
    Float(f64),
    #[default]
    Missing,
}

impl<'a> InputText<'a> {
    /// Text usable by the extractors and counters.
    ///
    /// Any string qualifies, including the empty one. Missing and numeric
    /// cells do not.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(text) => Some(text),
            Self::Float(_) | Self::Missing => None,
        }
    }

    /// Text usable by a sentiment scorer: any non-empty string.
    #[inline]
    #[must_use]
    pub fn as_scorable_text(&self) -> Option<&'a str> {
        self.as_text().filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.as_text().is_some()
    }
}

impl<'a> From<&'a str> for InputText<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for InputText<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a, T> From<Option<T>> for InputText<'a>
where
    T: Into<InputText<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<f64> for InputText<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for InputText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Missing => write!(f, "{NOT_APPLICABLE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_numeric_cells_are_invalid() {
        assert_eq!(InputText::from(None::<&str>).as_text(), None);
        assert_eq!(InputText::from(f64::NAN).as_text(), None);
        assert_eq!(InputText::from(1.5).as_text(), None);
        assert!(!InputText::Missing.is_valid());
    }

    #[test]
    fn test_only_the_empty_string_is_unscorable() {
        let input = InputText::from("");
        assert_eq!(input.as_text(), Some(""));
        assert_eq!(input.as_scorable_text(), None);

        let blank = InputText::from(" \t\n");
        assert!(blank.is_valid());
        assert_eq!(blank.as_scorable_text(), Some(" \t\n"));
    }

    #[test]
    fn test_string_conversions() {
        let owned = String::from("hello");
        assert_eq!(InputText::from(&owned).as_scorable_text(), Some("hello"));
        assert_eq!(InputText::from(Some("hi")).as_text(), Some("hi"));
    }

    #[test]
    fn test_display_renders_missing_as_not_applicable() {
        assert_eq!(InputText::Missing.to_string(), "N/A");
        assert_eq!(InputText::from("abc").to_string(), "abc");
    }
}

// Text: non-empty, non-blank immutable string value

use std::fmt;
use std::str::{Chars, FromStr};

use crate::MorphError;
use crate::character::is_blank;

/// A non-empty text fragment that is not made up only of whitespace.
///
/// `Text` is immutable. Every transformation returns a new value, and every
/// constructor checks the invariant, so an invalid `Text` cannot exist.
/// Equality, hashing and ordering compare the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Text {
    value: String,
}

impl Text {
    /// Create a new text.
    ///
    /// Fails with [`MorphError::EmptyOrWhitespaceInput`] when `value` is
    /// empty or consists only of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, MorphError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(MorphError::EmptyOrWhitespaceInput);
        }
        Ok(Self { value })
    }

    /// Concatenate two texts: `first` followed by `second`.
    ///
    /// Both operands already contain a non-whitespace character, so the
    /// result is always valid.
    pub fn concatenate(first: &Text, second: &Text) -> Text {
        let mut value = String::with_capacity(first.value.len() + second.value.len());
        value.push_str(&first.value);
        value.push_str(&second.value);
        Text { value }
    }

    /// Return `second` followed by `self`.
    pub fn prepend_with(&self, second: &Text) -> Text {
        Self::concatenate(second, self)
    }

    /// Return `self` followed by `second`.
    pub fn append_with(&self, second: &Text) -> Text {
        Self::concatenate(self, second)
    }

    /// Remove `second` from the end of this text.
    ///
    /// Fails with [`MorphError::SuffixNotPresent`] when this text does not
    /// end with `second`. When nothing but whitespace would remain, fails
    /// with [`MorphError::EmptyOrWhitespaceInput`].
    pub fn strip_suffix(&self, second: &Text) -> Result<Text, MorphError> {
        match self.value.strip_suffix(second.as_str()) {
            Some(rest) => Text::new(rest),
            None => Err(MorphError::SuffixNotPresent {
                text: self.value.clone(),
                suffix: second.value.clone(),
            }),
        }
    }

    /// Remove `second` from the start of this text.
    ///
    /// Fails with [`MorphError::PrefixNotPresent`] when this text does not
    /// start with `second`. When nothing but whitespace would remain, fails
    /// with [`MorphError::EmptyOrWhitespaceInput`].
    pub fn strip_prefix(&self, second: &Text) -> Result<Text, MorphError> {
        match self.value.strip_prefix(second.as_str()) {
            Some(rest) => Text::new(rest),
            None => Err(MorphError::PrefixNotPresent {
                text: self.value.clone(),
                prefix: second.value.clone(),
            }),
        }
    }

    /// Iterate over the characters of the text, in order.
    pub fn chars(&self) -> Chars<'_> {
        self.value.chars()
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

impl TryFrom<String> for Text {
    type Error = MorphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Text::new(value)
    }
}

impl TryFrom<&str> for Text {
    type Error = MorphError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Text::new(value)
    }
}

impl FromStr for Text {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Text::new(s)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Text {
        Text::new(s).unwrap()
    }

    // -- Construction --

    #[test]
    fn new_keeps_value() {
        assert_eq!(text("k'et'").as_str(), "k'et'");
        assert_eq!(text(" padded ").as_str(), " padded ");
        assert_eq!(text("\u{10E5}\u{10D0}\u{10E0}\u{10D7}\u{10E3}\u{10DA}\u{10D8}").as_str(), "ქართული");
    }

    #[test]
    fn new_rejects_empty_and_blank() {
        assert_eq!(Text::new(""), Err(MorphError::EmptyOrWhitespaceInput));
        assert_eq!(Text::new("   "), Err(MorphError::EmptyOrWhitespaceInput));
        assert_eq!(Text::new("\t\n"), Err(MorphError::EmptyOrWhitespaceInput));
        assert_eq!(Text::new("\u{00A0}"), Err(MorphError::EmptyOrWhitespaceInput));
    }

    #[test]
    fn conversions() {
        assert_eq!(Text::try_from("eb").unwrap(), text("eb"));
        assert_eq!(Text::try_from(String::from("eb")).unwrap(), text("eb"));
        assert_eq!("eb".parse::<Text>().unwrap(), text("eb"));
        assert!(" ".parse::<Text>().is_err());
        assert_eq!(String::from(text("eb")), "eb");
        assert_eq!(text("eb").into_string(), "eb");
        assert_eq!(text("eb").to_string(), "eb");
    }

    // -- Concatenation --

    #[test]
    fn concatenate_joins_in_order() {
        let joined = Text::concatenate(&text("da"), &text("k'et'"));
        assert_eq!(joined.as_str(), "dak'et'");
    }

    #[test]
    fn concatenate_with_whitespace_operand() {
        // Whitespace inside a Text is allowed; only all-blank is rejected.
        let joined = Text::concatenate(&text("a "), &text(" b"));
        assert_eq!(joined.as_str(), "a  b");
    }

    #[test]
    fn append_and_prepend_order() {
        let stem = text("k'et'");
        assert_eq!(stem.append_with(&text("eb")).as_str(), "k'et'eb");
        assert_eq!(stem.prepend_with(&text("da")).as_str(), "dak'et'");
        assert_eq!(stem.as_str(), "k'et'");
    }

    // -- Stripping --

    #[test]
    fn strip_suffix_removes_tail() {
        let stripped = text("k'et'eb").strip_suffix(&text("eb")).unwrap();
        assert_eq!(stripped.as_str(), "k'et'");
    }

    #[test]
    fn strip_suffix_missing() {
        let err = text("k'et'eb").strip_suffix(&text("da")).unwrap_err();
        assert_eq!(
            err,
            MorphError::SuffixNotPresent {
                text: "k'et'eb".to_string(),
                suffix: "da".to_string(),
            }
        );
    }

    #[test]
    fn strip_suffix_only_looks_at_the_end() {
        // "eb" occurs in the middle but not at the end.
        assert!(text("ebk'et'").strip_suffix(&text("eb")).is_err());
    }

    #[test]
    fn strip_prefix_removes_head() {
        let stripped = text("dak'et'eb").strip_prefix(&text("da")).unwrap();
        assert_eq!(stripped.as_str(), "k'et'eb");
    }

    #[test]
    fn strip_prefix_missing() {
        let err = text("dak'et'eb").strip_prefix(&text("eb")).unwrap_err();
        assert_eq!(
            err,
            MorphError::PrefixNotPresent {
                text: "dak'et'eb".to_string(),
                prefix: "eb".to_string(),
            }
        );
    }

    #[test]
    fn strip_entire_value_is_rejected() {
        let word = text("da");
        assert_eq!(word.strip_prefix(&word), Err(MorphError::EmptyOrWhitespaceInput));
        assert_eq!(word.strip_suffix(&word), Err(MorphError::EmptyOrWhitespaceInput));
    }

    #[test]
    fn strip_leaving_only_whitespace_is_rejected() {
        assert_eq!(
            text("  da").strip_suffix(&text("da")),
            Err(MorphError::EmptyOrWhitespaceInput)
        );
    }

    #[test]
    fn strip_multibyte() {
        // დაწერა -> strip "და"
        let written = text("\u{10D3}\u{10D0}\u{10EC}\u{10D4}\u{10E0}\u{10D0}");
        let stripped = written.strip_prefix(&text("\u{10D3}\u{10D0}")).unwrap();
        assert_eq!(stripped.as_str(), "\u{10EC}\u{10D4}\u{10E0}\u{10D0}");
    }

    // -- Iteration and equality --

    #[test]
    fn iterates_characters() {
        let t = text("eb");
        assert_eq!(t.chars().collect::<Vec<_>>(), vec!['e', 'b']);
        // restartable
        assert_eq!((&t).into_iter().count(), 2);
        let mut seen = String::new();
        for c in &t {
            seen.push(c);
        }
        assert_eq!(seen, "eb");
    }

    #[test]
    fn char_count_is_not_byte_len() {
        let t = text("\u{10D3}\u{10D0}");
        assert_eq!(t.char_count(), 2);
        assert_eq!(t.as_str().len(), 6);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(text("eb"), Text::concatenate(&text("e"), &text("b")));
        assert_ne!(text("eb"), text("Eb"));
    }
}

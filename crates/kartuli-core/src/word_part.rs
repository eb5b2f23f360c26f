// Word parts: whitespace-free fragments and their morphological roles

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::MorphError;
use crate::character::contains_whitespace;
use crate::text::Text;

// ---------------------------------------------------------------------------
// WordPart
// ---------------------------------------------------------------------------

/// A [`Text`] that contains no whitespace character anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct WordPart {
    text: Text,
}

impl WordPart {
    /// Wrap `text` as a word part.
    ///
    /// Fails with [`MorphError::WhitespaceInPart`] when `text` contains any
    /// whitespace character.
    pub fn new(text: Text) -> Result<Self, MorphError> {
        if contains_whitespace(text.as_str()) {
            return Err(MorphError::WhitespaceInPart {
                text: text.into_string(),
            });
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn into_text(self) -> Text {
        self.text
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for WordPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

impl TryFrom<&str> for WordPart {
    type Error = MorphError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        WordPart::new(Text::new(value)?)
    }
}

impl TryFrom<String> for WordPart {
    type Error = MorphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WordPart::new(Text::new(value)?)
    }
}

impl From<WordPart> for String {
    fn from(part: WordPart) -> Self {
        part.text.into_string()
    }
}

// ---------------------------------------------------------------------------
// PartRole
// ---------------------------------------------------------------------------

/// Morphological role of a word part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PartRole {
    /// Optional part preceding the stem.
    Prefix,
    /// Meaning-bearing core; exactly one per word.
    Stem,
    /// Optional part following the stem.
    Suffix,
}

impl PartRole {
    /// All roles in the order they appear within a word.
    pub const ALL: [PartRole; 3] = [PartRole::Prefix, PartRole::Stem, PartRole::Suffix];

    pub fn as_str(self) -> &'static str {
        match self {
            PartRole::Prefix => "prefix",
            PartRole::Stem => "stem",
            PartRole::Suffix => "suffix",
        }
    }
}

impl fmt::Display for PartRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TypedWordPart
// ---------------------------------------------------------------------------

/// A [`WordPart`] tagged with its [`PartRole`].
///
/// # Equality
///
/// `PartialEq`, `Eq` and `Hash` look at the **role only**. Two stems with
/// different text are equal, and a prefix never equals a suffix even when
/// their text matches. A set of `TypedWordPart`s therefore holds at most one
/// part per role, and the first occurrence of a role in a slice can be found
/// with a plain equality search. Compare [`TypedWordPart::text`] explicitly
/// when content matters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedWordPart {
    role: PartRole,
    #[cfg_attr(feature = "serde", serde(rename = "text"))]
    word_part: WordPart,
}

impl TypedWordPart {
    pub fn new(word_part: WordPart, role: PartRole) -> Self {
        Self { role, word_part }
    }

    /// Validate `value` as a word part and tag it as a prefix.
    pub fn prefix(value: &str) -> Result<Self, MorphError> {
        Self::with_role(value, PartRole::Prefix)
    }

    /// Validate `value` as a word part and tag it as a stem.
    pub fn stem(value: &str) -> Result<Self, MorphError> {
        Self::with_role(value, PartRole::Stem)
    }

    /// Validate `value` as a word part and tag it as a suffix.
    pub fn suffix(value: &str) -> Result<Self, MorphError> {
        Self::with_role(value, PartRole::Suffix)
    }

    fn with_role(value: &str, role: PartRole) -> Result<Self, MorphError> {
        Ok(Self::new(WordPart::try_from(value)?, role))
    }

    pub fn word_part(&self) -> &WordPart {
        &self.word_part
    }

    pub fn role(&self) -> PartRole {
        self.role
    }

    pub fn text(&self) -> &Text {
        self.word_part.text()
    }
}

impl PartialEq for TypedWordPart {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role
    }
}

impl Eq for TypedWordPart {}

impl Hash for TypedWordPart {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.role.hash(state);
    }
}

impl fmt::Display for TypedWordPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.role, self.word_part)
    }
}

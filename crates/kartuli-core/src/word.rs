// Word: ordered prefix/stem/suffix composition

use std::fmt;

use crate::MorphError;
use crate::text::Text;
use crate::word_part::{PartRole, TypedWordPart};

/// A word composed from typed parts.
///
/// Only the composed surface form is kept. Two words built from different
/// breakdowns (`da` + `k'et'eb` versus `dak'et'` + `eb`) are equal when the
/// surface forms match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Word {
    text: Text,
}

impl Word {
    /// Validate `parts` and concatenate them in the given order.
    ///
    /// Rules, checked in this order:
    ///
    /// 1. Exactly one part has role [`PartRole::Stem`], otherwise
    ///    [`MorphError::StemCountInvalid`].
    /// 2. With more than one part, the first prefix must not come after the
    ///    stem and the first suffix must not come before it, otherwise
    ///    [`MorphError::PartOrderInvalid`]. Only the first occurrence of each
    ///    role is compared, so a second prefix placed after the stem is not
    ///    detected.
    pub fn new(parts: &[TypedWordPart]) -> Result<Self, MorphError> {
        let found = parts.iter().filter(|p| p.role() == PartRole::Stem).count();
        if found != 1 {
            #[cfg(feature = "tracing")]
            tracing::debug!(found, parts = parts.len(), "rejecting word: stem count");
            return Err(MorphError::StemCountInvalid { found });
        }

        if parts.len() > 1 {
            let prefix = first_index(parts, PartRole::Prefix);
            let suffix = first_index(parts, PartRole::Suffix);
            let Some(stem) = first_index(parts, PartRole::Stem) else {
                return Err(MorphError::StemCountInvalid { found: 0 });
            };

            let prefix_after_stem = prefix.is_some_and(|i| i > stem);
            let suffix_before_stem = suffix.is_some_and(|i| i < stem);
            if prefix_after_stem || suffix_before_stem {
                #[cfg(feature = "tracing")]
                tracing::debug!(?prefix, stem, ?suffix, "rejecting word: part order");
                return Err(MorphError::PartOrderInvalid {
                    prefix,
                    stem,
                    suffix,
                });
            }
        }

        let mut texts = parts.iter().map(TypedWordPart::text);
        let Some(first) = texts.next() else {
            return Err(MorphError::StemCountInvalid { found: 0 });
        };
        let text = texts.fold(first.clone(), |acc, next| Text::concatenate(&acc, next));
        Ok(Self { text })
    }

    /// The composed surface form.
    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn into_text(self) -> Text {
        self.text
    }
}

/// Index of the first part with `role`.
fn first_index(parts: &[TypedWordPart], role: PartRole) -> Option<usize> {
    parts.iter().position(|p| p.role() == role)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

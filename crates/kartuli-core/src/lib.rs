//! Validated word-part composition for Georgian morphology.
//!
//! A word in an agglutinative language is modelled as an optional prefix,
//! exactly one stem and an optional suffix. This crate does not decide how a
//! word should be split; it validates parts that a caller has already
//! classified and composes them into a single surface form.
//!
//! # Architecture
//!
//! - [`character`] -- Whitespace classification shared by every validator
//! - [`text`] -- [`Text`], a non-empty, non-blank immutable string
//! - [`word_part`] -- [`WordPart`] (whitespace-free text) and
//!   [`TypedWordPart`] (a part tagged with a [`PartRole`])
//! - [`word`] -- [`Word`], an ordered prefix/stem/suffix composition
//!
//! # Example
//!
//! ```
//! use kartuli_core::{TypedWordPart, Word};
//!
//! let word = Word::new(&[
//!     TypedWordPart::prefix("da")?,
//!     TypedWordPart::stem("k'et'")?,
//!     TypedWordPart::suffix("eb")?,
//! ])?;
//! assert_eq!(word.as_str(), "dak'et'eb");
//! # Ok::<(), kartuli_core::MorphError>(())
//! ```
//!
//! # Features
//!
//! - `serde` -- `Serialize`/`Deserialize` for the value types. Deserializing
//!   re-runs construction-time validation.
//! - `tracing` -- `debug` events when a [`Word`] is rejected.

pub mod character;
pub mod text;
pub mod word;
pub mod word_part;

pub use text::Text;
pub use word::Word;
pub use word_part::{PartRole, TypedWordPart, WordPart};

/// Error type for text and word construction.
///
/// Every variant is a validation failure reported at the point of the
/// invalid operation. Nothing is retried or recovered inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    #[error("text must not be empty or consist only of whitespace")]
    EmptyOrWhitespaceInput,
    #[error("word part {text:?} must not contain whitespace")]
    WhitespaceInPart { text: String },
    #[error("a word requires exactly one stem, found {found}")]
    StemCountInvalid { found: usize },
    #[error(
        "word parts must be ordered prefix, stem, suffix \
         (prefix at {prefix:?}, stem at {stem}, suffix at {suffix:?})"
    )]
    PartOrderInvalid {
        prefix: Option<usize>,
        stem: usize,
        suffix: Option<usize>,
    },
    #[error("{text:?} does not end with {suffix:?}")]
    SuffixNotPresent { text: String, suffix: String },
    #[error("{text:?} does not start with {prefix:?}")]
    PrefixNotPresent { text: String, prefix: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_input() {
        let err = MorphError::WhitespaceInPart {
            text: "da k".to_string(),
        };
        assert_eq!(err.to_string(), "word part \"da k\" must not contain whitespace");

        let err = MorphError::StemCountInvalid { found: 2 };
        assert_eq!(err.to_string(), "a word requires exactly one stem, found 2");

        let err = MorphError::SuffixNotPresent {
            text: "k'et'eb".to_string(),
            suffix: "ad".to_string(),
        };
        assert_eq!(err.to_string(), "\"k'et'eb\" does not end with \"ad\"");
    }

    #[test]
    fn order_error_reports_positions() {
        let err = MorphError::PartOrderInvalid {
            prefix: None,
            stem: 1,
            suffix: Some(0),
        };
        assert_eq!(
            err.to_string(),
            "word parts must be ordered prefix, stem, suffix \
             (prefix at None, stem at 1, suffix at Some(0))"
        );
    }

    #[test]
    fn value_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Text>();
        assert_send_sync::<WordPart>();
        assert_send_sync::<TypedWordPart>();
        assert_send_sync::<Word>();
        assert_send_sync::<MorphError>();
    }
}

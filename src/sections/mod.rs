//! Password weakness sections
//!
//! Each section inspects one aspect of the password and reports zero or more
//! findings. The evaluator runs them in a fixed order, so the resulting
//! message list is deterministic for a given password and word list.

mod length;
mod pattern;
mod variety;
mod wordlist;

pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::{CharClasses, character_variety_section};
pub use wordlist::wordlist_section;

use secrecy::SecretString;

use crate::wordlist::WordLists;

/// A human-readable weakness, optionally tagged with the structural pattern
/// that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub pattern: Option<&'static str>,
}

impl Finding {
    pub fn weakness(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pattern: None,
        }
    }

    pub fn pattern(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pattern: Some(id),
        }
    }
}

/// Findings of a single section, in detection order. Empty means it passed.
pub type SectionResult = Vec<Finding>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &WordLists) -> SectionResult;

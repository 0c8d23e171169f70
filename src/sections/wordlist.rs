//! Word-list section - flags known passwords, names, words and brands.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};
use crate::wordlist::{CategoryKind, WordLists};

/// Looks every word-list entry up as a case-insensitive substring.
///
/// Categories without a message template match silently.
pub fn wordlist_section(password: &SecretString, words: &WordLists) -> SectionResult {
    let lowered = password.expose_secret().to_lowercase();

    words
        .matches(&lowered)
        .filter_map(|(category, word)| {
            let message = match category.kind()? {
                CategoryKind::CommonPasswords => {
                    format!("'{word}' is one of the most commonly used passwords 😱")
                }
                CategoryKind::CommonNames => format!("Using names like '{word}' makes it easy to guess 👤"),
                CategoryKind::CommonWords => format!("The word '{word}' appears in dictionary attacks 📚"),
                CategoryKind::Companies => format!("Company names like '{word}' are easy to guess 🏢"),
                CategoryKind::KeyboardPatterns => {
                    "Keyboard patterns are the first thing hackers try 🎹".to_string()
                }
            };
            Some(Finding::weakness(message))
        })
        .collect()
}

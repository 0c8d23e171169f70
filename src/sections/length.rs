//! Length section - flags short passwords.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};
use crate::wordlist::WordLists;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Checks the password length in characters.
///
/// # Returns
/// - a "too short" finding below 8 characters
/// - a "could be longer" finding for 8 to 11 characters
/// - nothing from 12 characters up
pub fn length_section(password: &SecretString, _words: &WordLists) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len < MIN_LENGTH {
        vec![Finding::weakness("Too short! Even your pet could guess this 🐕")]
    } else if len < RECOMMENDED_LENGTH {
        vec![Finding::weakness("A bit longer would be safer 📏")]
    } else {
        Vec::new()
    }
}

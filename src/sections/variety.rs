//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};
use crate::wordlist::WordLists;

/// Special characters that earn the diversity bonus when scoring.
pub const SCORED_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Which character classes a password contains.
///
/// `has_symbol` is true for any non-ASCII-alphanumeric character, while
/// `has_scored_special` only counts [`SCORED_SPECIALS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub has_scored_special: bool,
}

impl CharClasses {
    pub fn of(pwd: &str) -> Self {
        let mut classes = Self::default();
        for c in pwd.chars() {
            classes.has_upper |= c.is_ascii_uppercase();
            classes.has_lower |= c.is_ascii_lowercase();
            classes.has_digit |= c.is_ascii_digit();
            classes.has_symbol |= !c.is_ascii_alphanumeric();
            classes.has_scored_special |= SCORED_SPECIALS.contains(c);
        }
        classes
    }

    /// Classes counted for the score: upper, lower, digit and scored special.
    pub fn scored_count(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_scored_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Classes counted for badges: upper, lower, digit and any symbol.
    pub fn badge_count(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_symbol]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Reports every missing character class, one finding each.
pub fn character_variety_section(password: &SecretString, _words: &WordLists) -> SectionResult {
    let classes = CharClasses::of(password.expose_secret());

    [
        (classes.has_upper, "Add some UPPERCASE letters for variety 🔠"),
        (classes.has_lower, "Add some lowercase letters for variety 📝"),
        (classes.has_digit, "Numbers make your password stronger 🔢"),
        (classes.has_symbol, "Special characters add extra protection #@!"),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, message)| Finding::weakness(message))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> Vec<String> {
        character_variety_section(&SecretString::new(pwd.to_string().into()), &WordLists::default())
            .into_iter()
            .map(|f| f.message)
            .collect()
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = check("lowercase123!");
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("UPPERCASE"));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = check("UPPERCASE123!");
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("lowercase"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = check("NoNumbers!");
        assert_eq!(result, vec!["Numbers make your password stronger 🔢"]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = check("NoSpecial123");
        assert_eq!(result, vec!["Special characters add extra protection #@!"]);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert!(check("HasAll123!@#").is_empty());
    }

    #[test]
    fn test_variety_section_empty_reports_all_four() {
        assert_eq!(check("").len(), 4);
    }

    #[test]
    fn test_char_classes_scored_vs_symbol() {
        // '~' is a symbol but not one of the scored specials
        let classes = CharClasses::of("Abc1~");
        assert!(classes.has_symbol);
        assert!(!classes.has_scored_special);
        assert_eq!(classes.scored_count(), 3);
        assert_eq!(classes.badge_count(), 4);

        let classes = CharClasses::of("Abc1!");
        assert_eq!(classes.scored_count(), 4);
        assert_eq!(classes.badge_count(), 4);
    }

    #[test]
    fn test_char_classes_non_ascii_is_symbol() {
        let classes = CharClasses::of("é");
        assert!(classes.has_symbol);
        assert!(!classes.has_lower);
    }
}

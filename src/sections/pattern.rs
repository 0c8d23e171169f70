//! Pattern analysis section - detects repeats, digit runs and years.

use secrecy::{ExposeSecret, SecretString};

use super::{Finding, SectionResult};
use crate::wordlist::WordLists;

pub const REPEATED_CHARACTERS: &str = "repeated_characters";
pub const SEQUENTIAL_NUMBERS: &str = "sequential_numbers";
pub const YEAR: &str = "year";

const DIGIT_RUNS: [&str; 8] = ["012", "123", "234", "345", "456", "567", "678", "789"];

/// Analyzes the password for structural patterns.
///
/// Each check is independent and reports at most once:
/// - three or more identical consecutive characters
/// - an ascending three-digit run (`012` through `789`)
/// - a `19xx` or `20xx` year
pub fn pattern_analysis_section(password: &SecretString, _words: &WordLists) -> SectionResult {
    let pwd = password.expose_secret();
    let chars: Vec<char> = pwd.chars().collect();
    let mut findings = Vec::new();

    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        findings.push(Finding::pattern(
            REPEATED_CHARACTERS,
            "Repeated characters make your password weaker 🔁",
        ));
    }

    if DIGIT_RUNS.iter().any(|run| pwd.contains(run)) {
        findings.push(Finding::pattern(
            SEQUENTIAL_NUMBERS,
            "Sequential numbers are too obvious 1️⃣2️⃣3️⃣",
        ));
    }

    let has_year = chars.windows(4).any(|w| {
        matches!((w[0], w[1]), ('1', '9') | ('2', '0')) && w[2].is_ascii_digit() && w[3].is_ascii_digit()
    });
    if has_year {
        findings.push(Finding::pattern(
            YEAR,
            "Using years is risky - especially birth years 📅",
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        pattern_analysis_section(&SecretString::new(pwd.to_string().into()), &WordLists::default())
    }

    fn patterns(pwd: &str) -> Vec<&'static str> {
        check(pwd).into_iter().filter_map(|f| f.pattern).collect()
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let result = check("aaaBcd");
        assert_eq!(result.len(), 1);
        assert!(result[0].message.contains("Repeated"));
        assert_eq!(result[0].pattern, Some(REPEATED_CHARACTERS));
    }

    #[test]
    fn test_pattern_section_two_repeats_not_flagged() {
        assert!(patterns("aabbcc").is_empty());
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        assert_eq!(patterns("password123"), vec![SEQUENTIAL_NUMBERS]);
        assert_eq!(patterns("x789y"), vec![SEQUENTIAL_NUMBERS]);
    }

    #[test]
    fn test_pattern_section_descending_digits_not_flagged() {
        assert!(patterns("x321y").is_empty());
    }

    #[test]
    fn test_pattern_section_years() {
        assert_eq!(patterns("born1987!"), vec![YEAR]);
        assert_eq!(patterns("x2024"), vec![YEAR]);
        assert!(patterns("x1800").is_empty());
    }

    #[test]
    fn test_pattern_section_order_is_fixed() {
        // repeats, then runs, then years
        assert_eq!(
            patterns("1999000123"),
            vec![REPEATED_CHARACTERS, SEQUENTIAL_NUMBERS, YEAR]
        );
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert!(check("Rand0mPass!@#Word").is_empty());
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert!(check("ab").is_empty());
        assert!(check("").is_empty());
    }
}

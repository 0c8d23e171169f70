//! Password strength evaluator - weakness explanation and score aggregation.

use secrecy::{ExposeSecret, SecretString};

use crate::badges::{BadgeInputs, generate_badges};
use crate::breach::BreachSource;
use crate::entropy::calculate_entropy;
use crate::feedback::{generate_roast, generate_suggestions};
use crate::sections::{
    CharClasses, Section, character_variety_section, length_section, pattern_analysis_section,
    wordlist_section,
};
use crate::types::{AnalysisResult, Tier};
use crate::wordlist::WordLists;

const RECOMMENDED_LENGTH: usize = 12;
const LENGTH_BONUS: f64 = 20.0;
const CLASS_BONUS: f64 = 10.0;
const MAX_ENTROPY_BONUS: f64 = 40.0;
const MAX_BREACH_PENALTY: u64 = 30;

/// Ordered weakness messages plus the structural patterns behind some of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    pub weaknesses: Vec<String>,
    pub patterns_found: Vec<String>,
}

/// Runs every section in order and collects their findings.
///
/// Order: length, word lists, structural patterns, character variety.
pub fn explain_weakness(password: &SecretString, words: &WordLists) -> Explanation {
    let sections: [(&str, Section); 4] = [
        ("length", length_section),
        ("wordlist", wordlist_section),
        ("pattern", pattern_analysis_section),
        ("variety", character_variety_section),
    ];

    let mut explanation = Explanation::default();
    for (_section_name, section_fn) in sections {
        let findings = section_fn(password, words);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {} reported {} finding(s)", _section_name, findings.len());

        for finding in findings {
            if let Some(pattern) = finding.pattern {
                explanation.patterns_found.push(pattern.to_string());
            }
            explanation.weaknesses.push(finding.message);
        }
    }
    explanation
}

/// Scores a password given an already known breach count.
///
/// Score starts at 0, then:
/// - +20 for 12 characters or more
/// - +10 per scored character class (max 40)
/// - + entropy / 2, capped at 40
/// - - min(30, breaches) when breached
///
/// and is finally clamped to `[0, 100]`.
pub fn evaluate(password: &SecretString, words: &WordLists, breaches: u64) -> AnalysisResult {
    let pwd = password.expose_secret();
    let pwd_len = pwd.chars().count();

    let Explanation {
        mut weaknesses,
        patterns_found,
    } = explain_weakness(password, words);
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 0.0;

    if pwd_len >= RECOMMENDED_LENGTH {
        score += LENGTH_BONUS;
    } else {
        feedback.push(format!("Password should be at least {RECOMMENDED_LENGTH} characters"));
        suggestions.push(format!("Add {} more characters", RECOMMENDED_LENGTH - pwd_len));
    }

    let classes = CharClasses::of(pwd);
    score += classes.scored_count() as f64 * CLASS_BONUS;

    let entropy = calculate_entropy(pwd);
    score += (entropy / 2.0).min(MAX_ENTROPY_BONUS);

    if breaches > 0 {
        score -= breaches.min(MAX_BREACH_PENALTY) as f64;
        weaknesses.push(format!("Found in {breaches} data breaches! 😱"));
    }

    let score = score.clamp(0.0, 100.0);
    let tier = Tier::from_score(score);
    suggestions.extend(generate_suggestions(score, &patterns_found));

    let badges = generate_badges(&BadgeInputs {
        length: pwd_len,
        entropy,
        char_classes: classes.badge_count(),
        breaches,
        patterns_found: &patterns_found,
    });

    AnalysisResult {
        score,
        tier,
        emoji_rating: tier.emoji(),
        entropy,
        breaches,
        weaknesses,
        patterns_found,
        feedback,
        suggestions,
        roast: generate_roast(score),
        badges,
    }
}

/// Looks the password up in `breach_source` and scores it.
///
/// The lookup never fails; an unavailable breach source counts as zero breaches.
pub async fn analyze_password(
    password: &SecretString,
    words: &WordLists,
    breach_source: &dyn BreachSource,
) -> AnalysisResult {
    let breaches = breach_source.breach_count(password).await;
    let analysis = evaluate(password, words, breaches);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password analyzed: score={:.1} tier={} breaches={}",
        analysis.score,
        analysis.tier,
        analysis.breaches
    );

    analysis
}

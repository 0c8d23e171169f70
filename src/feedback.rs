//! Roasts and improvement suggestions.

use rand::seq::SliceRandom;

const WEAK_ROASTS: &[&str] = &[
    "Did you fall asleep on your keyboard? 😴",
    "Even my grandma could guess this! 👵",
    "Password123? More like Hackme123! 🎯",
    "Are you trying to get hacked? Because that's how you get hacked! 🎣",
    "This password is about as secure as a chocolate padlock! 🍫",
];

const MEDIUM_ROASTS: &[&str] = &[
    "Not terrible, but not winning any security awards either. 🥉",
    "Meh, I've seen better passwords in phishing emails. 🎣",
    "You're trying, and that's what counts... I guess. 🤷",
    "Almost secure... like a door with three locks but one is broken. 🚪",
];

const STRONG_ROASTS: &[&str] = &[
    "Okay showoff, we get it - you know what password hygiene is! 🔐",
    "Finally, a password that doesn't make me cry! 😌",
    "Your password game is stronger than my coffee! ☕",
    "This password is like Fort Knox... if Fort Knox had emojis! 🏰",
];

/// Roast pool for a score: strong from 80, medium from 40, weak below.
pub fn roast_pool(score: f64) -> &'static [&'static str] {
    if score >= 80.0 {
        STRONG_ROASTS
    } else if score >= 40.0 {
        MEDIUM_ROASTS
    } else {
        WEAK_ROASTS
    }
}

/// Picks a roast line for the score.
///
/// Purely cosmetic, so the thread-local RNG is fine here.
pub fn generate_roast(score: f64) -> String {
    roast_pool(score)
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
        .to_string()
}

/// General advice for passwords scoring under 60, plus a pattern hint when
/// structural patterns were detected.
pub fn generate_suggestions(score: f64, patterns_found: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    if score < 60.0 {
        suggestions.extend(
            [
                "Use a longer password (at least 12 characters)",
                "Mix uppercase and lowercase letters",
                "Add numbers and special characters",
                "Avoid common patterns and keyboard sequences",
            ]
            .map(String::from),
        );
    }
    if !patterns_found.is_empty() {
        suggestions.push(
            "Avoid using common patterns like keyboard sequences or repeated characters".to_string(),
        );
    }
    suggestions
}

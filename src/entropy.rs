//! Entropy calculator.

use std::collections::HashMap;

/// Shannon entropy of the character distribution, scaled by the length.
///
/// This is `-sum(p * log2(p)) * len`, an aggregate "total randomness"
/// figure rather than per-symbol entropy. Length is counted in `char`s.
/// The empty string yields `0.0`.
pub fn calculate_entropy(password: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut length = 0usize;
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
        length += 1;
    }

    if length == 0 {
        return 0.0;
    }

    let total = length as f64;
    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single repeated symbol sums to -0.0
    (entropy * total).max(0.0)
}

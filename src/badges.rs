//! Badge generator.
//!
//! Length, entropy and character-class badges are tiered: each category
//! awards only its highest qualifying badge. The breach, pattern and
//! capstone badges are independent. Badges are always emitted in the same
//! order.

use crate::types::{Badge, Rarity};

const FORTRESS_MASTER: Badge = Badge {
    icon: "🏰",
    name: "Fortress Master",
    description: "Used 20+ characters",
    rarity: Rarity::Legendary,
};
const TOWER_BUILDER: Badge = Badge {
    icon: "🗼",
    name: "Tower Builder",
    description: "Used 16+ characters",
    rarity: Rarity::Epic,
};
const SOLID_FOUNDATION: Badge = Badge {
    icon: "🏠",
    name: "Solid Foundation",
    description: "Used 12+ characters",
    rarity: Rarity::Rare,
};
const CHAOS_LORD: Badge = Badge {
    icon: "⚡",
    name: "Chaos Lord",
    description: "Extremely high password entropy",
    rarity: Rarity::Legendary,
};
const ENTROPY_MASTER: Badge = Badge {
    icon: "🌪️",
    name: "Entropy Master",
    description: "Very high password entropy",
    rarity: Rarity::Epic,
};
const ENTROPY_ADEPT: Badge = Badge {
    icon: "🎯",
    name: "Entropy Adept",
    description: "Good password entropy",
    rarity: Rarity::Rare,
};
const CHARACTER_ARTIST: Badge = Badge {
    icon: "🎨",
    name: "Character Artist",
    description: "Perfect mix of all character types",
    rarity: Rarity::Epic,
};
const MIX_MASTER: Badge = Badge {
    icon: "🔠",
    name: "Mix Master",
    description: "Good variety of character types",
    rarity: Rarity::Rare,
};
const UNBREAKABLE: Badge = Badge {
    icon: "🛡️",
    name: "Unbreakable",
    description: "Not found in any known breaches",
    rarity: Rarity::Epic,
};
const PATTERN_BREAKER: Badge = Badge {
    icon: "🌟",
    name: "Pattern Breaker",
    description: "No predictable patterns detected",
    rarity: Rarity::Rare,
};
const PASSWORD_ROYALTY: Badge = Badge {
    icon: "👑",
    name: "Password Royalty",
    description: "Achieved excellence in all security aspects",
    rarity: Rarity::Legendary,
};

/// Everything the badge rules look at.
#[derive(Debug, Clone, Copy)]
pub struct BadgeInputs<'a> {
    /// Length in characters.
    pub length: usize,
    pub entropy: f64,
    /// Out of upper, lower, digit and any non-alphanumeric.
    pub char_classes: usize,
    pub breaches: u64,
    pub patterns_found: &'a [String],
}

pub fn generate_badges(inputs: &BadgeInputs<'_>) -> Vec<Badge> {
    let mut badges = Vec::new();

    if inputs.length >= 20 {
        badges.push(FORTRESS_MASTER);
    } else if inputs.length >= 16 {
        badges.push(TOWER_BUILDER);
    } else if inputs.length >= 12 {
        badges.push(SOLID_FOUNDATION);
    }

    if inputs.entropy >= 80.0 {
        badges.push(CHAOS_LORD);
    } else if inputs.entropy >= 60.0 {
        badges.push(ENTROPY_MASTER);
    } else if inputs.entropy >= 40.0 {
        badges.push(ENTROPY_ADEPT);
    }

    match inputs.char_classes {
        4 => badges.push(CHARACTER_ARTIST),
        3 => badges.push(MIX_MASTER),
        _ => {}
    }

    if inputs.breaches == 0 {
        badges.push(UNBREAKABLE);
    }

    let no_patterns = inputs.patterns_found.is_empty();
    if no_patterns {
        badges.push(PATTERN_BREAKER);
    }

    if inputs.length >= 16 && inputs.entropy >= 60.0 && inputs.char_classes == 4 && no_patterns {
        badges.push(PASSWORD_ROYALTY);
    }

    badges
}

//! Result types shared by the evaluator, the badge generator and the HTTP layer.

use serde::{Serialize, Serializer};

/// Discrete strength label selected from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    NeedsWork,
    CouldBeBetter,
    Good,
    Strong,
    SuperStrong,
}

impl Tier {
    /// Maps a clamped score to its tier. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Tier::SuperStrong
        } else if score >= 60.0 {
            Tier::Strong
        } else if score >= 40.0 {
            Tier::Good
        } else if score >= 20.0 {
            Tier::CouldBeBetter
        } else {
            Tier::NeedsWork
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::SuperStrong => "Super Strong",
            Tier::Strong => "Strong",
            Tier::Good => "Good",
            Tier::CouldBeBetter => "Could Be Better",
            Tier::NeedsWork => "Needs Work",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::SuperStrong => "🔒",
            Tier::Strong => "🔐",
            Tier::Good => "🔑",
            Tier::CouldBeBetter => "⚠️",
            Tier::NeedsWork => "🔓",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Rare,
    Epic,
    Legendary,
}

/// Cosmetic achievement derived from an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
}

/// Full outcome of a password check.
///
/// Field names follow the JSON contract consumed by the browser extension,
/// hence `user_friendly_score` for the tier and `hibp_breaches` for the
/// breach count.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Clamped to `[0, 100]`.
    pub score: f64,
    #[serde(rename = "user_friendly_score")]
    pub tier: Tier,
    pub emoji_rating: &'static str,
    pub entropy: f64,
    #[serde(rename = "hibp_breaches")]
    pub breaches: u64,
    pub weaknesses: Vec<String>,
    pub patterns_found: Vec<String>,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub roast: String,
    pub badges: Vec<Badge>,
}

/// Output of one of the password generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeneratedPassword {
    /// Serialized as `pswd`, the key the browser extension reads.
    Plain {
        #[serde(rename = "pswd")]
        password: String,
    },
    Passkey { passkey: String, qr_code: String },
}

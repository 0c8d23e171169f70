//! Gamified password strength scoring and password generation
//!
//! This library scores passwords (entropy, breach lookup, word lists,
//! structural patterns), explains their weaknesses with badges and roasts,
//! and generates random, memorable, custom and passkey-style secrets. With
//! the `server` feature it also exposes all of this over HTTP.
//!
//! # Features
//!
//! - `server` (default): axum HTTP service and the `pwd-arena` binary
//! - `tracing`: Enables logging via tracing crate (implied by `server`)
//!
//! # Environment Variables
//!
//! See [`AppConfig::from_env`]. The most relevant one for library users is
//! `PWD_WORDLIST_PATH` (default: `./common_words.json`), written with the
//! built-in lists on first start when absent.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_arena::{WordLists, evaluate};
//! use secrecy::SecretString;
//!
//! // Load word lists once at startup and pass them around
//! let words = WordLists::load_or_create("./common_words.json").expect("Failed to load word lists");
//!
//! // Score a password with a known breach count
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = evaluate(&password, &words, 0);
//!
//! println!("Score: {:.0}", analysis.score);
//! println!("Tier: {} {}", analysis.tier, analysis.emoji_rating);
//! ```

use thiserror::Error;

// Internal modules
mod badges;
mod breach;
mod config;
mod entropy;
mod evaluator;
mod feedback;
mod generator;
mod qr;
mod sections;
mod types;
mod wordlist;

#[cfg(feature = "server")]
mod logging;
#[cfg(feature = "server")]
pub mod server;

// Public API
pub use badges::{BadgeInputs, generate_badges};
pub use breach::{BreachError, BreachSource, HibpClient, hash_prefix_suffix, parse_range_response};
pub use config::{AppConfig, ConfigError};
pub use entropy::calculate_entropy;
pub use evaluator::{Explanation, analyze_password, evaluate, explain_weakness};
pub use feedback::{generate_roast, generate_suggestions};
pub use generator::{
    CustomOptions, GenerateError, GenerateRequest, generate, generate_custom_password,
    generate_memorable_password, generate_passkey, generate_random_password,
};
pub use qr::{QrRenderError, render_qr_png, render_qr_png_base64};
pub use types::{AnalysisResult, Badge, GeneratedPassword, Rarity, Tier};
pub use wordlist::{CategoryKind, WordCategory, WordListError, WordLists};

#[cfg(feature = "server")]
pub use logging::init_tracing;

/// Startup failures of the service.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error(transparent)]
    Breach(#[from] BreachError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

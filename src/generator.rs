//! Password generators
//!
//! Four independent, stateless generators. Every character or byte that ends
//! up in a generated secret is drawn from the operating system CSPRNG
//! ([`OsRng`]). The thread-local RNG is used only for cosmetic choices: which
//! adjective and noun a memorable password uses, and where a custom word is
//! spliced into its random filler.

use data_encoding::BASE64;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::qr::{QrRenderError, render_qr_png_base64};
use crate::types::GeneratedPassword;

pub const DEFAULT_LENGTH: usize = 16;
/// Upper bound on any requested length.
pub const MAX_LENGTH: usize = 1024;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const ADJECTIVES: [&str; 5] = ["Happy", "Brave", "Clever", "Swift", "Bright"];
const NOUNS: [&str; 5] = ["Dragon", "River", "Mountain", "Forest", "Star"];
const MEMORABLE_SPECIALS: &[u8] = b"!@#$%^&*";

const PASSKEY_BYTES: usize = 32;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid generate request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
    #[error("Requested length {requested} exceeds the maximum of {max}")]
    LengthTooLarge { requested: usize, max: usize },
    #[error("Failed to render passkey QR code: {0}")]
    Qr(#[from] QrRenderError),
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn enabled() -> bool {
    true
}

/// Parameters of the custom generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomOptions {
    #[serde(default)]
    pub custom_word: String,
    #[serde(default = "enabled")]
    pub use_lowercase: bool,
    #[serde(default = "enabled")]
    pub use_uppercase: bool,
    #[serde(default = "enabled")]
    pub use_numbers: bool,
    #[serde(default = "enabled")]
    pub use_symbols: bool,
    #[serde(default = "default_length")]
    pub length: usize,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            custom_word: String::new(),
            use_lowercase: true,
            use_uppercase: true,
            use_numbers: true,
            use_symbols: true,
            length: DEFAULT_LENGTH,
        }
    }
}

impl CustomOptions {
    /// Selected classes, falling back to ASCII letters when none is selected.
    pub fn charset(&self) -> Vec<u8> {
        let mut charset = Vec::new();
        if self.use_lowercase {
            charset.extend_from_slice(LOWERCASE);
        }
        if self.use_uppercase {
            charset.extend_from_slice(UPPERCASE);
        }
        if self.use_numbers {
            charset.extend_from_slice(DIGITS);
        }
        if self.use_symbols {
            charset.extend_from_slice(PUNCTUATION);
        }
        if charset.is_empty() {
            charset.extend_from_slice(LOWERCASE);
            charset.extend_from_slice(UPPERCASE);
        }
        charset
    }
}

/// Which generator to run, with its parameters.
///
/// Deserialized from `{"type": "...", ...}`; see [`GenerateRequest::from_json`]
/// for the default when `type` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GenerateRequest {
    Random {
        #[serde(default = "default_length")]
        length: usize,
    },
    Memorable,
    Custom(CustomOptions),
    Passkey,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        GenerateRequest::Random {
            length: DEFAULT_LENGTH,
        }
    }
}

impl GenerateRequest {
    /// Parses a request body, treating a missing `type` (or an empty body) as `random`.
    pub fn from_json(body: Value) -> Result<Self, GenerateError> {
        let body = match body {
            Value::Null => return Ok(Self::default()),
            Value::Object(mut map) => {
                map.entry("type").or_insert_with(|| Value::String("random".to_string()));
                Value::Object(map)
            }
            other => other,
        };
        let request: Self = serde_json::from_value(body)?;
        request.validate()?;
        Ok(request)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GenerateRequest::Random { .. } => "random",
            GenerateRequest::Memorable => "memorable",
            GenerateRequest::Custom(_) => "custom",
            GenerateRequest::Passkey => "passkey",
        }
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        let requested = match self {
            GenerateRequest::Random { length } => *length,
            GenerateRequest::Custom(options) => options.length,
            GenerateRequest::Memorable | GenerateRequest::Passkey => return Ok(()),
        };
        if requested > MAX_LENGTH {
            return Err(GenerateError::LengthTooLarge {
                requested,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }
}

/// Runs the generator selected by `request`.
pub fn generate(request: &GenerateRequest) -> Result<GeneratedPassword, GenerateError> {
    request.validate()?;

    let generated = match request {
        GenerateRequest::Random { length } => GeneratedPassword::Plain {
            password: generate_random_password(*length),
        },
        GenerateRequest::Memorable => GeneratedPassword::Plain {
            password: generate_memorable_password(),
        },
        GenerateRequest::Custom(options) => GeneratedPassword::Plain {
            password: generate_custom_password(options),
        },
        GenerateRequest::Passkey => generate_passkey()?,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!("generated {} password", request.kind());

    Ok(generated)
}

/// `len` characters drawn uniformly from `charset` with the OS CSPRNG.
fn secure_fill(charset: &[u8], len: usize) -> String {
    if charset.is_empty() {
        return String::new();
    }
    let mut rng = OsRng;
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Uniform over ASCII letters, digits and punctuation.
pub fn generate_random_password(length: usize) -> String {
    let alphabet = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat();
    secure_fill(&alphabet, length)
}

/// Adjective + special character + noun + three-digit number, e.g. `Brave#River417`.
pub fn generate_memorable_password() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let special = MEMORABLE_SPECIALS[rng.gen_range(0..MEMORABLE_SPECIALS.len())] as char;
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let number: u16 = rng.gen_range(100..=999);
    format!("{adjective}{special}{noun}{number}")
}

/// Splices the custom word into random filler so the result is exactly
/// `options.length` characters.
///
/// A word longer than the target length is truncated to it.
pub fn generate_custom_password(options: &CustomOptions) -> String {
    let word: String = options.custom_word.chars().take(options.length).collect();
    let word_len = word.chars().count();
    let filler_len = options.length - word_len;
    let filler = secure_fill(&options.charset(), filler_len);

    let insert_at = if word.is_empty() {
        0
    } else {
        rand::thread_rng().gen_range(0..=filler_len)
    };

    // Filler is ASCII, so char and byte offsets agree
    let (head, tail) = filler.split_at(insert_at);
    format!("{head}{word}{tail}")
}

/// 32 random bytes as padded base64, plus a base64 PNG QR code of that text.
pub fn generate_passkey() -> Result<GeneratedPassword, GenerateError> {
    let mut bytes = [0u8; PASSKEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    let passkey = BASE64.encode(&bytes);
    let qr_code = render_qr_png_base64(&passkey)?;
    Ok(GeneratedPassword::Passkey { passkey, qr_code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || PUNCTUATION.contains(&(c as u8))
    }

    #[test]
    fn test_random_password_length_and_alphabet() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert!(pwd.chars().all(is_allowed), "unexpected char in {pwd:?}");
    }

    #[test]
    fn test_random_password_zero_length() {
        assert_eq!(generate_random_password(0), "");
    }

    #[test]
    fn test_random_passwords_differ() {
        assert_ne!(generate_random_password(32), generate_random_password(32));
    }

    #[test]
    fn test_memorable_password_shape() {
        for _ in 0..20 {
            let pwd = generate_memorable_password();
            let adjective = ADJECTIVES.iter().find(|a| pwd.starts_with(**a)).expect("adjective prefix");
            let rest = &pwd[adjective.len()..];
            let special = rest.chars().next().unwrap();
            assert!(MEMORABLE_SPECIALS.contains(&(special as u8)));
            let rest = &rest[1..];
            let noun = NOUNS.iter().find(|n| rest.starts_with(**n)).expect("noun");
            let number: u16 = rest[noun.len()..].parse().expect("numeric suffix");
            assert!((100..=999).contains(&number));
        }
    }

    #[test]
    fn test_custom_password_contains_word() {
        let options = CustomOptions {
            custom_word: "cat".to_string(),
            length: 10,
            ..CustomOptions::default()
        };
        for _ in 0..20 {
            let pwd = generate_custom_password(&options);
            assert_eq!(pwd.chars().count(), 10);
            assert!(pwd.contains("cat"), "missing word in {pwd:?}");
        }
    }

    #[test]
    fn test_custom_password_truncates_long_word() {
        let options = CustomOptions {
            custom_word: "supercalifragilistic".to_string(),
            length: 5,
            ..CustomOptions::default()
        };
        assert_eq!(generate_custom_password(&options), "super");
    }

    #[test]
    fn test_custom_password_digits_only() {
        let options = CustomOptions {
            custom_word: String::new(),
            use_lowercase: false,
            use_uppercase: false,
            use_numbers: true,
            use_symbols: false,
            length: 12,
        };
        let pwd = generate_custom_password(&options);
        assert_eq!(pwd.len(), 12);
        assert!(pwd.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_custom_password_no_class_falls_back_to_letters() {
        let options = CustomOptions {
            custom_word: "x".to_string(),
            use_lowercase: false,
            use_uppercase: false,
            use_numbers: false,
            use_symbols: false,
            length: 20,
        };
        let pwd = generate_custom_password(&options);
        assert_eq!(pwd.len(), 20);
        assert!(pwd.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_custom_password_non_ascii_word() {
        let options = CustomOptions {
            custom_word: "café".to_string(),
            length: 8,
            ..CustomOptions::default()
        };
        let pwd = generate_custom_password(&options);
        assert_eq!(pwd.chars().count(), 8);
        assert!(pwd.contains("café"));
    }

    #[test]
    fn test_passkey() {
        let GeneratedPassword::Passkey { passkey, qr_code } = generate_passkey().unwrap() else {
            panic!("expected passkey variant");
        };
        assert_eq!(BASE64.decode(passkey.as_bytes()).unwrap().len(), PASSKEY_BYTES);
        assert!(!qr_code.is_empty());
        assert!(BASE64.decode(qr_code.as_bytes()).is_ok());
    }

    #[test]
    fn test_request_defaults_to_random() {
        assert_eq!(
            GenerateRequest::from_json(json!({})).unwrap(),
            GenerateRequest::Random { length: 16 }
        );
        assert_eq!(
            GenerateRequest::from_json(json!({ "length": 24 })).unwrap(),
            GenerateRequest::Random { length: 24 }
        );
        assert_eq!(GenerateRequest::from_json(Value::Null).unwrap(), GenerateRequest::default());
    }

    #[test]
    fn test_request_variants() {
        assert_eq!(
            GenerateRequest::from_json(json!({ "type": "memorable", "length": 12 })).unwrap(),
            GenerateRequest::Memorable
        );
        assert_eq!(
            GenerateRequest::from_json(json!({ "type": "passkey" })).unwrap(),
            GenerateRequest::Passkey
        );
        assert_eq!(
            GenerateRequest::from_json(json!({
                "type": "custom",
                "custom_word": "cat",
                "use_symbols": false,
                "length": 10
            }))
            .unwrap(),
            GenerateRequest::Custom(CustomOptions {
                custom_word: "cat".to_string(),
                use_symbols: false,
                length: 10,
                ..CustomOptions::default()
            })
        );
    }

    #[test]
    fn test_request_unknown_type_rejected() {
        assert!(matches!(
            GenerateRequest::from_json(json!({ "type": "emoji" })),
            Err(GenerateError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_request_bad_parameters_rejected() {
        assert!(GenerateRequest::from_json(json!({ "length": -3 })).is_err());
        assert!(GenerateRequest::from_json(json!("random")).is_err());
        assert!(matches!(
            GenerateRequest::from_json(json!({ "length": MAX_LENGTH + 1 })),
            Err(GenerateError::LengthTooLarge { .. })
        ));
    }

    #[test]
    fn test_generate_dispatch() {
        let GeneratedPassword::Plain { password } =
            generate(&GenerateRequest::Random { length: 16 }).unwrap()
        else {
            panic!("expected plain variant");
        };
        assert_eq!(password.len(), 16);

        assert!(matches!(
            generate(&GenerateRequest::Passkey).unwrap(),
            GeneratedPassword::Passkey { .. }
        ));
        assert!(generate(&GenerateRequest::Random { length: MAX_LENGTH + 1 }).is_err());
    }
}

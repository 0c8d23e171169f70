//! Word-list store
//!
//! Handles loading the category -> flagged substrings mapping from its JSON
//! side file, writing the built-in defaults out first when the file is absent.
//! A loaded [`WordLists`] is immutable and is handed to the evaluator
//! explicitly rather than living in process-wide state.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Default location of the word-list side file.
pub const DEFAULT_WORDLIST_PATH: &str = "./common_words.json";

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Failed to read word-list file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write default word-list file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Word-list file is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Word-list root must be a JSON object of category -> [words]")]
    NotAnObject,
    #[error("Category '{0}' must be an array of strings")]
    InvalidCategory(String),
}

/// Categories with a dedicated weakness message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Fragments of passwords seen in breach corpora.
    CommonPasswords,
    CommonNames,
    /// Dictionary-attack words.
    CommonWords,
    Companies,
    KeyboardPatterns,
}

impl CategoryKind {
    /// Returns `None` for categories that carry no message template.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "common_passwords" => Some(CategoryKind::CommonPasswords),
            "common_names" => Some(CategoryKind::CommonNames),
            "common_words" => Some(CategoryKind::CommonWords),
            "companies" => Some(CategoryKind::Companies),
            "keyboard_patterns" => Some(CategoryKind::KeyboardPatterns),
            _ => None,
        }
    }
}

/// A named, ordered list of lowercase substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCategory {
    name: String,
    kind: Option<CategoryKind>,
    words: Vec<String>,
}

impl WordCategory {
    /// Builds a category, lowercasing entries and dropping blanks and repeats
    /// while keeping first-seen order.
    pub fn new<N, I, W>(name: N, words: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let name = name.into();
        let mut unique: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !unique.contains(&word) {
                unique.push(word);
            }
        }
        Self {
            kind: CategoryKind::from_name(&name),
            name,
            words: unique,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<CategoryKind> {
        self.kind
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// The full mapping, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordLists {
    categories: Vec<WordCategory>,
}

impl WordLists {
    pub fn new(categories: Vec<WordCategory>) -> Self {
        Self { categories }
    }

    /// The built-in mapping written out when no side file exists.
    pub fn defaults() -> Self {
        Self::new(vec![
            WordCategory::new("common_passwords", ["password", "123456", "qwerty", "letmein", "admin"]),
            WordCategory::new(
                "common_names",
                [
                    "john", "mike", "david", "chris", "peter", "ram", "singh", "michael", "jennifer",
                    "thomas", "jessica", "joshua", "ashley", "matthew", "sarah", "andrew", "amanda",
                    "daniel", "james", "robert", "emma", "william", "olivia", "alexander", "sophia",
                    "ryan", "isabella", "jacob", "emily", "madison", "abigail", "ethan", "ava", "mia",
                    "anthony", "amelia", "christopher", "harper", "evelyn", "dylan", "logan",
                    "elizabeth",
                ],
            ),
            WordCategory::new(
                "common_words",
                [
                    "football", "baseball", "dragon", "master", "monkey", "login", "welcome",
                    "princess", "qwerty", "abc123", "trustno1", "letmein", "iloveyou", "starwars",
                    "sunshine", "admin", "shadow", "ashley", "michael", "mustang", "summer", "hunter",
                    "freedom", "whatever", "123123", "passw0rd", "hello", "qazwsx",
                ],
            ),
            WordCategory::new(
                "companies",
                ["google", "facebook", "twitter", "apple", "microsoft", "amazon"],
            ),
            WordCategory::new(
                "indian_names",
                [
                    "arjun", "rahul", "priya", "neha", "amit", "suresh", "deepak", "kumar", "rajesh",
                    "sanjay", "anita", "meera", "sunita", "kavita", "pradeep", "vijay", "ramesh",
                    "mahesh", "dinesh", "anand", "rajiv", "vivek", "nitin", "pankaj", "manish",
                    "sachin", "rohit", "virat", "dhoni", "kohli", "bumrah", "pandya", "rahane",
                    "pujara", "ashwin", "jadeja", "priyanka", "deepika", "katrina", "alia", "kareena",
                    "aishwarya", "shahrukh", "amir", "salman", "hrithik",
                ],
            ),
            WordCategory::new(
                "indian_cities",
                [
                    "mumbai", "delhi", "bangalore", "hyderabad", "chennai", "kolkata", "pune",
                    "ahmedabad", "jaipur", "lucknow", "kanpur", "nagpur", "indore", "thane", "bhopal",
                    "visakhapatnam", "patna", "vadodara", "ghaziabad", "ludhiana", "agra", "nashik",
                    "faridabad", "meerut", "rajkot", "varanasi", "srinagar", "aurangabad", "dhanbad",
                    "amritsar", "noida", "ranchi", "howrah", "gwalior", "jodhpur", "coimbatore",
                    "vijayawada", "jabalpur", "gurgaon", "guwahati",
                ],
            ),
            WordCategory::new(
                "indian_brands",
                [
                    "tata", "reliance", "infosys", "tcs", "wipro", "hdfc", "icici", "sbi", "airtel",
                    "jio", "maruti", "mahindra", "bajaj", "hero", "tvs", "ashok", "hindustan",
                    "unilever", "itc", "nestle", "amul", "parle", "britannia", "cadbury", "colgate",
                    "dabur", "patanjali", "titan", "tanishq", "kalyan", "bigbazaar", "flipkart",
                    "myntra", "snapdeal", "paytm", "ola", "swiggy", "zomato", "make my trip", "irctc",
                ],
            ),
        ])
    }

    /// Parses the side-file format: a JSON object of category -> array of strings.
    pub fn from_json_str(content: &str) -> Result<Self, WordListError> {
        let root: Value = serde_json::from_str(content)?;
        let Value::Object(map) = root else {
            return Err(WordListError::NotAnObject);
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, value) in map {
            let Value::Array(items) = value else {
                return Err(WordListError::InvalidCategory(name));
            };
            let mut words = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(word) => words.push(word),
                    _ => return Err(WordListError::InvalidCategory(name)),
                }
            }
            categories.push(WordCategory::new(name, words));
        }

        Ok(Self::new(categories))
    }

    pub fn to_json_string(&self) -> Result<String, WordListError> {
        let map: Map<String, Value> = self
            .categories
            .iter()
            .map(|c| {
                let words = c.words.iter().cloned().map(Value::String).collect();
                (c.name.clone(), Value::Array(words))
            })
            .collect();
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    /// Loads the word lists from `path`, writing [`WordLists::defaults`] there
    /// first if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The default file cannot be written
    /// - The file cannot be read
    /// - The content is not a JSON object of string arrays
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();

        if !path.exists() {
            let defaults = Self::defaults();
            std::fs::write(path, defaults.to_json_string()?).map_err(|source| {
                #[cfg(feature = "tracing")]
                tracing::error!("Word-list bootstrap FAILED: cannot write {:?}", path);
                WordListError::WriteError {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

            #[cfg(feature = "tracing")]
            tracing::info!("Word lists written with defaults to {:?}", path);
        }

        let content = std::fs::read_to_string(path).map_err(|source| WordListError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let lists = Self::from_json_str(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Word lists loaded: {} categories, {} words from {:?}",
            lists.categories.len(),
            lists.word_count(),
            path
        );

        Ok(lists)
    }

    pub fn categories(&self) -> &[WordCategory] {
        &self.categories
    }

    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    /// Every (category, word) whose word occurs inside `lowered`.
    ///
    /// `lowered` must already be lowercase; entries are stored lowercase.
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = (&'a WordCategory, &'a str)> + 'a {
        self.categories.iter().flat_map(move |category| {
            category
                .words
                .iter()
                .filter(move |word| lowered.contains(word.as_str()))
                .map(move |word| (category, word.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_load_or_create_writes_defaults_when_missing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("common_words.json");
        assert!(!path.exists());

        let lists = WordLists::load_or_create(&path).expect("Should bootstrap defaults");
        assert!(path.exists());
        assert_eq!(lists, WordLists::defaults());

        // Second load reads the file just written and sees the same mapping
        let reloaded = WordLists::load_or_create(&path).expect("Should reload");
        assert_eq!(reloaded, lists);
    }

    #[test]
    fn test_load_existing_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, r#"{{"companies": ["Acme"], "pets": ["rex"]}}"#).expect("Failed to write");

        let lists = WordLists::load_or_create(temp_file.path()).expect("Should load");
        let names: Vec<&str> = lists.categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["companies", "pets"]);
        assert_eq!(lists.categories()[0].words(), &["acme".to_string()]);
        assert_eq!(lists.categories()[0].kind(), Some(CategoryKind::Companies));
        assert_eq!(lists.categories()[1].kind(), None);
    }

    #[test]
    fn test_category_order_follows_file_order() {
        let lists = WordLists::from_json_str(r#"{"zeta": ["z"], "alpha": ["a"], "mid": ["m"]}"#).unwrap();
        let names: Vec<&str> = lists.categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_words_lowercased_and_deduplicated() {
        let category = WordCategory::new("common_words", ["Dragon", "dragon", "  ", "MASTER", "dragon"]);
        assert_eq!(category.words(), &["dragon".to_string(), "master".to_string()]);
    }

    #[test]
    fn test_invalid_json() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "not json").expect("Failed to write");

        let result = WordLists::load_or_create(temp_file.path());
        assert!(matches!(result, Err(WordListError::ParseError(_))));
    }

    #[test]
    fn test_invalid_category_shape() {
        let result = WordLists::from_json_str(r#"{"companies": "google"}"#);
        assert!(matches!(result, Err(WordListError::InvalidCategory(name)) if name == "companies"));

        let result = WordLists::from_json_str(r#"{"companies": ["google", 3]}"#);
        assert!(matches!(result, Err(WordListError::InvalidCategory(_))));

        let result = WordLists::from_json_str(r#"["google"]"#);
        assert!(matches!(result, Err(WordListError::NotAnObject)));
    }

    #[test]
    fn test_matches_substrings() {
        let lists = WordLists::new(vec![
            WordCategory::new("common_passwords", ["qwerty", "admin"]),
            WordCategory::new("companies", ["apple"]),
        ]);
        let found: Vec<(&str, &str)> = lists
            .matches("myqwertyapple")
            .map(|(c, w)| (c.name(), w))
            .collect();
        assert_eq!(found, vec![("common_passwords", "qwerty"), ("companies", "apple")]);
    }

    #[test]
    fn test_defaults_round_trip_through_json() {
        let defaults = WordLists::defaults();
        let json = defaults.to_json_string().unwrap();
        assert_eq!(WordLists::from_json_str(&json).unwrap(), defaults);
        assert!(defaults.word_count() > 100);
    }
}

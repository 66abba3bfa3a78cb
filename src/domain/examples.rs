//! Core domain models for principle demonstrations
//!
//! Architecture: Rich Domain Models - Examples are immutable records that know their invariants
//! - A PrincipleExample pairs a violating sample with a compliant one
//! - Validation lives on the record, so every entry point enforces the same rules
//! - Errors are local and recoverable; none of them is fatal to the process

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
}

/// Grouping of principles as they are usually taught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipleFamily {
    /// Standalone guidelines such as DRY, KISS and YAGNI
    #[default]
    Foundational,
    /// One of the five SOLID principles
    Solid,
}

impl PrincipleFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foundational => "foundational",
            Self::Solid => "solid",
        }
    }

    /// Parse family from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "foundational" => Some(Self::Foundational),
            "solid" => Some(Self::Solid),
            _ => None,
        }
    }
}

impl fmt::Display for PrincipleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of illustrative code, kept as opaque text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    /// Language tag used for highlighting and inspection
    #[serde(default = "default_language")]
    pub language: String,
    /// The code itself
    pub code: String,
    /// Optional one-line caption shown above the code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl CodeSample {
    /// Create a sample in an arbitrary language
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            caption: None,
        }
    }

    /// Create a Rust sample
    pub fn rust(code: impl Into<String>) -> Self {
        Self::new(default_language(), code)
    }

    /// Attach a caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn is_rust(&self) -> bool {
        self.language.eq_ignore_ascii_case("rust") || self.language.eq_ignore_ascii_case("rs")
    }
}

fn default_language() -> String {
    "rust".to_string()
}

/// One design-principle demonstration: a violating sample, a compliant sample and the lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleExample {
    /// Short identifier, e.g. "DRY" or "SRP"
    pub name: String,
    /// Expanded name, e.g. "Don't Repeat Yourself"
    pub title: String,
    #[serde(default)]
    pub family: PrincipleFamily,
    /// What goes wrong when the principle is ignored
    #[serde(default)]
    pub problem: String,
    pub violating: CodeSample,
    pub compliant: CodeSample,
    /// Why the compliant version is better
    pub rationale: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl PrincipleExample {
    /// Create an example; problem, rationale and key points are attached with the `with_*` methods
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        violating: CodeSample,
        compliant: CodeSample,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            family: PrincipleFamily::default(),
            problem: String::new(),
            violating,
            compliant,
            rationale: String::new(),
            key_points: Vec::new(),
        }
    }

    pub fn in_family(mut self, family: PrincipleFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = problem.into();
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    pub fn with_key_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_points = points.into_iter().map(Into::into).collect();
        self
    }

    /// Check the record invariants: a usable name and a non-empty rationale
    pub fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid(&self.name, "name must not be empty"));
        }

        if !NAME_PATTERN.is_match(&self.name) {
            return Err(CatalogError::invalid(
                &self.name,
                "name must start with a letter and contain only letters, digits, '-' or '_'",
            ));
        }

        if self.rationale.trim().is_empty() {
            return Err(CatalogError::invalid(&self.name, "rationale must not be empty"));
        }

        Ok(())
    }
}

/// Error types raised by catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An entry with this name is already registered
    #[error("Duplicate example name: {name}")]
    DuplicateName { name: String },

    /// No entry with this name exists
    #[error("Example not found: {name}")]
    NotFound { name: String },

    /// Entry breaks a record invariant
    #[error("Invalid example '{name}': {message}")]
    InvalidExample { name: String, message: String },

    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// An external example source could not be loaded
    #[error("Source error in {}: {message}", .path.display())]
    Source { path: PathBuf, message: String },

    /// A code sample could not be parsed
    #[error("Sample error in {caption} at {line}:{column}: {message}")]
    Sample {
        caption: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// A search pattern could not be compiled
    #[error("Invalid search pattern '{pattern}': {message}")]
    Query { pattern: String, message: String },

    /// Output could not be rendered
    #[error("Render error: {message}")]
    Render { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidExample {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Source {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn query(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Query {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

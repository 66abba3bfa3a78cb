//! Configuration loading and management for the principle catalog
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML into catalog choices
//! - Raw YAML structures become a validated CatalogConfig
//! - Defaults are embedded in the domain: every built-in entry, no external sources
//! - Configuration decides what is loaded, never what an entry says

use crate::builtin;
use crate::domain::examples::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory, in order
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "principle_catalog.yaml",
    "principle_catalog.yml",
    ".principle_catalog.yaml",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Configuration format version
    pub version: String,
    /// Whether the built-in entries are registered
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    /// Built-in entries to leave out
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Additional entry files
    #[serde(default)]
    pub sources: SourceConfig,
}

/// Where additional entries are loaded from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Files or directories of YAML entry files
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    /// Glob matched against file names when walking directories
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            file_pattern: default_file_pattern(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            CatalogError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let mut config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            CatalogError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;

        // relative source paths are resolved against the config file's directory
        if let Some(base) = path.as_ref().parent() {
            for source in &mut config.sources.paths {
                if source.is_relative() {
                    *source = base.join(&*source);
                }
            }
        }

        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> CatalogResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CatalogError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Look up the default config file names in `dir`, falling back to the built-in defaults
    pub fn discover<P: AsRef<Path>>(dir: P) -> CatalogResult<Self> {
        for name in DEFAULT_CONFIG_FILES {
            let candidate = dir.as_ref().join(name);
            if candidate.exists() {
                tracing::debug!("Using config file {}", candidate.display());
                return Self::load_from_file(candidate);
            }
        }
        Ok(Self::default())
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> CatalogResult<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(CatalogError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        glob::Pattern::new(&self.sources.file_pattern).map_err(|e| {
            CatalogError::config(format!(
                "Invalid file pattern '{}': {}",
                self.sources.file_pattern, e
            ))
        })?;

        for name in &self.exclude {
            if !builtin::is_builtin(name) {
                return Err(CatalogError::config(format!(
                    "Cannot exclude '{}': not a built-in example. Built-in examples: {}",
                    name,
                    builtin::BUILTIN_NAMES.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Whether a built-in entry should be registered
    pub fn wants_builtin(&self, name: &str) -> bool {
        self.include_builtin && !self.exclude.iter().any(|n| n == name)
    }

    pub fn to_yaml(&self) -> CatalogResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CatalogError::config(format!("Failed to serialize config: {e}")))
    }

    /// Fingerprint of the configuration
    pub fn fingerprint(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();

        self.version.hash(&mut hasher);
        self.include_builtin.hash(&mut hasher);

        let mut excluded = self.exclude.clone();
        excluded.sort();
        excluded.hash(&mut hasher);

        self.sources.paths.hash(&mut hasher);
        self.sources.file_pattern.hash(&mut hasher);

        format!("{:x}", hasher.finish())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            include_builtin: true,
            exclude: Vec::new(),
            sources: SourceConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_file_pattern() -> String {
    "*.yaml".to_string()
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: CatalogConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
        }
    }

    pub fn include_builtin(mut self, include: bool) -> Self {
        self.config.include_builtin = include;
        self
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.exclude.push(name.into());
        self
    }

    pub fn add_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.sources.paths.push(path.into());
        self
    }

    pub fn file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.sources.file_pattern = pattern.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> CatalogResult<CatalogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Loading additional examples from YAML files
//!
//! Architecture: Infrastructure Layer - sources turn files on disk into domain records
//! - A source path is either a single file or a directory walked recursively
//! - Directory entries are filtered by a file-name glob and loaded in sorted order
//! - Records are only parsed here; the catalog decides whether to accept them

use crate::domain::examples::{CatalogError, CatalogResult, PrincipleExample};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// On-disk shape of an example file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleFile {
    #[serde(default)]
    pub examples: Vec<PrincipleExample>,
}

/// Finds and parses example files
#[derive(Debug, Clone)]
pub struct ExampleSource {
    file_pattern: glob::Pattern,
}

impl ExampleSource {
    pub fn new(file_pattern: &str) -> CatalogResult<Self> {
        let file_pattern = glob::Pattern::new(file_pattern).map_err(|e| {
            CatalogError::config(format!("Invalid file pattern '{file_pattern}': {e}"))
        })?;
        Ok(Self { file_pattern })
    }

    /// Files that would be loaded for `path`, in load order
    pub fn discover<P: AsRef<Path>>(&self, path: P) -> CatalogResult<Vec<PathBuf>> {
        let path = path.as_ref();

        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        if !path.is_dir() {
            return Err(CatalogError::load(path, "path does not exist"));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry.map_err(|e| CatalogError::load(path, e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .map(|name| self.file_pattern.matches(name))
                .unwrap_or(false);
            if matches {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Parse every example under `path`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> CatalogResult<Vec<PrincipleExample>> {
        let mut examples = Vec::new();
        for file in self.discover(path)? {
            let loaded = load_file(&file)?;
            tracing::info!("Loaded {} examples from {}", loaded.len(), file.display());
            examples.extend(loaded);
        }
        Ok(examples)
    }
}

impl Default for ExampleSource {
    fn default() -> Self {
        Self {
            file_pattern: glob::Pattern::new("*.yaml").expect("static pattern"),
        }
    }
}

/// Parse one example file
pub fn load_file<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<PrincipleExample>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::load(path, format!("failed to read: {e}")))?;
    parse_examples(&content).map_err(|message| CatalogError::load(path, message))
}

fn parse_examples(content: &str) -> Result<Vec<PrincipleExample>, String> {
    let file: ExampleFile =
        serde_yaml::from_str(content).map_err(|e| format!("failed to parse: {e}"))?;
    Ok(file.examples)
}

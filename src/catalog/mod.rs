//! The example catalog: an ordered, name-keyed registry of principle demonstrations
//!
//! Architecture: Repository - ExampleCatalog is the single owner of every registered example
//! - Registration is all-or-nothing; a rejected example leaves the catalog untouched
//! - Lookups and listings borrow immutably, so a populated catalog is read-only to its readers
//! - Insertion order is the listing order

use crate::domain::examples::{CatalogError, CatalogResult, PrincipleExample, PrincipleFamily};
use indexmap::map::Values;
use indexmap::IndexMap;
use regex::RegexBuilder;
use sha2::{Digest, Sha256};

/// Registry of principle demonstrations keyed by principle name
#[derive(Debug, Clone, Default)]
pub struct ExampleCatalog {
    entries: IndexMap<String, PrincipleExample>,
}

/// Lazy, restartable iterator over catalog entries in insertion order
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Values<'a, String, PrincipleExample>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a PrincipleExample;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl ExampleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from examples, failing on the first invalid or duplicate entry
    pub fn from_examples<I>(examples: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = PrincipleExample>,
    {
        let mut catalog = Self::new();
        for example in examples {
            catalog.register(example)?;
        }
        Ok(catalog)
    }

    /// Add an example to the catalog
    ///
    /// Fails with [`CatalogError::DuplicateName`] when the name is already taken and
    /// with [`CatalogError::InvalidExample`] when the example breaks its invariants.
    pub fn register(&mut self, example: PrincipleExample) -> CatalogResult<()> {
        example.validate()?;

        if self.entries.contains_key(&example.name) {
            return Err(CatalogError::duplicate(example.name));
        }

        tracing::debug!("Registered example {}", example.name);
        self.entries.insert(example.name.clone(), example);
        Ok(())
    }

    /// Look up an example by its exact name
    pub fn get(&self, name: &str) -> CatalogResult<&PrincipleExample> {
        self.entries.get(name).ok_or_else(|| CatalogError::not_found(name))
    }

    /// All entries in registration order
    pub fn list(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.values(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn by_family(&self, family: PrincipleFamily) -> impl Iterator<Item = &PrincipleExample> + '_ {
        self.list().filter(move |e| e.family == family)
    }

    /// Case-insensitive regex search over name, title and problem statement
    pub fn search(&self, pattern: &str) -> CatalogResult<Vec<&PrincipleExample>> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| CatalogError::query(pattern, e.to_string()))?;

        Ok(self
            .list()
            .filter(|e| {
                regex.is_match(&e.name) || regex.is_match(&e.title) || regex.is_match(&e.problem)
            })
            .collect())
    }

    /// SHA-256 over every entry in order, hex encoded
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        for example in self.list() {
            for field in [
                example.name.as_str(),
                example.title.as_str(),
                example.family.as_str(),
                example.problem.as_str(),
                example.violating.language.as_str(),
                example.violating.code.as_str(),
                example.compliant.language.as_str(),
                example.compliant.code.as_str(),
                example.rationale.as_str(),
            ] {
                hasher.update(field.as_bytes());
                hasher.update([0u8]);
            }
            for point in &example.key_points {
                hasher.update(point.as_bytes());
                hasher.update([0u8]);
            }
            hasher.update([0xffu8]);
        }

        format!("{:x}", hasher.finalize())
    }
}

impl<'a> IntoIterator for &'a ExampleCatalog {
    type Item = &'a PrincipleExample;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::examples::CodeSample;
    use rstest::rstest;

    fn example(name: &str) -> PrincipleExample {
        PrincipleExample::new(
            name,
            format!("{name} principle"),
            CodeSample::rust(format!("struct Bad{name};")),
            CodeSample::rust(format!("struct Good{name};")),
        )
        .with_rationale(format!("Why {name} matters"))
    }

    #[test]
    fn test_register_then_get_returns_equal_entry() {
        let mut catalog = ExampleCatalog::new();
        let dry = example("DRY").with_problem("Copy-pasted validation");
        catalog.register(dry.clone()).unwrap();

        assert_eq!(catalog.get("DRY").unwrap(), &dry);
    }

    #[test]
    fn test_duplicate_registration_leaves_catalog_unchanged() {
        let mut catalog = ExampleCatalog::new();
        catalog.register(example("DRY")).unwrap();
        let before = catalog.fingerprint();

        let replacement = example("DRY").with_rationale("a different lesson");
        let err = catalog.register(replacement).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateName { ref name } if name == "DRY"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("DRY").unwrap().rationale, "Why DRY matters");
        assert_eq!(catalog.fingerprint(), before);
    }

    #[test]
    fn test_invalid_example_is_rejected_without_mutation() {
        let mut catalog = ExampleCatalog::new();
        let err = catalog.register(example("SRP").with_rationale("")).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidExample { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_name_is_not_found() {
        let mut catalog = ExampleCatalog::new();
        catalog.register(example("KISS")).unwrap();
        let before = catalog.fingerprint();

        let err = catalog.get("nonexistent").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { ref name } if name == "nonexistent"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.fingerprint(), before);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = ExampleCatalog::from_examples(vec![example("DRY")]).unwrap();
        assert!(catalog.get("dry").is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn test_list_yields_all_entries_in_order(#[case] count: usize) {
        let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
        let catalog = ExampleCatalog::from_examples(names.iter().map(|n| example(n))).unwrap();

        let listed: Vec<&str> = catalog.list().map(|e| e.name.as_str()).collect();
        assert_eq!(listed, names.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(catalog.list().len(), count);
    }

    #[test]
    fn test_list_is_restartable() {
        let catalog =
            ExampleCatalog::from_examples(vec![example("DRY"), example("KISS")]).unwrap();

        let first: Vec<_> = catalog.list().collect();
        let second: Vec<_> = catalog.list().collect();
        assert_eq!(first, second);

        let entries = catalog.list();
        let resumed: Vec<_> = entries.clone().collect();
        assert_eq!(entries.count(), resumed.len());
    }

    #[test]
    fn test_dry_kiss_srp_scenario() {
        let mut catalog = ExampleCatalog::new();
        for name in ["DRY", "KISS", "SRP"] {
            catalog.register(example(name)).unwrap();
        }

        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["DRY", "KISS", "SRP"]);
        assert_eq!(catalog.get("KISS").unwrap().title, "KISS principle");
    }

    #[test]
    fn test_search_and_family_filter() {
        let catalog = ExampleCatalog::from_examples(vec![
            example("DRY").with_problem("Duplicated tax constants"),
            example("OCP").in_family(PrincipleFamily::Solid),
        ])
        .unwrap();

        let hits = catalog.search("tax").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "DRY");

        match catalog.search("(") {
            Err(CatalogError::Query { pattern, .. }) => assert_eq!(pattern, "("),
            other => panic!("expected query error, got {other:?}"),
        }

        let solid: Vec<_> = catalog.by_family(PrincipleFamily::Solid).collect();
        assert_eq!(solid.len(), 1);
        assert_eq!(solid[0].name, "OCP");
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let mut catalog = ExampleCatalog::new();
        let empty = catalog.fingerprint();
        catalog.register(example("DRY")).unwrap();

        assert_ne!(catalog.fingerprint(), empty);
        assert_eq!(catalog.fingerprint(), catalog.fingerprint());
        assert_eq!(catalog.fingerprint().len(), 64);
    }
}

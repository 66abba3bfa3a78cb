//! Principle Catalog - Paired violating and compliant code for software design principles
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - The catalog is a read-only registry once populated
//! - Built-in entries, external YAML sources and configuration meet only here
//! - Checks and demonstrations are read-only passes over the populated catalog

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod demos;
pub mod domain;
pub mod report;
pub mod samples;
pub mod source;

// Re-export main types for convenient access
pub use domain::examples::{
    CatalogError, CatalogResult, CodeSample, PrincipleExample, PrincipleFamily,
};

pub use domain::findings::{CheckReport, CheckSummary, Finding, SampleSide, Severity};

pub use catalog::{Entries, ExampleCatalog};

pub use config::{CatalogConfig, ConfigBuilder};

pub use demos::{DemoCase, DemoOutcome, Demonstration, Expectation};

pub use report::{CatalogFormatter, OutputFormat, ReportOptions};

pub use samples::SampleOutline;

pub use source::ExampleSource;

use std::path::Path;

/// Populated catalog together with the configuration it was built from
pub struct CatalogExplorer {
    catalog: ExampleCatalog,
    config: CatalogConfig,
    formatter: CatalogFormatter,
}

impl CatalogExplorer {
    /// Populate a catalog according to `config`
    pub fn new_with_config(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let mut catalog = ExampleCatalog::new();

        for example in builtin::entries() {
            if config.wants_builtin(&example.name) {
                catalog.register(example)?;
            } else {
                tracing::debug!("Skipping built-in example {}", example.name);
            }
        }

        let source = ExampleSource::new(&config.sources.file_pattern)?;
        for path in &config.sources.paths {
            for example in source.load(path)? {
                catalog.register(example)?;
            }
        }

        tracing::info!("Catalog populated with {} examples", catalog.len());

        Ok(Self {
            catalog,
            config,
            formatter: CatalogFormatter::default(),
        })
    }

    /// Explorer over the built-in entries only
    pub fn new() -> CatalogResult<Self> {
        Self::new_with_config(CatalogConfig::default())
    }

    /// Explorer loading configuration from file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let config = CatalogConfig::load_from_file(path)?;
        Self::new_with_config(config)
    }

    /// Set custom formatter
    pub fn with_formatter(mut self, formatter: CatalogFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn formatter(&self) -> &CatalogFormatter {
        &self.formatter
    }

    /// Look up one entry
    pub fn get(&self, name: &str) -> CatalogResult<&PrincipleExample> {
        self.catalog.get(name)
    }

    /// Run the demonstration for `name`
    ///
    /// Fails with `NotFound` when the catalog has no such entry and returns
    /// `None` when the entry exists but has no demonstration.
    pub fn run_demo(&self, name: &str) -> CatalogResult<Option<DemoOutcome>> {
        let example = self.catalog.get(name)?;
        Ok(demos::find(&example.name).map(Demonstration::run))
    }

    /// Run every demonstration whose principle is in the catalog, in catalog order
    pub fn run_all_demos(&self) -> Vec<DemoOutcome> {
        self.catalog
            .list()
            .filter_map(|example| demos::find(&example.name))
            .map(Demonstration::run)
            .collect()
    }

    /// Check every entry for consistency problems
    pub fn check(&self) -> CheckReport {
        let start_time = std::time::Instant::now();
        let mut report = CheckReport::new();

        for example in &self.catalog {
            for finding in check_example(example) {
                report.add_finding(finding);
            }
        }

        report.set_examples_checked(self.catalog.len());
        report.set_execution_time(start_time.elapsed().as_millis() as u64);
        report.set_catalog_fingerprint(self.catalog.fingerprint());
        report.sort_findings();

        tracing::info!(
            "Checked {} examples: {} findings",
            report.summary.total_examples,
            report.findings.len()
        );

        report
    }

    /// Format a check report for output
    pub fn format_check(&self, report: &CheckReport, format: OutputFormat) -> CatalogResult<String> {
        self.formatter.format_check(report, format)
    }

    /// Format one entry for output
    pub fn format_entry(&self, name: &str, format: OutputFormat) -> CatalogResult<String> {
        self.formatter.format_entry(self.catalog.get(name)?, format)
    }

    /// Format the whole catalog as a document
    pub fn export(&self, format: OutputFormat) -> CatalogResult<String> {
        self.formatter.format_export(&self.catalog, format)
    }
}

/// Findings for a single entry
fn check_example(example: &PrincipleExample) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (side, sample) in [
        (SampleSide::Violating, &example.violating),
        (SampleSide::Compliant, &example.compliant),
    ] {
        match samples::inspect(sample) {
            Ok(_) => {}
            Err(CatalogError::Sample {
                line,
                column,
                message,
                ..
            }) => findings.push(
                Finding::new("sample_parse_error", Severity::Error, &example.name, message)
                    .on_side(side)
                    .with_position(line, column)
                    .with_suggestion("Fix the sample or set its language to something other than rust"),
            ),
            Err(other) => findings.push(
                Finding::new("sample_parse_error", Severity::Error, &example.name, other.to_string())
                    .on_side(side),
            ),
        }
    }

    if example.violating.code.trim() == example.compliant.code.trim() {
        findings.push(
            Finding::new(
                "identical_samples",
                Severity::Error,
                &example.name,
                "violating and compliant samples contain the same code",
            )
            .with_suggestion("Show the refactoring the principle asks for"),
        );
    }

    if example.key_points.is_empty() {
        findings.push(
            Finding::new(
                "missing_key_points",
                Severity::Warning,
                &example.name,
                "entry has no key points",
            )
            .with_suggestion("Add a short list of takeaways"),
        );
    }

    match demos::find(&example.name) {
        None => findings.push(Finding::new(
            "missing_demo",
            Severity::Info,
            &example.name,
            "entry has no runnable demonstration",
        )),
        Some(demonstration) => {
            let outcome = demonstration.run();
            let failed: Vec<&str> = outcome.failed_cases().map(|c| c.label.as_str()).collect();
            if !failed.is_empty() {
                findings.push(Finding::new(
                    "demo_failed",
                    Severity::Error,
                    &example.name,
                    format!("demonstration cases did not hold: {}", failed.join(", ")),
                ));
            }
        }
    }

    findings
}

/// Convenience function to create an explorer with default settings
pub fn create_explorer() -> CatalogResult<CatalogExplorer> {
    CatalogExplorer::new()
}

/// Convenience function to check the built-in catalog
pub fn check_builtin() -> CatalogResult<CheckReport> {
    Ok(CatalogExplorer::new()?.check())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EXTRA: &str = r#"
examples:
  - name: Expert
    title: Information Expert
    violating:
      code: "fn total(order: &Order) -> f64 { order.lines.iter().map(|l| l.price).sum() }"
    compliant:
      code: "impl Order { fn total(&self) -> f64 { self.lines.iter().map(|l| l.price).sum() } }"
    rationale: Put behavior on the type that owns the information.
  - name: Broken
    title: Broken Sample
    violating:
      code: "fn same() {}"
    compliant:
      code: "fn same() {}\n"
    rationale: Both samples are the same.
    key_points: [none]
  - name: Pseudo
    title: Pseudocode Sample
    violating:
      language: text
      code: "do everything in one place"
    compliant:
      code: "fn ok() {}\nfn broken() { let = 5; }\n"
    rationale: The compliant sample does not parse.
    key_points: [none]
"#;

    fn explorer_with_extra(temp_dir: &TempDir) -> CatalogExplorer {
        let file = temp_dir.path().join("extra.yaml");
        fs::write(&file, EXTRA).unwrap();
        let config = ConfigBuilder::new().add_source(file).build().unwrap();
        CatalogExplorer::new_with_config(config).unwrap()
    }

    #[test]
    fn test_default_explorer_has_builtins() {
        let explorer = create_explorer().unwrap();
        let names: Vec<&str> = explorer.catalog().names().collect();
        assert_eq!(names, builtin::BUILTIN_NAMES);
    }

    #[test]
    fn test_builtin_check_is_clean() {
        let report = check_builtin().unwrap();
        assert!(!report.has_findings(), "{:?}", report.findings);
        assert_eq!(report.summary.total_examples, builtin::BUILTIN_NAMES.len());
        assert!(report.catalog_fingerprint.is_some());
    }

    #[test]
    fn test_exclusions() {
        let config = ConfigBuilder::new().exclude("KISS").exclude("DIP").build().unwrap();
        let explorer = CatalogExplorer::new_with_config(config).unwrap();

        assert_eq!(explorer.catalog().len(), 6);
        assert!(matches!(
            explorer.get("KISS"),
            Err(CatalogError::NotFound { .. })
        ));
        assert_eq!(explorer.run_all_demos().len(), 6);
    }

    #[test]
    fn test_sources_register_after_builtins() {
        let temp_dir = TempDir::new().unwrap();
        let explorer = explorer_with_extra(&temp_dir);

        let names: Vec<&str> = explorer.catalog().names().collect();
        assert_eq!(names.len(), 11);
        assert_eq!(&names[8..], ["Expert", "Broken", "Pseudo"]);
    }

    #[test]
    fn test_source_collision_is_duplicate() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("dup.yaml");
        fs::write(
            &file,
            "examples:\n  - name: DRY\n    title: Again\n    violating: {code: a}\n    compliant: {code: b}\n    rationale: r\n",
        )
        .unwrap();

        let config = ConfigBuilder::new().add_source(file).build().unwrap();
        match CatalogExplorer::new_with_config(config) {
            Err(CatalogError::DuplicateName { name }) => assert_eq!(name, "DRY"),
            other => panic!("expected duplicate error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_check_findings_for_external_entries() {
        let temp_dir = TempDir::new().unwrap();
        let report = explorer_with_extra(&temp_dir).check();

        let expert: Vec<&str> = report.findings_for("Expert").map(|f| f.check_id.as_str()).collect();
        assert_eq!(expert.len(), 2);
        assert!(expert.contains(&"missing_key_points"));
        assert!(expert.contains(&"missing_demo"));

        assert!(report
            .findings_for("Broken")
            .any(|f| f.check_id == "identical_samples" && f.severity == Severity::Error));

        let parse: Vec<&Finding> = report
            .findings_for("Pseudo")
            .filter(|f| f.check_id == "sample_parse_error")
            .collect();
        assert_eq!(parse.len(), 1);
        assert_eq!(parse[0].side, Some(SampleSide::Compliant));
        assert_eq!(parse[0].line_number, Some(2));

        assert!(report.has_errors());
        assert_eq!(report.findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_run_demo() {
        let explorer = create_explorer().unwrap();
        let outcome = explorer.run_demo("LSP").unwrap().unwrap();
        assert!(outcome.holds());

        assert!(matches!(
            explorer.run_demo("GRASP"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_run_demo_without_demonstration() {
        let temp_dir = TempDir::new().unwrap();
        let explorer = explorer_with_extra(&temp_dir);
        assert!(explorer.run_demo("Expert").unwrap().is_none());
        assert_eq!(explorer.run_all_demos().len(), 8);
    }

    #[test]
    fn test_formatting_through_explorer() {
        let explorer = create_explorer().unwrap().with_formatter(CatalogFormatter::new(ReportOptions {
            use_colors: false,
            ..Default::default()
        }));

        let entry = explorer.format_entry("SRP", OutputFormat::Human).unwrap();
        assert!(entry.starts_with("SRP - Single Responsibility Principle"));

        let export = explorer.export(OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&export).unwrap();
        assert_eq!(parsed["examples"].as_array().unwrap().len(), 8);

        let report = explorer.check();
        let human = explorer.format_check(&report, OutputFormat::Human).unwrap();
        assert!(human.contains("No catalog issues found"));
    }
}

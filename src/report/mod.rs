//! Rendering catalog data in multiple output formats
//!
//! Architecture: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - Entries, listings, check reports and demonstration outcomes each have a rendering per format
//! - Human output is for terminals, JSON for tools, Markdown for documentation sites
//! - Domain objects never know how they are displayed

use crate::catalog::ExampleCatalog;
use crate::demos::DemoOutcome;
use crate::domain::examples::{CatalogError, CatalogResult, CodeSample, PrincipleExample};
use crate::domain::findings::{CheckReport, Finding, Severity};
use crate::samples;
use chrono::Utc;
use serde_json::Value as JsonValue;
use std::io::Write;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Terminal text, optionally colored
    Human,
    /// JSON for programmatic consumption
    Json,
    /// Markdown for documentation renderers
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json", "markdown"]
    }
}

/// Options for customizing output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use ANSI colors (human format)
    pub use_colors: bool,
    /// Whether entries include their code samples
    pub show_code: bool,
    /// Whether entries include their key points
    pub show_key_points: bool,
    /// Whether check findings include suggestions
    pub show_suggestions: bool,
    /// Maximum number of findings to include
    pub max_findings: Option<usize>,
    /// Minimum severity of findings to include
    pub min_severity: Option<Severity>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_code: true,
            show_key_points: true,
            show_suggestions: true,
            max_findings: None,
            min_severity: None,
        }
    }
}

/// Formatter for catalog entries, listings, check reports and demonstrations
pub struct CatalogFormatter {
    options: ReportOptions,
}

impl CatalogFormatter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Render a single entry
    pub fn format_entry(&self, example: &PrincipleExample, format: OutputFormat) -> CatalogResult<String> {
        match format {
            OutputFormat::Human => Ok(self.entry_human(example)),
            OutputFormat::Json => to_pretty_json(&entry_json(example)),
            OutputFormat::Markdown => Ok(self.entry_markdown(example, 1)),
        }
    }

    /// Render a listing of entries, one line each
    pub fn format_listing(
        &self,
        examples: &[&PrincipleExample],
        format: OutputFormat,
    ) -> CatalogResult<String> {
        match format {
            OutputFormat::Human => {
                let mut output = String::new();
                if examples.is_empty() {
                    output.push_str("No examples match\n");
                    return Ok(output);
                }
                let width = examples.iter().map(|e| e.name.len()).max().unwrap_or(0);
                for example in examples {
                    let name = format!("{:<width$}", example.name);
                    output.push_str(&format!(
                        "{}  {} ({})\n",
                        self.paint(&name, "1"),
                        example.title,
                        self.paint(example.family.as_str(), "2")
                    ));
                }
                Ok(output)
            }
            OutputFormat::Json => {
                let entries: Vec<JsonValue> = examples
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "name": e.name,
                            "title": e.title,
                            "family": e.family.as_str(),
                            "problem": e.problem,
                        })
                    })
                    .collect();
                to_pretty_json(&JsonValue::Array(entries))
            }
            OutputFormat::Markdown => {
                let mut output = String::from("| Name | Title | Family |\n|---|---|---|\n");
                for example in examples {
                    output.push_str(&format!(
                        "| [{}](#{}) | {} | {} |\n",
                        example.name,
                        anchor(&heading_text(example)),
                        escape_cell(&example.title),
                        example.family
                    ));
                }
                Ok(output)
            }
        }
    }

    /// Render the whole catalog as a standalone document
    pub fn format_export(&self, catalog: &ExampleCatalog, format: OutputFormat) -> CatalogResult<String> {
        match format {
            OutputFormat::Json => {
                let entries: Vec<JsonValue> = catalog.list().map(entry_json).collect();
                to_pretty_json(&serde_json::json!({
                    "generated_at": Utc::now().to_rfc3339(),
                    "fingerprint": catalog.fingerprint(),
                    "count": catalog.len(),
                    "examples": entries,
                }))
            }
            OutputFormat::Markdown => {
                let mut output = String::from("# Design Principles\n\n");
                let listing: Vec<&PrincipleExample> = catalog.list().collect();
                output.push_str(&self.format_listing(&listing, OutputFormat::Markdown)?);
                for example in catalog.list() {
                    output.push('\n');
                    output.push_str(&self.entry_markdown(example, 2));
                }
                Ok(output)
            }
            OutputFormat::Human => {
                let mut output = String::new();
                for (index, example) in catalog.list().enumerate() {
                    if index > 0 {
                        output.push_str(&format!("\n{}\n\n", "=".repeat(60)));
                    }
                    output.push_str(&self.entry_human(example));
                }
                Ok(output)
            }
        }
    }

    /// Render a check report
    pub fn format_check(&self, report: &CheckReport, format: OutputFormat) -> CatalogResult<String> {
        let findings = self.filter_findings(&report.findings);

        match format {
            OutputFormat::Human => Ok(self.check_human(report, &findings)),
            OutputFormat::Json => {
                let json_findings: Vec<JsonValue> = findings
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "check_id": f.check_id,
                            "severity": f.severity.as_str(),
                            "example": f.example,
                            "side": f.side.map(|s| s.as_str()),
                            "line_number": f.line_number,
                            "column_number": f.column_number,
                            "message": f.message,
                            "suggestion": f.suggestion,
                            "detected_at": f.detected_at.to_rfc3339(),
                        })
                    })
                    .collect();

                to_pretty_json(&serde_json::json!({
                    "findings": json_findings,
                    "summary": {
                        "total_examples": report.summary.total_examples,
                        "findings_by_severity": {
                            "error": report.summary.findings_by_severity.error,
                            "warning": report.summary.findings_by_severity.warning,
                            "info": report.summary.findings_by_severity.info
                        },
                        "execution_time_ms": report.summary.execution_time_ms,
                        "checked_at": report.summary.checked_at.to_rfc3339()
                    },
                    "catalog_fingerprint": report.catalog_fingerprint
                }))
            }
            OutputFormat::Markdown => {
                let mut output = String::from("| Location | Severity | Check | Message |\n|---|---|---|---|\n");
                for finding in &findings {
                    output.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        finding.location(),
                        finding.severity.as_str(),
                        finding.check_id,
                        escape_cell(&finding.message)
                    ));
                }
                output.push('\n');
                output.push_str(&self.summary_line(report, format));
                Ok(output)
            }
        }
    }

    /// Render demonstration outcomes
    pub fn format_demos(&self, outcomes: &[DemoOutcome], format: OutputFormat) -> CatalogResult<String> {
        match format {
            OutputFormat::Json => {
                to_pretty_json(&serde_json::to_value(outcomes).map_err(|e| {
                    CatalogError::render(format!("JSON serialization failed: {e}"))
                })?)
            }
            OutputFormat::Human | OutputFormat::Markdown => {
                let markdown = format == OutputFormat::Markdown;
                let mut output = String::new();
                for outcome in outcomes {
                    let status = if outcome.holds() {
                        self.paint_for(format, "holds", "32")
                    } else {
                        self.paint_for(format, "FAILS", "31")
                    };
                    if markdown {
                        output.push_str(&format!("### {} ({})\n\n", outcome.principle, status));
                    } else {
                        output.push_str(&format!("{} {}\n", self.paint(&outcome.principle, "1"), status));
                    }
                    for case in &outcome.cases {
                        let mark = if case.holds() { "ok" } else { "FAILED" };
                        output.push_str(&format!(
                            "{}{} [{}] {}\n",
                            if markdown { "- " } else { "  " },
                            mark,
                            case.expectation.as_str(),
                            case.label
                        ));
                        if !case.holds() || !markdown {
                            output.push_str(&format!(
                                "{}violating: {}\n{}compliant: {}\n",
                                if markdown { "  - " } else { "      " },
                                display_result(&case.violating),
                                if markdown { "  - " } else { "      " },
                                display_result(&case.compliant)
                            ));
                        }
                    }
                    output.push('\n');
                }
                Ok(output)
            }
        }
    }

    /// Write a rendered entry to a writer
    pub fn write_entry<W: Write>(
        &self,
        example: &PrincipleExample,
        format: OutputFormat,
        mut writer: W,
    ) -> CatalogResult<()> {
        let formatted = self.format_entry(example, format)?;
        writer.write_all(formatted.as_bytes())?;
        Ok(())
    }

    fn filter_findings<'a>(&self, findings: &'a [Finding]) -> Vec<&'a Finding> {
        let mut filtered: Vec<&Finding> = findings
            .iter()
            .filter(|f| match self.options.min_severity {
                Some(min) => f.severity >= min,
                None => true,
            })
            .collect();

        if let Some(max) = self.options.max_findings {
            filtered.truncate(max);
        }

        filtered
    }

    fn entry_human(&self, example: &PrincipleExample) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} - {} ({})\n\n",
            self.paint(&example.name, "1"),
            example.title,
            example.family
        ));

        if !example.problem.is_empty() {
            output.push_str(&format!("{} {}\n\n", self.paint("Problem:", "33"), example.problem));
        }

        if self.options.show_code {
            output.push_str(&self.sample_human("Violating", &example.violating, "31"));
            output.push_str(&self.sample_human("Compliant", &example.compliant, "32"));
        }

        output.push_str(&format!("{} {}\n", self.paint("Why:", "36"), example.rationale));

        if self.options.show_key_points && !example.key_points.is_empty() {
            output.push('\n');
            for point in &example.key_points {
                output.push_str(&format!("  - {point}\n"));
            }
        }

        output
    }

    fn sample_human(&self, label: &str, sample: &CodeSample, color: &str) -> String {
        let mut output = self.paint(label, color);
        if let Some(caption) = &sample.caption {
            output.push_str(&format!(": {caption}"));
        }
        output.push_str(&format!(" [{}]\n", outline_summary(sample)));

        for line in sample.code.lines() {
            if self.options.use_colors {
                output.push_str(&format!("  \x1b[2m│\x1b[0m {line}\n"));
            } else {
                output.push_str(&format!("  │ {line}\n"));
            }
        }
        output.push('\n');
        output
    }

    fn entry_markdown(&self, example: &PrincipleExample, level: usize) -> String {
        let heading = "#".repeat(level);
        let sub = "#".repeat(level + 1);
        let mut output = format!("{heading} {}\n\n", heading_text(example));

        if !example.problem.is_empty() {
            output.push_str(&format!("**Problem.** {}\n\n", example.problem));
        }

        if self.options.show_code {
            for (label, sample) in [("Violating", &example.violating), ("Compliant", &example.compliant)] {
                output.push_str(&format!("{sub} {label}\n\n"));
                if let Some(caption) = &sample.caption {
                    output.push_str(&format!("_{caption}_\n\n"));
                }
                let fence = code_fence(&sample.code);
                output.push_str(&format!("{fence}{}\n{}", sample.language, sample.code));
                if !sample.code.ends_with('\n') {
                    output.push('\n');
                }
                output.push_str(&format!("{fence}\n\n"));
            }
        }

        output.push_str(&format!("**Why.** {}\n", example.rationale));

        if self.options.show_key_points && !example.key_points.is_empty() {
            output.push('\n');
            for point in &example.key_points {
                output.push_str(&format!("- {point}\n"));
            }
        }

        output
    }

    fn check_human(&self, report: &CheckReport, findings: &[&Finding]) -> String {
        let mut output = String::new();

        if findings.is_empty() {
            output.push_str(&format!("{}\n", self.paint("No catalog issues found", "32")));
        } else {
            let color = if report.has_errors() { "31" } else { "33" };
            output.push_str(&format!("{}\n\n", self.paint("Catalog Issues Found", color)));

            for finding in findings {
                let severity_color = match finding.severity {
                    Severity::Error => "31",
                    Severity::Warning => "33",
                    Severity::Info => "36",
                };
                output.push_str(&format!(
                    "  {} [{}] {}: {}\n",
                    self.paint(&finding.location(), "2"),
                    self.paint(finding.severity.as_str(), severity_color),
                    finding.check_id,
                    finding.message
                ));

                if self.options.show_suggestions {
                    if let Some(suggestion) = &finding.suggestion {
                        output.push_str(&format!("    {}\n", self.paint(&format!("hint: {suggestion}"), "32")));
                    }
                }
            }
            output.push('\n');
        }

        output.push_str(&self.summary_line(report, OutputFormat::Human));
        output
    }

    fn summary_line(&self, report: &CheckReport, format: OutputFormat) -> String {
        let counts = &report.summary.findings_by_severity;
        let execution_time = (report.summary.execution_time_ms as f64) / 1000.0;

        let mut parts = Vec::new();
        if counts.error > 0 {
            parts.push(self.paint_for(format, &plural(counts.error, "error"), "31"));
        }
        if counts.warning > 0 {
            parts.push(self.paint_for(format, &plural(counts.warning, "warning"), "33"));
        }
        if counts.info > 0 {
            parts.push(self.paint_for(format, &format!("{} info", counts.info), "36"));
        }
        if parts.is_empty() {
            parts.push(self.paint_for(format, "0 issues", "32"));
        }

        format!(
            "Summary: {} in {} examples ({:.1}s)\n",
            parts.join(", "),
            report.summary.total_examples,
            execution_time
        )
    }

    /// Colors only apply to terminal output
    fn paint_for(&self, format: OutputFormat, text: &str, code: &str) -> String {
        if format == OutputFormat::Human {
            self.paint(text, code)
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.options.use_colors {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Default for CatalogFormatter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

fn entry_json(example: &PrincipleExample) -> JsonValue {
    serde_json::json!({
        "name": example.name,
        "title": example.title,
        "family": example.family.as_str(),
        "problem": example.problem,
        "violating": sample_json(&example.violating),
        "compliant": sample_json(&example.compliant),
        "rationale": example.rationale,
        "key_points": example.key_points,
    })
}

fn sample_json(sample: &CodeSample) -> JsonValue {
    let outline = samples::inspect(sample).ok().flatten();
    serde_json::json!({
        "language": sample.language,
        "caption": sample.caption,
        "code": sample.code,
        "outline": outline,
    })
}

fn outline_summary(sample: &CodeSample) -> String {
    match samples::inspect(sample) {
        Ok(Some(outline)) => outline.summary(),
        Ok(None) => sample.language.clone(),
        Err(_) => "does not parse".to_string(),
    }
}

fn display_result(result: &Result<String, String>) -> String {
    match result {
        Ok(value) => value.clone(),
        Err(error) => format!("error: {error}"),
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

fn heading_text(example: &PrincipleExample) -> String {
    format!("{}: {}", example.name, example.title)
}

/// GitHub-style heading anchor: lowercase, punctuation dropped, spaces become `-`
fn anchor(heading: &str) -> String {
    heading
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Backtick fence longer than any backtick run inside `code`
fn code_fence(code: &str) -> String {
    let longest = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

fn to_pretty_json(value: &JsonValue) -> CatalogResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CatalogError::render(format!("JSON serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::demos::{self, DemoCase, Expectation};
    use crate::domain::findings::SampleSide;

    fn plain() -> CatalogFormatter {
        CatalogFormatter::new(ReportOptions {
            use_colors: false,
            ..Default::default()
        })
    }

    fn create_test_report() -> CheckReport {
        let mut report = CheckReport::new();
        report.add_finding(
            Finding::new("sample_parse_error", Severity::Error, "DRY", "expected `;`")
                .on_side(SampleSide::Violating)
                .with_position(4, 9)
                .with_suggestion("Fix the sample so it parses"),
        );
        report.add_finding(Finding::new("missing_demo", Severity::Info, "Expert", "no demonstration"));
        report.set_examples_checked(9);
        report.set_execution_time(1200);
        report
    }

    #[test]
    fn test_entry_human() {
        let catalog = builtin::catalog().unwrap();
        let output = plain()
            .format_entry(catalog.get("OCP").unwrap(), OutputFormat::Human)
            .unwrap();

        assert!(output.starts_with("OCP - Open-Closed Principle (solid)"));
        assert!(output.contains("Violating: Every new shape"));
        assert!(output.contains("Why:"));
        assert!(output.contains("  - Traits are the usual extension point"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_entry_without_code() {
        let formatter = CatalogFormatter::new(ReportOptions {
            use_colors: false,
            show_code: false,
            ..Default::default()
        });
        let catalog = builtin::catalog().unwrap();
        let output = formatter
            .format_entry(catalog.get("KISS").unwrap(), OutputFormat::Human)
            .unwrap();
        assert!(!output.contains("│"));
    }

    #[test]
    fn test_entry_json_has_outline() {
        let catalog = builtin::catalog().unwrap();
        let output = plain()
            .format_entry(catalog.get("LSP").unwrap(), OutputFormat::Json)
            .unwrap();
        let json: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(json["name"], "LSP");
        assert_eq!(json["family"], "solid");
        assert!(json["compliant"]["outline"]["traits"].as_array().unwrap().len() >= 2);
    }

    #[test]
    fn test_entry_markdown() {
        let catalog = builtin::catalog().unwrap();
        let output = plain()
            .format_entry(catalog.get("DRY").unwrap(), OutputFormat::Markdown)
            .unwrap();

        assert!(output.starts_with("# DRY: Don't Repeat Yourself"));
        assert!(output.contains("## Violating"));
        assert!(output.contains("```rust\n"));
        assert_eq!(output.matches("```").count(), 4);
    }

    #[test]
    fn test_listing_formats() {
        let catalog = builtin::catalog().unwrap();
        let entries: Vec<_> = catalog.list().collect();
        let formatter = plain();

        let human = formatter.format_listing(&entries, OutputFormat::Human).unwrap();
        assert_eq!(human.lines().count(), entries.len());
        assert!(human.lines().next().unwrap().starts_with("DRY "));

        let json: JsonValue =
            serde_json::from_str(&formatter.format_listing(&entries, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), entries.len());

        let markdown = formatter.format_listing(&entries, OutputFormat::Markdown).unwrap();
        assert!(markdown.contains("| [SRP](#srp-single-responsibility-principle) |"));

        let empty = formatter.format_listing(&[], OutputFormat::Human).unwrap();
        assert!(empty.contains("No examples match"));
    }

    #[test]
    fn test_export_json() {
        let catalog = builtin::catalog().unwrap();
        let output = plain().format_export(&catalog, OutputFormat::Json).unwrap();
        let json: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(json["count"], catalog.len());
        assert_eq!(json["fingerprint"], catalog.fingerprint());
        assert_eq!(json["examples"][0]["name"], "DRY");
        assert_eq!(json["examples"][7]["name"], "YAGNI");
    }

    #[test]
    fn test_export_markdown() {
        let catalog = builtin::catalog().unwrap();
        let output = plain().format_export(&catalog, OutputFormat::Markdown).unwrap();

        assert!(output.starts_with("# Design Principles"));
        assert!(output.contains("## YAGNI: You Aren't Gonna Need It"));
        assert!(output.find("## DRY").unwrap() < output.find("## KISS").unwrap());
    }

    #[test]
    fn test_check_human() {
        let output = plain().format_check(&create_test_report(), OutputFormat::Human).unwrap();

        assert!(output.contains("Catalog Issues Found"));
        assert!(output.contains("DRY/violating:4:9 [error] sample_parse_error"));
        assert!(output.contains("hint: Fix the sample so it parses"));
        assert!(output.contains("Summary: 1 error, 1 info in 9 examples (1.2s)"));
    }

    #[test]
    fn test_check_json_severity_filter() {
        let formatter = CatalogFormatter::new(ReportOptions {
            min_severity: Some(Severity::Warning),
            ..Default::default()
        });
        let output = formatter.format_check(&create_test_report(), OutputFormat::Json).unwrap();
        let json: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(json["findings"].as_array().unwrap().len(), 1);
        assert_eq!(json["findings"][0]["check_id"], "sample_parse_error");
        assert_eq!(json["findings"][0]["side"], "violating");
        assert_eq!(json["summary"]["total_examples"], 9);
    }

    #[test]
    fn test_empty_check_report() {
        let output = plain().format_check(&CheckReport::new(), OutputFormat::Human).unwrap();
        assert!(output.contains("No catalog issues found"));
        assert!(output.contains("0 issues"));
    }

    #[test]
    fn test_demo_output() {
        let outcomes = vec![
            demos::find("LSP").unwrap().run(),
            DemoOutcome {
                principle: "Broken".to_string(),
                cases: vec![DemoCase::new(
                    "mismatch",
                    Expectation::Equivalent,
                    Ok("1".to_string()),
                    Err("boom".to_string()),
                )],
            },
        ];

        let human = plain().format_demos(&outcomes, OutputFormat::Human).unwrap();
        assert!(human.contains("LSP holds"));
        assert!(human.contains("Broken FAILS"));
        assert!(human.contains("compliant: error: boom"));

        let json: JsonValue =
            serde_json::from_str(&plain().format_demos(&outcomes, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["principle"], "LSP");
        assert_eq!(json[1]["cases"][0]["compliant"]["Err"], "boom");
    }

    /// Slug a heading the way GitHub does, independently of the formatter
    fn github_slug(heading: &str) -> String {
        heading
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
            .map(|c| if c == ' ' { '-' } else { c })
            .collect()
    }

    #[test]
    fn test_export_index_links_resolve_to_headings() {
        let catalog = builtin::catalog().unwrap();
        let output = plain().format_export(&catalog, OutputFormat::Markdown).unwrap();

        let headings: Vec<String> = output
            .lines()
            .filter_map(|line| line.strip_prefix("## "))
            .map(github_slug)
            .collect();
        assert!(headings.contains(&"dry-dont-repeat-yourself".to_string()));

        let link = regex::Regex::new(r"\]\(#([^)]+)\)").unwrap();
        let targets: Vec<&str> = link
            .captures_iter(&output)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(targets.len(), catalog.len());

        let dangling: Vec<&&str> = targets
            .iter()
            .filter(|t| !headings.iter().any(|h| h.as_str() == **t))
            .collect();
        assert!(dangling.is_empty(), "links without a heading: {dangling:?}");
    }

    #[test]
    fn test_markdown_output_is_never_colored() {
        let formatter = CatalogFormatter::new(ReportOptions {
            use_colors: true,
            ..Default::default()
        });

        let check = formatter.format_check(&create_test_report(), OutputFormat::Markdown).unwrap();
        assert!(!check.contains('\x1b'), "{check:?}");
        assert!(check.contains("Summary: 1 error, 1 info"));

        let outcomes = vec![demos::find("DRY").unwrap().run()];
        let markdown = formatter.format_demos(&outcomes, OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("### DRY (holds)"));
        assert!(!markdown.contains('\x1b'));

        let human = formatter.format_demos(&outcomes, OutputFormat::Human).unwrap();
        assert!(human.contains('\x1b'));
    }

    #[test]
    fn test_markdown_escapes_fences_and_pipes() {
        let example = PrincipleExample::new(
            "Fences",
            "Pipes | Tables",
            CodeSample::new("markdown", "```rust\nfn inner() {}\n```\n"),
            CodeSample::rust("fn plain() {}"),
        )
        .with_rationale("Content must not break the surrounding document.");

        let formatter = plain();
        let listing = formatter.format_listing(&[&example], OutputFormat::Markdown).unwrap();
        assert!(listing.contains("| Pipes \\| Tables |"));
        assert!(listing.contains("(#fences-pipes--tables)"));

        let entry = formatter.format_entry(&example, OutputFormat::Markdown).unwrap();
        assert!(entry.contains("````markdown\n```rust\nfn inner() {}\n```\n````\n"));
        assert!(entry.contains("```rust\nfn plain() {}\n```\n"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("sarif"), None);
        assert_eq!(OutputFormat::all_formats().len(), 3);
    }

    #[test]
    fn test_write_entry() {
        let catalog = builtin::catalog().unwrap();
        let mut buffer = Vec::new();
        plain()
            .write_entry(catalog.get("ISP").unwrap(), OutputFormat::Markdown, &mut buffer)
            .unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("# ISP"));
    }
}

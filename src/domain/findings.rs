//! Findings produced by catalog checks
//!
//! Architecture: Aggregate Root - CheckReport owns the findings and keeps its counts in step
//! - A Finding names the example and the sample it concerns
//! - Severity decides whether a check run fails

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels for catalog findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational notes
    Info,
    /// Entry is usable but incomplete
    Warning,
    /// Entry is broken and fails the check
    Error,
}

impl Severity {
    /// Whether this severity level should cause the check to fail
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Which half of an example a finding points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleSide {
    Violating,
    Compliant,
}

impl SampleSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Violating => "violating",
            Self::Compliant => "compliant",
        }
    }
}

/// A single issue found while checking the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the check that produced this finding
    pub check_id: String,
    pub severity: Severity,
    /// Name of the example concerned
    pub example: String,
    /// Sample concerned, when the finding is about one side only
    pub side: Option<SampleSide>,
    /// Line within the sample (1-indexed)
    pub line_number: Option<usize>,
    /// Column within the sample (1-indexed)
    pub column_number: Option<usize>,
    pub message: String,
    pub suggestion: Option<String>,
    pub detected_at: DateTime<Utc>,
}

impl Finding {
    pub fn new(
        check_id: impl Into<String>,
        severity: Severity,
        example: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            severity,
            example: example.into(),
            side: None,
            line_number: None,
            column_number: None,
            message: message.into(),
            suggestion: None,
            detected_at: Utc::now(),
        }
    }

    pub fn on_side(mut self, side: SampleSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set line and column position inside the sample
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line_number = Some(line);
        self.column_number = Some(column);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }

    /// Location as `EXAMPLE[/side][:line[:col]]`
    pub fn location(&self) -> String {
        let mut location = self.example.clone();
        if let Some(side) = self.side {
            location.push('/');
            location.push_str(side.as_str());
        }
        match (self.line_number, self.column_number) {
            (Some(line), Some(col)) => location.push_str(&format!(":{line}:{col}")),
            (Some(line), None) => location.push_str(&format!(":{line}")),
            _ => {}
        }
        location
    }

    pub fn format_display(&self) -> String {
        format!(
            "{} [{}] {}: {}",
            self.location(),
            self.severity.as_str(),
            self.check_id,
            self.message
        )
    }
}

/// Count of findings by severity level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl FindingCounts {
    pub fn total(&self) -> usize {
        self.error + self.warning + self.info
    }

    pub fn has_blocking(&self) -> bool {
        self.error > 0
    }

    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.error += 1,
            Severity::Warning => self.warning += 1,
            Severity::Info => self.info += 1,
        }
    }
}

/// Summary statistics for a check run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Number of examples checked
    pub total_examples: usize,
    pub findings_by_severity: FindingCounts,
    pub execution_time_ms: u64,
    pub checked_at: DateTime<Utc>,
}

/// Result of checking a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
    pub summary: CheckSummary,
    /// Fingerprint of the catalog that was checked
    pub catalog_fingerprint: Option<String>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
            summary: CheckSummary {
                checked_at: Utc::now(),
                ..Default::default()
            },
            catalog_fingerprint: None,
        }
    }

    pub fn add_finding(&mut self, finding: Finding) {
        self.summary.findings_by_severity.add(finding.severity);
        self.findings.push(finding);
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.summary.findings_by_severity.has_blocking()
    }

    pub fn findings_for<'a>(&'a self, example: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings.iter().filter(move |f| f.example == example)
    }

    pub fn set_examples_checked(&mut self, count: usize) {
        self.summary.total_examples = count;
    }

    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }

    pub fn set_catalog_fingerprint(&mut self, fingerprint: impl Into<String>) {
        self.catalog_fingerprint = Some(fingerprint.into());
    }

    /// Order findings by severity (most severe first) and keep catalog order within a severity
    pub fn sort_findings(&mut self) {
        self.findings.sort_by(|a, b| b.severity.cmp(&a.severity));
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_location() {
        let finding = Finding::new("sample_parse_error", Severity::Error, "DRY", "expected `;`")
            .on_side(SampleSide::Compliant)
            .with_position(3, 14);

        assert_eq!(finding.location(), "DRY/compliant:3:14");
        assert!(finding.is_blocking());
        assert!(finding.format_display().contains("[error] sample_parse_error"));
    }

    #[test]
    fn test_report_counts() {
        let mut report = CheckReport::new();
        report.add_finding(Finding::new("missing_demo", Severity::Info, "X", "no demo"));
        report.add_finding(Finding::new("missing_key_points", Severity::Warning, "X", "none"));

        assert!(report.has_findings());
        assert!(!report.has_errors());
        assert_eq!(report.summary.findings_by_severity.total(), 2);

        report.add_finding(Finding::new("identical_samples", Severity::Error, "Y", "same"));
        assert!(report.has_errors());
        assert_eq!(report.findings_for("X").count(), 2);
    }

    #[test]
    fn test_sort_is_stable_within_severity() {
        let mut report = CheckReport::new();
        report.add_finding(Finding::new("a", Severity::Info, "first", "m"));
        report.add_finding(Finding::new("b", Severity::Error, "second", "m"));
        report.add_finding(Finding::new("c", Severity::Info, "third", "m"));
        report.sort_findings();

        let order: Vec<_> = report.findings.iter().map(|f| f.example.as_str()).collect();
        assert_eq!(order, vec!["second", "first", "third"]);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert_eq!(Severity::parse("WARNING"), Some(Severity::Warning));
    }
}

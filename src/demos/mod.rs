//! Runnable demonstrations of each built-in principle
//!
//! Architecture: Executable Documentation - the lesson is checked, not just described
//! - Each principle implements its violating and compliant variants as real functions
//! - Cases run both variants on the same input and state what should happen
//! - A refactoring case expects equal results; a substitution case expects the violating variant to fail

mod foundational;
mod solid;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// What a case expects from the two variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Both variants produce the same result
    Equivalent,
    /// The violating variant fails where the compliant one succeeds
    ViolatingFails,
}

impl Expectation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equivalent => "equivalent",
            Self::ViolatingFails => "violating fails",
        }
    }
}

/// Result of running both variants on one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCase {
    pub label: String,
    pub expectation: Expectation,
    pub violating: Result<String, String>,
    pub compliant: Result<String, String>,
}

impl DemoCase {
    pub fn new(
        label: impl Into<String>,
        expectation: Expectation,
        violating: Result<String, String>,
        compliant: Result<String, String>,
    ) -> Self {
        Self {
            label: label.into(),
            expectation,
            violating,
            compliant,
        }
    }

    /// Case over plain values that are expected to match
    pub fn equivalent<V: Debug, C: Debug>(label: impl Into<String>, violating: V, compliant: C) -> Self {
        Self::new(
            label,
            Expectation::Equivalent,
            Ok(format!("{violating:?}")),
            Ok(format!("{compliant:?}")),
        )
    }

    pub fn holds(&self) -> bool {
        match self.expectation {
            Expectation::Equivalent => self.violating == self.compliant,
            Expectation::ViolatingFails => self.violating.is_err() && self.compliant.is_ok(),
        }
    }
}

/// The cases produced by one run of a demonstration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoOutcome {
    pub principle: String,
    pub cases: Vec<DemoCase>,
}

impl DemoOutcome {
    pub fn holds(&self) -> bool {
        self.cases.iter().all(DemoCase::holds)
    }

    pub fn failed_cases(&self) -> impl Iterator<Item = &DemoCase> {
        self.cases.iter().filter(|c| !c.holds())
    }
}

/// A runnable demonstration for one principle
#[derive(Debug, Clone, Copy)]
pub struct Demonstration {
    pub principle: &'static str,
    /// One line describing what the cases exercise
    pub summary: &'static str,
    cases: fn() -> Vec<DemoCase>,
}

impl Demonstration {
    pub fn run(&self) -> DemoOutcome {
        let cases = (self.cases)();
        tracing::debug!("Demonstration {} ran {} cases", self.principle, cases.len());
        DemoOutcome {
            principle: self.principle.to_string(),
            cases,
        }
    }
}

static DEMONSTRATIONS: &[Demonstration] = &[
    Demonstration {
        principle: "DRY",
        summary: "Duplicated adders, validators, tax constants and age messages behave like their single-source versions",
        cases: foundational::dry_cases,
    },
    Demonstration {
        principle: "KISS",
        summary: "Compressed conditionals and their step-by-step rewrites agree on every input",
        cases: foundational::kiss_cases,
    },
    Demonstration {
        principle: "SRP",
        summary: "Splitting Employee into data, repository and mailer keeps the same side effects",
        cases: solid::srp_cases,
    },
    Demonstration {
        principle: "OCP",
        summary: "Trait-based shapes compute the same areas as the closed match",
        cases: solid::ocp_cases,
    },
    Demonstration {
        principle: "LSP",
        summary: "Substituting a penguin for a bird breaks fly but not travel",
        cases: solid::lsp_cases,
    },
    Demonstration {
        principle: "ISP",
        summary: "A simple printer behind a fat interface fails to scan; segregated traits never ask it to",
        cases: solid::isp_cases,
    },
    Demonstration {
        principle: "DIP",
        summary: "Injecting the notifier keeps the signup behavior of the hard-wired mailer",
        cases: solid::dip_cases,
    },
    Demonstration {
        principle: "YAGNI",
        summary: "The memoizing calculator and the speculative user manager add nothing observable",
        cases: foundational::yagni_cases,
    },
];

/// All demonstrations in catalog order
pub fn all() -> &'static [Demonstration] {
    DEMONSTRATIONS
}

/// Demonstration for a principle name, matched exactly
pub fn find(principle: &str) -> Option<&'static Demonstration> {
    DEMONSTRATIONS.iter().find(|d| d.principle == principle)
}

//! DRY, KISS and YAGNI

use crate::domain::examples::{CodeSample, PrincipleExample, PrincipleFamily};

pub(super) fn dry() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub fn add_two_numbers(a: i64, b: i64) -> i64 {
    a + b
}

pub fn add_three_numbers(a: i64, b: i64, c: i64) -> i64 {
    a + b + c
}

pub struct UserService;

impl UserService {
    pub fn create_user(&self, email: &str) -> Result<String, String> {
        if email.is_empty() || !email.contains('@') {
            return Err("Invalid email".to_string());
        }
        Ok(format!("User created with email: {email}"))
    }

    pub fn update_user(&self, email: &str) -> Result<String, String> {
        if email.is_empty() || !email.contains('@') {
            return Err("Invalid email".to_string());
        }
        Ok(format!("User updated with email: {email}"))
    }
}

pub fn order_total(net: f64) -> f64 {
    net * (1.0 + 0.15)
}

pub fn order_tax(net: f64) -> f64 {
    net * 0.15
}

pub struct ValidationService;

impl ValidationService {
    pub fn validate_age(&self, age: u32) -> Result<(), String> {
        if age < 18 {
            return Err("Age must be 18 or older to register".to_string());
        }
        Ok(())
    }

    pub fn check_user_age(&self, age: u32) -> Result<(), String> {
        if age < 18 {
            return Err("Age must be 18 or older to register".to_string());
        }
        Ok(())
    }
}
"#,
    )
    .with_caption("Adders, validation, the tax rate and the age message are written out at every use");

    let compliant = CodeSample::rust(
        r#"pub const TAX_RATE: f64 = 0.15;
const INVALID_EMAIL: &str = "Invalid email";
const AGE_ERROR_MESSAGE: &str = "Age must be 18 or older to register";
const MIN_AGE: u32 = 18;

pub fn add(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

pub struct UserService;

impl UserService {
    fn validate_email(email: &str) -> Result<(), String> {
        if email.is_empty() || !email.contains('@') {
            return Err(INVALID_EMAIL.to_string());
        }
        Ok(())
    }

    pub fn create_user(&self, email: &str) -> Result<String, String> {
        Self::validate_email(email)?;
        Ok(format!("User created with email: {email}"))
    }

    pub fn update_user(&self, email: &str) -> Result<String, String> {
        Self::validate_email(email)?;
        Ok(format!("User updated with email: {email}"))
    }
}

pub fn order_total(net: f64) -> f64 {
    net * (1.0 + TAX_RATE)
}

pub fn order_tax(net: f64) -> f64 {
    net * TAX_RATE
}

pub struct ValidationService;

impl ValidationService {
    fn require_adult(age: u32) -> Result<(), String> {
        if age < MIN_AGE {
            return Err(AGE_ERROR_MESSAGE.to_string());
        }
        Ok(())
    }

    pub fn validate_age(&self, age: u32) -> Result<(), String> {
        Self::require_adult(age)
    }

    pub fn check_user_age(&self, age: u32) -> Result<(), String> {
        Self::require_adult(age)
    }
}
"#,
    )
    .with_caption("One adder, one validator, one constant per fact");

    PrincipleExample::new("DRY", "Don't Repeat Yourself", violating, compliant)
        .in_family(PrincipleFamily::Foundational)
        .with_problem(
            "The same validation, constant or message is copied into several places and the copies drift apart.",
        )
        .with_rationale(
            "Every piece of knowledge gets a single home. Changing the email rule or the tax rate \
             is one edit instead of a hunt for copies, and the copies can no longer disagree.",
        )
        .with_key_points([
            "Extract repeated logic into a function or method",
            "Name repeated values as constants",
            "Keep error messages in one place",
            "If a change must be made in several places, the knowledge is duplicated",
        ])
}

pub(super) fn kiss() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub fn age_group(age: u32) -> &'static str {
    if age >= 18 { if age >= 65 { "Senior Adult" } else { "Adult" } } else if age >= 13 { "Teenager" } else { "Child" }
}

pub fn is_valid(name: &str, age: u32, email: &str) -> bool {
    !(name.is_empty()) && !(age < 18 || age > 100) && !(!email.contains('@'))
}
"#,
    )
    .with_caption("Nested conditionals and double negations packed onto one line");

    let compliant = CodeSample::rust(
        r#"pub fn age_group(age: u32) -> &'static str {
    match age {
        65.. => "Senior Adult",
        18.. => "Adult",
        13.. => "Teenager",
        _ => "Child",
    }
}

pub fn is_valid(name: &str, age: u32, email: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if !(18..=100).contains(&age) {
        return false;
    }
    email.contains('@')
}
"#,
    )
    .with_caption("One decision per line");

    PrincipleExample::new("KISS", "Keep It Simple, Stupid", violating, compliant)
        .in_family(PrincipleFamily::Foundational)
        .with_problem("Clever, compressed logic is hard to read, review and change.")
        .with_rationale(
            "Code is read far more often than it is written. Splitting a decision into plain \
             steps gives the same behavior with nothing for the reader to decode.",
        )
        .with_key_points([
            "Break complex expressions into named steps",
            "Avoid nested conditional expressions",
            "Prefer early returns over compound boolean logic",
            "Do not optimize until it is needed",
        ])
}

pub(super) fn yagni() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"use std::collections::HashMap;

pub struct UserManager {
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    credit_score: Option<u32>,
}

impl UserManager {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company: None,
            credit_score: None,
        }
    }

    pub fn set_company(&mut self, _company: &str) {}
    pub fn update_credit_score(&mut self, _score: u32) {}
}

#[derive(Default)]
pub struct Calculator {
    cache: HashMap<(i64, i64), i64>,
}

impl Calculator {
    pub fn add(&mut self, a: i64, b: i64) -> i64 {
        *self.cache.entry((a, b)).or_insert(a + b)
    }
}
"#,
    )
    .with_caption("Fields, hooks and a cache nobody asked for");

    let compliant = CodeSample::rust(
        r#"pub struct UserManager {
    name: String,
    email: String,
}

impl UserManager {
    pub fn new(name: &str, email: &str) -> Self {
        Self { name: name.to_string(), email: email.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

pub struct Calculator;

impl Calculator {
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}
"#,
    )
    .with_caption("Only what today's requirements use");

    PrincipleExample::new("YAGNI", "You Aren't Gonna Need It", violating, compliant)
        .in_family(PrincipleFamily::Foundational)
        .with_problem(
            "Speculative fields, methods and optimizations are built before anything needs them.",
        )
        .with_rationale(
            "Unused code still has to be read, tested and kept compiling. Building only what is \
             requested keeps the design small; adding a feature later is cheaper than untangling \
             one that was never used.",
        )
        .with_key_points([
            "Build only what is requested now",
            "Add features when a real need appears",
            "Start simple and let the design evolve",
            "Ask \"do I need this now?\"",
        ])
}

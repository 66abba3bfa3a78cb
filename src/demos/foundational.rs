//! DRY, KISS and YAGNI demonstrations

use super::DemoCase;

mod dry {
    pub mod violating {
        pub fn add_two_numbers(a: i64, b: i64) -> i64 {
            a + b
        }

        pub fn add_three_numbers(a: i64, b: i64, c: i64) -> i64 {
            a + b + c
        }

        pub fn create_user(email: &str) -> Result<String, String> {
            if email.is_empty() || !email.contains('@') {
                return Err("Invalid email".to_string());
            }
            Ok(format!("User created with email: {email}"))
        }

        pub fn update_user(email: &str) -> Result<String, String> {
            if email.is_empty() || !email.contains('@') {
                return Err("Invalid email".to_string());
            }
            Ok(format!("User updated with email: {email}"))
        }

        pub fn order_total(net: f64) -> f64 {
            net * (1.0 + 0.15)
        }

        pub fn validate_age(age: u32) -> Result<(), String> {
            if age < 18 {
                return Err("Age must be 18 or older to register".to_string());
            }
            Ok(())
        }

        pub fn check_user_age(age: u32) -> Result<(), String> {
            if age < 18 {
                return Err("Age must be 18 or older to register".to_string());
            }
            Ok(())
        }
    }

    pub mod compliant {
        const TAX_RATE: f64 = 0.15;
        const INVALID_EMAIL: &str = "Invalid email";
        const AGE_ERROR_MESSAGE: &str = "Age must be 18 or older to register";
        const MIN_AGE: u32 = 18;

        pub fn add(numbers: &[i64]) -> i64 {
            numbers.iter().sum()
        }

        fn validate_email(email: &str) -> Result<(), String> {
            if email.is_empty() || !email.contains('@') {
                return Err(INVALID_EMAIL.to_string());
            }
            Ok(())
        }

        pub fn create_user(email: &str) -> Result<String, String> {
            validate_email(email)?;
            Ok(format!("User created with email: {email}"))
        }

        pub fn update_user(email: &str) -> Result<String, String> {
            validate_email(email)?;
            Ok(format!("User updated with email: {email}"))
        }

        pub fn order_total(net: f64) -> f64 {
            net * (1.0 + TAX_RATE)
        }

        fn require_adult(age: u32) -> Result<(), String> {
            if age < MIN_AGE {
                return Err(AGE_ERROR_MESSAGE.to_string());
            }
            Ok(())
        }

        pub fn validate_age(age: u32) -> Result<(), String> {
            require_adult(age)
        }

        pub fn check_user_age(age: u32) -> Result<(), String> {
            require_adult(age)
        }
    }
}

pub(super) fn dry_cases() -> Vec<DemoCase> {
    use super::Expectation;
    use dry::{compliant, violating};

    let mut cases = vec![
        DemoCase::equivalent(
            "add 2 + 3",
            violating::add_two_numbers(2, 3),
            compliant::add(&[2, 3]),
        ),
        DemoCase::equivalent(
            "add 1 + 2 + 3",
            violating::add_three_numbers(1, 2, 3),
            compliant::add(&[1, 2, 3]),
        ),
        DemoCase::equivalent(
            "order total of 200.00",
            format!("{:.2}", violating::order_total(200.0)),
            format!("{:.2}", compliant::order_total(200.0)),
        ),
    ];

    for email in ["ada@example.com", "", "no-at-sign"] {
        cases.push(DemoCase::new(
            format!("create user {email:?}"),
            Expectation::Equivalent,
            violating::create_user(email),
            compliant::create_user(email),
        ));
        cases.push(DemoCase::new(
            format!("update user {email:?}"),
            Expectation::Equivalent,
            violating::update_user(email),
            compliant::update_user(email),
        ));
    }

    for age in [17, 18, 40] {
        cases.push(DemoCase::new(
            format!("validate age {age}"),
            Expectation::Equivalent,
            violating::validate_age(age).map(|()| "accepted".to_string()),
            compliant::validate_age(age).map(|()| "accepted".to_string()),
        ));
        cases.push(DemoCase::new(
            format!("check user age {age}"),
            Expectation::Equivalent,
            violating::check_user_age(age).map(|()| "accepted".to_string()),
            compliant::check_user_age(age).map(|()| "accepted".to_string()),
        ));
    }

    cases
}

mod kiss {
    pub mod violating {
        #[rustfmt::skip]
        pub fn age_group(age: u32) -> &'static str {
            if age >= 18 { if age >= 65 { "Senior Adult" } else { "Adult" } } else if age >= 13 { "Teenager" } else { "Child" }
        }

        pub fn calculate(a: i64, b: i64, c: i64) -> i64 {
            if (a * 2) + (b * 3) - c > 0 {
                (a * 2) + (b * 3) - c
            } else {
                ((a * 2) + (b * 3) - c).abs()
            }
        }

        #[allow(clippy::nonminimal_bool)]
        pub fn is_valid(name: &str, age: u32, email: &str) -> bool {
            !(name.is_empty()) && !(age < 18 || age > 100) && !(!email.contains('@'))
        }
    }

    pub mod compliant {
        pub fn age_group(age: u32) -> &'static str {
            if age >= 65 {
                return "Senior Adult";
            }
            if age >= 18 {
                return "Adult";
            }
            if age >= 13 {
                return "Teenager";
            }
            "Child"
        }

        pub fn calculate(a: i64, b: i64, c: i64) -> i64 {
            let result = (a * 2) + (b * 3) - c;
            result.abs()
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
    }
}

pub(super) fn kiss_cases() -> Vec<DemoCase> {
    use kiss::{compliant, violating};

    let mut cases = Vec::new();

    for age in [5, 12, 13, 17, 18, 64, 65, 90] {
        cases.push(DemoCase::equivalent(
            format!("age group of {age}"),
            violating::age_group(age),
            compliant::age_group(age),
        ));
    }

    for (a, b, c) in [(1, 2, 3), (0, 0, 10), (-4, 1, 0)] {
        cases.push(DemoCase::equivalent(
            format!("calculate({a}, {b}, {c})"),
            violating::calculate(a, b, c),
            compliant::calculate(a, b, c),
        ));
    }

    for (name, age, email) in [
        ("Ada", 36, "ada@example.com"),
        ("", 36, "ada@example.com"),
        ("Ada", 17, "ada@example.com"),
        ("Ada", 101, "ada@example.com"),
        ("Ada", 36, "ada.example.com"),
    ] {
        cases.push(DemoCase::equivalent(
            format!("is_valid({name:?}, {age}, {email:?})"),
            violating::is_valid(name, age, email),
            compliant::is_valid(name, age, email),
        ));
    }

    cases
}

mod yagni {
    pub mod violating {
        use std::collections::HashMap;

        #[allow(dead_code)]
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

            pub fn describe(&self) -> String {
                format!("{} <{}>", self.name, self.email)
            }
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
    }

    pub mod compliant {
        pub struct UserManager {
            name: String,
            email: String,
        }

        impl UserManager {
            pub fn new(name: &str, email: &str) -> Self {
                Self {
                    name: name.to_string(),
                    email: email.to_string(),
                }
            }

            pub fn describe(&self) -> String {
                format!("{} <{}>", self.name, self.email)
            }
        }

        pub struct Calculator;

        impl Calculator {
            pub fn add(&self, a: i64, b: i64) -> i64 {
                a + b
            }
        }
    }
}

pub(super) fn yagni_cases() -> Vec<DemoCase> {
    use yagni::{compliant, violating};

    let mut speculative = violating::Calculator::default();
    let simple = compliant::Calculator;

    let mut cases = Vec::new();
    // the repeated pair exercises the cache hit path
    for (a, b) in [(2, 3), (2, 3), (-7, 7)] {
        cases.push(DemoCase::equivalent(
            format!("add({a}, {b})"),
            speculative.add(a, b),
            simple.add(a, b),
        ));
    }

    cases.push(DemoCase::equivalent(
        "describe user",
        violating::UserManager::new("Ada", "ada@example.com").describe(),
        compliant::UserManager::new("Ada", "ada@example.com").describe(),
    ));

    cases
}

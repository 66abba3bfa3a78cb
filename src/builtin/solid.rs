//! The five SOLID principles

use crate::domain::examples::{CodeSample, PrincipleExample, PrincipleFamily};

pub(super) fn srp() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub struct Employee {
    pub name: String,
    pub email: String,
}

impl Employee {
    pub fn save_to_database(&self, db: &mut Vec<String>) {
        db.push(format!("{},{}", self.name, self.email));
    }

    pub fn send_email(&self, outbox: &mut Vec<String>) {
        outbox.push(format!("To: {}", self.email));
    }
}
"#,
    )
    .with_caption("Employee holds data, persists itself and sends mail");

    let compliant = CodeSample::rust(
        r#"pub struct Employee {
    pub name: String,
    pub email: String,
}

pub struct EmployeeRepository {
    rows: Vec<String>,
}

impl EmployeeRepository {
    pub fn save(&mut self, employee: &Employee) {
        self.rows.push(format!("{},{}", employee.name, employee.email));
    }
}

pub struct EmailService {
    outbox: Vec<String>,
}

impl EmailService {
    pub fn send(&mut self, employee: &Employee) {
        self.outbox.push(format!("To: {}", employee.email));
    }
}
"#,
    )
    .with_caption("Data, persistence and mail each have their own type");

    PrincipleExample::new("SRP", "Single Responsibility Principle", violating, compliant)
        .in_family(PrincipleFamily::Solid)
        .with_problem(
            "One type mixes data, storage and messaging, so it changes whenever any of them does.",
        )
        .with_rationale(
            "A type should have one reason to change. With storage and email pulled out, a new \
             database or mail provider touches exactly one type and leaves Employee alone.",
        )
        .with_key_points([
            "A type should have only one reason to change",
            "Identify the separate responsibilities inside a large type",
            "Compose small focused types instead",
        ])
}

pub(super) fn ocp() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
}

pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Rectangle { width, height } => width * height,
        Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
    }
}
"#,
    )
    .with_caption("Every new shape means editing the central match");

    let compliant = CodeSample::rust(
        r#"pub trait Shape {
    fn area(&self) -> f64;
}

pub struct Rectangle { pub width: f64, pub height: f64 }
pub struct Circle { pub radius: f64 }
pub struct Triangle { pub base: f64, pub height: f64 }

impl Shape for Rectangle {
    fn area(&self) -> f64 { self.width * self.height }
}

impl Shape for Circle {
    fn area(&self) -> f64 { std::f64::consts::PI * self.radius * self.radius }
}

impl Shape for Triangle {
    fn area(&self) -> f64 { 0.5 * self.base * self.height }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}
"#,
    )
    .with_caption("New shapes implement the trait; total_area never changes");

    PrincipleExample::new("OCP", "Open-Closed Principle", violating, compliant)
        .in_family(PrincipleFamily::Solid)
        .with_problem("Adding a variant forces edits to code that already works and is tested.")
        .with_rationale(
            "Code should be open for extension and closed for modification. A trait gives an \
             extension point: Triangle was added without touching total_area.",
        )
        .with_key_points([
            "Open for extension: add behavior with new types",
            "Closed for modification: existing, tested code stays as it is",
            "Traits are the usual extension point",
        ])
}

pub(super) fn lsp() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub trait Bird {
    fn fly(&self) -> Result<String, String>;
}

pub struct Eagle;
pub struct Penguin;

impl Bird for Eagle {
    fn fly(&self) -> Result<String, String> {
        Ok("Eagle soars high in the sky".to_string())
    }
}

impl Bird for Penguin {
    fn fly(&self) -> Result<String, String> {
        Err("Penguins cannot fly!".to_string())
    }
}
"#,
    )
    .with_caption("Penguin implements Bird but cannot honor fly");

    let compliant = CodeSample::rust(
        r#"pub trait Bird {
    fn travel(&self) -> String;
    fn eat(&self) -> String;
}

pub trait Flying: Bird {
    fn fly(&self) -> String;
}

pub trait Swimming: Bird {
    fn swim(&self) -> String;
}

pub struct Eagle;
pub struct Penguin;

impl Bird for Eagle {
    fn travel(&self) -> String { self.fly() }
    fn eat(&self) -> String { "Eagle is eating seeds".to_string() }
}

impl Flying for Eagle {
    fn fly(&self) -> String { "Eagle soars majestically".to_string() }
}

impl Bird for Penguin {
    fn travel(&self) -> String { self.swim() }
    fn eat(&self) -> String { "Penguin is eating fish".to_string() }
}

impl Swimming for Penguin {
    fn swim(&self) -> String { "Penguin swims gracefully underwater".to_string() }
}
"#,
    )
    .with_caption("Bird promises only what every bird can do");

    PrincipleExample::new("LSP", "Liskov Substitution Principle", violating, compliant)
        .in_family(PrincipleFamily::Solid)
        .with_problem(
            "An implementation cannot keep the contract of its abstraction and fails where callers expect success.",
        )
        .with_rationale(
            "Any implementation must be usable wherever the abstraction is expected. Moving fly \
             into its own trait means code written against Bird works for eagles and penguins alike.",
        )
        .with_key_points([
            "Implementations must be substitutable for their abstraction",
            "Do not weaken preconditions or strengthen postconditions",
            "Do not introduce new failures in overriding behavior",
            "Model capabilities that only some types have as separate traits",
        ])
}

pub(super) fn isp() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub trait Machine {
    fn print(&self, doc: &str) -> Result<String, String>;
    fn scan(&self, doc: &str) -> Result<String, String>;
    fn fax(&self, doc: &str) -> Result<String, String>;
}

pub struct SimplePrinter;

impl Machine for SimplePrinter {
    fn print(&self, doc: &str) -> Result<String, String> {
        Ok(format!("Printing {doc}"))
    }

    fn scan(&self, _doc: &str) -> Result<String, String> {
        Err("Cannot scan".to_string())
    }

    fn fax(&self, _doc: &str) -> Result<String, String> {
        Err("Cannot fax".to_string())
    }
}
"#,
    )
    .with_caption("A simple printer is forced to implement scan and fax");

    let compliant = CodeSample::rust(
        r#"pub trait Printable {
    fn print(&self, doc: &str) -> String;
}

pub trait Scannable {
    fn scan(&self, doc: &str) -> String;
}

pub trait Faxable {
    fn fax(&self, doc: &str) -> String;
}

pub struct SimplePrinter;
pub struct MultiFunctionPrinter;

impl Printable for SimplePrinter {
    fn print(&self, doc: &str) -> String { format!("Printing {doc}") }
}

impl Printable for MultiFunctionPrinter {
    fn print(&self, doc: &str) -> String { format!("Printing {doc}") }
}

impl Scannable for MultiFunctionPrinter {
    fn scan(&self, doc: &str) -> String { format!("Scanning {doc}") }
}

impl Faxable for MultiFunctionPrinter {
    fn fax(&self, doc: &str) -> String { format!("Faxing {doc}") }
}
"#,
    )
    .with_caption("Small traits; each type implements only what it supports");

    PrincipleExample::new("ISP", "Interface Segregation Principle", violating, compliant)
        .in_family(PrincipleFamily::Solid)
        .with_problem("A fat interface forces implementers to stub out methods they cannot support.")
        .with_rationale(
            "Clients should not depend on methods they do not use. Splitting the interface means \
             a simple printer cannot even be asked to scan, so the failure case disappears.",
        )
        .with_key_points([
            "Split large interfaces into small, focused ones",
            "Implement only the capabilities a type really has",
            "Combine several small traits when a type needs more",
        ])
}

pub(super) fn dip() -> PrincipleExample {
    let violating = CodeSample::rust(
        r#"pub struct SmtpMailer;

impl SmtpMailer {
    pub fn send(&self, to: &str, body: &str) -> String {
        format!("SMTP to {to}: {body}")
    }
}

pub struct SignupService {
    mailer: SmtpMailer,
}

impl SignupService {
    pub fn new() -> Self {
        Self { mailer: SmtpMailer }
    }

    pub fn sign_up(&self, email: &str) -> String {
        self.mailer.send(email, "Welcome!")
    }
}
"#,
    )
    .with_caption("The service builds and depends on a concrete mailer");

    let compliant = CodeSample::rust(
        r#"pub trait Notifier {
    fn notify(&self, to: &str, body: &str) -> String;
}

pub struct SmtpMailer;

impl Notifier for SmtpMailer {
    fn notify(&self, to: &str, body: &str) -> String {
        format!("SMTP to {to}: {body}")
    }
}

pub struct SignupService<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> SignupService<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn sign_up(&self, email: &str) -> String {
        self.notifier.notify(email, "Welcome!")
    }
}
"#,
    )
    .with_caption("The service depends on an abstraction it is handed");

    PrincipleExample::new("DIP", "Dependency Inversion Principle", violating, compliant)
        .in_family(PrincipleFamily::Solid)
        .with_problem(
            "High-level policy constructs and depends on low-level details, so it cannot be reused or tested in isolation.",
        )
        .with_rationale(
            "High-level modules and low-level modules should both depend on abstractions. \
             SignupService now works with any Notifier, including a test double.",
        )
        .with_key_points([
            "Depend on abstractions, not concrete types",
            "Let the caller supply dependencies",
            "Details implement the abstraction the policy defines",
        ])
}

//! SOLID demonstrations

use super::{DemoCase, Expectation};

mod srp {
    pub mod violating {
        pub struct Employee {
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
    }

    pub mod compliant {
        pub struct Employee {
            pub name: String,
            pub email: String,
        }

        #[derive(Default)]
        pub struct EmployeeRepository {
            pub rows: Vec<String>,
        }

        impl EmployeeRepository {
            pub fn save(&mut self, employee: &Employee) {
                self.rows.push(format!("{},{}", employee.name, employee.email));
            }
        }

        #[derive(Default)]
        pub struct EmailService {
            pub outbox: Vec<String>,
        }

        impl EmailService {
            pub fn send(&mut self, employee: &Employee) {
                self.outbox.push(format!("To: {}", employee.email));
            }
        }
    }
}

pub(super) fn srp_cases() -> Vec<DemoCase> {
    use srp::{compliant, violating};

    let mut db = Vec::new();
    let mut outbox = Vec::new();
    let employee = violating::Employee {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
    };
    employee.save_to_database(&mut db);
    employee.send_email(&mut outbox);

    let mut repository = compliant::EmployeeRepository::default();
    let mut mailer = compliant::EmailService::default();
    let data = compliant::Employee {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
    };
    repository.save(&data);
    mailer.send(&data);

    vec![
        DemoCase::equivalent("persisted rows", &db, &repository.rows),
        DemoCase::equivalent("sent mail", &outbox, &mailer.outbox),
    ]
}

mod ocp {
    pub mod violating {
        pub enum Shape {
            Rectangle { width: f64, height: f64 },
            Circle { radius: f64 },
        }

        pub fn area(shape: &Shape) -> f64 {
            match shape {
                Shape::Rectangle { width, height } => width * height,
                Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
            }
        }
    }

    pub mod compliant {
        pub trait Shape {
            fn area(&self) -> f64;
        }

        pub struct Rectangle {
            pub width: f64,
            pub height: f64,
        }

        pub struct Circle {
            pub radius: f64,
        }

        pub struct Triangle {
            pub base: f64,
            pub height: f64,
        }

        impl Shape for Rectangle {
            fn area(&self) -> f64 {
                self.width * self.height
            }
        }

        impl Shape for Circle {
            fn area(&self) -> f64 {
                std::f64::consts::PI * self.radius * self.radius
            }
        }

        impl Shape for Triangle {
            fn area(&self) -> f64 {
                0.5 * self.base * self.height
            }
        }

        pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
            shapes.iter().map(|s| s.area()).sum()
        }
    }
}

pub(super) fn ocp_cases() -> Vec<DemoCase> {
    use ocp::{compliant, violating};

    let closed = [
        violating::Shape::Rectangle {
            width: 5.0,
            height: 3.0,
        },
        violating::Shape::Circle { radius: 4.0 },
    ];
    let closed_total: f64 = closed.iter().map(violating::area).sum();

    let open: Vec<Box<dyn compliant::Shape>> = vec![
        Box::new(compliant::Rectangle {
            width: 5.0,
            height: 3.0,
        }),
        Box::new(compliant::Circle { radius: 4.0 }),
    ];

    let mut extended = open;
    let open_total = compliant::total_area(&extended);
    extended.push(Box::new(compliant::Triangle {
        base: 6.0,
        height: 4.0,
    }));

    vec![
        DemoCase::equivalent(
            "total area of rectangle and circle",
            format!("{closed_total:.4}"),
            format!("{open_total:.4}"),
        ),
        DemoCase::new(
            "triangle added without touching total_area",
            Expectation::Equivalent,
            Ok(format!("{:.4}", open_total + 12.0)),
            Ok(format!("{:.4}", compliant::total_area(&extended))),
        ),
    ]
}

mod lsp {
    pub mod violating {
        pub trait Bird {
            fn fly(&self) -> Result<String, String>;
        }

        pub struct Eagle;
        pub struct Penguin;

        impl Bird for Eagle {
            fn fly(&self) -> Result<String, String> {
                Ok("Eagle soars".to_string())
            }
        }

        impl Bird for Penguin {
            fn fly(&self) -> Result<String, String> {
                Err("Penguins cannot fly!".to_string())
            }
        }

        /// Caller written against the Bird contract
        pub fn make_bird_move(bird: &dyn Bird) -> Result<String, String> {
            bird.fly()
        }
    }

    pub mod compliant {
        pub trait Bird {
            fn travel(&self) -> String;
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
            fn travel(&self) -> String {
                self.fly()
            }
        }

        impl Flying for Eagle {
            fn fly(&self) -> String {
                "Eagle soars".to_string()
            }
        }

        impl Bird for Penguin {
            fn travel(&self) -> String {
                self.swim()
            }
        }

        impl Swimming for Penguin {
            fn swim(&self) -> String {
                "Penguin swims underwater".to_string()
            }
        }

        pub fn make_bird_move(bird: &dyn Bird) -> Result<String, String> {
            Ok(bird.travel())
        }
    }
}

pub(super) fn lsp_cases() -> Vec<DemoCase> {
    use lsp::{compliant, violating};

    vec![
        DemoCase::new(
            "eagle moves",
            Expectation::Equivalent,
            violating::make_bird_move(&violating::Eagle),
            compliant::make_bird_move(&compliant::Eagle),
        ),
        DemoCase::new(
            "penguin substituted for bird",
            Expectation::ViolatingFails,
            violating::make_bird_move(&violating::Penguin),
            compliant::make_bird_move(&compliant::Penguin),
        ),
    ]
}

mod isp {
    pub mod violating {
        #[allow(dead_code)]
        pub trait Machine {
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

        /// Office workflow that only knows the fat interface
        pub fn scan_with(machine: &dyn Machine, doc: &str) -> Result<String, String> {
            machine.scan(doc)
        }
    }

    pub mod compliant {
        pub trait Printable {
            fn print(&self, doc: &str) -> String;
        }

        pub trait Scannable {
            fn scan(&self, doc: &str) -> String;
        }

        pub struct SimplePrinter;
        pub struct MultiFunctionPrinter;

        impl Printable for SimplePrinter {
            fn print(&self, doc: &str) -> String {
                format!("Printing {doc}")
            }
        }

        impl Printable for MultiFunctionPrinter {
            fn print(&self, doc: &str) -> String {
                format!("Printing {doc}")
            }
        }

        impl Scannable for MultiFunctionPrinter {
            fn scan(&self, doc: &str) -> String {
                format!("Scanning {doc}")
            }
        }

        /// Only accepts devices that can scan
        pub fn scan_with(scanner: &dyn Scannable, doc: &str) -> Result<String, String> {
            Ok(scanner.scan(doc))
        }
    }
}

pub(super) fn isp_cases() -> Vec<DemoCase> {
    use isp::compliant::Printable;
    use isp::violating::Machine;
    use isp::{compliant, violating};

    vec![
        DemoCase::new(
            "print a report",
            Expectation::Equivalent,
            violating::SimplePrinter.print("report"),
            Ok(compliant::SimplePrinter.print("report")),
        ),
        DemoCase::new(
            "scan a report",
            Expectation::ViolatingFails,
            violating::scan_with(&violating::SimplePrinter, "report"),
            compliant::scan_with(&compliant::MultiFunctionPrinter, "report"),
        ),
        DemoCase::new(
            "multifunction device prints",
            Expectation::Equivalent,
            Ok("Printing report".to_string()),
            Ok(compliant::MultiFunctionPrinter.print("report")),
        ),
    ]
}

mod dip {
    pub mod violating {
        pub struct SmtpMailer;

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
    }

    pub mod compliant {
        use std::cell::RefCell;

        pub trait Notifier {
            fn notify(&self, to: &str, body: &str) -> String;
        }

        pub struct SmtpMailer;

        impl Notifier for SmtpMailer {
            fn notify(&self, to: &str, body: &str) -> String {
                format!("SMTP to {to}: {body}")
            }
        }

        /// Test double that records instead of sending
        #[derive(Default)]
        pub struct RecordingNotifier {
            pub sent: RefCell<Vec<String>>,
        }

        impl Notifier for RecordingNotifier {
            fn notify(&self, to: &str, body: &str) -> String {
                let line = format!("recorded for {to}: {body}");
                self.sent.borrow_mut().push(line.clone());
                line
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

            pub fn notifier(&self) -> &N {
                &self.notifier
            }
        }
    }
}

pub(super) fn dip_cases() -> Vec<DemoCase> {
    use dip::{compliant, violating};

    let hard_wired = violating::SignupService::new();
    let injected = compliant::SignupService::new(compliant::SmtpMailer);

    let recording = compliant::SignupService::new(compliant::RecordingNotifier::default());
    recording.sign_up("ada@example.com");
    let recorded = recording.notifier().sent.borrow().len();

    vec![
        DemoCase::equivalent(
            "sign up over SMTP",
            hard_wired.sign_up("ada@example.com"),
            injected.sign_up("ada@example.com"),
        ),
        DemoCase::equivalent("test double records one message", 1, recorded),
    ]
}

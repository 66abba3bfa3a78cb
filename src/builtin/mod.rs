//! Built-in principle demonstrations
//!
//! Architecture: Embedded Defaults - the standard lessons ship with the crate, like a default configuration
//! - Entries are plain data records built at startup
//! - Order here is the order the catalog lists them

mod foundational;
mod solid;

use crate::catalog::ExampleCatalog;
use crate::domain::examples::{CatalogResult, PrincipleExample};

/// Names of the built-in entries, in registration order
pub const BUILTIN_NAMES: &[&str] = &["DRY", "KISS", "SRP", "OCP", "LSP", "ISP", "DIP", "YAGNI"];

/// All built-in entries in registration order
pub fn entries() -> Vec<PrincipleExample> {
    vec![
        foundational::dry(),
        foundational::kiss(),
        solid::srp(),
        solid::ocp(),
        solid::lsp(),
        solid::isp(),
        solid::dip(),
        foundational::yagni(),
    ]
}

/// Catalog holding only the built-in entries
pub fn catalog() -> CatalogResult<ExampleCatalog> {
    ExampleCatalog::from_examples(entries())
}

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::examples::PrincipleFamily;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = catalog().unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, BUILTIN_NAMES);
    }

    #[test]
    fn test_every_entry_is_complete() {
        for example in entries() {
            assert!(!example.problem.is_empty(), "{} has no problem", example.name);
            assert!(!example.key_points.is_empty(), "{} has no key points", example.name);
            assert_ne!(example.violating.code, example.compliant.code);
            assert!(example.violating.caption.is_some());
            assert!(example.compliant.caption.is_some());
        }
    }

    #[test]
    fn test_five_solid_principles() {
        let catalog = catalog().unwrap();
        let solid: Vec<_> = catalog
            .by_family(PrincipleFamily::Solid)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(solid, vec!["SRP", "OCP", "LSP", "ISP", "DIP"]);
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("YAGNI"));
        assert!(!is_builtin("GRASP"));
    }
}

//! Structural inspection of Rust code samples using syn
//!
//! Architecture: Specialized Analysis Service - samples stay opaque text in the catalog
//! - Rust samples are parsed on demand to prove they are well-formed
//! - A visitor collects the items a sample declares so listings can summarize it
//! - Samples in other languages are passed over

use crate::domain::examples::{CatalogError, CatalogResult, CodeSample};
use quote::ToTokens;
use serde::{Deserialize, Serialize};
use syn::visit::Visit;

/// Items declared by a Rust sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOutline {
    pub structs: Vec<String>,
    pub enums: Vec<String>,
    pub traits: Vec<String>,
    /// `Type` for inherent impls, `Trait for Type` for trait impls
    pub impls: Vec<String>,
    /// Function and method signatures
    pub functions: Vec<String>,
    pub constants: Vec<String>,
}

impl SampleOutline {
    pub fn item_count(&self) -> usize {
        self.structs.len()
            + self.enums.len()
            + self.traits.len()
            + self.impls.len()
            + self.functions.len()
            + self.constants.len()
    }

    /// Short human summary such as `2 structs, 1 trait, 3 fns`
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (self.structs.len(), "struct", "structs"),
            (self.enums.len(), "enum", "enums"),
            (self.traits.len(), "trait", "traits"),
            (self.impls.len(), "impl", "impls"),
            (self.functions.len(), "fn", "fns"),
            (self.constants.len(), "const", "consts"),
        ]
        .iter()
        .filter(|(count, _, _)| *count > 0)
        .map(|(count, one, many)| format!("{count} {}", if *count == 1 { one } else { many }))
        .collect();

        if parts.is_empty() {
            "no items".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Parse a sample and outline its items; `Ok(None)` for samples that are not Rust
pub fn inspect(sample: &CodeSample) -> CatalogResult<Option<SampleOutline>> {
    if !sample.is_rust() {
        tracing::debug!("Skipping {} sample", sample.language);
        return Ok(None);
    }

    let syntax_tree = syn::parse_file(&sample.code).map_err(|e| parse_error(sample, &e))?;

    let mut visitor = OutlineVisitor::default();
    visitor.visit_file(&syntax_tree);
    Ok(Some(visitor.outline))
}

fn parse_error(sample: &CodeSample, error: &syn::Error) -> CatalogError {
    let start: proc_macro2::LineColumn = error.span().start();
    CatalogError::Sample {
        caption: sample.caption.clone().unwrap_or_else(|| "sample".to_string()),
        line: start.line,
        column: start.column + 1,
        message: error.to_string(),
    }
}

#[derive(Default)]
struct OutlineVisitor {
    outline: SampleOutline,
}

impl<'ast> Visit<'ast> for OutlineVisitor {
    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        self.outline.structs.push(node.ident.to_string());
        syn::visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        self.outline.enums.push(node.ident.to_string());
        syn::visit::visit_item_enum(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        self.outline.traits.push(node.ident.to_string());
        syn::visit::visit_item_trait(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        let self_ty = node.self_ty.to_token_stream().to_string();
        let label = match &node.trait_ {
            Some((_, path, _)) => format!("{} for {}", path.to_token_stream(), self_ty),
            None => self_ty,
        };
        self.outline.impls.push(label);
        syn::visit::visit_item_impl(self, node);
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.outline.functions.push(node.sig.to_token_stream().to_string());
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.outline.functions.push(node.sig.to_token_stream().to_string());
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_item_const(&mut self, node: &'ast syn::ItemConst) {
        self.outline.constants.push(node.ident.to_string());
        syn::visit::visit_item_const(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_outline_collects_items() {
        let sample = CodeSample::rust(
            r#"
            const RATE: f64 = 0.15;
            pub trait Shape { fn area(&self) -> f64; }
            pub struct Circle { radius: f64 }
            impl Shape for Circle {
                fn area(&self) -> f64 { self.radius }
            }
            fn helper() {}
            "#,
        );

        let outline = inspect(&sample).unwrap().unwrap();
        assert_eq!(outline.structs, vec!["Circle"]);
        assert_eq!(outline.traits, vec!["Shape"]);
        assert_eq!(outline.impls, vec!["Shape for Circle"]);
        assert_eq!(outline.constants, vec!["RATE"]);
        assert_eq!(outline.functions.len(), 2);
        assert!(outline.functions.iter().any(|f| f.starts_with("fn helper")));
        assert_eq!(outline.summary(), "1 struct, 1 trait, 1 impl, 2 fns, 1 const");
    }

    #[test]
    fn test_parse_error_has_position() {
        let sample = CodeSample::rust("fn ok() {}\nfn broken() { let = 5; }\n").with_caption("broken sample");

        match inspect(&sample).unwrap_err() {
            CatalogError::Sample { caption, line, column, .. } => {
                assert_eq!(caption, "broken sample");
                assert_eq!(line, 2);
                assert!(column >= 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_rust_sample_is_skipped() {
        let sample = CodeSample::new("java", "class Bad {}");
        assert!(inspect(&sample).unwrap().is_none());
    }

    #[test]
    fn test_empty_outline_summary() {
        let outline = inspect(&CodeSample::rust("")).unwrap().unwrap();
        assert_eq!(outline.item_count(), 0);
        assert_eq!(outline.summary(), "no items");
    }

    #[test]
    fn test_builtin_samples_parse() {
        for example in builtin::entries() {
            for sample in [&example.violating, &example.compliant] {
                let outline = inspect(sample)
                    .unwrap_or_else(|e| panic!("{}: {e}", example.name))
                    .unwrap();
                assert!(outline.item_count() > 0, "{} has an empty sample", example.name);
            }
        }
    }
}

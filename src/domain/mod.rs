//! Domain models for the principle catalog
//!
//! Architecture: Rich Domain Models - Examples enforce their own invariants
//! - PrincipleExample validates itself before the catalog accepts it
//! - CheckReport aggregates findings produced by catalog checks

pub mod examples;
pub mod findings;

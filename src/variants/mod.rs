//! # Variant Catalog
//!
//! The registry of poker variant descriptors and their street schedules.

pub mod catalog;

pub use catalog::{EvalKind, Street, StreetKind, TypeDescriptor, TypeRegistry};

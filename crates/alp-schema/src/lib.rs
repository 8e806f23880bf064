//! # alp-schema
//!
//! JSON Schema generation, validation, and registry for the learning-path
//! document types.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Validation of caller-supplied marks files before they are analyzed
//! - Schema export for external tooling (`alp schema` command)
//!
//! ## Architecture
//!
//! Types are defined in `alp-core` with `#[derive(JsonSchema)]`. This crate
//! imports those types and provides the registry and validation layer.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;

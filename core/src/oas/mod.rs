#![deny(missing_docs)]

//! # OpenAPI (OAS) Input
//!
//! Loading of Swagger 2.0 / OpenAPI 3.x descriptions and the tolerant lookups
//! used to read them.

/// Decoding and top-level accessors.
pub mod document;

/// Fallback-chain lookups over decoded values.
pub mod lookup;

pub use document::{load_api_description, ApiDescription, SourceFormat};

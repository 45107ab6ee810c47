//! # Atelier Types
//!
//! Shared types, catalogs, and error definitions for the Atelier Gateway.
//!
//! This crate provides the foundational type system for the workspace:
//!
//! - **`error`** - Typed error taxonomy mapped to HTTP response codes
//! - **`models`** - Catalog data (style descriptors, aspect-ratio dimensions)
//! - **`protocol`** - Gemini GenerateContent wire types
//!
//! `atelier-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     atelier-types (this crate)
//!            │
//!            ▼
//!      atelier-core
//!            │
//!            ▼
//!     atelier-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API responses
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{GatewayError, Result};

// Re-export catalog types
pub use models::{DimensionCatalog, Dimensions, StyleCatalog};

//! Catalog data models shared across the workspace.

mod catalog;

pub use catalog::{DimensionCatalog, Dimensions, StyleCatalog};

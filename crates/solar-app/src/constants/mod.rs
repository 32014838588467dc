//! Built-in reference data

pub mod unit_catalog;

pub use unit_catalog::{builtin_catalog, BUILTIN_UNITS};

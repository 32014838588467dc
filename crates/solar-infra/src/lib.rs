//! Infrastructure layer - persistence implementations and loaders

pub mod persistence;
pub mod unit_catalog_loader;

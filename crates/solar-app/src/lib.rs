//! Application service layer - use cases, config, catalog, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod logging;
pub mod repository;

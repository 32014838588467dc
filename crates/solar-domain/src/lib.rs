//! Domain layer for solar-track
//!
//! Fuel records, the unit catalog, consumption formulas and fleet statistics.

pub mod model;
pub mod repository;
pub mod service;

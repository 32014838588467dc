//! Domain services

pub mod consumption_calculator;
pub mod fleet_stats;

pub use consumption_calculator::{actual_efficiency, estimate, preview_estimate, usage};
pub use fleet_stats::{
    aggregate, matches_search, time_series, FleetStats, TrendPoint, GOOD_EFFICIENCY_THRESHOLD,
};

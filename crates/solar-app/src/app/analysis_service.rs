//! Analysis Service - AI efficiency review of the fuel log
//!
//! 1. Resolve the API key from the configured environment variable
//! 2. Build the Gemini backend (none without a key)
//! 3. Hand the most recent records to the analyzer
//!
//! The result is always displayable; failures become fallback results.

use solar_ai::{analyze_records, AiBackend, GeminiBackend};
use solar_store::LogStore;
use solar_types::AnalysisResult;
use tracing::warn;

use crate::config::Config;

/// Gemini backend for the current config, or `None` when no API key is set
pub fn build_backend(config: &Config) -> Option<GeminiBackend> {
    let api_key = config.api_key()?;
    let analyzer = config.analyzer_config();

    match GeminiBackend::new(api_key, analyzer.model, analyzer.timeout) {
        Ok(backend) => Some(backend),
        Err(e) => {
            warn!(error = %e, "failed to build AI client");
            None
        }
    }
}

/// Analyze the fleet with the configured backend
pub fn analyze_fleet(store: &LogStore, config: &Config) -> AnalysisResult {
    let backend = build_backend(config);
    analyze_fleet_with(store, config, backend.as_ref().map(|b| b as &dyn AiBackend))
}

/// Analyze the fleet with an explicit backend
pub fn analyze_fleet_with(
    store: &LogStore,
    config: &Config,
    backend: Option<&dyn AiBackend>,
) -> AnalysisResult {
    let analyzer = config.analyzer_config();
    let window = store.recent(analyzer.window);
    analyze_records(backend, window, &analyzer)
}

//! AI-powered efficiency analysis of the fuel log

pub mod ai;

pub use ai::backend::{AiBackend, BackendError};
pub use ai::gemini::GeminiBackend;
pub use ai::prompts::build_efficiency_prompt;

use std::time::Duration;

use solar_domain::model::FuelRecord;
use solar_types::{AnalysisResult, AnalysisStatus};
use tracing::{info, warn};

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub model: String,
    /// Number of most recent records sent to the model
    pub window: usize,
    pub timeout: Duration,
    /// Language the model writes the summary in
    pub language: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            window: 10,
            timeout: Duration::from_secs(60),
            language: "English".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Run the efficiency review over the most recent records.
///
/// `records` is the store order (newest first). The newest `config.window`
/// records are sent oldest first. Never fails: with no records the service
/// is not contacted, and any backend or decode failure yields
/// [`failed_result`].
pub fn analyze_records(
    backend: Option<&dyn AiBackend>,
    records: &[FuelRecord],
    config: &AnalyzerConfig,
) -> AnalysisResult {
    if records.is_empty() {
        return insufficient_data_result();
    }

    let Some(backend) = backend else {
        warn!("no AI backend configured, skipping analysis");
        return unavailable_result();
    };

    let window: Vec<FuelRecord> = records
        .iter()
        .take(config.window.max(1))
        .rev()
        .cloned()
        .collect();
    let prompt = build_efficiency_prompt(&window, &config.language);

    info!(records = window.len(), "requesting efficiency analysis");

    let response = match backend.send_prompt(&prompt) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "analysis request failed");
            return failed_result();
        }
    };

    match parse_response(&response) {
        Ok(result) => result,
        Err(e) => {
            let truncated: String = response.chars().take(200).collect();
            warn!(error = %e, raw = %truncated, "analysis response rejected");
            failed_result()
        }
    }
}

/// Strictly decode a model reply into an [`AnalysisResult`].
///
/// Markdown fences around the JSON are tolerated; missing fields, unknown
/// statuses and a blank summary are not.
pub fn parse_response(response: &str) -> Result<AnalysisResult, BackendError> {
    if response.trim().is_empty() {
        return Err(BackendError::EmptyResponse);
    }

    let json_str = extract_json_from_response(response);
    let result: AnalysisResult =
        serde_json::from_str(&json_str).map_err(|e| BackendError::Malformed(e.to_string()))?;

    if result.summary.trim().is_empty() {
        return Err(BackendError::Malformed("summary is empty".to_string()));
    }

    Ok(result)
}

/// Extract JSON from AI response (handles markdown code blocks)
pub fn extract_json_from_response(response: &str) -> String {
    let response = response.trim();

    if response.starts_with("```") {
        if let Some(end) = response.rfind("```") {
            if let Some(newline) = response.find('\n') {
                let start = newline + 1;
                if start < end {
                    return response[start..end].trim().to_string();
                }
            }
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if start < end {
                return response[start..=end].to_string();
            }
        }
    }

    response.to_string()
}

/// Result returned when there is nothing to analyze
pub fn insufficient_data_result() -> AnalysisResult {
    AnalysisResult {
        summary: "Not enough data to analyze.".to_string(),
        status: AnalysisStatus::Average,
        recommendations: vec!["Add more fuel records.".to_string()],
    }
}

/// Result returned when no AI service is configured
pub fn unavailable_result() -> AnalysisResult {
    AnalysisResult {
        summary: "AI analysis is unavailable.".to_string(),
        status: AnalysisStatus::Average,
        recommendations: vec!["Set an API key to enable analysis.".to_string()],
    }
}

/// Result returned when the request or its decoding failed
pub fn failed_result() -> AnalysisResult {
    AnalysisResult {
        summary: "Failed to analyze data.".to_string(),
        status: AnalysisStatus::Average,
        recommendations: vec![
            "Check the internet connection.".to_string(),
            "Try again later.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use solar_domain::model::{RecordInput, UnitCatalog, UnitDefinition};
    use solar_types::MeterKind;

    struct MockBackend {
        reply: Result<String, String>,
        prompts: RefCell<Vec<String>>,
    }

    impl MockBackend {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.borrow().len()
        }
    }

    impl AiBackend for MockBackend {
        fn send_prompt(&self, prompt: &str) -> Result<String, BackendError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone().map_err(BackendError::Http)
        }
    }

    fn record(date: &str, unit: &str) -> FuelRecord {
        let catalog = UnitCatalog::new(vec![UnitDefinition::new("DT-01", MeterKind::Distance, 3.0)]);
        let entry = RecordInput {
            date: date.to_string(),
            unit_identifier: unit.to_string(),
            initial_reading: "100".to_string(),
            final_reading: "250".to_string(),
            actual_fuel: "40".to_string(),
        }
        .validate()
        .unwrap();
        FuelRecord::create(entry, &catalog)
    }

    const GOOD_REPLY: &str =
        r#"{"summary":"Fleet is on target.","status":"efficient","recommendations":["Keep it up"]}"#;

    #[test]
    fn test_empty_records_skip_backend() {
        let backend = MockBackend::replying(GOOD_REPLY);
        let result = analyze_records(Some(&backend), &[], &AnalyzerConfig::default());

        assert_eq!(result, insufficient_data_result());
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_missing_backend_is_unavailable() {
        let records = vec![record("2024-05-01", "DT-01")];
        let result = analyze_records(None, &records, &AnalyzerConfig::default());
        assert_eq!(result, unavailable_result());
    }

    #[test]
    fn test_successful_analysis() {
        let backend = MockBackend::replying(GOOD_REPLY);
        let records = vec![record("2024-05-01", "DT-01")];
        let result = analyze_records(Some(&backend), &records, &AnalyzerConfig::default());

        assert_eq!(result.status, AnalysisStatus::Efficient);
        assert_eq!(result.summary, "Fleet is on target.");
        assert_eq!(result.recommendations, vec!["Keep it up"]);
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_backend_error_gives_failed_result() {
        let backend = MockBackend::failing("connection refused");
        let records = vec![record("2024-05-01", "DT-01")];
        let result = analyze_records(Some(&backend), &records, &AnalyzerConfig::default());

        assert_eq!(result, failed_result());
        assert_eq!(result.status, AnalysisStatus::Average);
    }

    #[test]
    fn test_malformed_reply_gives_failed_result() {
        let backend = MockBackend::replying("I think the fleet is fine.");
        let records = vec![record("2024-05-01", "DT-01")];
        let result = analyze_records(Some(&backend), &records, &AnalyzerConfig::default());
        assert_eq!(result, failed_result());
    }

    #[test]
    fn test_window_takes_newest_in_chronological_order() {
        let backend = MockBackend::replying(GOOD_REPLY);
        // Store order: newest first
        let records = vec![
            record("2024-05-04", "DT-01"),
            record("2024-05-03", "DT-01"),
            record("2024-05-02", "DT-01"),
            record("2024-05-01", "DT-01"),
        ];
        let config = AnalyzerConfig::default().with_window(2);
        analyze_records(Some(&backend), &records, &config);

        let prompts = backend.prompts.borrow();
        let prompt = &prompts[0];
        assert!(prompt.contains("2 records, oldest first"));
        assert!(!prompt.contains("2024-05-02"));
        let p3 = prompt.find("2024-05-03").unwrap();
        let p4 = prompt.find("2024-05-04").unwrap();
        assert!(p3 < p4);
    }

    #[test]
    fn test_parse_response_rejects_unknown_status() {
        let reply = r#"{"summary":"ok","status":"great","recommendations":[]}"#;
        assert!(matches!(parse_response(reply), Err(BackendError::Malformed(_))));
    }

    #[test]
    fn test_parse_response_rejects_missing_field() {
        let reply = r#"{"summary":"ok","status":"average"}"#;
        assert!(parse_response(reply).is_err());
    }

    #[test]
    fn test_parse_response_rejects_blank_summary() {
        let reply = r#"{"summary":"  ","status":"average","recommendations":[]}"#;
        assert!(parse_response(reply).is_err());
        assert!(matches!(parse_response("   "), Err(BackendError::EmptyResponse)));
    }

    #[test]
    fn test_parse_response_accepts_fenced_json() {
        let reply = format!("```json\n{}\n```", GOOD_REPLY);
        let result = parse_response(&reply).unwrap();
        assert_eq!(result.status, AnalysisStatus::Efficient);
    }

    #[test]
    fn test_extract_json_plain() {
        let input = r#"{"status": "average"}"#;
        assert_eq!(extract_json_from_response(input), input);
    }

    #[test]
    fn test_extract_json_from_bare_fence() {
        let input = "```\n{\"status\": \"average\"}\n```";
        assert_eq!(extract_json_from_response(input), r#"{"status": "average"}"#);
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let input = r#"Here you go: {"status": "wasteful"} hope it helps"#;
        assert_eq!(extract_json_from_response(input), r#"{"status": "wasteful"}"#);
    }
}

//! Shared value types

use serde::{Deserialize, Serialize};

/// How a unit's usage is metered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterKind {
    /// Odometer, usage in kilometres. Ratio is km per litre.
    #[default]
    #[serde(rename = "KM")]
    Distance,
    /// Hour meter, usage in operating hours. Ratio is litres per hour.
    #[serde(rename = "HM")]
    Duration,
}

impl MeterKind {
    /// Short code used in tables and reports
    pub fn code(&self) -> &'static str {
        match self {
            MeterKind::Distance => "KM",
            MeterKind::Duration => "HM",
        }
    }

    /// Parse the short code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "KM" => Some(MeterKind::Distance),
            "HM" => Some(MeterKind::Duration),
            _ => None,
        }
    }

    /// Human-readable formula for the estimate
    pub fn formula(&self) -> &'static str {
        match self {
            MeterKind::Distance => "usage / ratio",
            MeterKind::Duration => "usage x ratio",
        }
    }
}

impl std::fmt::Display for MeterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Overall verdict of an efficiency analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Efficient,
    Average,
    Wasteful,
}

impl AnalysisStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStatus::Efficient => "Efficient",
            AnalysisStatus::Average => "Average",
            AnalysisStatus::Wasteful => "Wasteful",
        }
    }
}

/// Structured efficiency assessment returned by the analysis adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub status: AnalysisStatus,
    pub recommendations: Vec<String>,
}

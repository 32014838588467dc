//! AI prompts for fleet fuel efficiency review
//!
//! The prompt gives the model one line per record in chronological order,
//! then pins the reply to a fixed JSON shape. Key techniques:
//! - Placeholders instead of example values in the JSON template
//! - The status vocabulary is spelled out so the reply decodes strictly
//! - Standard ratio is shown next to the actual ratio for each record
//!
//! Language convention:
//! - English for AI instructions
//! - Field operator terms stay as-is (Solar, KM, HM)

use solar_domain::model::FuelRecord;

/// Build the efficiency review prompt.
///
/// `records` must already be in the order the model should read them
/// (oldest first). `language` is the language of the summary and
/// recommendations the model writes back.
pub fn build_efficiency_prompt(records: &[FuelRecord], language: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a fleet fuel (Solar / diesel) efficiency analyst for heavy equipment and trucks.\n\
         Review the fuel log below and judge whether fuel consumption looks efficient.\n\n",
    );

    prompt.push_str(
        "Meter types:\n\
         - KM: distance-metered vehicle. Ratio = distance per litre (higher is better).\n\
         - HM: hour-metered equipment. Ratio = litres per hour (lower is better).\n\n",
    );

    prompt.push_str(&format!("Fuel log ({} records, oldest first):\n", records.len()));
    for record in records {
        prompt.push_str(&format_record_line(record));
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        r#"
Compare each actual ratio with its standard ratio. Look for units that drift away
from their standard, suspicious refuelling amounts, and overall trends.

Write the summary and recommendations in {language}.

Output ONLY this JSON object, no markdown:
{{
  "summary": "<short overall assessment>",
  "status": "<efficient | average | wasteful>",
  "recommendations": ["<actionable recommendation>", "..."]
}}
"#
    ));

    prompt
}

fn format_record_line(record: &FuelRecord) -> String {
    let actual_ratio = match record.actual_efficiency() {
        Some(ratio) => format!("{:.2}", ratio),
        None => "N/A".to_string(),
    };

    format!(
        "- {} | unit {} ({}) | usage {:.1} | actual fuel {:.1} L | actual ratio {} | standard ratio {}",
        record.date_string(),
        record.unit_identifier(),
        record.meter_kind().code(),
        record.usage(),
        record.actual_fuel(),
        actual_ratio,
        record.standard_ratio(),
    )
}

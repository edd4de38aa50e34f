//! JSON output of a validation report.

use crate::models::NetworkConfig;
use crate::processing::ValidationReport;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a NetworkConfig,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Serialize the input and its report as pretty printed JSON.
pub fn render_json(config: &NetworkConfig, report: &ValidationReport) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&JsonReport {
        input: config,
        report,
    })
    .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

use crate::report::json_format::MatchReport;
use crate::report::report_error::ReportError;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

/// Serializes the report into a pretty-printed JSON string.
fn generate_json(report: &MatchReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Creates a JSON file from a `MatchReport` and writes it to the specified
/// filename.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `report` - The report to serialize.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by
/// `ReportError`.
pub fn create_json_file(filename: &str, report: &MatchReport) -> Result<(), ReportError> {
    let json_output = generate_json(report)?;

    let file = File::create(filename).map_err(ReportError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .map_err(ReportError::FileWrite)?;

    Ok(())
}

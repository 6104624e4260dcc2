use crate::match_data::match_stats::MatchStats;
use crate::match_data::match_summary::MatchSummaryData;
use crate::match_data::payload_error::PayloadError;
use crate::match_data::round_timings::RoundTimings;

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads the kill-statistics payload from a JSON file.
pub fn load_match_stats(path: &Path) -> Result<MatchStats, PayloadError> {
    load_payload(path)
}

/// Loads the round-timings payload from a JSON file.
pub fn load_round_timings(path: &Path) -> Result<RoundTimings, PayloadError> {
    load_payload(path)
}

/// Loads the match-summary payload from a JSON file.
pub fn load_match_summary(path: &Path) -> Result<MatchSummaryData, PayloadError> {
    load_payload(path)
}

/// Opens and deserializes a single JSON payload file.
///
/// Payloads are pre-validated upstream, so no checking happens here beyond
/// what deserialization itself enforces.
///
/// # Arguments
///
/// * `path` - The payload file to read.
///
/// # Returns
///
/// The deserialized payload, or a `PayloadError` naming the file on failure.
fn load_payload<T: DeserializeOwned>(path: &Path) -> Result<T, PayloadError> {
    let file = File::open(path).map_err(|source| PayloadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| PayloadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

use serde::Deserialize;

/// Timing data for a single round.
///
/// # Fields
///
/// * `round_number` - The round this entry describes (1-based).
/// * `start_time` - When the round started.
/// * `end_time` - When the round ended.
/// * `duration_seconds` - Round length in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundInformation {
    pub round_number: u32,
    pub start_time: String,
    pub end_time: String,
    pub duration_seconds: f64,
}

/// The round-timings payload for a complete match.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundTimings {
    pub total_rounds: u32,
    pub average_round_duration: f64,
    pub shortest_round: f64,
    pub longest_round: f64,
    pub match_start_time: String,
    pub total_match_duration: f64,
    pub rounds: Vec<RoundInformation>,
}

use crate::match_data::match_summary::{MatchSummaryData, TeamSide};
use crate::match_data::round_timings::RoundInformation;

use serde::Serialize;

/// Bar color for rounds won by the CT side.
pub const CT_ROUND_COLOR: &str = "#4F46E5";
/// Bar color for rounds won by the T side.
pub const T_ROUND_COLOR: &str = "#F59E0B";

/// Chart-ready series for the round-duration chart.
///
/// Pure data; rendering and chart configuration belong to the consumer.
///
/// # Fields
///
/// * `labels` - One `"Round N"` label per round.
/// * `durations` - One duration value (seconds) per round.
/// * `colors` - One bar color per round, keyed on the recorded winner side;
///   `None` when the round has no history entry.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoundDurationChart {
    pub labels: Vec<String>,
    pub durations: Vec<f64>,
    pub colors: Vec<Option<&'static str>>,
}

/// Derives round-duration chart data from the round timings and the match
/// summary's round history.
///
/// Yields `None` when either input is absent, signaling "nothing to render";
/// rounds missing from the history get an undefined color rather than
/// failing.
pub fn round_duration_chart(
    rounds: Option<&[RoundInformation]>,
    summary: Option<&MatchSummaryData>,
) -> Option<RoundDurationChart> {
    let rounds = rounds?;
    let summary = summary?;

    let labels = rounds
        .iter()
        .map(|round| format!("Round {}", round.round_number))
        .collect();
    let durations = rounds.iter().map(|round| round.duration_seconds).collect();
    let colors = rounds
        .iter()
        .map(|round| {
            summary
                .round_history
                .iter()
                .find(|entry| entry.round_number == round.round_number)
                .map(|entry| match entry.winner_side {
                    TeamSide::Ct => CT_ROUND_COLOR,
                    TeamSide::T => T_ROUND_COLOR,
                })
        })
        .collect();

    Some(RoundDurationChart {
        labels,
        durations,
        colors,
    })
}

use serde::Deserialize;

/// The side that won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamSide {
    Ct,
    T,
}

/// Display names of the teams, keyed by starting side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamNames {
    #[serde(rename = "CT")]
    pub ct: String,
    #[serde(rename = "T")]
    pub t: String,
}

/// The outcome of a single round.
///
/// # Fields
///
/// * `round_number` - The round this entry describes (1-based).
/// * `winner_side` - Which side took the round.
/// * `winner_team` - Display name of the winning team.
/// * `score_after_round` - The running score once the round ended.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundHistoryEntry {
    pub round_number: u32,
    pub winner_side: TeamSide,
    pub winner_team: String,
    pub score_after_round: String,
}

/// The match-summary payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchSummaryData {
    pub map: String,
    pub final_score: String,
    pub winner: String,
    pub teams: TeamNames,
    pub total_rounds: u32,
    pub round_history: Vec<RoundHistoryEntry>,
}

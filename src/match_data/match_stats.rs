use crate::match_data::kill_event::KillEvent;
use serde::Deserialize;

/// Per-round metadata attached to the kill-statistics payload.
///
/// The payload carries per-round stat snapshots as well; only the round
/// number is read here, the rest is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundSnapshot {
    pub round_number: u32,
}

/// The kill-statistics payload for a complete match.
///
/// # Fields
///
/// * `live_start_time` - When the match went live, if the trigger was found
///   in the log.
/// * `match_start_time` - When the match formally started, if recorded.
/// * `total_kills` - Total kills over the whole match.
/// * `total_rounds` - Number of rounds played.
/// * `kills` - The kill ledger, consumed read-only.
/// * `round_stats` - Round metadata, one entry per played round.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchStats {
    pub live_start_time: Option<String>,
    pub match_start_time: Option<String>,
    pub total_kills: u32,
    pub total_rounds: u32,
    pub kills: Vec<KillEvent>,
    #[serde(default)]
    pub round_stats: Vec<RoundSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "live_start_time": "21:05:11",
        "match_start_time": null,
        "total_kills": 2,
        "total_rounds": 1,
        "player_stats": {
            "ana": {"total_kills": 2, "deaths": 0, "headshots": 1, "weapons": {"ak47": 2}, "headshot_percentage": 50.0, "team_kills": 0}
        },
        "kills": [
            {
                "round": 1,
                "timestamp": "21:06:02",
                "killer": {"name": "ana", "team": "CT", "position": {"x": 1, "y": 2, "z": 3}},
                "victim": {"name": "cid", "team": "TERRORIST", "position": {"x": 4, "y": 5, "z": 6}},
                "weapon": "ak47",
                "headshot": true
            }
        ],
        "round_stats": [
            {"round_number": 1, "start_time": "21:05:30", "end_time": "21:07:10", "player_stats": {}}
        ]
    }"#;

    #[test]
    fn deserializes_parser_output_ignoring_extra_fields() {
        let stats: MatchStats = serde_json::from_str(SAMPLE).expect("payload should parse");

        assert_eq!(stats.match_start_time, None);
        assert_eq!(stats.total_rounds, 1);
        assert_eq!(stats.kills.len(), 1);
        assert_eq!(stats.kills[0].killer.name, "ana");
        assert!(stats.kills[0].headshot);
        assert_eq!(stats.round_stats, vec![RoundSnapshot { round_number: 1 }]);
    }
}

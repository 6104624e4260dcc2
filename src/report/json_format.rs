use crate::aggregation::aggregated_stats::AggregatedPlayerStats;
use crate::aggregation::derived_metrics::kill_death_ratio;
use crate::aggregation::team_view::team_players;
use crate::charts::round_duration::RoundDurationChart;
use crate::match_data::match_stats::MatchStats;
use crate::match_data::round_timings::RoundTimings;
use crate::roster::registry::RosterRegistry;
use crate::roster::team_roster::TeamSlot;

use serde::Serialize;

/// One player's row in the report: the aggregated record, flattened, plus
/// the formatted kill/death ratio.
#[derive(Serialize, Debug)]
pub struct PlayerEntry {
    #[serde(flatten)]
    pub stats: AggregatedPlayerStats,
    pub kill_death_ratio: String,
}

/// One team's section of the report, players in canonical roster order.
#[derive(Serialize, Debug)]
pub struct TeamSection {
    pub name: String,
    pub players: Vec<PlayerEntry>,
}

/// Match-wide timing figures lifted from the round-timings payload.
#[derive(Serialize, Debug)]
pub struct TimingOverview {
    pub average_round_duration: f64,
    pub shortest_round: f64,
    pub longest_round: f64,
    pub total_match_duration: f64,
}

/// The full report written by the tool.
///
/// # Fields
///
/// * `round_cursor` - The inclusive round bound the statistics were
///   aggregated up to.
/// * `total_rounds` - Rounds played over the whole match.
/// * `total_kills` - Kills over the whole match.
/// * `live_start_time` - When the match went live, if recorded.
/// * `match_start_time` - When the match formally started, if recorded.
/// * `teams` - Both team sections, Team A first.
/// * `timing_overview` - Match-wide timing figures, when the round-timings
///   payload was supplied.
/// * `round_duration_chart` - Chart-ready series, when both optional
///   payloads were supplied.
#[derive(Serialize, Debug)]
pub struct MatchReport {
    pub round_cursor: u32,
    pub total_rounds: u32,
    pub total_kills: u32,
    pub live_start_time: Option<String>,
    pub match_start_time: Option<String>,
    pub teams: Vec<TeamSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_overview: Option<TimingOverview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_duration_chart: Option<RoundDurationChart>,
}

/// Assembles the report from the aggregation output and the optional
/// payload-derived extras.
pub fn build_match_report(
    roster: &RosterRegistry,
    match_stats: &MatchStats,
    round_cursor: u32,
    all_stats: &[AggregatedPlayerStats],
    timings: Option<&RoundTimings>,
    round_duration_chart: Option<RoundDurationChart>,
) -> MatchReport {
    let teams = [TeamSlot::A, TeamSlot::B]
        .into_iter()
        .map(|slot| TeamSection {
            name: roster.team(slot).name().to_owned(),
            players: team_players(roster, slot, all_stats)
                .into_iter()
                .map(|stats| PlayerEntry {
                    kill_death_ratio: kill_death_ratio(&stats),
                    stats,
                })
                .collect(),
        })
        .collect();

    let timing_overview = timings.map(|timings| TimingOverview {
        average_round_duration: timings.average_round_duration,
        shortest_round: timings.shortest_round,
        longest_round: timings.longest_round,
        total_match_duration: timings.total_match_duration,
    });

    MatchReport {
        round_cursor,
        total_rounds: match_stats.total_rounds,
        total_kills: match_stats.total_kills,
        live_start_time: match_stats.live_start_time.clone(),
        match_start_time: match_stats.match_start_time.clone(),
        teams,
        timing_overview,
        round_duration_chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_entry_flattens_stats_alongside_the_ratio() {
        let entry = PlayerEntry {
            stats: AggregatedPlayerStats {
                name: "ana".to_owned(),
                kills: 3,
                deaths: 2,
                headshots: 1,
                headshot_percentage: 33.3,
                weapon_breakdown: "rifle: 2".to_owned(),
            },
            kill_death_ratio: "1.50".to_owned(),
        };

        let value = serde_json::to_value(&entry).expect("report entries serialize");
        assert_eq!(value["name"], "ana");
        assert_eq!(value["kills"], 3);
        assert_eq!(value["weapon_breakdown"], "rifle: 2");
        assert_eq!(value["kill_death_ratio"], "1.50");
    }
}

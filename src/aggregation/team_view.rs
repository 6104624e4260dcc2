use crate::aggregation::aggregated_stats::AggregatedPlayerStats;
use crate::roster::registry::RosterRegistry;
use crate::roster::team_roster::TeamSlot;

/// Filters aggregated stats down to one team, ordered by that team's
/// canonical roster order.
///
/// The output order is independent of the input order and of the ledger scan
/// order; entries for players outside the team are excluded.
///
/// # Arguments
///
/// * `roster` - The registry defining team membership and canonical order.
/// * `slot` - Which team to select.
/// * `all_stats` - Aggregated entries in any order.
///
/// # Returns
///
/// The team's entries in canonical roster order.
pub fn team_players(
    roster: &RosterRegistry,
    slot: TeamSlot,
    all_stats: &[AggregatedPlayerStats],
) -> Vec<AggregatedPlayerStats> {
    let team = roster.team(slot);

    let mut members: Vec<AggregatedPlayerStats> = all_stats
        .iter()
        .filter(|player| team.contains(&player.name))
        .cloned()
        .collect();

    members.sort_by_key(|player| team.position_of(&player.name).unwrap_or(usize::MAX));

    members
}

use crate::aggregation::aggregated_stats::AggregatedPlayerStats;

/// Formats a player's kill/death ratio to two decimals.
///
/// With zero deaths the ratio degenerates to the kill count (or the literal
/// `"0.00"` for a player with no kills at all). The denominator is clamped
/// to 1 so the division stays defined even on inconsistent upstream counts.
pub fn kill_death_ratio(player: &AggregatedPlayerStats) -> String {
    if player.deaths == 0 {
        if player.kills == 0 {
            return "0.00".to_owned();
        }
        return format!("{:.2}", player.kills as f64);
    }

    format!("{:.2}", player.kills as f64 / player.deaths.max(1) as f64)
}

/// Formats a player's headshot percentage to one decimal.
///
/// Deliberately repeats the aggregator's computation: callers invoke this on
/// externally sourced records too, and both call sites must agree exactly.
pub fn headshot_percentage(player: &AggregatedPlayerStats) -> String {
    let percentage = if player.kills > 0 {
        player.headshots as f64 / player.kills as f64 * 100.0
    } else {
        0.0
    };

    format!("{percentage:.1}")
}

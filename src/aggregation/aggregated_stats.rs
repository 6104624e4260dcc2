use serde::Serialize;

/// Cumulative statistics for one player as of a round cursor.
///
/// Recomputed wholesale on every aggregation call, never patched
/// incrementally; for a given ledger and cursor the record is a pure
/// function of both.
///
/// # Fields
///
/// * `name` - The player's identity.
/// * `kills` - Kills credited up to and including the cursor round.
/// * `deaths` - Deaths up to and including the cursor round.
/// * `headshots` - Headshot kills among `kills`.
/// * `headshot_percentage` - `headshots / kills * 100`, rounded to one
///   decimal; `0` when the player has no kills.
/// * `weapon_breakdown` - The most-used weapon as `"<weapon>: <count>"`, or
///   a placeholder when the player has no kills.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AggregatedPlayerStats {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
    pub headshots: u32,
    pub headshot_percentage: f64,
    pub weapon_breakdown: String,
}

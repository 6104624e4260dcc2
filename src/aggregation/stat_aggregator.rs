use crate::aggregation::aggregated_stats::AggregatedPlayerStats;
use crate::match_data::kill_event::KillEvent;
use crate::roster::registry::RosterRegistry;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashMap;

/// Emitted as the weapon breakdown for a player with no kills in range.
pub const NO_WEAPON_PLACEHOLDER: &str = "-";

/// Usage count for one weapon, tagged with the order the weapon was first
/// seen in the ledger scan. Ties on count are broken by that order.
struct WeaponTally {
    count: u32,
    first_seen: usize,
}

/// Recomputes per-player cumulative statistics over the kill ledger.
///
/// The aggregator borrows the roster and ledger read-only and holds no other
/// state; the round cursor is supplied by the caller on every operation, so
/// repeated calls with the same cursor yield identical output.
pub struct StatAggregator<'a> {
    roster: &'a RosterRegistry,
    ledger: &'a [KillEvent],
}

impl<'a> StatAggregator<'a> {
    /// Creates an aggregator over the given roster and kill ledger.
    pub fn new(roster: &'a RosterRegistry, ledger: &'a [KillEvent]) -> Self {
        Self { roster, ledger }
    }

    /// Aggregates cumulative statistics for every known player, using only
    /// events at or before `round_cursor`.
    ///
    /// Per-player tallies are independent, so the scan runs one player per
    /// rayon task; collection preserves roster order.
    ///
    /// # Arguments
    ///
    /// * `round_cursor` - Inclusive upper bound on rounds to include.
    ///
    /// # Returns
    ///
    /// One `AggregatedPlayerStats` per registry player, Team A first, each
    /// team in canonical roster order.
    pub fn aggregate(&self, round_cursor: u32) -> Vec<AggregatedPlayerStats> {
        self.log_unknown_identities(round_cursor);

        let players: Vec<&String> = self.roster.players().collect();
        players
            .par_iter()
            .map(|name| self.aggregate_player(name, round_cursor))
            .collect()
    }

    /// Scans the ledger once for a single player's cumulative counts.
    ///
    /// The killer and victim branches are independent on purpose: an event
    /// where a player killed themselves increments both kills and deaths.
    fn aggregate_player(&self, name: &str, round_cursor: u32) -> AggregatedPlayerStats {
        let mut kills: u32 = 0;
        let mut deaths: u32 = 0;
        let mut headshots: u32 = 0;

        for event in self.ledger {
            if event.round > round_cursor {
                continue;
            }
            if event.killer.name == name {
                kills += 1;
                if event.headshot {
                    headshots += 1;
                }
            }
            if event.victim.name == name {
                deaths += 1;
            }
        }

        let headshot_percentage = if kills > 0 {
            (headshots as f64 / kills as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        AggregatedPlayerStats {
            name: name.to_owned(),
            kills,
            deaths,
            headshots,
            headshot_percentage,
            weapon_breakdown: self.most_used_weapon(name, round_cursor),
        }
    }

    /// Returns the weapon `player_name` made the most kills with, using only
    /// events at or before `round_cursor`, formatted as `"<weapon>: <count>"`.
    ///
    /// Ties are broken by first appearance in the ledger scan. Yields the
    /// placeholder token when the player has no kills in range.
    pub fn most_used_weapon(&self, player_name: &str, round_cursor: u32) -> String {
        let mut tallies: HashMap<&str, WeaponTally> = HashMap::new();
        let mut seen: usize = 0;

        for event in self.ledger {
            if event.round <= round_cursor && event.killer.name == player_name {
                let tally = tallies.entry(event.weapon.as_str()).or_insert_with(|| {
                    seen += 1;
                    WeaponTally {
                        count: 0,
                        first_seen: seen,
                    }
                });
                tally.count += 1;
            }
        }

        let mut ranked: Vec<(&str, WeaponTally)> = tallies.into_iter().collect();
        ranked.sort_by(|w1, w2| {
            w2.1.count
                .cmp(&w1.1.count)
                .then_with(|| w1.1.first_seen.cmp(&w2.1.first_seen))
        });

        match ranked.first() {
            Some((weapon, tally)) => format!("{}: {}", weapon, tally.count),
            None => NO_WEAPON_PLACEHOLDER.to_owned(),
        }
    }

    /// Counts in-range events naming identities outside the registry. Such
    /// events are attributed to nobody; the count is only surfaced at debug
    /// level so production behavior never changes.
    fn log_unknown_identities(&self, round_cursor: u32) {
        let unknown = self
            .ledger
            .iter()
            .filter(|event| event.round <= round_cursor)
            .filter(|event| {
                !self.roster.contains(&event.killer.name) || !self.roster.contains(&event.victim.name)
            })
            .count();

        if unknown > 0 {
            log::debug!("{unknown} kill events reference players outside the roster and are not attributed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_data::kill_event::KillParticipant;
    use crate::roster::team_roster::TeamRoster;

    fn kill(round: u32, killer: &str, victim: &str, weapon: &str, headshot: bool) -> KillEvent {
        KillEvent {
            round,
            timestamp: format!("21:0{round}:00"),
            killer: KillParticipant {
                name: killer.to_owned(),
                team: "CT".to_owned(),
            },
            victim: KillParticipant {
                name: victim.to_owned(),
                team: "TERRORIST".to_owned(),
            },
            weapon: weapon.to_owned(),
            headshot,
        }
    }

    fn registry() -> RosterRegistry {
        RosterRegistry::new(
            TeamRoster::new("Alpha", &["ana", "bob"]),
            TeamRoster::new("Beta", &["cid", "dot"]),
        )
    }

    fn stats_for<'s>(stats: &'s [AggregatedPlayerStats], name: &str) -> &'s AggregatedPlayerStats {
        stats
            .iter()
            .find(|player| player.name == name)
            .expect("every roster player has an entry")
    }

    #[test]
    fn cursor_bounds_the_two_round_scenario() {
        let registry = registry();
        let ledger = vec![
            kill(1, "ana", "cid", "rifle", true),
            kill(2, "cid", "ana", "pistol", false),
        ];
        let aggregator = StatAggregator::new(&registry, &ledger);

        let round_one = aggregator.aggregate(1);
        let ana = stats_for(&round_one, "ana");
        assert_eq!((ana.kills, ana.deaths, ana.headshots), (1, 0, 1));
        assert_eq!(ana.headshot_percentage, 100.0);
        assert_eq!(ana.weapon_breakdown, "rifle: 1");
        let cid = stats_for(&round_one, "cid");
        assert_eq!((cid.kills, cid.deaths), (0, 1));
        assert_eq!(cid.weapon_breakdown, NO_WEAPON_PLACEHOLDER);

        let round_two = aggregator.aggregate(2);
        let ana = stats_for(&round_two, "ana");
        assert_eq!((ana.kills, ana.deaths), (1, 1));
        let cid = stats_for(&round_two, "cid");
        assert_eq!((cid.kills, cid.deaths), (1, 1));
        assert_eq!(cid.headshot_percentage, 0.0);
        assert_eq!(cid.weapon_breakdown, "pistol: 1");
    }

    #[test]
    fn output_is_in_registry_concatenation_order() {
        let registry = registry();
        let ledger = vec![kill(1, "dot", "ana", "smg", false)];
        let aggregator = StatAggregator::new(&registry, &ledger);

        let names: Vec<String> = aggregator
            .aggregate(1)
            .into_iter()
            .map(|player| player.name)
            .collect();
        assert_eq!(names, ["ana", "bob", "cid", "dot"]);
    }

    #[test]
    fn counts_accumulate_monotonically_with_the_cursor() {
        let registry = registry();
        let ledger = vec![
            kill(1, "ana", "cid", "rifle", false),
            kill(2, "ana", "dot", "rifle", true),
            kill(3, "cid", "ana", "awp", false),
            kill(3, "ana", "cid", "pistol", false),
        ];
        let aggregator = StatAggregator::new(&registry, &ledger);

        for earlier in 1..3 {
            let before = aggregator.aggregate(earlier);
            let after = aggregator.aggregate(earlier + 1);
            for (b, a) in before.iter().zip(&after) {
                assert!(a.kills >= b.kills);
                assert!(a.deaths >= b.deaths);
                assert!(a.headshots >= b.headshots);
            }
        }
    }

    #[test]
    fn aggregation_is_idempotent() {
        let registry = registry();
        let ledger = vec![
            kill(1, "ana", "cid", "rifle", true),
            kill(2, "bob", "dot", "smg", false),
        ];
        let aggregator = StatAggregator::new(&registry, &ledger);

        assert_eq!(aggregator.aggregate(2), aggregator.aggregate(2));
    }

    #[test]
    fn filters_by_round_value_not_ledger_position() {
        let registry = registry();
        let ascending = vec![
            kill(1, "ana", "cid", "rifle", true),
            kill(2, "bob", "dot", "smg", false),
            kill(3, "cid", "ana", "awp", false),
        ];
        let descending: Vec<KillEvent> = ascending.iter().rev().cloned().collect();

        let from_ascending = StatAggregator::new(&registry, &ascending).aggregate(2);
        let from_descending = StatAggregator::new(&registry, &descending).aggregate(2);

        for player in ["ana", "bob", "cid", "dot"] {
            let a = stats_for(&from_ascending, player);
            let d = stats_for(&from_descending, player);
            assert_eq!((a.kills, a.deaths, a.headshots), (d.kills, d.deaths, d.headshots));
        }
    }

    #[test]
    fn self_kill_increments_both_kills_and_deaths() {
        let registry = registry();
        let ledger = vec![kill(1, "bob", "bob", "grenade", false)];
        let aggregator = StatAggregator::new(&registry, &ledger);

        let stats = aggregator.aggregate(1);
        let bob = stats_for(&stats, "bob");
        assert_eq!((bob.kills, bob.deaths), (1, 1));
    }

    #[test]
    fn unknown_identities_are_silently_dropped() {
        let registry = registry();
        let ledger = vec![
            kill(1, "ghost", "phantom", "rifle", true),
            kill(1, "ana", "cid", "rifle", false),
        ];
        let aggregator = StatAggregator::new(&registry, &ledger);

        let stats = aggregator.aggregate(1);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats.iter().map(|player| player.kills).sum::<u32>(), 1);
        assert_eq!(stats.iter().map(|player| player.deaths).sum::<u32>(), 1);
    }

    #[test]
    fn weapon_ties_go_to_the_first_encountered() {
        let registry = registry();
        let ledger = vec![
            kill(1, "ana", "cid", "famas", false),
            kill(1, "ana", "dot", "deagle", false),
            kill(2, "ana", "cid", "deagle", false),
            kill(2, "ana", "dot", "famas", false),
        ];
        let aggregator = StatAggregator::new(&registry, &ledger);

        assert_eq!(aggregator.most_used_weapon("ana", 1), "famas: 1");
        assert_eq!(aggregator.most_used_weapon("ana", 2), "famas: 2");
    }

    #[test]
    fn most_used_weapon_matches_aggregate_breakdown() {
        let registry = registry();
        let ledger = vec![
            kill(1, "ana", "cid", "rifle", false),
            kill(2, "ana", "dot", "awp", true),
            kill(2, "ana", "cid", "awp", false),
        ];
        let aggregator = StatAggregator::new(&registry, &ledger);

        for cursor in 1..=2 {
            let stats = aggregator.aggregate(cursor);
            assert_eq!(
                stats_for(&stats, "ana").weapon_breakdown,
                aggregator.most_used_weapon("ana", cursor)
            );
        }
    }

    #[test]
    fn empty_ledger_degrades_to_zeroed_entries() {
        let registry = registry();
        let ledger: Vec<KillEvent> = Vec::new();
        let aggregator = StatAggregator::new(&registry, &ledger);

        let stats = aggregator.aggregate(1);
        assert_eq!(stats.len(), 4);
        for player in stats {
            assert_eq!((player.kills, player.deaths, player.headshots), (0, 0, 0));
            assert_eq!(player.headshot_percentage, 0.0);
            assert_eq!(player.weapon_breakdown, NO_WEAPON_PLACEHOLDER);
        }
    }
}

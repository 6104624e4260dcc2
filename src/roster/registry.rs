use crate::roster::team_roster::{TeamRoster, TeamSlot};

const TEAM_A_NAME: &str = "NAVI";
const TEAM_A_PLAYERS: [&str; 5] = ["s1mple", "b1t", "electronic", "Boombl4", "Perfecto"];

const TEAM_B_NAME: &str = "Vitality";
const TEAM_B_PLAYERS: [&str; 5] = ["ZywOo", "apEX", "misutaaa", "Kyojin", "shox"];

/// The fixed, ordered membership of both teams in a match.
///
/// Constructed once at startup and passed by reference into the aggregation
/// engine; no operation mutates it. Lookups on unknown identities yield
/// "not found" rather than failing.
#[derive(Debug, Clone)]
pub struct RosterRegistry {
    team_a: TeamRoster,
    team_b: TeamRoster,
}

impl RosterRegistry {
    /// Creates a registry from the two team rosters.
    pub fn new(team_a: TeamRoster, team_b: TeamRoster) -> Self {
        Self { team_a, team_b }
    }

    /// Returns the roster occupying the given slot.
    pub fn team(&self, slot: TeamSlot) -> &TeamRoster {
        match slot {
            TeamSlot::A => &self.team_a,
            TeamSlot::B => &self.team_b,
        }
    }

    /// Returns whether `player` belongs to either team.
    pub fn contains(&self, player: &str) -> bool {
        self.team_a.contains(player) || self.team_b.contains(player)
    }

    /// Iterates over every known player identity, Team A first, each team in
    /// its canonical order. This concatenation order is the order of the
    /// aggregated output.
    pub fn players(&self) -> impl Iterator<Item = &String> {
        self.team_a.players().iter().chain(self.team_b.players())
    }
}

impl Default for RosterRegistry {
    /// The lineups of the match the shipped payloads were parsed from.
    fn default() -> Self {
        Self::new(
            TeamRoster::new(TEAM_A_NAME, &TEAM_A_PLAYERS),
            TeamRoster::new(TEAM_B_NAME, &TEAM_B_PLAYERS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RosterRegistry {
        RosterRegistry::new(
            TeamRoster::new("Alpha", &["ana", "bob"]),
            TeamRoster::new("Beta", &["cid", "dot"]),
        )
    }

    #[test]
    fn players_concatenates_team_a_then_team_b() {
        let registry = registry();
        let names: Vec<&str> = registry.players().map(String::as_str).collect();
        assert_eq!(names, ["ana", "bob", "cid", "dot"]);
    }

    #[test]
    fn contains_spans_both_teams() {
        let registry = registry();
        assert!(registry.contains("ana"));
        assert!(registry.contains("dot"));
        assert!(!registry.contains("eve"));
    }

    #[test]
    fn position_of_unknown_player_is_none() {
        let registry = registry();
        assert_eq!(registry.team(TeamSlot::A).position_of("bob"), Some(1));
        assert_eq!(registry.team(TeamSlot::A).position_of("cid"), None);
    }
}

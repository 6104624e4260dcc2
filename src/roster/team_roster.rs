/// Identifies one of the two fixed teams in a match.
///
/// There are never more than two teams, so unknown-team values are
/// unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSlot {
    A,
    B,
}

/// The fixed, ordered lineup of one team.
///
/// # Fields
///
/// * `name` - The team's display name.
/// * `players` - Player identities in canonical order. This order drives all
///   team-scoped display ordering and is never mutated.
#[derive(Debug, Clone)]
pub struct TeamRoster {
    name: String,
    players: Vec<String>,
}

impl TeamRoster {
    /// Creates a roster from a display name and an ordered lineup.
    pub fn new(name: &str, players: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            players: players.iter().map(|player| (*player).to_owned()).collect(),
        }
    }

    /// Returns the team's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lineup in canonical order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the canonical index of `player` within this lineup, or `None`
    /// if the player does not belong to this team.
    pub fn position_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|member| member == player)
    }

    /// Returns whether `player` belongs to this team.
    pub fn contains(&self, player: &str) -> bool {
        self.position_of(player).is_some()
    }
}

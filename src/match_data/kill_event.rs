use serde::Deserialize;

/// One side of a kill event.
///
/// # Fields
///
/// * `name` - The player's identity.
/// * `team` - The side the player was on when the event was logged, as the
///   log reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KillParticipant {
    pub name: String,
    pub team: String,
}

/// A single kill as recorded in the match log.
///
/// Events are immutable once ingested. The ledger they arrive in is not
/// guaranteed to be round-ascending, so consumers must filter by the `round`
/// value rather than by sequence position.
///
/// # Fields
///
/// * `round` - The round the kill happened in (1-based).
/// * `timestamp` - Wall-clock time of the kill.
/// * `killer` - The player credited with the kill.
/// * `victim` - The player who died.
/// * `weapon` - The weapon the kill was made with.
/// * `headshot` - Whether the kill was a headshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KillEvent {
    pub round: u32,
    pub timestamp: String,
    pub killer: KillParticipant,
    pub victim: KillParticipant,
    pub weapon: String,
    pub headshot: bool,
}

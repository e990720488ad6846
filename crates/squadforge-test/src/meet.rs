//! Sample competitions.

use squadforge_core::{Competition, CompositeRelayMode, GameMode, ScoreMode};

/// Relay scoring rule used by the fixtures: total age minus total time.
pub fn age_minus_chrono(total_age: f64, total_chrono: f64) -> f64 {
    total_age - total_chrono
}

/// A single `"100m"` score event.
pub fn sprint_meet(event_count_cap: usize) -> Competition {
    Competition::new([GameMode::from(ScoreMode::new("100m"))], event_count_cap)
        .expect("sprint meet is valid")
}

/// A single relay `"relay"` with legs `"leg-a"` and `"leg-b"`.
pub fn relay_meet(event_count_cap: usize) -> Competition {
    let relay = CompositeRelayMode::new("relay", ["leg-a", "leg-b"], age_minus_chrono);
    Competition::new([GameMode::from(relay)], event_count_cap).expect("relay meet is valid")
}

/// Score events `"100m"`, `"long-jump"` and `"shot-put"`, plus a relay
/// `"relay"` with legs `"relay-1"` and `"relay-2"`.
///
/// With [`athletics_roster`](crate::roster::athletics_roster) the best score
/// total is 30.
pub fn athletics_meet(event_count_cap: usize) -> Competition {
    let events = [
        GameMode::from(ScoreMode::new("100m")),
        GameMode::from(ScoreMode::new("long-jump")),
        GameMode::from(ScoreMode::new("shot-put")),
        GameMode::from(CompositeRelayMode::new(
            "relay",
            ["relay-1", "relay-2"],
            age_minus_chrono,
        )),
    ];
    Competition::new(events, event_count_cap).expect("athletics meet is valid")
}

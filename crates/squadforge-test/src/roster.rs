//! Sample competitors.

use squadforge_core::{Competitor, Perf};

/// A competitor with only a `"100m"` score.
pub fn sprinter(name: &str, score: f64) -> Competitor {
    Competitor::from_name(name, [("100m", Perf::Score(score))])
}

/// A competitor with a single relay leg time.
pub fn relay_runner(name: &str, leg: &str, chrono: f64, age: f64) -> Competitor {
    Competitor::from_name(name, [(leg, Perf::Chrono(chrono))]).with_age(age)
}

/// Six competitors for [`athletics_meet`](crate::meet::athletics_meet).
///
/// The best score total is Ana in the long jump, Ben in the 100m and Cleo in
/// the shot put. With a cap of 3 the relay legs go to Ana (`relay-1`) and Ben
/// (`relay-2`).
pub fn athletics_roster() -> Vec<Competitor> {
    vec![
        Competitor::from_name(
            "Ana",
            [
                ("100m", Perf::Score(12.0)),
                ("long-jump", Perf::Score(9.0)),
                ("relay-1", Perf::Chrono(11.0)),
            ],
        )
        .with_age(20.0),
        Competitor::from_name(
            "Ben",
            [
                ("100m", Perf::Score(10.0)),
                ("shot-put", Perf::Score(7.0)),
                ("relay-2", Perf::Chrono(12.0)),
            ],
        )
        .with_age(22.0),
        Competitor::from_name(
            "Cleo",
            [
                ("long-jump", Perf::Score(8.0)),
                ("shot-put", Perf::Score(11.0)),
            ],
        )
        .with_age(30.0),
        Competitor::from_name(
            "Dan",
            [
                ("100m", Perf::Score(6.0)),
                ("relay-1", Perf::Chrono(13.0)),
                ("relay-2", Perf::Chrono(12.5)),
            ],
        )
        .with_age(25.0),
        Competitor::from_name(
            "Eve",
            [
                ("long-jump", Perf::Score(4.0)),
                ("shot-put", Perf::Score(5.0)),
            ],
        ),
        relay_runner("Finn", "relay-2", 11.5, 19.0),
    ]
}

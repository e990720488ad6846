use super::*;
use crate::id::PlayerId;
use crate::perf::Perf;

fn medley() -> CompositeRelayMode {
    CompositeRelayMode::new("medley", ["back", "breast"], |age, chrono| {
        age * 10.0 - chrono
    })
}

fn swimmer(name: &str, leg: &str, chrono: f64, age: Option<f64>) -> Competitor {
    let competitor = Competitor::from_name(name, [(leg, Perf::Chrono(chrono))]);
    match age {
        Some(age) => competitor.with_age(age),
        None => competitor,
    }
}

#[test]
fn test_score_mode_points() {
    let mode = ScoreMode::new("shot-put");
    let ada = Competitor::from_name("Ada", [("shot-put", Perf::Score(7.5))]);

    assert_eq!(mode.points(&ada), Ok(7.5));
}

#[test]
fn test_score_mode_rejects_chrono_record() {
    let mode = ScoreMode::new("back");
    let ada = swimmer("Ada", "back", 30.0, None);

    assert!(matches!(
        mode.points(&ada),
        Err(SquadError::MissingPerformance { expected: "score", .. })
    ));
}

#[test]
fn test_relay_points_sum_ages_and_chronos() {
    let ada = swimmer("Ada", "back", 30.0, Some(20.0));
    let bob = swimmer("Bob", "breast", 40.0, Some(25.0));
    let mut lineup = Lineup::new();
    lineup.insert(GameModeId::new("back"), &ada);
    lineup.insert(GameModeId::new("breast"), &bob);

    assert_eq!(medley().points(&lineup), Ok(45.0 * 10.0 - 70.0));
}

#[test]
fn test_relay_points_missing_leg() {
    let ada = swimmer("Ada", "back", 30.0, Some(20.0));
    let mut lineup = Lineup::new();
    lineup.insert(GameModeId::new("back"), &ada);

    assert_eq!(
        medley().points(&lineup),
        Err(SquadError::MissingAssignment {
            event: GameModeId::new("medley"),
            leg: Some(GameModeId::new("breast")),
        })
    );
}

#[test]
fn test_relay_points_missing_age() {
    let ada = swimmer("Ada", "back", 30.0, Some(20.0));
    let bob = swimmer("Bob", "breast", 40.0, None);
    let mut lineup = Lineup::new();
    lineup.insert(GameModeId::new("back"), &ada);
    lineup.insert(GameModeId::new("breast"), &bob);

    assert_eq!(
        medley().points(&lineup),
        Err(SquadError::MissingAge {
            player: PlayerId::new("Bob")
        })
    );
}

#[test]
fn test_game_mode_dispatch() {
    let sprint: GameMode = ScoreMode::new("100m").into();
    let relay: GameMode = medley().into();
    let ada = Competitor::from_name("Ada", [("100m", Perf::Score(9.0))]);
    let mut lineup = Lineup::new();
    lineup.insert(GameModeId::new("100m"), &ada);

    assert_eq!(sprint.points(&lineup), Ok(9.0));
    assert!(sprint.as_score().is_some());
    assert!(relay.as_composite_relay().is_some());
    assert_eq!(relay.name(), &GameModeId::new("medley"));
    assert!(matches!(
        relay.points(&lineup),
        Err(SquadError::MissingAssignment { .. })
    ));
}

#[test]
fn test_relay_debug_omits_scoring_rule() {
    let debug = format!("{:?}", medley());
    assert!(debug.contains("CompositeRelayMode"));
    assert!(debug.contains("breast"));
}

use std::collections::HashSet;

use super::*;

#[test]
fn test_display_without_distinction() {
    assert_eq!(GameModeId::new("high-jump").to_string(), "high-jump");
    assert_eq!(PlayerId::new("Ada").to_string(), "Ada");
}

#[test]
fn test_display_with_distinction() {
    let id = PlayerId::with_distinction("Ada", "junior");
    assert_eq!(id.to_string(), "Ada (junior)");
    assert_eq!(id.name(), "Ada");
    assert_eq!(id.distinction(), Some("junior"));
}

#[test]
fn test_equality_uses_full_pair() {
    let mut ids = HashSet::new();
    ids.insert(GameModeId::new("100m"));
    ids.insert(GameModeId::with_distinction("100m", "final"));
    ids.insert(GameModeId::from("100m"));

    assert_eq!(ids.len(), 2);
}

#[test]
fn test_from_string_wraps_name() {
    let id: GameModeId = String::from("relay").into();
    assert_eq!(id, GameModeId::new("relay"));
    assert_eq!(id.distinction(), None);
}

#[test]
fn test_parse_round_trips_display_form() {
    let id: GameModeId = "50m free (leg 2)".parse().unwrap();
    assert_eq!(id, GameModeId::with_distinction("50m free", "leg 2"));

    let plain: PlayerId = "  Grace ".parse().unwrap();
    assert_eq!(plain, PlayerId::new("Grace"));
}

#[test]
fn test_parse_rejects_malformed_input() {
    for input in ["", "   ", "(final)", "100m (", "100m ()", "100m (a) (b)", "1(00m"] {
        let err = input.parse::<GameModeId>().unwrap_err();
        assert!(
            matches!(err, SquadError::InvalidIdentifier(_)),
            "{input:?} gave {err:?}"
        );
    }
}

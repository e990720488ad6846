//! Competitors and their performance records.

use std::collections::HashMap;

use crate::error::{Result, SquadError};
use crate::id::{GameModeId, PlayerId};
use crate::perf::Perf;

/// A candidate team member.
///
/// Holds at most one [`Perf`] per event. The age is optional because only
/// composite events need it; reading it when absent is an error.
///
/// # Examples
///
/// ```
/// use squadforge_core::{Competitor, Perf};
///
/// let ada = Competitor::from_name("Ada", [("100m", Perf::Score(10.0))]).with_age(31.0);
///
/// assert_eq!(ada.score_at(&"100m".into()).unwrap(), 10.0);
/// assert_eq!(ada.age().unwrap(), 31.0);
/// assert!(Competitor::new("Bob", Default::default()).age().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Competitor {
    id: PlayerId,
    performance_at: HashMap<GameModeId, Perf>,
    age: Option<f64>,
}

impl Competitor {
    /// Creates a competitor without an age.
    pub fn new(id: impl Into<PlayerId>, performance_at: HashMap<GameModeId, Perf>) -> Self {
        Self {
            id: id.into(),
            performance_at,
            age: None,
        }
    }

    /// Creates a competitor from a bare name and `(event, record)` pairs.
    ///
    /// A later record for the same event replaces an earlier one.
    pub fn from_name<M, I>(name: &str, performances: I) -> Self
    where
        M: Into<GameModeId>,
        I: IntoIterator<Item = (M, Perf)>,
    {
        let performance_at = performances
            .into_iter()
            .map(|(mode, perf)| (mode.into(), perf))
            .collect();
        Self::new(PlayerId::new(name), performance_at)
    }

    /// Sets the age.
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    /// Records a performance, replacing any previous record at that event.
    pub fn with_performance(mut self, mode: impl Into<GameModeId>, perf: Perf) -> Self {
        self.performance_at.insert(mode.into(), perf);
        self
    }

    #[inline]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Returns the age, or [`SquadError::MissingAge`] if it was never given.
    pub fn age(&self) -> Result<f64> {
        self.age.ok_or_else(|| SquadError::MissingAge {
            player: self.id.clone(),
        })
    }

    /// Returns true if an age was supplied.
    #[inline]
    pub fn has_age(&self) -> bool {
        self.age.is_some()
    }

    /// Returns the record at `mode`, if any.
    #[inline]
    pub fn performance_at(&self, mode: &GameModeId) -> Option<&Perf> {
        self.performance_at.get(mode)
    }

    /// Iterates over the events this competitor has a record for.
    pub fn known_modes(&self) -> impl Iterator<Item = &GameModeId> {
        self.performance_at.keys()
    }

    /// Returns the `Score` recorded at `mode`.
    pub fn score_at(&self, mode: &GameModeId) -> Result<f64> {
        self.performance_at(mode)
            .and_then(Perf::score)
            .ok_or_else(|| self.missing(mode, "score"))
    }

    /// Returns the `Chrono` recorded at `mode`.
    pub fn chrono_at(&self, mode: &GameModeId) -> Result<f64> {
        self.performance_at(mode)
            .and_then(Perf::chrono)
            .ok_or_else(|| self.missing(mode, "chrono"))
    }

    /// Returns true if this competitor can fill the composite leg `mode`:
    /// the record there is a `Chrono` and the age is known.
    pub fn can_run_leg(&self, mode: &GameModeId) -> bool {
        self.has_age() && self.performance_at(mode).and_then(Perf::chrono).is_some()
    }

    fn missing(&self, mode: &GameModeId, expected: &'static str) -> SquadError {
        SquadError::MissingPerformance {
            player: self.id.clone(),
            mode: mode.clone(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Competitor {
        Competitor::from_name(
            "Ada",
            [("100m", Perf::Score(10.0)), ("50m free", Perf::Chrono(29.5))],
        )
    }

    #[test]
    fn test_score_lookup() {
        assert_eq!(ada().score_at(&GameModeId::new("100m")), Ok(10.0));
    }

    #[test]
    fn test_wrong_shape_is_missing_performance() {
        let err = ada().score_at(&GameModeId::new("50m free")).unwrap_err();
        assert_eq!(
            err,
            SquadError::MissingPerformance {
                player: PlayerId::new("Ada"),
                mode: GameModeId::new("50m free"),
                expected: "score",
            }
        );
    }

    #[test]
    fn test_absent_record_is_missing_performance() {
        let err = ada().chrono_at(&GameModeId::new("long-jump")).unwrap_err();
        assert!(matches!(err, SquadError::MissingPerformance { expected: "chrono", .. }));
    }

    #[test]
    fn test_age_accessor() {
        assert_eq!(
            ada().age(),
            Err(SquadError::MissingAge {
                player: PlayerId::new("Ada")
            })
        );
        let aged = ada().with_age(40.0);
        assert!(aged.has_age());
        assert_eq!(aged.age(), Ok(40.0));
    }

    #[test]
    fn test_can_run_leg() {
        let leg = GameModeId::new("50m free");
        assert!(!ada().can_run_leg(&leg));
        assert!(ada().with_age(40.0).can_run_leg(&leg));
        assert!(!ada().with_age(40.0).can_run_leg(&GameModeId::new("100m")));
        assert!(!ada().with_age(40.0).can_run_leg(&GameModeId::new("fly")));
    }

    #[test]
    fn test_known_modes() {
        let mut modes: Vec<_> = ada().known_modes().map(ToString::to_string).collect();
        modes.sort();
        assert_eq!(modes, vec!["100m", "50m free"]);
    }
}

//! Event definitions.
//!
//! A competition is made of [`GameMode`]s. Individually scored events are
//! [`ScoreMode`]s; relay-like events whose score depends on several legs run
//! by different competitors are [`CompositeRelayMode`]s.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::competitor::Competitor;
use crate::error::{Result, SquadError};
use crate::id::GameModeId;

/// Who runs which event: event (or leg) id to competitor.
pub type Lineup<'a> = HashMap<GameModeId, &'a Competitor>;

/// Scoring rule of a composite event: `(total_age, total_chrono) -> points`.
pub type AgeChronoPoints = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// An individually scored event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreMode {
    name: GameModeId,
}

impl ScoreMode {
    pub fn new(name: impl Into<GameModeId>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &GameModeId {
        &self.name
    }

    /// Returns the points `competitor` earns at this event.
    ///
    /// Fails with [`SquadError::MissingPerformance`] if the competitor has no
    /// record here or the record is not a score.
    pub fn points(&self, competitor: &Competitor) -> Result<f64> {
        competitor.score_at(&self.name)
    }
}

/// A relay-like event scored from its legs' combined ages and timings.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use squadforge_core::{CompositeRelayMode, Competitor, GameModeId, Perf};
///
/// let relay = CompositeRelayMode::new(
///     "2x50m",
///     ["leg 1", "leg 2"],
///     |age, chrono| age - chrono,
/// );
///
/// let ada = Competitor::from_name("Ada", [("leg 1", Perf::Chrono(30.0))]).with_age(40.0);
/// let bob = Competitor::from_name("Bob", [("leg 2", Perf::Chrono(32.0))]).with_age(35.0);
///
/// let mut lineup = HashMap::new();
/// lineup.insert(GameModeId::new("leg 1"), &ada);
/// lineup.insert(GameModeId::new("leg 2"), &bob);
///
/// assert_eq!(relay.points(&lineup).unwrap(), 75.0 - 62.0);
/// ```
#[derive(Clone)]
pub struct CompositeRelayMode {
    name: GameModeId,
    atomic_modes: Vec<GameModeId>,
    age_chrono_points: AgeChronoPoints,
}

impl fmt::Debug for CompositeRelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeRelayMode")
            .field("name", &self.name)
            .field("atomic_modes", &self.atomic_modes)
            .finish_non_exhaustive()
    }
}

impl CompositeRelayMode {
    /// Creates a composite event from its legs and scoring rule.
    pub fn new<M, I, F>(name: impl Into<GameModeId>, atomic_modes: I, age_chrono_points: F) -> Self
    where
        M: Into<GameModeId>,
        I: IntoIterator<Item = M>,
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            atomic_modes: atomic_modes.into_iter().map(Into::into).collect(),
            age_chrono_points: Arc::new(age_chrono_points),
        }
    }

    #[inline]
    pub fn name(&self) -> &GameModeId {
        &self.name
    }

    /// The legs, in running order.
    #[inline]
    pub fn atomic_modes(&self) -> &[GameModeId] {
        &self.atomic_modes
    }

    /// Scores the event for the competitors running its legs.
    ///
    /// Sums each leg holder's age and their chrono at that leg, then applies
    /// the scoring rule. Every leg must appear in `lineup`.
    pub fn points(&self, lineup: &Lineup<'_>) -> Result<f64> {
        let mut total_age = 0.0;
        let mut total_chrono = 0.0;
        for leg in &self.atomic_modes {
            let competitor = lineup
                .get(leg)
                .ok_or_else(|| SquadError::MissingAssignment {
                    event: self.name.clone(),
                    leg: Some(leg.clone()),
                })?;
            total_age += competitor.age()?;
            total_chrono += competitor.chrono_at(leg)?;
        }
        Ok((self.age_chrono_points)(total_age, total_chrono))
    }
}

/// An event of a competition, dispatched by variant.
#[derive(Debug, Clone)]
pub enum GameMode {
    Score(ScoreMode),
    CompositeRelay(CompositeRelayMode),
}

impl GameMode {
    /// Returns the event id.
    pub fn name(&self) -> &GameModeId {
        match self {
            GameMode::Score(mode) => mode.name(),
            GameMode::CompositeRelay(mode) => mode.name(),
        }
    }

    /// Scores this event for `lineup`.
    ///
    /// A score event looks up its own id in `lineup`; a composite event
    /// looks up each of its legs.
    pub fn points(&self, lineup: &Lineup<'_>) -> Result<f64> {
        match self {
            GameMode::Score(mode) => {
                let competitor =
                    lineup
                        .get(mode.name())
                        .ok_or_else(|| SquadError::MissingAssignment {
                            event: mode.name().clone(),
                            leg: None,
                        })?;
                mode.points(competitor)
            }
            GameMode::CompositeRelay(mode) => mode.points(lineup),
        }
    }

    pub fn as_score(&self) -> Option<&ScoreMode> {
        match self {
            GameMode::Score(mode) => Some(mode),
            GameMode::CompositeRelay(_) => None,
        }
    }

    pub fn as_composite_relay(&self) -> Option<&CompositeRelayMode> {
        match self {
            GameMode::CompositeRelay(mode) => Some(mode),
            GameMode::Score(_) => None,
        }
    }
}

impl From<ScoreMode> for GameMode {
    fn from(mode: ScoreMode) -> Self {
        GameMode::Score(mode)
    }
}

impl From<CompositeRelayMode> for GameMode {
    fn from(mode: CompositeRelayMode) -> Self {
        GameMode::CompositeRelay(mode)
    }
}

#[cfg(test)]
mod tests;

//! Competitions and the event indices derived from them.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::competitor::Competitor;
use crate::error::{Result, SquadError};
use crate::game_mode::{CompositeRelayMode, GameMode};
use crate::id::GameModeId;

/// A set of events plus a cap on the number of team members.
///
/// Indices are derived once in [`Competition::new`]; there are no mutating
/// methods afterwards.
///
/// # Examples
///
/// ```
/// use squadforge_core::{Competition, CompositeRelayMode, GameMode, GameModeId, ScoreMode};
///
/// let competition = Competition::new(
///     [
///         GameMode::from(ScoreMode::new("100m")),
///         GameMode::from(CompositeRelayMode::new("4x50m", ["leg 1", "leg 2"], |_, chrono| -chrono)),
///     ],
///     3,
/// )
/// .unwrap();
///
/// assert_eq!(competition.event_count_cap(), 3);
/// assert_eq!(competition.atomic_event_ids().len(), 3);
/// assert!(competition.is_relay_leg(&GameModeId::new("leg 2")));
/// ```
#[derive(Debug, Clone)]
pub struct Competition {
    event_count_cap: usize,
    events: HashMap<GameModeId, GameMode>,
    score_event_ids: BTreeSet<GameModeId>,
    relay_modes: BTreeMap<GameModeId, CompositeRelayMode>,
    leg_ids: BTreeSet<GameModeId>,
    atomic_event_ids: BTreeSet<GameModeId>,
}

impl Competition {
    /// Builds a competition and derives its indices.
    ///
    /// Fails with [`SquadError::InvalidCompetition`] when two events share a
    /// name, a composite event has no legs or repeats a leg, or a leg id is
    /// also declared as a top-level event.
    pub fn new<I>(events: I, event_count_cap: usize) -> Result<Self>
    where
        I: IntoIterator<Item = GameMode>,
    {
        let mut by_name = HashMap::new();
        for event in events {
            let name = event.name().clone();
            if by_name.insert(name.clone(), event).is_some() {
                return Err(SquadError::InvalidCompetition(format!(
                    "event {name} is declared twice"
                )));
            }
        }

        let mut score_event_ids = BTreeSet::new();
        let mut relay_modes = BTreeMap::new();
        for (name, event) in &by_name {
            match event {
                GameMode::Score(_) => {
                    score_event_ids.insert(name.clone());
                }
                GameMode::CompositeRelay(relay) => {
                    relay_modes.insert(name.clone(), relay.clone());
                }
            }
        }

        let mut leg_ids = BTreeSet::new();
        for relay in relay_modes.values() {
            if relay.atomic_modes().is_empty() {
                return Err(SquadError::InvalidCompetition(format!(
                    "{} has no legs",
                    relay.name()
                )));
            }
            let mut seen = HashSet::new();
            for leg in relay.atomic_modes() {
                if !seen.insert(leg) {
                    return Err(SquadError::InvalidCompetition(format!(
                        "leg {leg} appears twice in {}",
                        relay.name()
                    )));
                }
                if by_name.contains_key(leg) {
                    return Err(SquadError::InvalidCompetition(format!(
                        "leg {leg} of {} is also declared as an event",
                        relay.name()
                    )));
                }
                leg_ids.insert(leg.clone());
            }
        }

        let atomic_event_ids = score_event_ids.union(&leg_ids).cloned().collect();

        Ok(Self {
            event_count_cap,
            events: by_name,
            score_event_ids,
            relay_modes,
            leg_ids,
            atomic_event_ids,
        })
    }

    /// Maximum number of distinct competitors in a team.
    #[inline]
    pub fn event_count_cap(&self) -> usize {
        self.event_count_cap
    }

    #[inline]
    pub fn events(&self) -> &HashMap<GameModeId, GameMode> {
        &self.events
    }

    pub fn event(&self, id: &GameModeId) -> Option<&GameMode> {
        self.events.get(id)
    }

    /// Ids of the individually scored events.
    #[inline]
    pub fn score_event_ids(&self) -> &BTreeSet<GameModeId> {
        &self.score_event_ids
    }

    /// Composite events by id.
    #[inline]
    pub fn relay_modes(&self) -> &BTreeMap<GameModeId, CompositeRelayMode> {
        &self.relay_modes
    }

    /// Every slot that must be filled by exactly one competitor: the score
    /// events plus all composite legs.
    #[inline]
    pub fn atomic_event_ids(&self) -> &BTreeSet<GameModeId> {
        &self.atomic_event_ids
    }

    #[inline]
    pub fn is_score_event(&self, id: &GameModeId) -> bool {
        self.score_event_ids.contains(id)
    }

    #[inline]
    pub fn is_relay_leg(&self, id: &GameModeId) -> bool {
        self.leg_ids.contains(id)
    }

    /// Smallest team that could possibly fill every slot.
    ///
    /// Each competitor takes at most one score event and at most one leg of
    /// any given composite event.
    pub fn minimum_team_size(&self) -> usize {
        let longest_relay = self
            .relay_modes
            .values()
            .map(|relay| relay.atomic_modes().len())
            .max()
            .unwrap_or(0);
        self.score_event_ids.len().max(longest_relay)
    }

    /// Checks that a competitor's records at score events are scores.
    ///
    /// Records at composite legs are not checked here; a leg record only
    /// matters if the competitor could run that leg, see
    /// [`Competitor::can_run_leg`]. Records at unknown events are ignored.
    pub fn check_competitor(&self, competitor: &Competitor) -> Result<()> {
        for mode in competitor.known_modes() {
            if self.is_score_event(mode) {
                competitor.score_at(mode)?;
            }
        }
        Ok(())
    }
}

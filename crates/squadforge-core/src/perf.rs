//! Performance records.

use std::fmt;

/// A competitor's recorded result at one event.
///
/// # Examples
///
/// ```
/// use squadforge_core::Perf;
///
/// let jump = Perf::Score(12.5);
/// let swim = Perf::Chrono(31.2);
///
/// assert_eq!(jump.score(), Some(12.5));
/// assert_eq!(jump.chrono(), None);
/// assert_eq!(swim.chrono(), Some(31.2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Perf {
    /// A direct point value.
    Score(f64),
    /// A timing, only meaningful inside composite scoring.
    Chrono(f64),
}

impl Perf {
    /// Returns the point value of a `Score` record.
    #[inline]
    pub fn score(&self) -> Option<f64> {
        match self {
            Perf::Score(score) => Some(*score),
            Perf::Chrono(_) => None,
        }
    }

    /// Returns the timing of a `Chrono` record.
    #[inline]
    pub fn chrono(&self) -> Option<f64> {
        match self {
            Perf::Chrono(chrono) => Some(*chrono),
            Perf::Score(_) => None,
        }
    }
}

impl fmt::Display for Perf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Perf::Score(score) => write!(f, "{score}pts"),
            Perf::Chrono(chrono) => write!(f, "{chrono}s"),
        }
    }
}

//! Identifiers for events and competitors.
//!
//! Both identifiers are a name plus an optional distinguishing tag, so that
//! two "100m" events (say, a heat and a final) or two competitors sharing a
//! name can coexist. Equality, ordering and hashing use the full pair.

use std::fmt;
use std::str::FromStr;

use crate::error::SquadError;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            name: String,
            distinction: Option<String>,
        }

        impl $name {
            /// Creates an identifier without a distinction.
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    distinction: None,
                }
            }

            /// Creates an identifier with a distinguishing tag.
            pub fn with_distinction(name: impl Into<String>, distinction: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    distinction: Some(distinction.into()),
                }
            }

            #[inline]
            pub fn name(&self) -> &str {
                &self.name
            }

            #[inline]
            pub fn distinction(&self) -> Option<&str> {
                self.distinction.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.distinction {
                    None => write!(f, "{}", self.name),
                    Some(distinction) => write!(f, "{} ({})", self.name, distinction),
                }
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self::new(name)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        /// Parses the display form: `name` or `name (distinction)`.
        impl FromStr for $name {
            type Err = SquadError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (name, distinction) = split_display_form(s)?;
                Ok(Self {
                    name: name.to_string(),
                    distinction: distinction.map(str::to_string),
                })
            }
        }
    };
}

identifier!(
    /// Identifies a game mode (an event of the competition).
    ///
    /// ```
    /// use squadforge_core::GameModeId;
    ///
    /// let plain = GameModeId::from("100m");
    /// let tagged = GameModeId::with_distinction("100m", "final");
    ///
    /// assert_eq!(plain.to_string(), "100m");
    /// assert_eq!(tagged.to_string(), "100m (final)");
    /// assert_ne!(plain, tagged);
    /// ```
    GameModeId
);

identifier!(
    /// Identifies a competitor.
    PlayerId
);

fn split_display_form(s: &str) -> Result<(&str, Option<&str>), SquadError> {
    let trimmed = s.trim();
    let (name, distinction) = match trimmed.strip_suffix(')') {
        Some(body) => {
            let open = body
                .rfind(" (")
                .ok_or_else(|| SquadError::InvalidIdentifier(format!("unbalanced parentheses in {s:?}")))?;
            let distinction = &body[open + 2..];
            if distinction.is_empty() {
                return Err(SquadError::InvalidIdentifier(format!(
                    "empty distinction in {s:?}"
                )));
            }
            (body[..open].trim_end(), Some(distinction))
        }
        None => (trimmed, None),
    };

    if name.is_empty() {
        return Err(SquadError::InvalidIdentifier(format!("empty name in {s:?}")));
    }
    let stray = |part: &str| part.contains('(') || part.contains(')');
    if stray(name) || distinction.is_some_and(stray) {
        return Err(SquadError::InvalidIdentifier(format!(
            "unbalanced parentheses in {s:?}"
        )));
    }
    Ok((name, distinction))
}

#[cfg(test)]
mod tests;

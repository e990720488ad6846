//! Entry points that hide the optimizer wiring.

use std::io::ErrorKind;
use std::path::Path;

use squadforge_config::{ConfigError, SolverConfig};
use squadforge_core::{Competition, Competitor, Result};
use squadforge_solver::{TeamOptimizer, TeamSolution};
use tracing::warn;

/// Configuration file read by [`best_team`].
const CONFIG_FILE: &str = "solver.toml";

/// Selects the best team, configured by `solver.toml` in the working
/// directory if there is one.
pub fn best_team(competitors: &[Competitor], competition: &Competition) -> Result<TeamSolution> {
    best_team_with_config(competitors, competition, &load_config(CONFIG_FILE))
}

/// Selects the best team with an explicit configuration.
pub fn best_team_with_config(
    competitors: &[Competitor],
    competition: &Competition,
    config: &SolverConfig,
) -> Result<TeamSolution> {
    TeamOptimizer::new(config).solve(competitors, competition)
}

/// Loads a TOML configuration, falling back to the defaults.
///
/// A missing file is silent; a file that cannot be read or parsed is
/// reported.
pub fn load_config(path: impl AsRef<Path>) -> SolverConfig {
    match SolverConfig::load(path.as_ref()) {
        Ok(config) => config,
        Err(err) if is_missing_file(&err) => SolverConfig::default(),
        Err(err) => {
            warn!(
                event = "config_ignored",
                path = %path.as_ref().display(),
                error = %err,
            );
            SolverConfig::default()
        }
    }
}

fn is_missing_file(err: &ConfigError) -> bool {
    matches!(err, ConfigError::Io(io) if io.kind() == ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_not_found_counts_as_missing() {
        let missing = SolverConfig::load("does-not-exist/solver.toml").unwrap_err();
        assert!(is_missing_file(&missing));

        // Reading a directory fails with an IO error other than NotFound.
        let unreadable = SolverConfig::load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(unreadable, ConfigError::Io(_)));
        assert!(!is_missing_file(&unreadable));

        let invalid = SolverConfig::from_toml_str("exploration_type = 1").unwrap_err();
        assert!(!is_missing_file(&invalid));
    }
}

use kepler::SolverSettings;
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file. {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file. {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid track step '{0}'")]
    Step(String),
    #[error("Invalid configuration entry '{0}'")]
    Invalid(&'static str),
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub name: Option<String>,
    pub solver: Solver,
    pub track: Track,
}

/// Kepler solver overrides
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Solver {
    pub max_iterations: Option<usize>,
    /// [rad]
    pub tolerance: Option<f64>,
}

/// Ground track sampling defaults for tle-track
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Track {
    /// humantime duration, e.g. "30s" or "1m"
    pub step: Option<String>,
    pub count: Option<usize>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;

        if cfg.solver.max_iterations == Some(0) {
            return Err(ConfigError::Invalid("solver.max-iterations"));
        }
        if let Some(tol) = cfg.solver.tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(ConfigError::Invalid("solver.tolerance"));
            }
        }
        if cfg.track.count == Some(0) {
            return Err(ConfigError::Invalid("track.count"));
        }
        cfg.track_step()?;

        Ok(cfg)
    }

    pub fn solver_settings(&self) -> SolverSettings {
        let defaults = SolverSettings::default();
        SolverSettings {
            max_iterations: self
                .solver
                .max_iterations
                .unwrap_or(defaults.max_iterations),
            tolerance: self.solver.tolerance.unwrap_or(defaults.tolerance),
        }
    }

    pub fn track_step(&self) -> Result<Option<Duration>, ConfigError> {
        self.track
            .step
            .as_deref()
            .map(|s| humantime::parse_duration(s).map_err(|_| ConfigError::Step(s.to_owned())))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = Config::from_str_checked("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.solver_settings(), SolverSettings::default());
        assert_eq!(cfg.track_step().unwrap(), None);
    }

    #[test]
    fn full_config() {
        let cfg = Config::from_str_checked(indoc! {r#"
            name = "tight"

            [solver]
            max-iterations = 25
            tolerance = 1e-10

            [track]
            step = "30s"
            count = 120
            "#})
        .unwrap();
        assert_eq!(cfg.name.as_deref(), Some("tight"));
        assert_eq!(
            cfg.solver_settings(),
            SolverSettings {
                max_iterations: 25,
                tolerance: 1E-10
            }
        );
        assert_eq!(cfg.track_step().unwrap(), Some(Duration::from_secs(30)));
        assert_eq!(cfg.track.count, Some(120));
    }

    #[test]
    fn rejects_invalid_entries() {
        assert!(matches!(
            Config::from_str_checked("[solver]\nmax-iterations = 0"),
            Err(ConfigError::Invalid("solver.max-iterations"))
        ));
        assert!(matches!(
            Config::from_str_checked("[solver]\ntolerance = -1.0"),
            Err(ConfigError::Invalid("solver.tolerance"))
        ));
        assert!(matches!(
            Config::from_str_checked("[track]\ncount = 0"),
            Err(ConfigError::Invalid("track.count"))
        ));
        assert!(matches!(
            Config::from_str_checked("[track]\nstep = \"soon\""),
            Err(ConfigError::Step(_))
        ));
        assert!(matches!(
            Config::from_str_checked("[solver]\nmax-iterations = \"many\""),
            Err(ConfigError::Toml(_))
        ));
    }
}

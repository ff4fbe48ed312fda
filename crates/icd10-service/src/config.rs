//! Service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the directory with the four dataset files.
pub const DATA_DIR_ENV: &str = "ICD10_DATA_DIR";
/// Environment variable for the listening port.
pub const PORT_ENV: &str = "ICD10_PORT";

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors surfaced at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing {0} in environment")]
    MissingVar(&'static str),

    /// An environment variable holds an unparseable value.
    #[error("Invalid value for {name}: {value}")]
    InvalidVar {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the four dataset files.
    pub data_dir: PathBuf,
    /// TCP port to listen on.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `ICD10_DATA_DIR` is required; the service refuses to start without
    /// it. `ICD10_PORT` defaults to 3000 when absent, but a present,
    /// unparseable value is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .map_err(|_| ConfigError::MissingVar(DATA_DIR_ENV))?;

        let port = match env::var(PORT_ENV) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidVar {
                    name: PORT_ENV,
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { data_dir, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global; one test exercises all the
    // flows to avoid racing parallel tests.
    #[test]
    fn test_from_env() {
        env::remove_var(DATA_DIR_ENV);
        env::remove_var(PORT_ENV);
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar(name)) if name == DATA_DIR_ENV
        ));

        env::set_var(DATA_DIR_ENV, "/data/icd10");
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/data/icd10"));
        assert_eq!(config.port, DEFAULT_PORT);

        env::set_var(PORT_ENV, "8080");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);

        env::set_var(PORT_ENV, "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidVar { .. })
        ));

        env::remove_var(DATA_DIR_ENV);
        env::remove_var(PORT_ENV);
    }
}

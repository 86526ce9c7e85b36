//! Configuration loading for mailcount.

mod env;
mod paths;
mod read;

pub use env::*;
pub use paths::*;
pub use read::*;

use std::path::PathBuf;

use config_core::Config;

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the configuration file.
    #[error(transparent)]
    Read(ReadError),

    /// Failed to parse the configuration contents.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying TOML parse error.
        #[source]
        source: toml::de::Error,
    },

    /// No configuration file was found and the environment fallback is incomplete.
    #[error("no config file found; environment fallback failed: {0}")]
    Env(#[source] EnvError),
}

/// Load configuration from an explicit path, the default locations,
/// or the environment.
///
/// With an explicit path only that file is considered, and its absence is an
/// error. Otherwise the default locations are tried in order, and when none
/// of them exists the configuration is assembled from `MAILCOUNT_*`
/// environment variables.
pub async fn load(explicit_path: Option<PathBuf>) -> Result<Config, LoadError> {
    let explicit = explicit_path.is_some();
    let candidates: Vec<PathBuf> = resolve(explicit_path).collect();

    let file = match first_existing(&candidates).await {
        Ok(file) => file,
        Err(ReadError::NotFound { .. }) if !explicit => {
            return from_env().map_err(LoadError::Env);
        }
        Err(error) => return Err(LoadError::Read(error)),
    };

    parse_str(&file.contents).map_err(|source| LoadError::Parse {
        path: file.path,
        source,
    })
}

/// Parse configuration directly from a TOML string.
pub fn parse_str(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

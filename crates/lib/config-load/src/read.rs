//! First-existing configuration file reading.

use std::path::{Path, PathBuf};

/// A configuration file that was found and read.
#[derive(Debug)]
pub struct ConfigFile {
    /// Where the file was found.
    pub path: PathBuf,

    /// The raw file contents.
    pub contents: String,
}

/// Errors returned while locating and reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// None of the candidate paths exists.
    #[error("no config file found in paths: {paths:?}")]
    NotFound {
        /// The paths that were tried.
        paths: Vec<PathBuf>,
    },

    /// A candidate file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read the first existing file among the candidate paths, in order.
///
/// Paths that do not exist are skipped; any other I/O error aborts the
/// search, so a present-but-unreadable config surfaces instead of being
/// silently shadowed by a later candidate.
pub async fn first_existing<P>(paths: &[P]) -> Result<ConfigFile, ReadError>
where
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                return Ok(ConfigFile {
                    path: path.to_path_buf(),
                    contents,
                });
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(ReadError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Err(ReadError::NotFound {
        paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    })
}

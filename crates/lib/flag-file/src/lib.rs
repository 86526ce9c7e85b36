//! The new-mail flag file.
//!
//! A single-character file consumed by external tooling (status bars and
//! the like) to learn "new mail present" without speaking IMAP. This
//! process is the only writer; each publish rewrites the whole file.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Permissions the flag file is created with: world-readable,
/// owner-writable.
pub const FLAG_FILE_MODE: u32 = 0o644;

/// Errors returned while maintaining the flag file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to create the flag file.
    #[error("failed to create flag file {path}: {source}")]
    Create {
        /// Path to the flag file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to set the flag file permissions.
    #[error("failed to set permissions on flag file {path}: {source}")]
    Permissions {
        /// Path to the flag file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the flag file.
    #[error("failed to write flag file {path}: {source}")]
    Write {
        /// Path to the flag file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Create the flag file with fixed permissions if it does not exist.
///
/// An existing file is left untouched, permissions included.
pub async fn ensure(path: &Path) -> Result<(), Error> {
    let created = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;

    match created {
        Ok(_) => {}
        Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
        Err(source) => {
            return Err(Error::Create {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(FLAG_FILE_MODE))
        .await
        .map_err(|source| Error::Permissions {
            path: path.to_path_buf(),
            source,
        })
}

/// Overwrite the flag file contents with a single character:
/// `1` when new mail is present, `0` otherwise.
pub async fn publish(path: &Path, new_mail: bool) -> Result<(), Error> {
    let flag: &[u8] = if new_mail { b"1" } else { b"0" };

    tokio::fs::write(path, flag)
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

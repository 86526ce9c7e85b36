//! Default configuration file locations.

use std::path::PathBuf;

use either::Either;

/// Returns an iterator over default configuration file paths.
///
/// The paths are yielded in order of preference:
/// 1. User-specific config directory (XDG standard) - two variants
/// 2. User-specific dotfile in the home directory
/// 3. System-wide config
pub fn defaults() -> impl Iterator<Item = PathBuf> {
    let config_path = dirs::config_dir()
        .into_iter()
        .flat_map(|d| [d.join("mailcount/config.toml"), d.join("mailcount.toml")]);
    let home_path = dirs::home_dir().into_iter().map(|d| d.join(".mailcount.toml"));
    let system_path = std::iter::once_with(|| PathBuf::from("/etc/mailcount/config.toml"));

    config_path.chain(home_path).chain(system_path)
}

/// Resolves configuration paths based on an explicit override or defaults.
///
/// If an explicit path is provided, returns an iterator containing only that
/// path. Otherwise, returns the default configuration paths.
pub fn resolve(explicit_path: Option<PathBuf>) -> impl Iterator<Item = PathBuf> {
    match explicit_path {
        Some(val) => Either::Left(std::iter::once(val)),
        None => Either::Right(defaults()),
    }
}

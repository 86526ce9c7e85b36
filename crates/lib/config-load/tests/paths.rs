//! Tests for default path resolution.

use std::path::PathBuf;

use config_load::{defaults, resolve};

#[test]
fn test_default_paths_are_absolute() {
    for path in defaults() {
        assert!(path.is_absolute(), "Path {} is not absolute", path.display());
    }
}

#[test]
fn test_defaults_end_with_system_path() {
    let last = defaults().last().unwrap();
    assert_eq!(last, PathBuf::from("/etc/mailcount/config.toml"));
}

#[test]
fn test_resolve_explicit_path_overrides_defaults() {
    let explicit = PathBuf::from("/custom/mailcount.toml");
    let paths: Vec<_> = resolve(Some(explicit.clone())).collect();
    assert_eq!(paths, vec![explicit]);
}

#[test]
fn test_resolve_without_explicit_path_uses_defaults() {
    let resolved: Vec<_> = resolve(None).collect();
    let expected: Vec<_> = defaults().collect();
    assert_eq!(resolved, expected);
}

//! Environment file loading tests.
//!
//! Exercise the local-development flow: a `.env` file feeds the process
//! environment before configuration resolution, and its absence is ignored.
//!
//! These tests mutate the process environment, so they live in their own
//! test binary rather than alongside the router tests.

use fortress::config::{self, AppConfig};

#[test]
fn test_env_file_values_feed_config_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "SEGREDO=from-env-file\n").unwrap();

    dotenvy::from_path(&path).unwrap();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.secret.value, "from-env-file");
    assert!(config.secret.configured);
}

#[test]
fn test_missing_env_file_is_ignored() {
    // An empty working directory has no .env; the load yields nothing and
    // startup proceeds from the ambient environment.
    let dir = tempfile::tempdir().unwrap();
    let prev = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let loaded = config::load_env_file();

    std::env::set_current_dir(prev).unwrap();
    assert!(loaded.is_none());
}

//! Tests for configuration loading.

use botmatch::Config;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.bot_delay(), Duration::from_millis(200));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bot_delay_ms = 50\nseed = 7").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.bot_delay_ms(), 50);
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.log_file(), Config::default().log_file());
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bot_delay_ms = \"soon\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides() {
    let config = Config::default().with_bot_delay_ms(0).with_seed(99);
    assert_eq!(config.bot_delay(), Duration::ZERO);
    assert_eq!(*config.seed(), Some(99));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    use rand::Rng;

    let config = Config::default().with_seed(3);
    let (mut first, mut second) = (config.rng(), config.rng());
    let a: Vec<u32> = (0..16).map(|_| first.random_range(0..1000)).collect();
    let b: Vec<u32> = (0..16).map(|_| second.random_range(0..1000)).collect();
    assert_eq!(a, b);
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use studydiff_core::errors::{ChangelogError, ExError, ExErrorKind};
use studydiff_core::logging_facility::Profile;
use studydiff_engine::EngineConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[engine]\nsuppress_implied_children = false\n\n[logging]\nprofile = \"test\""
    )
    .unwrap();

    let config = EngineConfig::load(file.path()).unwrap();

    assert!(!config.engine.suppress_implied_children);
    assert!(config.engine.module_roll_up);
    assert_eq!(config.logging.profile, Profile::Test);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ChangelogError::Io { .. }));
    assert_eq!(ExError::from(err).kind(), ExErrorKind::Io);
}

#[test]
fn test_malformed_file_is_invalid_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine\nmodule_roll_up = true").unwrap();

    let err = EngineConfig::load(file.path()).unwrap_err();
    assert_eq!(ExError::from(err).code(), "ERR_INVALID_CONFIG");
}

#[test]
fn test_test_profile_init_is_a_no_op() {
    let config = EngineConfig::from_toml_str("[logging]\nprofile = \"test\"").unwrap();
    config.init_logging();
}

//! Integration tests for loading duration settings from files and the
//! process environment.

use rstest::rstest;
use serial_test::serial;
use std::env;
use std::ffi::OsStr;
use std::io::Write;
use tempokit_conf::{DurationSettings, Env, SettingsError};
use tempokit_utils::{DisplayMode, format_duration};

const VARS: &[&str] = &[
	"SHOW_DAYS",
	"SHOW_HOURS",
	"SHOW_MINUTES",
	"SHOW_SECONDS",
	"SHOW_MILLISECONDS",
	"PAD_DAYS",
	"PAD_HOURS",
	"PAD_MINUTES",
	"PAD_SECONDS",
	"USE_GROUPING",
	"GROUP_SEPARATOR",
];

/// Sets prefixed variables for the duration of a test and clears every
/// recognized variable on drop.
struct TestEnv;

impl TestEnv {
	fn new() -> Self {
		clear_all();
		Self
	}

	fn set(&self, key: &str, value: &str) {
		self.set_os(key, OsStr::new(value));
	}

	fn set_os(&self, key: &str, value: &OsStr) {
		// SAFETY: Tests touching the environment are serialized with #[serial]
		unsafe {
			env::set_var(format!("TEMPOKIT_DURATION_{}", key), value);
		}
	}
}

impl Drop for TestEnv {
	fn drop(&mut self) {
		clear_all();
	}
}

fn clear_all() {
	for key in VARS {
		// SAFETY: Tests touching the environment are serialized with #[serial]
		unsafe {
			env::remove_var(format!("TEMPOKIT_DURATION_{}", key));
		}
	}
}

#[rstest]
#[serial]
fn test_from_env_without_variables_uses_defaults() {
	let _env = TestEnv::new();

	let settings = DurationSettings::from_env().unwrap();

	assert_eq!(settings, DurationSettings::default());
}

#[rstest]
#[serial]
fn test_from_env_overrides_policy() {
	// Arrange
	let test_env = TestEnv::new();
	test_env.set("SHOW_DAYS", "never");
	test_env.set("SHOW_MILLISECONDS", "Always");
	test_env.set("PAD_HOURS", "yes");
	test_env.set("GROUP_SEPARATOR", " ");

	// Act
	let policy = DurationSettings::from_env().unwrap().policy();

	// Assert
	assert_eq!(policy.show_days, DisplayMode::Never);
	assert_eq!(policy.show_milliseconds, DisplayMode::Always);
	assert!(policy.pad_hours);
	assert_eq!(policy.group_separator, ' ');
	assert_eq!(
		format_duration(90_061_001.0, &policy).as_deref(),
		Some("25:01:01.001")
	);
}

#[rstest]
#[serial]
#[case("SHOW_HOURS", "sometimes")]
#[case("PAD_SECONDS", "maybe")]
#[case("GROUP_SEPARATOR", "::")]
fn test_from_env_invalid_value(#[case] key: &str, #[case] value: &str) {
	// Arrange
	let test_env = TestEnv::new();
	test_env.set(key, value);

	// Act
	let result = DurationSettings::from_env();

	// Assert
	match result {
		Err(SettingsError::InvalidValue { key: full_key, value: raw }) => {
			assert_eq!(full_key, format!("TEMPOKIT_DURATION_{}", key));
			assert_eq!(raw, value);
		}
		other => panic!("expected InvalidValue, got {:?}", other),
	}
}

#[cfg(unix)]
#[rstest]
#[serial]
fn test_from_env_non_unicode_value_is_invalid() {
	use std::os::unix::ffi::OsStrExt;

	// Arrange
	let test_env = TestEnv::new();
	test_env.set_os("SHOW_DAYS", OsStr::from_bytes(b"nev\xffer"));

	// Act
	let result = DurationSettings::from_env();

	// Assert
	match result {
		Err(SettingsError::InvalidValue { key, value }) => {
			assert_eq!(key, "TEMPOKIT_DURATION_SHOW_DAYS");
			assert_eq!(value, "nev\u{FFFD}er");
		}
		other => panic!("expected InvalidValue, got {:?}", other),
	}
}

#[rstest]
#[serial]
fn test_from_env_rejects_ambiguous_separator() {
	let test_env = TestEnv::new();
	test_env.set("GROUP_SEPARATOR", ":");

	assert!(matches!(
		DurationSettings::from_env(),
		Err(SettingsError::ValidationError(_))
	));
}

#[rstest]
#[serial]
fn test_merge_env_keeps_unset_fields() {
	// Arrange
	let test_env = TestEnv::new();
	test_env.set("USE_GROUPING", "off");
	let base = DurationSettings::from_json_str(r#"{"display": {"padDays": true}}"#).unwrap();

	// Act
	let merged = base
		.merge_env(&Env::new().with_prefix("TEMPOKIT_DURATION_"))
		.unwrap();

	// Assert
	let policy = merged.policy();
	assert!(policy.pad_days);
	assert!(!policy.use_grouping);
}

#[rstest]
#[case("toml", "[display]\nshowSeconds = \"always\"\n")]
#[case("json", r#"{"display": {"showSeconds": "always"}}"#)]
fn test_from_file(#[case] extension: &str, #[case] contents: &str) {
	// Arrange
	let mut file = tempfile::Builder::new()
		.suffix(&format!(".{}", extension))
		.tempfile()
		.unwrap();
	file.write_all(contents.as_bytes()).unwrap();

	// Act
	let settings = DurationSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.policy().show_seconds, DisplayMode::Always);
	assert_eq!(format_duration(0.0, &settings.policy()).as_deref(), Some("0"));
}

#[rstest]
fn test_from_file_unsupported_extension() {
	let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();

	assert!(matches!(
		DurationSettings::from_file(file.path()),
		Err(SettingsError::UnsupportedFormat(_))
	));
}

#[rstest]
fn test_from_file_missing() {
	let dir = tempfile::tempdir().unwrap();

	assert!(matches!(
		DurationSettings::from_file(dir.path().join("absent.toml")),
		Err(SettingsError::FileError(_))
	));
}

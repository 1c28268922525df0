//! Duration display settings
//!
//! [`DurationSettings`] wraps a partial [`DurationFormatOptions`] so that a
//! configuration source only has to name the fields it changes. Everything
//! else resolves to the documented defaults of [`DurationDisplayPolicy`].

pub mod env;

use env::Env;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tempokit_utils::{DurationDisplayPolicy, DurationFormatOptions};

/// Prefix of every environment variable read by [`DurationSettings::from_env`].
pub const ENV_PREFIX: &str = "TEMPOKIT_DURATION_";

/// Group separators that would make formatted durations ambiguous.
const RESERVED_SEPARATORS: &[char] = &['-', ':', '.'];

/// Settings errors
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Invalid value for {key}: '{value}'")]
	InvalidValue { key: String, value: String },

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

/// Duration formatter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSettings {
	/// Display policy overrides
	#[serde(default)]
	pub display: DurationFormatOptions,
}

impl DurationSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_display(mut self, display: DurationFormatOptions) -> Self {
		self.display = display;
		self
	}

	/// Resolve the overrides into a complete policy.
	pub fn policy(&self) -> DurationDisplayPolicy {
		self.display.resolve()
	}

	/// Validate settings
	///
	/// The group separator must not be an ASCII digit or one of the
	/// characters the formatter itself emits (`-`, `:`, `.`).
	pub fn validate(&self) -> Result<(), SettingsError> {
		let separator = self.policy().group_separator;
		if separator.is_ascii_digit() || RESERVED_SEPARATORS.contains(&separator) {
			return Err(SettingsError::ValidationError(format!(
				"group separator '{}' is ambiguous in formatted durations",
				separator
			)));
		}
		Ok(())
	}

	/// Load settings from a JSON document
	pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
		let settings: DurationSettings = serde_json::from_str(json)
			.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?;
		tracing::debug!(source = "json", "loaded duration settings");
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML document
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		let settings: DurationSettings = toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?;
		tracing::debug!(source = "toml", "loaded duration settings");
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a `.toml` or `.json` file
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			_ => Err(SettingsError::UnsupportedFormat(
				"Supported formats: .toml, .json".to_string(),
			)),
		}
	}

	/// Load settings from `TEMPOKIT_DURATION_*` environment variables
	///
	/// Recognized variables (all optional):
	/// - `SHOW_DAYS`, `SHOW_HOURS`, `SHOW_MINUTES`, `SHOW_SECONDS`,
	///   `SHOW_MILLISECONDS`: `always`, `nonzero` or `never`
	/// - `PAD_DAYS`, `PAD_HOURS`, `PAD_MINUTES`, `PAD_SECONDS`,
	///   `USE_GROUPING`: boolean
	/// - `GROUP_SEPARATOR`: a single character
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::new().merge_env(&Env::new().with_prefix(ENV_PREFIX))
	}

	/// Override fields with the variables present in `env`.
	pub fn merge_env(mut self, env: &Env) -> Result<Self, SettingsError> {
		let display = &mut self.display;

		if let Some(mode) = env.display_mode("SHOW_DAYS")? {
			display.show_days = Some(mode);
		}
		if let Some(mode) = env.display_mode("SHOW_HOURS")? {
			display.show_hours = Some(mode);
		}
		if let Some(mode) = env.display_mode("SHOW_MINUTES")? {
			display.show_minutes = Some(mode);
		}
		if let Some(mode) = env.display_mode("SHOW_SECONDS")? {
			display.show_seconds = Some(mode);
		}
		if let Some(mode) = env.display_mode("SHOW_MILLISECONDS")? {
			display.show_milliseconds = Some(mode);
		}

		if let Some(pad) = env.bool("PAD_DAYS")? {
			display.pad_days = Some(pad);
		}
		if let Some(pad) = env.bool("PAD_HOURS")? {
			display.pad_hours = Some(pad);
		}
		if let Some(pad) = env.bool("PAD_MINUTES")? {
			display.pad_minutes = Some(pad);
		}
		if let Some(pad) = env.bool("PAD_SECONDS")? {
			display.pad_seconds = Some(pad);
		}

		if let Some(grouping) = env.bool("USE_GROUPING")? {
			display.use_grouping = Some(grouping);
		}
		if let Some(separator) = env.char("GROUP_SEPARATOR")? {
			display.group_separator = Some(separator);
		}

		tracing::debug!(source = "env", prefix = ?env.prefix, "loaded duration settings");
		self.validate()?;
		Ok(self)
	}
}

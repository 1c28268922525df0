//! Environment variable handling
//!
//! Typed, prefix-aware reads of environment variables. A missing variable is
//! `Ok(None)`; a present but malformed one is [`SettingsError::InvalidValue`].

use super::SettingsError;
use std::env::{self, VarError};
use tempokit_utils::DisplayMode;

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "TEMPOKIT_DURATION_")
	pub prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	pub fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value. A variable that is set but not valid unicode is
	/// [`SettingsError::InvalidValue`] carrying its lossy rendering.
	pub fn str(&self, key: &str) -> Result<Option<String>, SettingsError> {
		let name = self.key_name(key);
		match env::var(&name) {
			Ok(value) => Ok(Some(value)),
			Err(VarError::NotPresent) => Ok(None),
			Err(VarError::NotUnicode(raw)) => Err(SettingsError::InvalidValue {
				key: name,
				value: raw.to_string_lossy().into_owned(),
			}),
		}
	}

	/// Read a boolean: `true`, `1`, `yes`, `on` or `false`, `0`, `no`, `off`,
	/// ignoring ASCII case.
	pub fn bool(&self, key: &str) -> Result<Option<bool>, SettingsError> {
		self.parse(key, |raw| match raw.trim().to_ascii_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Some(true),
			"false" | "0" | "no" | "off" => Some(false),
			_ => None,
		})
	}

	/// Read a [`DisplayMode`].
	pub fn display_mode(&self, key: &str) -> Result<Option<DisplayMode>, SettingsError> {
		self.parse(key, |raw| raw.parse().ok())
	}

	/// Read a value that must be exactly one character.
	pub fn char(&self, key: &str) -> Result<Option<char>, SettingsError> {
		self.parse(key, |raw| {
			let mut chars = raw.chars();
			match (chars.next(), chars.next()) {
				(Some(ch), None) => Some(ch),
				_ => None,
			}
		})
	}

	fn parse<T>(
		&self,
		key: &str,
		parse: impl FnOnce(&str) -> Option<T>,
	) -> Result<Option<T>, SettingsError> {
		let Some(raw) = self.str(key)? else {
			return Ok(None);
		};
		match parse(&raw) {
			Some(value) => Ok(Some(value)),
			None => Err(SettingsError::InvalidValue {
				key: self.key_name(key),
				value: raw,
			}),
		}
	}
}

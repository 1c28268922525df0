//! # Tempokit Configuration
//!
//! Settings for the duration formatter, loaded from code, JSON or TOML
//! documents, or `TEMPOKIT_DURATION_*` environment variables.
//!
//! ## Quick Start
//!
//! ```rust
//! use tempokit_conf::DurationSettings;
//!
//! let settings = DurationSettings::from_json_str(r#"{"display": {"showMilliseconds": "always"}}"#).unwrap();
//! let policy = settings.policy();
//! assert_eq!(tempokit_utils::format_duration(500.0, &policy).as_deref(), Some("0.500"));
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: settings types, loaders and validation

pub mod settings;

pub use settings::env::Env;
pub use settings::{DurationSettings, SettingsError};

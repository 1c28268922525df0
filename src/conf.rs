//! Configuration module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tempokit::conf::DurationSettings;
//!
//! let settings = DurationSettings::from_env().unwrap();
//! let _policy = settings.policy();
//! ```

pub use tempokit_conf::*;

//! # Tempokit
//!
//! Date format tokenizing, input mask derivation and duration display.
//!
//! A format pattern such as `"DD.MM.YYYY HH:mm"` is split into tokens once
//! and then reused: to render a date, to derive an input mask for a text
//! field, or to reconstruct the original pattern. Durations given in
//! milliseconds render as colon-separated clock text under a configurable
//! display policy.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `utils` - Tokenizer, date rendering, masks and duration formatting
//! - `conf` - Loading duration display policies from JSON, TOML or the environment
//!
//! ## Quick Example
//!
//! ```rust
//! use tempokit::{DurationDisplayPolicy, format_duration, mask_for, tokenize};
//!
//! let pattern = tokenize("[Due] DD/MM");
//! assert_eq!(pattern.reconstruct(), "[Due] DD/MM");
//!
//! let mask = mask_for("DD/MM").unwrap();
//! assert_eq!(mask.pattern(), "99/99");
//!
//! let text = format_duration(90_061_000.0, &DurationDisplayPolicy::default());
//! assert_eq!(text.as_deref(), Some("1:01:01:01"));
//! ```

#[cfg(feature = "utils")]
pub mod utils;
#[cfg(feature = "conf")]
pub mod conf;

// Re-export the common entry points at the crate root
#[cfg(feature = "utils")]
pub use tempokit_utils::{
	DisplayMode, DurationDisplayPolicy, DurationFormatOptions, FormatSequence, FormatToken,
	InputMask, MaskError, SymbolTable, derive_mask, format_date, format_duration,
	format_duration_with, mask_for, tokenize,
};

#[cfg(feature = "conf")]
pub use tempokit_conf::{DurationSettings, SettingsError};

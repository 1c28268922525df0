//! # Tempokit Utils
//!
//! Date format tokenizing, input mask derivation and duration formatting.
//!
//! All helpers are plain functions over their inputs. Lookup tables are
//! built once on first use and shared read-only, so everything here can be
//! called from any thread without coordination.

pub mod utils_core;

pub use utils_core::dateformat::{FormatSequence, FormatToken, SymbolTable, format_date, tokenize};
pub use utils_core::duration::{
	DisplayMode, DurationDisplayPolicy, DurationFormatOptions, ParseDisplayModeError,
	format_duration, format_duration_with, format_millis,
};
pub use utils_core::mask::{InputMask, MaskElement, MaskError, derive_mask, mask_for};

//! Duration formatting
//!
//! Renders a millisecond count as `days:hours:minutes:seconds.milliseconds`
//! under a per-unit [`DisplayMode`].
//!
//! The most significant unit allowed to show becomes the *leader*: days,
//! then hours, minutes and seconds are tried in that order, and a unit leads
//! when its mode is [`DisplayMode::Always`], or [`DisplayMode::NonZero`] and
//! the duration reaches at least one whole unit. The leader carries the full
//! magnitude at its scale, so `49:00:00` is 49 hours when days are hidden.
//! Every unit below the leader is shown at fixed width unless its mode is
//! [`DisplayMode::Never`]. Units above the leader are omitted.
//!
//! When no unit leads, the output is `0`, followed by the milliseconds when
//! they are shown.
//!
//! ```
//! use tempokit_utils::utils_core::duration::{format_duration, DurationDisplayPolicy};
//!
//! let policy = DurationDisplayPolicy::default();
//! assert_eq!(format_duration(90_061_000.0, &policy).as_deref(), Some("1:01:01:01"));
//! assert_eq!(format_duration(-61_000.0, &policy).as_deref(), Some("-1:01"));
//! assert_eq!(format_duration(f64::NAN, &policy), None);
//! ```

use super::humanize::group_digits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MS_PER_SECOND: u128 = 1_000;
const MS_PER_MINUTE: u128 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u128 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u128 = 24 * MS_PER_HOUR;

/// When a duration unit is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
	/// Always shown.
	Always,
	/// Leads only when the duration reaches one whole unit; shown below a
	/// leader.
	#[default]
	NonZero,
	/// Never shown.
	Never,
}

impl DisplayMode {
	pub fn as_str(self) -> &'static str {
		match self {
			DisplayMode::Always => "always",
			DisplayMode::NonZero => "nonZero",
			DisplayMode::Never => "never",
		}
	}
}

impl fmt::Display for DisplayMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing a [`DisplayMode`] fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid display mode '{0}', expected one of: always, nonzero, never")]
pub struct ParseDisplayModeError(pub String);

impl FromStr for DisplayMode {
	type Err = ParseDisplayModeError;

	/// Parses `always`, `nonzero` (also `nonZero`, `non-zero`, `non_zero`)
	/// or `never`, ignoring ASCII case and surrounding whitespace.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized: String = s
			.trim()
			.chars()
			.filter(|c| *c != '-' && *c != '_')
			.map(|c| c.to_ascii_lowercase())
			.collect();
		match normalized.as_str() {
			"always" => Ok(DisplayMode::Always),
			"nonzero" => Ok(DisplayMode::NonZero),
			"never" => Ok(DisplayMode::Never),
			_ => Err(ParseDisplayModeError(s.to_string())),
		}
	}
}

/// Complete display policy for [`format_duration`].
///
/// Every field has a documented default; see [`DurationFormatOptions`] for
/// the partial form that is merged over these defaults.
///
/// There is no padding flag for milliseconds: they always render as three
/// digits after the `.`, so `5` ms is `.005`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DurationDisplayPolicy {
	/// Days. Default: [`DisplayMode::NonZero`].
	pub show_days: DisplayMode,
	/// Hours. Default: [`DisplayMode::NonZero`].
	pub show_hours: DisplayMode,
	/// Minutes. Default: [`DisplayMode::NonZero`].
	pub show_minutes: DisplayMode,
	/// Seconds. Default: [`DisplayMode::NonZero`].
	pub show_seconds: DisplayMode,
	/// Milliseconds, rendered after a `.`. Default: [`DisplayMode::Never`].
	pub show_milliseconds: DisplayMode,
	/// Zero-pad days to two digits when they lead. Default: `false`.
	pub pad_days: bool,
	/// Zero-pad hours to two digits when they lead. Default: `false`.
	pub pad_hours: bool,
	/// Zero-pad minutes to two digits when they lead. Default: `false`.
	pub pad_minutes: bool,
	/// Zero-pad seconds to two digits when they lead. Default: `false`.
	pub pad_seconds: bool,
	/// Group the leading numeral in thousands. Default: `true`.
	pub use_grouping: bool,
	/// Separator used for grouping. Default: `,`.
	pub group_separator: char,
}

impl Default for DurationDisplayPolicy {
	fn default() -> Self {
		Self {
			show_days: DisplayMode::NonZero,
			show_hours: DisplayMode::NonZero,
			show_minutes: DisplayMode::NonZero,
			show_seconds: DisplayMode::NonZero,
			show_milliseconds: DisplayMode::Never,
			pad_days: false,
			pad_hours: false,
			pad_minutes: false,
			pad_seconds: false,
			use_grouping: true,
			group_separator: ',',
		}
	}
}

impl DurationDisplayPolicy {
	pub fn new() -> Self {
		Self::default()
	}
}

/// Partial display policy.
///
/// Fields left as `None` take the value of the policy they are merged over,
/// which is [`DurationDisplayPolicy::default`] for [`resolve`](Self::resolve).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationFormatOptions {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub show_days: Option<DisplayMode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub show_hours: Option<DisplayMode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub show_minutes: Option<DisplayMode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub show_seconds: Option<DisplayMode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub show_milliseconds: Option<DisplayMode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pad_days: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pad_hours: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pad_minutes: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pad_seconds: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub use_grouping: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub group_separator: Option<char>,
}

impl DurationFormatOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Merges the explicit fields over the default policy.
	///
	/// # Examples
	///
	/// ```
	/// use tempokit_utils::utils_core::duration::{DisplayMode, DurationFormatOptions};
	///
	/// let options = DurationFormatOptions {
	///     show_milliseconds: Some(DisplayMode::Always),
	///     ..Default::default()
	/// };
	/// let policy = options.resolve();
	/// assert_eq!(policy.show_milliseconds, DisplayMode::Always);
	/// assert_eq!(policy.show_days, DisplayMode::NonZero);
	/// ```
	pub fn resolve(&self) -> DurationDisplayPolicy {
		self.apply_to(&DurationDisplayPolicy::default())
	}

	/// Merges the explicit fields over `base`.
	pub fn apply_to(&self, base: &DurationDisplayPolicy) -> DurationDisplayPolicy {
		DurationDisplayPolicy {
			show_days: self.show_days.unwrap_or(base.show_days),
			show_hours: self.show_hours.unwrap_or(base.show_hours),
			show_minutes: self.show_minutes.unwrap_or(base.show_minutes),
			show_seconds: self.show_seconds.unwrap_or(base.show_seconds),
			show_milliseconds: self.show_milliseconds.unwrap_or(base.show_milliseconds),
			pad_days: self.pad_days.unwrap_or(base.pad_days),
			pad_hours: self.pad_hours.unwrap_or(base.pad_hours),
			pad_minutes: self.pad_minutes.unwrap_or(base.pad_minutes),
			pad_seconds: self.pad_seconds.unwrap_or(base.pad_seconds),
			use_grouping: self.use_grouping.unwrap_or(base.use_grouping),
			group_separator: self.group_separator.unwrap_or(base.group_separator),
		}
	}
}

impl From<&DurationFormatOptions> for DurationDisplayPolicy {
	fn from(options: &DurationFormatOptions) -> Self {
		options.resolve()
	}
}

struct Unit {
	mode: DisplayMode,
	pad: bool,
	ms: u128,
	/// Units per next larger unit, used when the unit is below the leader.
	wrap: u128,
}

/// Formats `duration_ms` under `policy`.
///
/// Returns `None` for NaN and infinite input. Negative durations are
/// formatted by magnitude with a leading `-`. Fractional milliseconds are
/// truncated.
///
/// # Limits
///
/// Magnitudes above `u128::MAX` milliseconds (about `3.4e38`) are clamped
/// to `u128::MAX`, so every larger finite input renders the same text.
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::duration::{format_duration, DisplayMode, DurationDisplayPolicy};
///
/// let policy = DurationDisplayPolicy::default();
/// assert_eq!(format_duration(500.0, &policy).as_deref(), Some("0"));
///
/// let policy = DurationDisplayPolicy {
///     show_milliseconds: DisplayMode::Always,
///     ..Default::default()
/// };
/// assert_eq!(format_duration(500.0, &policy).as_deref(), Some("0.500"));
/// ```
pub fn format_duration(duration_ms: f64, policy: &DurationDisplayPolicy) -> Option<String> {
	if !duration_ms.is_finite() {
		return None;
	}

	// Float to int casts saturate, so huge magnitudes cannot overflow.
	let magnitude = duration_ms.abs().trunc() as u128;
	Some(render(duration_ms < 0.0, magnitude, policy))
}

/// Formats `duration_ms` with a partial policy merged over the defaults.
pub fn format_duration_with(duration_ms: f64, options: &DurationFormatOptions) -> Option<String> {
	format_duration(duration_ms, &options.resolve())
}

/// Formats an integral millisecond count. Unlike [`format_duration`] every
/// input is computable.
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::duration::{format_millis, DurationDisplayPolicy};
///
/// let policy = DurationDisplayPolicy::default();
/// assert_eq!(format_millis(3_600_000, &policy), "1:00:00");
/// ```
pub fn format_millis(duration_ms: i64, policy: &DurationDisplayPolicy) -> String {
	render(duration_ms < 0, u128::from(duration_ms.unsigned_abs()), policy)
}

fn render(negative: bool, ms: u128, policy: &DurationDisplayPolicy) -> String {
	let units = [
		Unit {
			mode: policy.show_days,
			pad: policy.pad_days,
			ms: MS_PER_DAY,
			wrap: u128::MAX,
		},
		Unit {
			mode: policy.show_hours,
			pad: policy.pad_hours,
			ms: MS_PER_HOUR,
			wrap: 24,
		},
		Unit {
			mode: policy.show_minutes,
			pad: policy.pad_minutes,
			ms: MS_PER_MINUTE,
			wrap: 60,
		},
		Unit {
			mode: policy.show_seconds,
			pad: policy.pad_seconds,
			ms: MS_PER_SECOND,
			wrap: 60,
		},
	];

	let leader = units.iter().position(|unit| match unit.mode {
		DisplayMode::Always => true,
		DisplayMode::NonZero => ms / unit.ms > 0,
		DisplayMode::Never => false,
	});

	let mut result = String::new();
	if negative {
		result.push('-');
	}

	match leader {
		Some(index) => {
			let lead = &units[index];
			let value = ms / lead.ms;
			let digits = if lead.pad {
				format!("{value:02}")
			} else {
				value.to_string()
			};
			if policy.use_grouping {
				result.push_str(&group_digits(&digits, policy.group_separator));
			} else {
				result.push_str(&digits);
			}

			for unit in units[index + 1..]
				.iter()
				.filter(|unit| unit.mode != DisplayMode::Never)
			{
				result.push_str(&format!(":{:02}", (ms / unit.ms) % unit.wrap));
			}
		}
		None => result.push('0'),
	}

	let millis = ms % MS_PER_SECOND;
	let show_millis = match policy.show_milliseconds {
		DisplayMode::Always => true,
		DisplayMode::NonZero => leader.is_some() || millis > 0,
		DisplayMode::Never => false,
	};
	if show_millis {
		result.push_str(&format!(".{millis:03}"));
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn policy() -> DurationDisplayPolicy {
		DurationDisplayPolicy::default()
	}

	#[rstest]
	fn test_milliseconds_always_three_digits_regardless_of_padding() {
		// Arrange
		let policy = DurationDisplayPolicy {
			show_milliseconds: DisplayMode::Always,
			pad_days: true,
			pad_hours: true,
			pad_minutes: true,
			pad_seconds: true,
			..Default::default()
		};

		// Act & Assert
		assert_eq!(format_duration(5.0, &policy).as_deref(), Some("0.005"));
		assert_eq!(format_duration(61_050.0, &policy).as_deref(), Some("01:01.050"));
	}

	#[rstest]
	#[case(f64::NAN)]
	#[case(f64::INFINITY)]
	#[case(f64::NEG_INFINITY)]
	fn test_non_computable_input(#[case] input: f64) {
		assert_eq!(format_duration(input, &policy()), None);
	}

	#[rstest]
	#[case(0.0, "0")]
	#[case(500.0, "0")]
	#[case(1_000.0, "1")]
	#[case(5_000.0, "5")]
	#[case(61_000.0, "1:01")]
	#[case(3_600_000.0, "1:00:00")]
	#[case(90_061_000.0, "1:01:01:01")]
	#[case(-90_061_000.0, "-1:01:01:01")]
	#[case(1_999.9, "1")]
	fn test_default_policy(#[case] input: f64, #[case] expected: &str) {
		assert_eq!(format_duration(input, &policy()).as_deref(), Some(expected));
	}

	#[rstest]
	fn test_milliseconds_always() {
		// Arrange
		let policy = DurationDisplayPolicy {
			show_milliseconds: DisplayMode::Always,
			..policy()
		};

		// Act & Assert
		assert_eq!(format_duration(500.0, &policy).as_deref(), Some("0.500"));
		assert_eq!(format_duration(0.0, &policy).as_deref(), Some("0.000"));
		assert_eq!(format_duration(61_005.0, &policy).as_deref(), Some("1:01.005"));
	}

	#[rstest]
	#[case(0.0, "0")]
	#[case(7.0, "0.007")]
	#[case(1_000.0, "1.000")]
	fn test_milliseconds_nonzero(#[case] input: f64, #[case] expected: &str) {
		let policy = DurationDisplayPolicy {
			show_milliseconds: DisplayMode::NonZero,
			..policy()
		};

		assert_eq!(format_duration(input, &policy).as_deref(), Some(expected));
	}

	#[rstest]
	fn test_pad_leader() {
		// Arrange
		let policy = DurationDisplayPolicy {
			pad_seconds: true,
			..policy()
		};

		// Act
		let result = format_duration(5_000.0, &policy);

		// Assert
		assert_eq!(result.as_deref(), Some("05"));
	}

	#[rstest]
	fn test_pad_flag_only_affects_leader() {
		let policy = DurationDisplayPolicy {
			pad_minutes: true,
			pad_seconds: false,
			..policy()
		};

		assert_eq!(format_duration(185_000.0, &policy).as_deref(), Some("03:05"));
	}

	#[rstest]
	fn test_always_forces_leader() {
		let policy = DurationDisplayPolicy {
			show_hours: DisplayMode::Always,
			..policy()
		};

		assert_eq!(format_duration(5_000.0, &policy).as_deref(), Some("0:00:05"));
	}

	#[rstest]
	fn test_hidden_days_roll_into_hours() {
		// Arrange
		let policy = DurationDisplayPolicy {
			show_days: DisplayMode::Never,
			..policy()
		};

		// Act
		let result = format_duration(2.0 * 86_400_000.0 + 3_600_000.0, &policy);

		// Assert
		assert_eq!(result.as_deref(), Some("49:00:00"));
	}

	#[rstest]
	fn test_never_hides_units_below_leader() {
		let policy = DurationDisplayPolicy {
			show_hours: DisplayMode::Never,
			..policy()
		};

		assert_eq!(format_duration(90_061_000.0, &policy).as_deref(), Some("1:01:01"));
	}

	#[rstest]
	fn test_nonzero_below_leader_is_not_reevaluated() {
		assert_eq!(
			format_duration(86_400_000.0, &policy()).as_deref(),
			Some("1:00:00:00")
		);
	}

	#[rstest]
	fn test_all_units_never() {
		let policy = DurationDisplayPolicy {
			show_days: DisplayMode::Never,
			show_hours: DisplayMode::Never,
			show_minutes: DisplayMode::Never,
			show_seconds: DisplayMode::Never,
			..policy()
		};

		assert_eq!(format_duration(90_061_000.0, &policy).as_deref(), Some("0"));
	}

	#[rstest]
	fn test_grouping_applies_to_leader() {
		// Arrange
		let days = 1_234.0 * 86_400_000.0;

		// Act
		let grouped = format_duration(days, &policy());
		let plain = format_duration(
			days,
			&DurationDisplayPolicy {
				use_grouping: false,
				..policy()
			},
		);
		let dotted = format_duration(
			days,
			&DurationDisplayPolicy {
				group_separator: '.',
				..policy()
			},
		);

		// Assert
		assert_eq!(grouped.as_deref(), Some("1,234:00:00:00"));
		assert_eq!(plain.as_deref(), Some("1234:00:00:00"));
		assert_eq!(dotted.as_deref(), Some("1.234:00:00:00"));
	}

	#[rstest]
	fn test_huge_magnitude_saturates() {
		// Arrange
		let clamped = format_duration(u128::MAX as f64, &policy());

		// Act & Assert
		assert!(clamped.is_some());
		assert_eq!(format_duration(1e39, &policy()), clamped);
		assert_eq!(format_duration(1e300, &policy()), clamped);
		assert_eq!(format_duration(f64::MAX, &policy()), clamped);
		assert!(format_duration(-f64::MAX, &policy()).unwrap().starts_with('-'));
	}

	#[rstest]
	#[case(i64::MIN)]
	#[case(-1)]
	#[case(0)]
	#[case(i64::MAX)]
	fn test_format_millis_matches_float_path(#[case] input: i64) {
		if input.unsigned_abs() < (1u64 << 53) {
			assert_eq!(
				Some(format_millis(input, &policy())),
				format_duration(input as f64, &policy())
			);
		} else {
			assert!(!format_millis(input, &policy()).is_empty());
		}
	}

	#[rstest]
	fn test_format_duration_with_partial_options() {
		// Arrange
		let options = DurationFormatOptions {
			show_milliseconds: Some(DisplayMode::Always),
			..Default::default()
		};

		// Act
		let result = format_duration_with(500.0, &options);

		// Assert
		assert_eq!(result.as_deref(), Some("0.500"));
	}

	#[rstest]
	fn test_apply_to_keeps_base_fields() {
		// Arrange
		let base = DurationDisplayPolicy {
			show_days: DisplayMode::Never,
			pad_hours: true,
			..policy()
		};
		let options = DurationFormatOptions {
			pad_hours: Some(false),
			..Default::default()
		};

		// Act
		let merged = options.apply_to(&base);

		// Assert
		assert_eq!(merged.show_days, DisplayMode::Never);
		assert!(!merged.pad_hours);
	}

	#[rstest]
	#[case("always", DisplayMode::Always)]
	#[case("ALWAYS", DisplayMode::Always)]
	#[case("nonzero", DisplayMode::NonZero)]
	#[case("nonZero", DisplayMode::NonZero)]
	#[case("non-zero", DisplayMode::NonZero)]
	#[case(" non_zero ", DisplayMode::NonZero)]
	#[case("never", DisplayMode::Never)]
	fn test_display_mode_from_str(#[case] input: &str, #[case] expected: DisplayMode) {
		assert_eq!(input.parse::<DisplayMode>(), Ok(expected));
	}

	#[rstest]
	fn test_display_mode_from_str_rejects_unknown() {
		assert_eq!(
			"sometimes".parse::<DisplayMode>(),
			Err(ParseDisplayModeError("sometimes".to_string()))
		);
	}

	#[rstest]
	fn test_options_deserialize_camel_case() {
		// Arrange
		let json = r#"{"showMilliseconds": "always", "padSeconds": true, "groupSeparator": " "}"#;

		// Act
		let options: DurationFormatOptions = serde_json::from_str(json).unwrap();

		// Assert
		assert_eq!(options.show_milliseconds, Some(DisplayMode::Always));
		assert_eq!(options.pad_seconds, Some(true));
		assert_eq!(options.group_separator, Some(' '));
		assert_eq!(options.show_days, None);
	}

	#[rstest]
	fn test_policy_deserialize_fills_defaults() {
		let policy: DurationDisplayPolicy =
			serde_json::from_str(r#"{"showDays": "never"}"#).unwrap();

		assert_eq!(
			policy,
			DurationDisplayPolicy {
				show_days: DisplayMode::Never,
				..DurationDisplayPolicy::default()
			}
		);
	}

	proptest! {
		#[test]
		fn prop_formatting_is_pure(ms in -1.0e12f64..1.0e12) {
			prop_assert_eq!(format_duration(ms, &policy()), format_duration(ms, &policy()));
		}

		#[test]
		fn prop_negation_only_adds_sign(ms in 1.0f64..1.0e12) {
			let positive = format_duration(ms, &policy()).unwrap();
			let negative = format_duration(-ms, &policy()).unwrap();
			prop_assert_eq!(negative, format!("-{positive}"));
		}
	}
}

//! Format token table
//!
//! Every recognized format symbol is declared once here together with the
//! calendar unit it renders and the placeholder shape an input mask uses
//! for it. The tokenizer's default symbol table and the mask derivation
//! both read from [`TOKENS`], so a symbol cannot be recognized without also
//! having a placeholder shape.
//!
//! Supported symbols:
//! - `YYYY`, `YY`: year (four digits, two digits)
//! - `MMMM`, `MMM`, `MM`, `M`: month (full name, abbreviation, padded, plain)
//! - `DD`, `D`: day of month (padded, plain)
//! - `dddd`, `ddd`, `dd`: weekday (full name, three letters, two letters)
//! - `HH`, `H`: hour 0-23 (padded, plain)
//! - `hh`, `h`: hour 1-12 (padded, plain)
//! - `mm`, `m`: minute (padded, plain)
//! - `ss`, `s`: second (padded, plain)
//! - `SSS`: millisecond
//! - `A`, `a`: meridiem (`AM`/`PM`, `am`/`pm`)
//! - `ZZ`, `Z`: UTC offset (`+0000`, `+00:00`)

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Character class accepted at one mask position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
	/// An ASCII digit `0-9`.
	Digit,
	/// An alphabetic character.
	Letter,
	/// Any non-whitespace character.
	Any,
}

impl CharClass {
	/// Returns `true` if `ch` belongs to this class.
	pub fn matches(self, ch: char) -> bool {
		match self {
			CharClass::Digit => ch.is_ascii_digit(),
			CharClass::Letter => ch.is_alphabetic(),
			CharClass::Any => !ch.is_whitespace(),
		}
	}

	/// Marker character used when a mask is rendered as a pattern string.
	pub fn marker(self) -> char {
		match self {
			CharClass::Digit => '9',
			CharClass::Letter => 'a',
			CharClass::Any => '*',
		}
	}
}

/// Calendar unit a token renders.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
	Year,
	Month,
	Day,
	Weekday,
	Hour24,
	Hour12,
	Minute,
	Second,
	Millisecond,
	Meridiem,
	Offset,
}

/// One entry of the token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
	/// Symbol as it appears in a format string.
	pub symbol: &'static str,
	/// Unit the symbol renders.
	pub unit: DateUnit,
	/// Placeholders the rendered value always fills.
	pub placeholder: &'static [CharClass],
	/// Extra positions of the last placeholder class that wider values use.
	pub optional: usize,
}

impl TokenSpec {
	const fn fixed(symbol: &'static str, unit: DateUnit, placeholder: &'static [CharClass]) -> Self {
		Self { symbol, unit, placeholder, optional: 0 }
	}

	const fn variable(
		symbol: &'static str,
		unit: DateUnit,
		placeholder: &'static [CharClass],
		optional: usize,
	) -> Self {
		Self { symbol, unit, placeholder, optional }
	}

	/// Narrowest rendered width in characters.
	pub fn min_width(&self) -> usize {
		self.placeholder.len()
	}

	/// Widest rendered width in characters.
	pub fn max_width(&self) -> usize {
		self.placeholder.len() + self.optional
	}
}

use CharClass::{Any, Digit, Letter};

const D1: &[CharClass] = &[Digit];
const D2: &[CharClass] = &[Digit, Digit];
const D3: &[CharClass] = &[Digit, Digit, Digit];
const D4: &[CharClass] = &[Digit, Digit, Digit, Digit];
const L2: &[CharClass] = &[Letter, Letter];
const L3: &[CharClass] = &[Letter, Letter, Letter];
const L6: &[CharClass] = &[Letter, Letter, Letter, Letter, Letter, Letter];

/// The enumerated token table.
///
/// Unpadded numbers and full names vary in width: the placeholder covers the
/// narrowest value and `optional` the remainder up to the widest.
pub const TOKENS: &[TokenSpec] = &[
	TokenSpec::fixed("YYYY", DateUnit::Year, D4),
	TokenSpec::fixed("YY", DateUnit::Year, D2),
	// "May" to "September"
	TokenSpec::variable("MMMM", DateUnit::Month, L3, 6),
	TokenSpec::fixed("MMM", DateUnit::Month, L3),
	TokenSpec::fixed("MM", DateUnit::Month, D2),
	TokenSpec::variable("M", DateUnit::Month, D1, 1),
	TokenSpec::fixed("DD", DateUnit::Day, D2),
	TokenSpec::variable("D", DateUnit::Day, D1, 1),
	// "Monday" to "Wednesday"
	TokenSpec::variable("dddd", DateUnit::Weekday, L6, 3),
	TokenSpec::fixed("ddd", DateUnit::Weekday, L3),
	TokenSpec::fixed("dd", DateUnit::Weekday, L2),
	TokenSpec::fixed("HH", DateUnit::Hour24, D2),
	TokenSpec::variable("H", DateUnit::Hour24, D1, 1),
	TokenSpec::fixed("hh", DateUnit::Hour12, D2),
	TokenSpec::variable("h", DateUnit::Hour12, D1, 1),
	TokenSpec::fixed("mm", DateUnit::Minute, D2),
	TokenSpec::variable("m", DateUnit::Minute, D1, 1),
	TokenSpec::fixed("ss", DateUnit::Second, D2),
	TokenSpec::variable("s", DateUnit::Second, D1, 1),
	TokenSpec::fixed("SSS", DateUnit::Millisecond, D3),
	TokenSpec::fixed("A", DateUnit::Meridiem, L2),
	TokenSpec::fixed("a", DateUnit::Meridiem, L2),
	TokenSpec::fixed("ZZ", DateUnit::Offset, &[Any, Digit, Digit, Digit, Digit]),
	TokenSpec::fixed("Z", DateUnit::Offset, &[Any, Digit, Digit, Any, Digit, Digit]),
];

static BY_SYMBOL: Lazy<HashMap<&'static str, &'static TokenSpec>> =
	Lazy::new(|| TOKENS.iter().map(|spec| (spec.symbol, spec)).collect());

/// Looks up the table entry for `symbol`.
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::tokens::{lookup, DateUnit};
///
/// assert_eq!(lookup("YYYY").map(|t| t.unit), Some(DateUnit::Year));
/// assert!(lookup("Q").is_none());
/// ```
pub fn lookup(symbol: &str) -> Option<&'static TokenSpec> {
	BY_SYMBOL.get(symbol).copied()
}

//! Date format tokenizing and formatting
//!
//! Splits a format pattern such as `"[Due] DD/MM/YYYY"` into literal and
//! token segments, and renders a date-time through that segmentation.
//!
//! Pattern rules:
//! - Text between `[` and the next `]` is an escaped literal. An `[` with no
//!   closing bracket is an ordinary character.
//! - Otherwise the longest known symbol at the current position is a token
//!   (`MM` wins over `M`).
//! - Any other character is literal text.

use super::tokens::{TOKENS, lookup};
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Weekday};
use once_cell::sync::Lazy;
use std::fmt;

/// One segment of a tokenized format pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatToken {
	/// Text passed through unchanged.
	///
	/// `escaped` is `true` when the text came from a `[...]` run.
	Literal { text: String, escaped: bool },
	/// A recognized format symbol.
	Token { symbol: String },
}

impl FormatToken {
	/// Creates an unescaped literal.
	pub fn literal(text: impl Into<String>) -> Self {
		Self::Literal {
			text: text.into(),
			escaped: false,
		}
	}

	/// Creates a bracket-escaped literal.
	pub fn escaped(text: impl Into<String>) -> Self {
		Self::Literal {
			text: text.into(),
			escaped: true,
		}
	}

	/// Creates a token.
	pub fn token(symbol: impl Into<String>) -> Self {
		Self::Token {
			symbol: symbol.into(),
		}
	}

	/// Returns `true` for [`FormatToken::Token`].
	pub fn is_token(&self) -> bool {
		matches!(self, Self::Token { .. })
	}

	/// Literal text, or the symbol of a token.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Literal { text, .. } => text,
			Self::Token { symbol } => symbol,
		}
	}
}

/// Ordered segments of a format pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FormatSequence(Vec<FormatToken>);

impl FormatSequence {
	pub fn tokens(&self) -> &[FormatToken] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, FormatToken> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_inner(self) -> Vec<FormatToken> {
		self.0
	}

	/// Rebuilds the pattern the sequence was tokenized from.
	///
	/// Escaped literals are wrapped in brackets again.
	///
	/// # Examples
	///
	/// ```
	/// use tempokit_utils::utils_core::dateformat::tokenize;
	///
	/// let pattern = "[Year]: YYYY";
	/// assert_eq!(tokenize(pattern).reconstruct(), pattern);
	/// ```
	pub fn reconstruct(&self) -> String {
		let mut result = String::new();
		for token in &self.0 {
			match token {
				FormatToken::Literal {
					text,
					escaped: true,
				} => {
					result.push('[');
					result.push_str(text);
					result.push(']');
				}
				other => result.push_str(other.as_str()),
			}
		}
		result
	}

	/// Concatenates literal text and token symbols, dropping brackets.
	///
	/// # Examples
	///
	/// ```
	/// use tempokit_utils::utils_core::dateformat::tokenize;
	///
	/// assert_eq!(tokenize("[Year]: YYYY").literal_text(), "Year: YYYY");
	/// ```
	pub fn literal_text(&self) -> String {
		self.0.iter().map(FormatToken::as_str).collect()
	}
}

impl fmt::Display for FormatSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.reconstruct())
	}
}

impl<'a> IntoIterator for &'a FormatSequence {
	type Item = &'a FormatToken;
	type IntoIter = std::slice::Iter<'a, FormatToken>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl IntoIterator for FormatSequence {
	type Item = FormatToken;
	type IntoIter = std::vec::IntoIter<FormatToken>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Symbols recognized by the tokenizer, longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
	symbols: Vec<String>,
}

static DEFAULT_TABLE: Lazy<SymbolTable> =
	Lazy::new(|| SymbolTable::new(TOKENS.iter().map(|spec| spec.symbol)));

impl SymbolTable {
	/// Builds a table from `symbols`.
	///
	/// Symbols are ordered by descending length, then lexicographically.
	/// Duplicates and empty symbols are dropped.
	pub fn new<I, S>(symbols: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut symbols: Vec<String> = symbols
			.into_iter()
			.map(Into::into)
			.filter(|s| !s.is_empty())
			.collect();
		symbols.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
		symbols.dedup();
		Self { symbols }
	}

	/// The table built from the enumerated token set.
	pub fn default_table() -> &'static SymbolTable {
		&DEFAULT_TABLE
	}

	pub fn symbols(&self) -> &[String] {
		&self.symbols
	}

	pub fn contains(&self, symbol: &str) -> bool {
		self.symbols.iter().any(|s| s == symbol)
	}

	fn match_at(&self, rest: &str) -> Option<&str> {
		self.symbols
			.iter()
			.find(|symbol| rest.starts_with(symbol.as_str()))
			.map(String::as_str)
	}

	/// Tokenizes `format` against this table.
	///
	/// Never fails: unknown characters and unclosed brackets degrade to
	/// literal text.
	///
	/// # Examples
	///
	/// ```
	/// use tempokit_utils::utils_core::dateformat::{FormatToken, SymbolTable};
	///
	/// let table = SymbolTable::new(["M", "MM"]);
	/// assert_eq!(table.tokenize("MM").tokens(), &[FormatToken::token("MM")]);
	/// ```
	pub fn tokenize(&self, format: &str) -> FormatSequence {
		let mut tokens: Vec<FormatToken> = Vec::new();
		let mut rest = format;

		while let Some(ch) = rest.chars().next() {
			if ch == '['
				&& let Some(close) = rest[1..].find(']')
			{
				tokens.push(FormatToken::escaped(&rest[1..1 + close]));
				rest = &rest[close + 2..];
				continue;
			}

			if let Some(symbol) = self.match_at(rest) {
				tokens.push(FormatToken::token(symbol));
				rest = &rest[symbol.len()..];
				continue;
			}

			match tokens.last_mut() {
				Some(FormatToken::Literal {
					text,
					escaped: false,
				}) => text.push(ch),
				_ => tokens.push(FormatToken::literal(ch)),
			}
			rest = &rest[ch.len_utf8()..];
		}

		FormatSequence(tokens)
	}
}

impl Default for SymbolTable {
	fn default() -> Self {
		DEFAULT_TABLE.clone()
	}
}

/// Tokenizes `format` against the enumerated token set.
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::dateformat::{tokenize, FormatToken};
///
/// let seq = tokenize("[Year]: YYYY");
/// assert_eq!(
///     seq.tokens(),
///     &[
///         FormatToken::escaped("Year"),
///         FormatToken::literal(": "),
///         FormatToken::token("YYYY"),
///     ]
/// );
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(format: &str) -> FormatSequence {
	DEFAULT_TABLE.tokenize(format)
}

/// Format a datetime using a token pattern
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::dateformat::format_date;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 45).unwrap();
/// assert_eq!(format_date(&dt, "YYYY-MM-DD"), "2025-01-15");
/// assert_eq!(format_date(&dt, "HH:mm:ss"), "14:30:45");
/// assert_eq!(format_date(&dt, "dddd, MMMM D, YYYY"), "Wednesday, January 15, 2025");
/// assert_eq!(format_date(&dt, "[Day] D"), "Day 15");
/// ```
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> String {
	let mut result = String::with_capacity(pattern.len() * 2);

	for token in tokenize(pattern) {
		match token {
			FormatToken::Literal { text, .. } => result.push_str(&text),
			FormatToken::Token { symbol } => render_token(&mut result, dt, &symbol),
		}
	}

	result
}

fn render_token<Tz: TimeZone>(result: &mut String, dt: &DateTime<Tz>, symbol: &str) {
	// Only symbols from the token table reach this point.
	if lookup(symbol).is_none() {
		result.push_str(symbol);
		return;
	}

	let hour12 = match dt.hour() % 12 {
		0 => 12,
		h => h,
	};

	let rendered = match symbol {
		"YYYY" => format!("{:04}", dt.year()),
		"YY" => format!("{:02}", dt.year().rem_euclid(100)),
		"MMMM" => month_name(dt.month()).to_string(),
		"MMM" => month_abbr(dt.month()).to_string(),
		"MM" => format!("{:02}", dt.month()),
		"M" => dt.month().to_string(),
		"DD" => format!("{:02}", dt.day()),
		"D" => dt.day().to_string(),
		"dddd" => weekday_name(dt.weekday()).to_string(),
		"ddd" => weekday_abbr(dt.weekday()).to_string(),
		"dd" => weekday_abbr(dt.weekday())[..2].to_string(),
		"HH" => format!("{:02}", dt.hour()),
		"H" => dt.hour().to_string(),
		"hh" => format!("{:02}", hour12),
		"h" => hour12.to_string(),
		"mm" => format!("{:02}", dt.minute()),
		"m" => dt.minute().to_string(),
		"ss" => format!("{:02}", dt.second()),
		"s" => dt.second().to_string(),
		// Leap seconds report 1000..=1999 sub-second millis.
		"SSS" => format!("{:03}", dt.timestamp_subsec_millis().min(999)),
		"A" => if dt.hour() < 12 { "AM" } else { "PM" }.to_string(),
		"a" => if dt.hour() < 12 { "am" } else { "pm" }.to_string(),
		"ZZ" => utc_offset(dt, false),
		"Z" => utc_offset(dt, true),
		other => other.to_string(),
	};

	result.push_str(&rendered);
}

fn utc_offset<Tz: TimeZone>(dt: &DateTime<Tz>, colon: bool) -> String {
	let seconds = dt.offset().fix().local_minus_utc();
	let sign = if seconds < 0 { '-' } else { '+' };
	let minutes = seconds.unsigned_abs() / 60;
	let (hours, minutes) = (minutes / 60, minutes % 60);
	if colon {
		format!("{sign}{hours:02}:{minutes:02}")
	} else {
		format!("{sign}{hours:02}{minutes:02}")
	}
}

/// Get full month name
fn month_name(month: u32) -> &'static str {
	match month {
		1 => "January",
		2 => "February",
		3 => "March",
		4 => "April",
		5 => "May",
		6 => "June",
		7 => "July",
		8 => "August",
		9 => "September",
		10 => "October",
		11 => "November",
		12 => "December",
		_ => "Unknown",
	}
}

/// Get abbreviated month name
fn month_abbr(month: u32) -> &'static str {
	match month {
		1 => "Jan",
		2 => "Feb",
		3 => "Mar",
		4 => "Apr",
		5 => "May",
		6 => "Jun",
		7 => "Jul",
		8 => "Aug",
		9 => "Sep",
		10 => "Oct",
		11 => "Nov",
		12 => "Dec",
		_ => "Unk",
	}
}

fn weekday_name(weekday: Weekday) -> &'static str {
	match weekday {
		Weekday::Mon => "Monday",
		Weekday::Tue => "Tuesday",
		Weekday::Wed => "Wednesday",
		Weekday::Thu => "Thursday",
		Weekday::Fri => "Friday",
		Weekday::Sat => "Saturday",
		Weekday::Sun => "Sunday",
	}
}

fn weekday_abbr(weekday: Weekday) -> &'static str {
	match weekday {
		Weekday::Mon => "Mon",
		Weekday::Tue => "Tue",
		Weekday::Wed => "Wed",
		Weekday::Thu => "Thu",
		Weekday::Fri => "Fri",
		Weekday::Sat => "Sat",
		Weekday::Sun => "Sun",
	}
}

/// Common date format shortcuts
pub mod shortcuts {
	use super::*;

	/// ISO 8601 format: YYYY-MM-DD
	///
	/// # Examples
	///
	/// ```
	/// use tempokit_utils::utils_core::dateformat::shortcuts::iso_date;
	/// use chrono::{TimeZone, Utc};
	///
	/// let dt = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 45).unwrap();
	/// assert_eq!(iso_date(&dt), "2025-01-15");
	/// ```
	pub fn iso_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
		format_date(dt, "YYYY-MM-DD")
	}

	/// ISO 8601 datetime: YYYY-MM-DD HH:mm:ss
	pub fn iso_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
		format_date(dt, "YYYY-MM-DD HH:mm:ss")
	}

	/// US date format: MM/DD/YYYY
	pub fn us_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
		format_date(dt, "MM/DD/YYYY")
	}

	/// European date format: DD/MM/YYYY
	pub fn eu_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
		format_date(dt, "DD/MM/YYYY")
	}

	/// 12-hour time: 2:30:45 PM
	pub fn time_12<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
		format_date(dt, "h:mm:ss A")
	}
}

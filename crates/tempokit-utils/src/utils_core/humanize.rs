//! Number grouping helpers

/// Inserts `separator` between every group of three digits, counting from
/// the right. A leading `-` is preserved. Input is expected to be a run of
/// ASCII digits.
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::humanize::group_digits;
///
/// assert_eq!(group_digits("1234567", ','), "1,234,567");
/// assert_eq!(group_digits("-1000", '.'), "-1.000");
/// assert_eq!(group_digits("999", ','), "999");
/// ```
pub fn group_digits(digits: &str, separator: char) -> String {
	let (sign, digits) = match digits.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", digits),
	};

	let mut result = String::with_capacity(sign.len() + digits.len() + digits.len() / 3 * 4);
	result.push_str(sign);

	let len = digits.len();
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (len - i) % 3 == 0 {
			result.push(separator);
		}
		result.push(ch);
	}

	result
}

/// Formats an integer with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use tempokit_utils::utils_core::humanize::intcomma;
///
/// assert_eq!(intcomma(1000), "1,000");
/// assert_eq!(intcomma(-1234567), "-1,234,567");
/// ```
pub fn intcomma(n: i128) -> String {
	group_digits(&n.to_string(), ',')
}

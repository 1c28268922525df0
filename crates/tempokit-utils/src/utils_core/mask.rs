//! Input masks derived from format patterns
//!
//! A token expands to the placeholders declared for it in the token table,
//! followed by optional positions when its rendered width varies. A literal
//! expands to one fixed character per character of its text.
//!
//! ```
//! use tempokit_utils::utils_core::mask::mask_for;
//!
//! let mask = mask_for("DD/MM/YYYY").unwrap();
//! assert_eq!(mask.pattern(), "99/99/9999");
//! assert_eq!(mask.conform("3112"), "31/12");
//! assert!(mask.accepts("31/12/2024"));
//!
//! let mask = mask_for("D/M").unwrap();
//! assert_eq!(mask.pattern(), "9[9]/9[9]");
//! assert!(mask.accepts("1/1"));
//! assert!(mask.accepts("31/12"));
//! ```

use super::dateformat::{FormatSequence, FormatToken, tokenize};
use super::tokens::{CharClass, lookup};
use std::fmt;

/// Errors returned by [`derive_mask`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
	#[error("Token '{symbol}' at segment {position} has no placeholder mapping")]
	UnmappedToken { symbol: String, position: usize },
}

/// One position of an input mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskElement {
	/// A position the user fills with a character of the given class.
	Placeholder(CharClass),
	/// A position that may be filled with a character of the given class or
	/// left out.
	Optional(CharClass),
	/// A fixed character.
	Literal(char),
}

impl MaskElement {
	fn accepts(self, ch: char) -> bool {
		match self {
			MaskElement::Placeholder(class) | MaskElement::Optional(class) => class.matches(ch),
			MaskElement::Literal(lit) => lit == ch,
		}
	}

	fn is_optional(self) -> bool {
		matches!(self, MaskElement::Optional(_))
	}
}

/// An ordered sequence of mask positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InputMask {
	elements: Vec<MaskElement>,
}

impl InputMask {
	pub fn new(elements: Vec<MaskElement>) -> Self {
		Self { elements }
	}

	pub fn elements(&self) -> &[MaskElement] {
		&self.elements
	}

	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Number of positions the user has to fill, not counting optional ones.
	pub fn placeholder_count(&self) -> usize {
		self.elements
			.iter()
			.filter(|e| matches!(e, MaskElement::Placeholder(_)))
			.count()
	}

	/// Renders the mask as a pattern string.
	///
	/// `9` is a digit, `a` a letter and `*` any character. Runs of optional
	/// positions are wrapped in `[` `]`. Literal characters that would read as
	/// one of those markers, and `\` itself, are prefixed with `\`.
	///
	/// # Examples
	///
	/// ```
	/// use tempokit_utils::utils_core::mask::mask_for;
	///
	/// assert_eq!(mask_for("hh:mm A").unwrap().pattern(), "99:99 aa");
	/// assert_eq!(mask_for("[a9] YY").unwrap().pattern(), "\\a\\9 99");
	/// assert_eq!(mask_for("MMMM").unwrap().pattern(), "aaa[aaaaaa]");
	/// ```
	pub fn pattern(&self) -> String {
		let mut result = String::with_capacity(self.elements.len());
		let mut in_optional = false;
		for element in &self.elements {
			if element.is_optional() != in_optional {
				result.push(if in_optional { ']' } else { '[' });
				in_optional = !in_optional;
			}
			match *element {
				MaskElement::Placeholder(class) | MaskElement::Optional(class) => {
					result.push(class.marker())
				}
				MaskElement::Literal(ch) => {
					if matches!(ch, '9' | 'a' | '*' | '[' | ']' | '\\') {
						result.push('\\');
					}
					result.push(ch);
				}
			}
		}
		if in_optional {
			result.push(']');
		}
		result
	}

	/// Returns `true` if `input` fills every required position of the mask,
	/// using any subset of the optional ones.
	pub fn accepts(&self, input: &str) -> bool {
		// reachable[i]: the input read so far can fill exactly the first i elements
		let mut reachable = vec![false; self.elements.len() + 1];
		reachable[0] = true;
		self.skip_optional(&mut reachable);

		for ch in input.chars() {
			let mut next = vec![false; reachable.len()];
			for (i, element) in self.elements.iter().enumerate() {
				if reachable[i] && element.accepts(ch) {
					next[i + 1] = true;
				}
			}
			self.skip_optional(&mut next);
			if !next.contains(&true) {
				return false;
			}
			reachable = next;
		}

		reachable[self.elements.len()]
	}

	fn skip_optional(&self, reachable: &mut [bool]) {
		for (i, element) in self.elements.iter().enumerate() {
			if reachable[i] && element.is_optional() {
				reachable[i + 1] = true;
			}
		}
	}

	/// Maps raw typed input onto the mask.
	///
	/// Literals are inserted while raw input remains; a typed character equal
	/// to the pending literal is consumed by it. Characters that do not fit
	/// the next placeholder are skipped; an optional position is filled only
	/// when the next character fits it. Output ends when the raw input runs
	/// out or every position is filled.
	pub fn conform(&self, raw: &str) -> String {
		let mut result = String::with_capacity(self.elements.len());
		let mut chars = raw.chars().peekable();

		for element in &self.elements {
			match *element {
				MaskElement::Literal(lit) => {
					let Some(&next) = chars.peek() else {
						break;
					};
					result.push(lit);
					if next == lit {
						chars.next();
					}
				}
				MaskElement::Placeholder(class) => {
					match chars.by_ref().find(|&c| class.matches(c)) {
						Some(ch) => result.push(ch),
						None => break,
					}
				}
				MaskElement::Optional(class) => {
					if let Some(ch) = chars.next_if(|c| class.matches(*c)) {
						result.push(ch);
					}
				}
			}
		}

		result
	}
}

impl fmt::Display for InputMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pattern())
	}
}

/// Derives an input mask from a tokenized pattern.
///
/// Every token must have a placeholder mapping in the token table. Tokens
/// produced by a custom [`SymbolTable`](super::dateformat::SymbolTable) with
/// symbols outside that table are reported as
/// [`MaskError::UnmappedToken`].
pub fn derive_mask(sequence: &FormatSequence) -> Result<InputMask, MaskError> {
	let mut elements = Vec::new();

	for (position, token) in sequence.iter().enumerate() {
		match token {
			FormatToken::Literal { text, .. } => {
				elements.extend(text.chars().map(MaskElement::Literal));
			}
			FormatToken::Token { symbol } => {
				let Some(spec) = lookup(symbol) else {
					tracing::warn!(symbol = %symbol, position, "unmapped token in input mask");
					return Err(MaskError::UnmappedToken {
						symbol: symbol.clone(),
						position,
					});
				};
				elements.extend(spec.placeholder.iter().copied().map(MaskElement::Placeholder));
				if let Some(&last) = spec.placeholder.last() {
					elements.extend(std::iter::repeat_n(MaskElement::Optional(last), spec.optional));
				}
			}
		}
	}

	Ok(InputMask::new(elements))
}

/// Tokenizes `pattern` and derives its input mask.
pub fn mask_for(pattern: &str) -> Result<InputMask, MaskError> {
	derive_mask(&tokenize(pattern))
}

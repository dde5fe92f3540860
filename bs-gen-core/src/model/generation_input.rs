use bstr::BString;

use super::tokenizer::is_separator;
use crate::error::{BsGenError, Result};

/// Strategy used to select the first word of a sentence.
///
/// # Variants
/// - `Random`: sample entries uniformly until one may start a sentence
///   (its first byte is not an ASCII lowercase letter).
/// - `Custom(BString)`: start from the given word. The word is emitted as is
///   and gets an entry if the model has never seen it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartWord {
	#[default]
	Random,
	Custom(BString),
}

impl StartWord {
	/// Shorthand for `StartWord::Custom(word.into())`.
	pub fn custom<W: Into<BString>>(word: W) -> Self {
		Self::Custom(word.into())
	}
}

/// Parameters of a sentence generation.
///
/// # Invariants
/// - A custom start word is a single non-empty token
/// - `max_words`, when set, is at least 1
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationInput {
	/// How the first word is chosen.
	start: StartWord,

	/// Optional cap on the number of emitted words.
	/// `None` lets the walk run until a stop word or a dead end.
	max_words: Option<usize>,
}

impl GenerationInput {
	/// Creates the default input: random start, no length cap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an input with the given start strategy and no length cap.
	///
	/// # Errors
	/// Same as [`set_start`](Self::set_start).
	pub fn with_start(start: StartWord) -> Result<Self> {
		let mut input = Self::new();
		input.set_start(start)?;
		Ok(input)
	}

	pub fn start(&self) -> &StartWord {
		&self.start
	}

	/// Sets the start strategy.
	///
	/// # Errors
	/// Returns an error if a custom word is empty or holds a separator byte,
	/// since the tokenizer could never have produced it.
	pub fn set_start(&mut self, start: StartWord) -> Result<()> {
		if let StartWord::Custom(word) = &start {
			if word.is_empty() {
				return Err(BsGenError::InvalidArgument("start word must not be empty".to_owned()));
			}
			if word.iter().copied().any(is_separator) {
				return Err(BsGenError::InvalidArgument(format!(
					"start word '{}' must not contain whitespace",
					word
				)));
			}
		}
		self.start = start;
		Ok(())
	}

	/// Returns the current word cap.
	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets the word cap.
	///
	/// # Errors
	/// Returns an error if the cap is `Some(0)`.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> Result<()> {
		if max_words == Some(0) {
			return Err(BsGenError::InvalidArgument("max_words must be at least 1".to_owned()));
		}
		self.max_words = max_words;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_unbounded_random_start() {
		let input = GenerationInput::new();
		assert_eq!(input.start(), &StartWord::Random);
		assert_eq!(input.max_words(), None);
	}

	#[test]
	fn zero_cap_is_rejected() {
		let mut input = GenerationInput::new();
		assert!(input.set_max_words(Some(0)).is_err());
		assert_eq!(input.max_words(), None);
		input.set_max_words(Some(5)).unwrap();
		assert_eq!(input.max_words(), Some(5));
		input.set_max_words(None).unwrap();
		assert_eq!(input.max_words(), None);
	}

	#[test]
	fn start_word_must_be_one_token() {
		let mut input = GenerationInput::new();
		for bad in ["", "two words", "tab\there", "line\n", "\x0B"] {
			let err = input.set_start(StartWord::custom(bad)).unwrap_err();
			assert!(matches!(err, BsGenError::InvalidArgument(_)), "{bad:?} accepted");
			assert_eq!(input.start(), &StartWord::Random);
		}
		assert!(GenerationInput::with_start(StartWord::custom("")).is_err());
	}

	#[test]
	fn any_single_token_is_a_valid_start() {
		let mut input = GenerationInput::new();
		input.set_start(StartWord::custom("Hello")).unwrap();
		assert_eq!(input.start(), &StartWord::custom("Hello"));
		input.set_start(StartWord::custom(&b"citt\xE0"[..])).unwrap();
		input.set_start(StartWord::custom("e.g.")).unwrap();
		input.set_start(StartWord::Random).unwrap();
		assert_eq!(input.start(), &StartWord::Random);
	}
}

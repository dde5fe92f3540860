use super::adjacency_model::{AdjacencyModel, EntryId};
use super::entry::can_start_sentence;
use super::generation_input::{GenerationInput, StartWord};
use crate::error::{BsGenError, Result};
use rand::rngs::StdRng;
use bstr::{BStr, BString};
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io::{self, Write};

/// Marker ending a sentence when found anywhere inside a word.
pub const STOP_MARK: u8 = b'.';

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
	/// The last word contains [`STOP_MARK`].
	Stop,
	/// The last word has no recorded successor.
	DeadEnd,
	/// The configured word cap was reached.
	WordCap,
}

/// A generated sentence.
///
/// Its words are separated by single spaces. [`write_to`](Self::write_to)
/// emits the exact bytes; `Display` replaces invalid UTF-8 with U+FFFD.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
	words: Vec<BString>,
	termination: Termination,
}

impl Sentence {
	pub fn words(&self) -> &[BString] {
		&self.words
	}

	/// The words joined by single spaces, byte for byte.
	pub fn to_bytes(&self) -> Vec<u8> {
		bstr::join(" ", &self.words)
	}

	/// Writes the sentence followed by a newline.
	pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
		out.write_all(&self.to_bytes())?;
		out.write_all(b"\n")
	}

	pub fn termination(&self) -> Termination {
		self.termination
	}

	/// Returns `true` if the sentence ended on a stop word.
	pub fn is_complete(&self) -> bool {
		self.termination == Termination::Stop
	}
}

impl fmt::Display for Sentence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(BStr::new(&self.to_bytes()), f)
	}
}

/// Random walker over an [`AdjacencyModel`].
///
/// # Responsibilities
/// - Own the random source, seeded once
/// - Choose a start word that may open a sentence
/// - Follow random successors until a stop word, a dead end or the word cap
///
/// The model is borrowed mutably because walking onto a word that is not yet
/// a key creates its entry.
#[derive(Debug)]
pub struct SentenceGenerator<R = StdRng> {
	rng: R,
}

impl SentenceGenerator<StdRng> {
	/// Creates a generator whose output is fully determined by `seed`.
	pub fn from_seed(seed: u64) -> Self {
		Self::with_rng(StdRng::seed_from_u64(seed))
	}

	/// Creates a generator seeded from the operating system.
	pub fn from_os_rng() -> Self {
		Self::with_rng(StdRng::from_os_rng())
	}
}

impl<R: Rng> SentenceGenerator<R> {
	/// Wraps an existing random source.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Rejection-samples a start entry.
	///
	/// Indices are drawn uniformly over the current entry count and redrawn
	/// until the key may start a sentence.
	///
	/// # Errors
	/// - [`BsGenError::EmptyModel`] if the model has no entries
	/// - [`BsGenError::NoStartCandidate`] if no key qualifies
	fn select_start(&mut self, model: &AdjacencyModel) -> Result<EntryId> {
		if model.start_candidate_count() == 0 {
			return Err(BsGenError::NoStartCandidate);
		}
		loop {
			let id = model.random_entry(&mut self.rng).ok_or(BsGenError::EmptyModel)?;
			if can_start_sentence(model.key(id)) {
				return Ok(id);
			}
		}
	}

	/// Generates one sentence.
	///
	/// # Behavior
	/// - Emits the start word, then repeatedly a uniformly chosen successor
	///   of the last word.
	/// - Stops right after emitting a word that contains [`STOP_MARK`].
	/// - Stops early on a word without successors ([`Termination::DeadEnd`])
	///   or once `max_words` words were emitted ([`Termination::WordCap`]).
	///
	/// # Errors
	/// - [`BsGenError::EmptyModel`] if nothing was loaded
	/// - [`BsGenError::NoStartCandidate`] for a random start without any
	///   qualifying key
	pub fn generate(&mut self, model: &mut AdjacencyModel, input: &GenerationInput) -> Result<Sentence> {
		if model.is_empty() {
			return Err(BsGenError::EmptyModel);
		}

		let mut current = match input.start() {
			StartWord::Random => self.select_start(model)?,
			StartWord::Custom(word) => model.get_or_create(word),
		};
		let mut words = vec![model.key(current).to_owned()];

		let termination = loop {
			if input.max_words().is_some_and(|max| words.len() >= max) {
				break Termination::WordCap;
			}

			let next = match model.entry(current).pick(&mut self.rng) {
				Some(word) => word.to_owned(),
				None => break Termination::DeadEnd,
			};

			if next.contains(&STOP_MARK) {
				words.push(next);
				break Termination::Stop;
			}

			current = model.get_or_create(&next);
			words.push(next);
		};

		if termination != Termination::Stop {
			log::debug!("sentence of {} words ended early: {:?}", words.len(), termination);
		}

		Ok(Sentence { words, termination })
	}
}

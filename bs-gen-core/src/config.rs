use std::path::PathBuf;

use bstr::BString;

use crate::driver::Driver;
use crate::error::Result;
use crate::io::read_snapshot;
use crate::model::adjacency_model::AdjacencyModel;
use crate::model::generation_input::{GenerationInput, StartWord};
use crate::model::generator::SentenceGenerator;

/// Settings of one session, as given on the command line.
///
/// # Responsibilities
/// - Turn raw options into a checked [`GenerationInput`]
/// - Seed the generator, or leave it to the operating system
/// - Provide the starting model, from a snapshot when one is readable
#[derive(Debug, Clone, Default)]
pub struct Config {
	/// Text files to learn from, in loading order.
	pub sources: Vec<PathBuf>,
	/// Fixed seed; `None` seeds from the operating system.
	pub seed: Option<u64>,
	/// Start word replacing the random capitalized one.
	pub start: Option<BString>,
	/// Word cap of each sentence.
	pub max_words: Option<usize>,
	/// Snapshot read before the sources.
	pub load_model: Option<PathBuf>,
	/// Snapshot written after the sources.
	pub save_model: Option<PathBuf>,
	/// Print the word table once loaded.
	pub dump: bool,
}

impl Config {
	/// Builds the generation parameters.
	///
	/// # Errors
	/// Returns [`BsGenError::InvalidArgument`](crate::BsGenError::InvalidArgument)
	/// for an empty or multi-word start, or a zero word cap.
	pub fn generation_input(&self) -> Result<GenerationInput> {
		let mut input = GenerationInput::new();
		if let Some(word) = &self.start {
			input.set_start(StartWord::Custom(word.clone()))?;
		}
		input.set_max_words(self.max_words)?;
		Ok(input)
	}

	pub fn generator(&self) -> SentenceGenerator {
		match self.seed {
			Some(seed) => SentenceGenerator::from_seed(seed),
			None => SentenceGenerator::from_os_rng(),
		}
	}

	/// Returns the snapshot model, or an empty one.
	///
	/// An unreadable snapshot is logged and skipped like any other source.
	pub fn initial_model(&self) -> AdjacencyModel {
		let Some(path) = &self.load_model else {
			return AdjacencyModel::new();
		};
		match read_snapshot(path) {
			Ok(model) => {
				log::info!("loaded snapshot '{}' ({} entries)", path.display(), model.entry_count());
				model
			}
			Err(e) => {
				log::warn!("skipping snapshot '{}': {}", path.display(), e);
				AdjacencyModel::new()
			}
		}
	}

	/// Assembles a session over [`initial_model`](Self::initial_model).
	/// Sources are not loaded yet.
	pub fn driver(&self) -> Result<Driver> {
		let input = self.generation_input()?;
		Ok(Driver::with_model(self.initial_model(), self.generator(), input))
	}
}

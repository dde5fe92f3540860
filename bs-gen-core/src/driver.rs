use std::io::{BufRead, Write};
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{BsGenError, Result};
use crate::model::adjacency_model::AdjacencyModel;
use crate::model::corpus_loader::load_path;
use crate::model::generation_input::GenerationInput;
use crate::model::generator::SentenceGenerator;

/// Written before the sources are scanned.
pub const SCAN_MESSAGE: &str = "Scanning files...";

/// Written once, right before the first input line is awaited.
pub const PROMPT: &str = "...Press enter to generate sentences, CTRL-C to quit.";

/// Interactive session: one model, one generator, one sentence per line.
///
/// # Responsibilities
/// - Own the model for the whole session and lend it to loader and generator
/// - Load every source once, skipping the ones that cannot be read
/// - Answer each input line with a generated sentence until end-of-input
pub struct Driver<R = StdRng> {
	model: AdjacencyModel,
	generator: SentenceGenerator<R>,
	input: GenerationInput,
}

impl<R: Rng> Driver<R> {
	/// Creates a session over an empty model.
	pub fn new(generator: SentenceGenerator<R>, input: GenerationInput) -> Self {
		Self::with_model(AdjacencyModel::new(), generator, input)
	}

	/// Creates a session over an existing model (e.g. a loaded snapshot).
	pub fn with_model(model: AdjacencyModel, generator: SentenceGenerator<R>, input: GenerationInput) -> Self {
		Self { model, generator, input }
	}

	pub fn model(&self) -> &AdjacencyModel {
		&self.model
	}

	/// Loads each source in order.
	///
	/// Unavailable sources are logged and skipped; the rest still load.
	/// Returns the number of sources loaded.
	pub fn load_sources<P: AsRef<Path>>(&mut self, sources: &[P]) -> usize {
		let mut loaded = 0;
		for source in sources {
			match load_path(source, &mut self.model) {
				Ok(_) => loaded += 1,
				Err(e) => log::warn!("skipping source: {}", e),
			}
		}
		loaded
	}

	/// Runs the prompt loop.
	///
	/// Writes [`PROMPT`], then one sentence per line read from `input`
	/// (the line content is ignored) until end-of-input. A request that
	/// cannot be served (empty model, no start word) is logged and the loop
	/// goes on.
	///
	/// Sentences are written byte for byte. One cut short by a dead end or
	/// the word cap is written like a complete one; only the `debug!` log
	/// tells them apart.
	///
	/// Returns the number of sentences written.
	///
	/// # Errors
	/// Fails if reading `input` or writing `output` fails.
	pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, mut output: W) -> Result<usize> {
		writeln!(output, "{}", PROMPT)?;
		output.flush()?;

		let mut line = Vec::new();
		let mut written = 0;
		loop {
			line.clear();
			if input.read_until(b'\n', &mut line)? == 0 {
				break;
			}

			match self.generator.generate(&mut self.model, &self.input) {
				Ok(sentence) => {
					sentence.write_to(&mut output)?;
					output.flush()?;
					written += 1;
				}
				Err(e @ (BsGenError::EmptyModel | BsGenError::NoStartCandidate)) => {
					log::error!("cannot generate a sentence: {}", e);
				}
				Err(e) => return Err(e),
			}
		}

		Ok(written)
	}
}

use std::io::{self, BufRead};
use std::path::Path;

use super::adjacency_model::AdjacencyModel;
use super::tokenizer::tokenize;
use crate::error::{BsGenError, Result};
use crate::io::open_source;

/// Feeds every consecutive word pair of `reader` straight into `model`.
///
/// The last word gets an entry but no outgoing edge. Returns the number of
/// words read. On error, the pairs recorded so far stay in `model`.
fn record<R: BufRead>(reader: R, model: &mut AdjacencyModel) -> io::Result<usize> {
	let mut tokens = tokenize(reader);
	let mut prev = match tokens.next() {
		Some(word) => word?,
		None => return Ok(0),
	};

	let mut count = 1;
	for word in tokens {
		let cur = word?;
		let entry = model.get_or_create(&prev);
		model.append_successor(entry, &cur);
		prev = cur;
		count += 1;
	}
	model.get_or_create(&prev);

	Ok(count)
}

/// Loads one source into `model`.
///
/// # Behavior
/// - A source without words leaves the model untouched.
/// - Every word is followed by the next one, except the last, which is only
///   registered as a key.
/// - Nothing links this source to whatever was loaded before it.
///
/// Words are raw bytes; any encoding loads.
///
/// # Errors
/// Returns the read error if the stream fails. The source is staged in a
/// scratch model first, so a failed load leaves `model` exactly as it was.
pub fn load<R: BufRead>(reader: R, model: &mut AdjacencyModel) -> io::Result<usize> {
	let mut scratch = AdjacencyModel::new();
	let count = record(reader, &mut scratch)?;
	model.merge(&scratch);
	Ok(count)
}

/// Opens the file at `path` and [`load`]s it into `model`.
///
/// # Errors
/// Returns [`BsGenError::SourceUnavailable`] if the file cannot be opened
/// or read to the end.
pub fn load_path<P: AsRef<Path>>(path: P, model: &mut AdjacencyModel) -> Result<usize> {
	let path = path.as_ref();
	let unavailable = |source| BsGenError::SourceUnavailable { path: path.to_owned(), source };

	let reader = open_source(path).map_err(unavailable)?;
	let count = load(reader, model).map_err(unavailable)?;
	log::info!(
		"loaded {} words from '{}' ({} entries)",
		count,
		path.display(),
		model.entry_count()
	);
	Ok(count)
}

#[cfg(test)]
mod tests {
	use super::*;

	use bstr::{BStr, BString};

	fn successors<'a>(model: &'a AdjacencyModel, word: &str) -> &'a [BString] {
		model.entry(model.find(word).unwrap()).successors()
	}

	/// Yields `data`, then fails.
	struct BrokenReader<'a> {
		data: &'a [u8],
	}

	impl io::Read for BrokenReader<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			if self.data.is_empty() {
				return Err(io::Error::other("connection reset"));
			}
			let n = self.data.len().min(buf.len());
			buf[..n].copy_from_slice(&self.data[..n]);
			self.data = &self.data[n..];
			Ok(n)
		}
	}

	#[test]
	fn records_consecutive_pairs() {
		let mut model = AdjacencyModel::new();
		let count = load("Hello world. Hello there.".as_bytes(), &mut model).unwrap();
		assert_eq!(count, 4);
		assert_eq!(model.entry_count(), 3);
		assert_eq!(successors(&model, "Hello"), ["world.", "there."]);
		assert_eq!(successors(&model, "world."), ["Hello"]);
		assert!(successors(&model, "there.").is_empty());
	}

	#[test]
	fn single_word_gets_an_entry() {
		let mut model = AdjacencyModel::new();
		assert_eq!(load("Alone".as_bytes(), &mut model).unwrap(), 1);
		assert_eq!(model.entry_count(), 1);
		assert!(successors(&model, "Alone").is_empty());
	}

	#[test]
	fn empty_source_changes_nothing() {
		let mut model = AdjacencyModel::new();
		assert_eq!(load(" \n\n".as_bytes(), &mut model).unwrap(), 0);
		assert!(model.is_empty());
	}

	#[test]
	fn sources_are_not_linked() {
		let mut model = AdjacencyModel::new();
		load("Cat sat.".as_bytes(), &mut model).unwrap();
		load("Dog ran.".as_bytes(), &mut model).unwrap();
		let keys: Vec<&BStr> = model.entries().map(|e| e.key()).collect();
		assert_eq!(keys, ["Cat", "sat.", "Dog", "ran."]);
		assert!(successors(&model, "sat.").is_empty());
		assert!(successors(&model, "ran.").is_empty());
	}

	#[test]
	fn non_utf8_source_loads_byte_for_byte() {
		let mut model = AdjacencyModel::new();
		let bytes: &[u8] = b"La citt\xE0 \xE8 bella. Il cane corre.";
		assert_eq!(load(bytes, &mut model).unwrap(), 7);
		assert_eq!(successors(&model, "La"), [b"citt\xE0".as_slice()]);
		let citta = model.find(b"citt\xE0").unwrap();
		assert_eq!(model.entry(citta).successors(), [b"\xE8".as_slice()]);
		assert_eq!(model.entry(model.find(b"\xE8").unwrap()).successors(), ["bella."]);
	}

	#[test]
	fn failed_source_leaves_model_untouched() {
		let mut model = AdjacencyModel::new();
		load("Cat sat.".as_bytes(), &mut model).unwrap();

		let reader = io::BufReader::new(BrokenReader { data: b"Dog ran\naway " });
		let err = load(reader, &mut model).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::Other);
		assert_eq!(model.entry_count(), 2);
		assert_eq!(model.find("Dog"), None);
	}

	#[test]
	fn missing_file_is_unavailable() {
		let mut model = AdjacencyModel::new();
		let err = load_path("/definitely/not/here.txt", &mut model).unwrap_err();
		assert!(matches!(err, BsGenError::SourceUnavailable { .. }));
		assert!(model.is_empty());
	}
}

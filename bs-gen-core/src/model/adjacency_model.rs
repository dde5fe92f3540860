use super::entry::{AdjacencyEntry, can_start_sentence};
use crate::error::{BsGenError, Result};
use bstr::{BStr, BString, ByteSlice};
use rand::Rng;
use std::collections::HashMap;
use std::io::{self, Write};

/// Handle to an entry of an [`AdjacencyModel`].
///
/// Handles are positions in creation order and stay valid for the lifetime
/// of the model they came from, since entries are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

impl EntryId {
	/// Position of the entry in creation order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Word adjacency model: each distinct word and the list of words
/// observed right after it.
///
/// # Responsibilities
/// - Resolve a word to its entry, creating it on first sight
/// - Record successors in the order they are observed
/// - Pick entries uniformly, in creation order, for random starts
/// - Merge with another model and round-trip through a binary snapshot
///
/// # Invariants
/// - At most one entry per distinct word (exact byte match)
/// - `index` maps every key to its position in `entries`
/// - `start_candidates` counts the keys accepted as sentence starts
#[derive(Clone, Debug, Default)]
pub struct AdjacencyModel {
	/// Entries in creation order.
	entries: Vec<AdjacencyEntry>,

	/// Lookup from word to entry position.
	index: HashMap<BString, EntryId>,

	/// Number of keys that do not begin with an ASCII lowercase letter.
	start_candidates: usize,
}

impl AdjacencyModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the entry for `word`, creating an empty one if absent.
	pub fn get_or_create<W: AsRef<[u8]>>(&mut self, word: W) -> EntryId {
		let word = word.as_ref();
		if let Some(id) = self.index.get(BStr::new(word)) {
			return *id;
		}

		let id = EntryId(self.entries.len());
		self.entries.push(AdjacencyEntry::new(word));
		self.index.insert(BString::from(word), id);
		if can_start_sentence(word) {
			self.start_candidates += 1;
		}
		id
	}

	/// Returns the entry for `word` without creating it.
	pub fn find<W: AsRef<[u8]>>(&self, word: W) -> Option<EntryId> {
		self.index.get(BStr::new(word.as_ref())).copied()
	}

	/// Appends `word` to the successors of `entry`.
	pub fn append_successor<W: AsRef<[u8]>>(&mut self, entry: EntryId, word: W) {
		self.entries[entry.0].add_successor(word.as_ref());
	}

	pub fn entry_count(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of keys a sentence may start with.
	pub fn start_candidate_count(&self) -> usize {
		self.start_candidates
	}

	/// Picks an entry uniformly over the current entry count.
	///
	/// Returns `None` if the model is empty.
	pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<EntryId> {
		if self.entries.is_empty() {
			return None;
		}
		Some(EntryId(rng.random_range(0..self.entries.len())))
	}

	/// Returns the entry behind a handle.
	///
	/// # Panics
	/// Panics if `id` was not produced by this model.
	pub fn entry(&self, id: EntryId) -> &AdjacencyEntry {
		&self.entries[id.0]
	}

	pub fn key(&self, id: EntryId) -> &BStr {
		self.entry(id).key()
	}

	/// Returns the `index`-th recorded successor of `entry`, if any.
	pub fn successor_at(&self, entry: EntryId, index: usize) -> Option<&BStr> {
		self.entry(entry).successors().get(index).map(|s| s.as_bstr())
	}

	/// Iterates over the entries in creation order.
	pub fn entries(&self) -> impl Iterator<Item = &AdjacencyEntry> {
		self.entries.iter()
	}

	/// Merges another model into this one.
	///
	/// Entries of `other` are visited in their creation order: unknown keys
	/// are created, and successors are appended after the ones already
	/// recorded. Merging a model built from a source is therefore the same
	/// as loading that source directly into `self`.
	pub fn merge(&mut self, other: &Self) {
		for entry in &other.entries {
			let id = self.get_or_create(entry.key());
			self.entries[id.0].merge(entry);
		}
	}

	/// Builds a model from entries, in the given order.
	///
	/// # Errors
	/// Returns [`BsGenError::DuplicateKey`] if two entries share a key.
	pub fn from_entries(entries: Vec<AdjacencyEntry>) -> Result<Self> {
		let mut model = Self::new();
		for entry in entries {
			if model.index.contains_key(entry.key()) {
				return Err(BsGenError::DuplicateKey(entry.key().to_owned()));
			}
			let id = model.get_or_create(entry.key());
			model.entries[id.0] = entry;
		}
		Ok(model)
	}

	/// Encodes the entries with `postcard`.
	///
	/// The lookup index is not stored; it is rebuilt by [`Self::from_bytes`].
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(&self.entries)?)
	}

	/// Decodes a model written by [`Self::to_bytes`].
	///
	/// # Errors
	/// - [`BsGenError::Snapshot`] if the bytes are not a valid snapshot
	/// - [`BsGenError::DuplicateKey`] if the snapshot repeats a key
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		let entries: Vec<AdjacencyEntry> = postcard::from_bytes(bytes)?;
		Self::from_entries(entries)
	}

	/// Writes the table, one `key: [successors]` line per entry.
	///
	/// Words are written as raw bytes, exactly as they were read.
	pub fn dump<W: Write>(&self, mut out: W) -> io::Result<()> {
		writeln!(out, "entries = {}", self.entries.len())?;
		for entry in &self.entries {
			out.write_all(entry.key())?;
			out.write_all(b": [")?;
			for (i, successor) in entry.successors().iter().enumerate() {
				if i > 0 {
					out.write_all(b" ")?;
				}
				out.write_all(successor)?;
			}
			out.write_all(b"]\n")?;
		}
		Ok(())
	}
}

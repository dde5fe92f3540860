use bstr::{BStr, BString, ByteSlice};
use rand::Rng;

use serde::{Deserialize, Serialize};

/// Returns `true` if a sentence may begin with `word`.
///
/// Only words whose first byte is an ASCII lowercase letter are refused:
/// uppercase letters, digits, punctuation and non-ASCII leads are accepted.
pub(crate) fn can_start_sentence(word: &[u8]) -> bool {
	!word.first().is_some_and(u8::is_ascii_lowercase)
}

/// One distinct word of the model and the words seen right after it.
///
/// Conceptually a node of a Markov chain over words. Unlike a counted
/// transition map, successors are kept as a plain list: a word that followed
/// `key` three times appears three times, so a uniform pick over the list is
/// already weighted by occurrences.
///
/// Words are raw bytes compared exactly; no encoding is assumed.
///
/// ## Invariants
/// - `successors` is in recording order and only ever grows
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyEntry {
	/// The word itself.
	key: BString,
	/// Every word observed immediately after `key`, duplicates included.
	successors: Vec<BString>,
}

impl AdjacencyEntry {
	/// Creates an entry without successors.
	pub fn new(key: &[u8]) -> Self {
		Self {
			key: BString::from(key),
			successors: Vec::new(),
		}
	}

	pub fn key(&self) -> &BStr {
		self.key.as_bstr()
	}

	pub fn successors(&self) -> &[BString] {
		&self.successors
	}

	/// Records one more occurrence of `word` after this entry's key.
	pub fn add_successor(&mut self, word: &[u8]) {
		self.successors.push(BString::from(word));
	}

	/// Picks a successor uniformly over the list.
	///
	/// Returns `None` if the entry has no successors (a dead end).
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&BStr> {
		if self.successors.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.successors.len());
		Some(self.successors[index].as_bstr())
	}

	/// Appends the successors of another entry with the same key.
	pub fn merge(&mut self, other: &Self) {
		debug_assert_eq!(self.key, other.key, "merging entries of different words");
		self.successors.extend(other.successors.iter().cloned());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn start_words() {
		assert!(can_start_sentence(b"Hello"));
		assert!(can_start_sentence(b"42"));
		assert!(can_start_sentence(b"\"Quoted"));
		assert!(can_start_sentence("Émile".as_bytes()));
		assert!(can_start_sentence("élan".as_bytes()));
		assert!(can_start_sentence(b"\xE8 latin-1"));
		assert!(!can_start_sentence(b"hello"));
		assert!(!can_start_sentence(b"x."));
	}

	#[test]
	fn dead_end_has_no_pick() {
		let entry = AdjacencyEntry::new(b"end.");
		assert_eq!(entry.pick(&mut StdRng::seed_from_u64(1)), None);
	}

	#[test]
	fn pick_stays_within_successors() {
		let mut entry = AdjacencyEntry::new(b"Hello");
		entry.add_successor(b"world.");
		entry.add_successor(b"there.");
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			let word = entry.pick(&mut rng).unwrap();
			assert!(word == "world." || word == "there.");
		}
	}

	#[test]
	fn merge_appends_in_order() {
		let mut a = AdjacencyEntry::new(b"the");
		a.add_successor(b"cat");
		let mut b = AdjacencyEntry::new(b"the");
		b.add_successor(b"dog");
		b.add_successor(b"cat");
		a.merge(&b);
		assert_eq!(a.successors(), ["cat", "dog", "cat"]);
	}
}

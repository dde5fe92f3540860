use std::io::{self, BufRead};

use bstr::BString;

/// Returns `true` for the bytes C's `isspace` accepts in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`], the vertical tab is included.
pub(crate) fn is_separator(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Lazy sequence of whitespace-delimited words read from a byte stream.
///
/// The stream is consumed one line at a time into a growable buffer, so
/// words of any length are supported. Words are never empty and are kept
/// byte for byte: no encoding is assumed or checked.
///
/// # Errors
/// Read failures of the underlying stream are forwarded once, then the
/// sequence ends.
pub struct Tokens<R> {
	reader: R,
	line: Vec<u8>,
	pos: usize,
	finished: bool,
}

impl<R: BufRead> Tokens<R> {
	/// Starts tokenizing `reader` from its current position.
	pub fn new(reader: R) -> Self {
		Self { reader, line: Vec::new(), pos: 0, finished: false }
	}

	/// Refills the line buffer. Returns `false` once the stream is exhausted.
	fn fill(&mut self) -> io::Result<bool> {
		self.line.clear();
		self.pos = 0;
		Ok(self.reader.read_until(b'\n', &mut self.line)? > 0)
	}
}

impl<R: BufRead> Iterator for Tokens<R> {
	type Item = io::Result<BString>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			while self.pos < self.line.len() && is_separator(self.line[self.pos]) {
				self.pos += 1;
			}

			if self.pos < self.line.len() {
				let start = self.pos;
				while self.pos < self.line.len() && !is_separator(self.line[self.pos]) {
					self.pos += 1;
				}
				return Some(Ok(BString::from(&self.line[start..self.pos])));
			}

			if self.finished {
				return None;
			}
			match self.fill() {
				Ok(true) => continue,
				Ok(false) => {
					self.finished = true;
					return None;
				}
				Err(e) => {
					self.finished = true;
					return Some(Err(e));
				}
			}
		}
	}
}

/// Shorthand for [`Tokens::new`].
pub fn tokenize<R: BufRead>(reader: R) -> Tokens<R> {
	Tokens::new(reader)
}

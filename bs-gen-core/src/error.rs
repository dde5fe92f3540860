use bstr::BString;
use std::io;
use std::path::PathBuf;

/// Result type used across the crate, defaulting to [`BsGenError`].
pub type Result<T, E = BsGenError> = std::result::Result<T, E>;

/// Errors raised while loading a corpus or generating sentences.
///
/// A walk that stops on a word without successors is not an error: it is
/// reported through [`Termination::DeadEnd`](crate::model::generator::Termination).
#[derive(Debug, thiserror::Error)]
pub enum BsGenError {
	/// A named source could not be opened or read to the end.
	#[error("source '{}' is unavailable: {source}", .path.display())]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Generation was requested before any word was loaded.
	#[error("the model is empty, load some text first")]
	EmptyModel,

	/// Every key of the model starts with a lowercase letter.
	#[error("no word of the model can start a sentence")]
	NoStartCandidate,

	/// A generation parameter is out of range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// A snapshot holds the same key twice.
	#[error("duplicate key '{0}' in snapshot")]
	DuplicateKey(BString),

	/// A snapshot could not be encoded or decoded.
	#[error(transparent)]
	Snapshot(#[from] postcard::Error),

	/// Reading the prompt stream or writing the output failed.
	#[error(transparent)]
	Io(#[from] io::Error),
}

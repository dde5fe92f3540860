use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::model::adjacency_model::AdjacencyModel;

/// Opens a text source for buffered, token-by-token reading.
pub(crate) fn open_source<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(path)?))
}

/// Reads a model snapshot written by [`write_snapshot`].
///
/// # Errors
/// Fails on I/O errors, malformed bytes, or duplicate keys.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<AdjacencyModel> {
	let bytes = fs::read(path)?;
	AdjacencyModel::from_bytes(&bytes)
}

/// Writes `model` to `path` as a compact `postcard` snapshot.
///
/// Any existing file is replaced.
pub fn write_snapshot<P: AsRef<Path>>(path: P, model: &AdjacencyModel) -> Result<()> {
	let bytes = model.to_bytes()?;
	fs::write(path, bytes)?;
	Ok(())
}

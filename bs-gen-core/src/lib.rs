//! Word-adjacency sentence generator.
//!
//! This crate builds a word-level Markov model from plain text and walks it
//! at random to produce sentences:
//! - Whitespace tokenization of arbitrary byte streams
//! - An adjacency model mapping each word to the words seen after it
//! - Corpus loading, one source at a time, without cross-source links
//! - Seeded stochastic generation from a capitalized word to a stop word
//! - An interactive prompt loop and binary model snapshots

/// Error type shared by every fallible operation.
pub mod error;

/// Core model, loading and generation logic.
pub mod model;

/// Session settings and their mapping onto the core types.
pub mod config;

/// Interactive prompt loop.
pub mod driver;

/// File helpers (source opening, model snapshots).
pub mod io;

pub use error::{BsGenError, Result};

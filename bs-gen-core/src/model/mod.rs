//! Top-level module for the word adjacency system.
//!
//! It provides:
//! - Whitespace tokenization (`tokenizer`)
//! - Per-word successor lists (`AdjacencyEntry`)
//! - The word to entry mapping (`AdjacencyModel`)
//! - Corpus ingestion (`corpus_loader`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk itself (`SentenceGenerator`)

/// Lazy whitespace tokenizer over any `BufRead`.
pub mod tokenizer;

/// A single word and its recorded successors.
pub mod entry;

/// Word adjacency model with hash lookup, merging and snapshots.
pub mod adjacency_model;

/// Feeds sources into a model, word pair by word pair.
pub mod corpus_loader;

/// Start strategy and word cap of a generation.
pub mod generation_input;

/// Random walk producing one sentence at a time.
pub mod generator;

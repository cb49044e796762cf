//! Property-based test generators for biological sequences.
//!
//! Every generator is a [`proptest`] strategy, so the host test runner owns
//! randomness and shrinking. Generators compose the usual way:
//!
//! ```
//! use bioprop_rs::{Alphabet, kmers, sequence};
//! use proptest::prelude::*;
//!
//! // A 4-mer sampled from a generated DNA sequence, possibly reverse-complemented.
//! let strategy = sequence(Alphabet::Dna, 50, 4)
//!     .unwrap()
//!     .prop_flat_map(|seq| kmers(&seq, Alphabet::Dna, 4, true));
//! # let _ = strategy;
//! ```

mod constants;
#[macro_use]
mod util;
mod alphabet;
mod coding;
mod codons;
mod kmers;
mod sequence;

pub use alphabet::{Alphabet, ComplementMap, nucleic_alphabet, reverse_complement};
pub use coding::{CodingSequence, SizeAccounting, coding_sequence};
pub use codons::{StopCodons, amino_acid, codon, non_stop_codon, stop_codon};
pub use constants::{
    ALL_CODONS, CANONICAL_STOP_CODONS, CODON_TABLE, DEFAULT_KSIZE, DEFAULT_MAX_CODONS,
    DEFAULT_MAX_SIZE, START_CODON,
};
pub use kmers::{kmer, kmers, try_kmers};
pub use sequence::sequence;

/// Common `Result` type for all library operations, using `BioError` for errors.
pub type Result<T, E = BioError> = core::result::Result<T, E>;

/// Error variants for generator construction and sequence operations.
///
/// Generators validate their parameters when they are built, so a strategy
/// that was constructed successfully never fails while sampling.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BioError {
    /// The operation has no meaning for the alphabet, e.g. complementing a protein.
    #[error("{operation} is not supported for the {alphabet} alphabet")]
    UnsupportedOperation {
        operation: &'static str,
        alphabet: Alphabet,
    },

    /// Size bounds are inverted or leave no room for the requested parts.
    #[error("invalid size bounds (min = {min}, max = {max})")]
    InvalidBound { min: usize, max: usize },

    /// A k-mer longer than the sequence it is sampled from.
    #[error("k-mer length {k} exceeds sequence length {len}")]
    InvalidLength { k: usize, len: usize },

    /// A character that is not part of the alphabet.
    #[error("symbol {symbol:?} is not in the {alphabet} alphabet")]
    InvalidSymbol { symbol: char, alphabet: Alphabet },

    /// A stop codon that is not a key of the codon table.
    #[error("{0:?} is not a codon")]
    UnknownCodon(String),

    #[error("stop codon set must not be empty")]
    EmptyStopCodons,

    #[error("unknown alphabet {0:?}")]
    UnknownAlphabet(String),
}

//! Codonize - DNA to amino acid translation
//!
//! This library loads DNA sequences from random generation, literal strings
//! or files, and translates them codon by codon into one-letter amino acid
//! codes using the standard genetic code.

pub mod error;
pub mod logging;
pub mod sequence;

// Re-export main types for convenience
pub use error::{CodonError, Result};
pub use sequence::{AminoAcid, Base, Codon, Sequence, TrailingBases};

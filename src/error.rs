//! Error types for codon translation and sequence loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodonError {
    /// The bases left to translate do not form whole codons.
    #[error("invalid codon length in sequence: {length} bases is not a positive multiple of 3")]
    InvalidCodonLength { length: usize },

    #[error("invalid base {base:?}, expected one of A, G, T, C")]
    InvalidBase { base: char },

    #[error("cannot read sequence file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CodonError>;

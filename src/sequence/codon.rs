use std::fmt;

use crate::error::{CodonError, Result};
use crate::sequence::base::{Base, BASES};

// Standard genetic code (NCBI table 1), stop codons written as '|'.
// Each codon position is ordered T/C/A/G, so the index is the packed 2-bit codon.
const STANDARD_TABLE: &[u8; 64] =
    b"FFLLSSSSYY||CC|WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// One-letter amino acid code, or the stop symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AminoAcid(u8);

impl AminoAcid {
    pub const STOP: AminoAcid = AminoAcid(b'|');

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn is_stop(self) -> bool {
        self == AminoAcid::STOP
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            b'A' => "Alanine",
            b'C' => "Cysteine",
            b'D' => "Aspartic acid",
            b'E' => "Glutamic acid",
            b'F' => "Phenylalanine",
            b'G' => "Glycine",
            b'H' => "Histidine",
            b'I' => "Isoleucine",
            b'K' => "Lysine",
            b'L' => "Leucine",
            b'M' => "Methionine",
            b'N' => "Asparagine",
            b'P' => "Proline",
            b'Q' => "Glutamine",
            b'R' => "Arginine",
            b'S' => "Serine",
            b'T' => "Threonine",
            b'V' => "Valine",
            b'W' => "Tryptophan",
            b'Y' => "Tyrosine",
            _ => "Stop",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Three consecutive bases, the unit of translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([Base; 3]);

impl Codon {
    pub fn new(first: Base, second: Base, third: Base) -> Codon {
        Codon([first, second, third])
    }

    /// Build a codon from exactly three base letters
    pub fn from_bytes(bytes: &[u8]) -> Result<Codon> {
        let &[first, second, third] = bytes else {
            return Err(CodonError::InvalidCodonLength {
                length: bytes.len(),
            });
        };
        Ok(Codon::new(
            Base::try_from(first)?,
            Base::try_from(second)?,
            Base::try_from(third)?,
        ))
    }

    pub fn bases(&self) -> [Base; 3] {
        self.0
    }

    fn table_index(&self) -> usize {
        let [first, second, third] = self.0;
        (first.table_code() << 4) | (second.table_code() << 2) | third.table_code()
    }

    pub fn translate(&self) -> AminoAcid {
        AminoAcid(STANDARD_TABLE[self.table_index()])
    }

    /// All 64 codons, in A/G/T/C order
    pub fn all() -> impl Iterator<Item = Codon> {
        BASES.into_iter().flat_map(|first| {
            BASES.into_iter().flat_map(move |second| {
                BASES
                    .into_iter()
                    .map(move |third| Codon::new(first, second, third))
            })
        })
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.0;
        write!(f, "{first}{second}{third}")
    }
}

/// Translate a single three-letter codon into its amino acid
pub fn translate_codon(codon: &[u8]) -> Result<AminoAcid> {
    Codon::from_bytes(codon).map(|c| c.translate())
}

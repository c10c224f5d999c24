//! Nucleotide bases and their character conversions

use std::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::error::{CodonError, Result};

/// A DNA base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    G,
    T,
    C,
}

pub const BASES: [Base; 4] = [Base::A, Base::G, Base::T, Base::C];

impl Base {
    /// Parse a base from an ASCII byte, ignoring case
    pub fn from_byte(byte: u8) -> Option<Base> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            b'C' => Some(Base::C),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::G => b'G',
            Base::T => b'T',
            Base::C => b'C',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Two-bit code in T, C, A, G order, matching the layout of the codon table
    pub(crate) fn table_code(self) -> usize {
        match self {
            Base::T => 0,
            Base::C => 1,
            Base::A => 2,
            Base::G => 3,
        }
    }
}

impl TryFrom<char> for Base {
    type Error = CodonError;

    fn try_from(c: char) -> Result<Base> {
        u8::try_from(c)
            .ok()
            .and_then(Base::from_byte)
            .ok_or(CodonError::InvalidBase { base: c })
    }
}

impl TryFrom<u8> for Base {
    type Error = CodonError;

    fn try_from(byte: u8) -> Result<Base> {
        Base::from_byte(byte).ok_or(CodonError::InvalidBase { base: byte as char })
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Distribution<Base> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Base {
        BASES[rng.random_range(0..BASES.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_base_parsing_is_case_insensitive() {
        assert_eq!(Base::from_byte(b'a'), Some(Base::A));
        assert_eq!(Base::from_byte(b'G'), Some(Base::G));
        assert_eq!(Base::from_byte(b't'), Some(Base::T));
        assert_eq!(Base::from_byte(b'c'), Some(Base::C));
        assert_eq!(Base::from_byte(b'U'), None);
        assert_eq!(Base::from_byte(b'N'), None);
        assert_eq!(Base::from_byte(b' '), None);
    }

    #[test]
    fn test_invalid_char_reports_base() {
        match Base::try_from('X') {
            Err(CodonError::InvalidBase { base }) => assert_eq!(base, 'X'),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(Base::try_from('é').is_err());
        assert_eq!(Base::try_from('g').unwrap(), Base::G);
    }

    #[test]
    fn test_base_display() {
        let text: String = BASES.iter().map(|b| b.to_string()).collect();
        assert_eq!(text, "AGTC");
    }

    #[test]
    fn test_random_bases_cover_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let base: Base = rng.random();
            seen[base.table_code()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

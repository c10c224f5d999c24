use log::{debug, trace};

use crate::error::{CodonError, Result};
use crate::sequence::base::Base;
use crate::sequence::codon::Codon;

/// What to do with a trailing partial codon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBases {
    /// Fail unless the sequence is a positive multiple of 3
    #[default]
    Error,
    /// Drop the last 1 or 2 bases; an empty sequence translates to ""
    Ignore,
}

pub fn translate_sequence(seq: &[Base]) -> Result<String> {
    translate_sequence_with(seq, TrailingBases::Error)
}

pub fn translate_sequence_with(seq: &[Base], trailing: TrailingBases) -> Result<String> {
    let remainder = seq.len() % 3;

    match trailing {
        TrailingBases::Error if seq.is_empty() || remainder != 0 => {
            return Err(CodonError::InvalidCodonLength { length: seq.len() });
        }
        TrailingBases::Ignore if remainder != 0 => {
            debug!("Ignoring {remainder} trailing bases of {}", seq.len());
        }
        _ => {}
    }

    let amino_acids: String = seq
        .chunks_exact(3)
        .map(|chunk| Codon::new(chunk[0], chunk[1], chunk[2]).translate().as_char())
        .collect();

    trace!("Translated {} bases into {amino_acids}", seq.len());
    Ok(amino_acids)
}

/// Translate unfiltered text; every character must be a base
pub fn translate_str(dna: &str) -> Result<String> {
    let bases = dna
        .chars()
        .map(Base::try_from)
        .collect::<Result<Vec<_>>>()?;
    translate_sequence(&bases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(dna: &str) -> Vec<Base> {
        dna.bytes().filter_map(Base::from_byte).collect()
    }

    #[test]
    fn test_translate_in_order() {
        assert_eq!(translate_str("ATGTGGTAA").unwrap(), "MW|");
        assert_eq!(translate_str("atgaaacccggg").unwrap(), "MKPG");
    }

    #[test]
    fn test_edge_lengths_strict() {
        for (dna, expected) in [("", None), ("A", None), ("AT", None), ("ATG", Some("M")), ("ATGC", None)] {
            let result = translate_sequence(&bases(dna));
            match expected {
                Some(amino) => assert_eq!(result.unwrap(), amino),
                None => match result {
                    Err(CodonError::InvalidCodonLength { length }) => assert_eq!(length, dna.len()),
                    other => panic!("unexpected result for {dna:?}: {other:?}"),
                },
            }
        }
    }

    #[test]
    fn test_edge_lengths_ignoring_trailing() {
        for (dna, expected) in [("", ""), ("A", ""), ("AT", ""), ("ATG", "M"), ("ATGC", "M"), ("ATGCC", "M")] {
            assert_eq!(translate_sequence_with(&bases(dna), TrailingBases::Ignore).unwrap(), expected);
        }
    }

    #[test]
    fn test_no_partial_output_on_error() {
        assert!(translate_sequence(&bases("ATGAAACCCGG")).is_err());
    }

    #[test]
    fn test_translate_str_rejects_unfiltered_input() {
        match translate_str("ATGNNN") {
            Err(CodonError::InvalidBase { base }) => assert_eq!(base, 'N'),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(translate_str("ATG TAA").is_err());
    }

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(TrailingBases::default(), TrailingBases::Error);
    }
}

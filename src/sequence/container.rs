//! The sequence container: loading bases from random, string and file sources

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;
use rand::Rng;

use crate::error::{CodonError, Result};
use crate::sequence::base::Base;
use crate::sequence::translation::{translate_sequence, translate_sequence_with, TrailingBases};

/// An ordered DNA sequence
///
/// With `append_mode` off, every `load_*` call replaces the stored bases.
/// With it on, loads extend what is already there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    bases: Vec<Base>,
    append_mode: bool,
}

impl Sequence {
    pub fn new(append_mode: bool) -> Sequence {
        debug!("Creating new Sequence (append_mode = {append_mode})");
        Sequence {
            bases: Vec::new(),
            append_mode,
        }
    }

    pub fn append_mode(&self) -> bool {
        self.append_mode
    }

    fn reset(&mut self) {
        if !self.append_mode {
            self.bases.clear();
        }
    }

    /// Load `size` random codons from the thread-local generator
    pub fn load_random(&mut self, size: usize) {
        self.load_random_with(size, &mut rand::rng());
    }

    pub fn load_random_with<R: Rng>(&mut self, size: usize, rng: &mut R) {
        self.reset();
        self.bases.extend((0..3 * size).map(|_| rng.random::<Base>()));
        debug!("Loaded {size} random codons, sequence length {}", self.bases.len());
    }

    /// Load every A/G/T/C of `text`, ignoring case and dropping anything else
    pub fn load_string(&mut self, text: &str) {
        self.reset();
        self.push_filtered(text);
    }

    /// Load the contents of a text file, gzip-compressed if it ends in `.gz`
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.reset();

        let text = read_sequence_file(path).map_err(|source| CodonError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {path:?}", text.len());

        self.push_filtered(&text);
        Ok(())
    }

    fn push_filtered(&mut self, text: &str) {
        let before = self.bases.len();
        self.bases.extend(text.bytes().filter_map(Base::from_byte));

        let kept = self.bases.len() - before;
        let dropped = text.chars().count() - kept;
        if dropped > 0 {
            debug!("Dropped {dropped} non-base characters, kept {kept}");
        }
    }

    pub fn to_codons(&self) -> Result<String> {
        translate_sequence(&self.bases)
    }

    pub fn to_codons_with(&self, trailing: TrailingBases) -> Result<String> {
        translate_sequence_with(&self.bases, trailing)
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bases.iter().try_for_each(|base| write!(f, "{base}"))
    }
}

fn read_sequence_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut text = String::new();

    if path.extension().is_some_and(|ext| ext == "gz") {
        BufReader::new(GzDecoder::new(file)).read_to_string(&mut text)?;
    } else {
        BufReader::new(file).read_to_string(&mut text)?;
    }

    Ok(text)
}

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use codonize::logging::{init_logging, log_critical_error, log_shutdown, log_system_info, set_log_level};
use codonize::{Sequence, TrailingBases};

const DEMO_CODONS: usize = 20;

const DEMO_STRING: &str = "acttcataaaattgctgcttacacctcactacctgacatatcgaatgtggggttactatg
                           atggtacgcacacgaccgcttacctttttgaggactgatgacatgagtttcggatacgta";

/// Translate DNA sequences into amino acids using the standard genetic code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generate a random sequence of this many codons
    #[arg(short, long, value_name = "CODONS")]
    random: Option<usize>,

    /// Load a literal sequence; non-ACGT characters are ignored
    #[arg(short, long, value_name = "TEXT")]
    string: Option<String>,

    /// Load a sequence from a text file (.gz files are decompressed)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Extend the stored sequence on each load instead of replacing it
    #[arg(short, long)]
    append: bool,

    /// Seed for the random generator
    #[arg(long, env = "CODONIZE_SEED")]
    seed: Option<u64>,

    /// Drop a trailing partial codon instead of failing
    #[arg(long)]
    ignore_trailing: bool,
}

struct Runner {
    sequence: Sequence,
    rng: Option<StdRng>,
    trailing: TrailingBases,
}

impl Runner {
    fn load_random(&mut self, codons: usize) {
        match self.rng.as_mut() {
            Some(rng) => self.sequence.load_random_with(codons, rng),
            None => self.sequence.load_random(codons),
        }
    }

    fn print(&self, title: &str) -> Result<(), Box<dyn Error>> {
        let codons = self.sequence.to_codons_with(self.trailing)?;
        info!("{title}: {} bases, {} codons", self.sequence.len(), codons.len());
        println!("{title}");
        println!("sequence: {}", self.sequence);
        println!("codons:   {codons}");
        Ok(())
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner {
        sequence: Sequence::new(args.append),
        rng: args.seed.map(StdRng::seed_from_u64),
        trailing: if args.ignore_trailing {
            TrailingBases::Ignore
        } else {
            TrailingBases::Error
        },
    };

    if args.random.is_none() && args.string.is_none() && args.file.is_none() {
        info!("No source given, running demo");
        runner.load_random(DEMO_CODONS);
        runner.print("Random sequence")?;
        runner.sequence.load_string(DEMO_STRING);
        return runner.print("String sequence");
    }

    if let Some(codons) = args.random {
        runner.load_random(codons);
        runner.print("Random sequence")?;
    }
    if let Some(text) = &args.string {
        runner.sequence.load_string(text);
        runner.print("String sequence")?;
    }
    if let Some(path) = &args.file {
        info!("Loading sequence file {path:?}");
        runner.sequence.load_file(path)?;
        runner.print("File sequence")?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();

    let args = Args::parse();

    set_log_level();
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }
    log_system_info();

    let result = run(args);
    if let Err(e) = &result {
        warn!("Run failed");
        log_critical_error(&e.to_string(), Some("translation"));
    }

    log_shutdown();
    result
}

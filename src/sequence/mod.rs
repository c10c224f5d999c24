pub mod base;
pub mod codon;
pub mod container;
pub mod translation;

pub use base::*;
pub use codon::*;
pub use container::*;
pub use translation::*;

//! Collaborators the core consumes but does not own: randomness and the
//! in-game log.

mod journal;
pub mod rng;

pub use journal::{Journal, MemoryJournal};
pub use rng::{PcgRng, RngOracle, RngState, compute_seed};

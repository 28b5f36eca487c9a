//! File-backed repositories.

mod map;

pub use map::FileMapRepository;

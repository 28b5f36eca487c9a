//! In-memory repositories for tests and headless runs.

mod map;

pub use map::InMemoryMapRepository;

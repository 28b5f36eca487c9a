//! Persistence for map grids.
//!
//! The map is the only simulation state that outlives a session. Each
//! [`MapSlot`](game_core::MapSlot) names one backing store holding one byte
//! per cell in row-major order.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileMapRepository;
pub use memory::InMemoryMapRepository;
pub use traits::{MapLoadReport, MapRepository};

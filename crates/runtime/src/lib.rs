//! Session orchestration for the grid simulation.
//!
//! This crate owns everything around the pure core that touches the outside
//! world: loading configuration and key bindings, reading and writing map
//! files, keeping the in-game log, and running the ordered shutdown.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the input cycle and shutdown
//! - [`repository`] persists map grids
//! - [`log`] is the in-game log store handed to the core as its journal
//! - [`config`] and [`status`] cover configuration and the status line
pub mod config;
pub mod error;
pub mod log;
pub mod repository;
pub mod session;
pub mod status;

pub use config::{RuntimeConfig, load_bindings};
pub use error::{ConfigError, Result, RuntimeError};
pub use log::{GameLog, LineBuffer, MESSAGE_LENGTH};
pub use repository::{
    FileMapRepository, InMemoryMapRepository, MapLoadReport, MapRepository, RepositoryError,
};
pub use session::{Flow, Session};
pub use status::{DEFAULT_STATUS, format_status};

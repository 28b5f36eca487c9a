//! Errors surfaced by the runtime API.
//!
//! Map and log I/O during play is reported to the player through the game log
//! and never aborts the session; these types reach the caller only from
//! session construction and shutdown.
use std::path::PathBuf;

use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to populate the world")]
    Populate(#[source] game_core::RegistryError),

    #[error("failed to write log to {}", path.display())]
    LogDump {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Problems with the external configuration surface.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key bindings in {}", path.display())]
    Bindings {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("key binding file {} defines no bindings", path.display())]
    EmptyBindings { path: PathBuf },

    #[error("binding for {key} in {} costs {cost} turns (max {max})", path.display())]
    CostTooHigh {
        path: PathBuf,
        key: game_core::KeyCode,
        cost: u64,
        max: u64,
    },
}

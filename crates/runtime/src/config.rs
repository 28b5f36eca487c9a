//! Session configuration and binding-table loading.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use game_core::{BindingTable, GameConfig};

use crate::error::ConfigError;
use crate::status::DEFAULT_STATUS;

/// Everything a [`Session`](crate::Session) needs besides the world itself.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Backing file for the map played on.
    pub map_path: PathBuf,
    /// Backing file for the editable map.
    pub custom_map_path: PathBuf,
    /// Where the durable log is dumped at shutdown.
    pub log_path: PathBuf,
    /// Seed for every combat and wander roll.
    pub seed: u64,
    /// RON file replacing the built-in binding table.
    pub bindings_path: Option<PathBuf>,
    /// Entries kept by the durable log before the oldest is evicted.
    pub log_capacity: usize,
    /// Status-line template; see [`format_status`](crate::format_status).
    pub status_template: String,
}

impl RuntimeConfig {
    pub const DEFAULT_LOG_CAPACITY: usize = 1000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CELLAR_MAP_PATH` - Default map file (default: `map1.map`)
    /// - `CELLAR_CUSTOM_MAP_PATH` - Editable map file (default: `custom.map`)
    /// - `CELLAR_LOG_PATH` - Log dump file (default: `log`)
    /// - `CELLAR_SEED` - Roll seed (default: random)
    /// - `CELLAR_BINDINGS` - RON key-binding file (default: built-in table)
    /// - `CELLAR_LOG_CAPACITY` - Durable log entries (default: 1000)
    /// - `CELLAR_STATUS` - Status-line template (default: `Health: %h`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("CELLAR_MAP_PATH") {
            config.map_path = path.into();
        }
        if let Ok(path) = env::var("CELLAR_CUSTOM_MAP_PATH") {
            config.custom_map_path = path.into();
        }
        if let Ok(path) = env::var("CELLAR_LOG_PATH") {
            config.log_path = path.into();
        }
        config.seed = read_env::<u64>("CELLAR_SEED").unwrap_or_else(rand::random);
        config.bindings_path = env::var("CELLAR_BINDINGS").ok().map(PathBuf::from);
        if let Some(capacity) = read_env::<usize>("CELLAR_LOG_CAPACITY") {
            config.log_capacity = capacity.max(1);
        }
        if let Ok(template) = env::var("CELLAR_STATUS") {
            config.status_template = template;
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Points every file at `dir`, keeping the default file names.
    pub fn rooted_at(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.map_path = dir.join("map1.map");
        self.custom_map_path = dir.join("custom.map");
        self.log_path = dir.join("log");
        self
    }

    /// The configured binding table, or the built-in one.
    pub fn load_bindings(&self) -> Result<BindingTable, ConfigError> {
        match &self.bindings_path {
            Some(path) => load_bindings(path),
            None => Ok(BindingTable::defaults()),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            map_path: PathBuf::from("map1.map"),
            custom_map_path: PathBuf::from("custom.map"),
            log_path: PathBuf::from("log"),
            seed: 0,
            bindings_path: None,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            status_template: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Parses a binding table from a RON list of bindings.
///
/// Costs above [`GameConfig::MAX_ACTION_COST`] are rejected.
///
/// ```ron
/// [
///     (key: 'q', modes: "ALL", action: Quit),
///     (key: 'w', modes: "GAME", action: ShiftPlayer((dx: 0, dy: -1)), cost: 1),
/// ]
/// ```
pub fn load_bindings(path: &Path) -> Result<BindingTable, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table: BindingTable = ron::from_str(&text).map_err(|source| ConfigError::Bindings {
        path: path.to_path_buf(),
        source,
    })?;
    if table.is_empty() {
        return Err(ConfigError::EmptyBindings {
            path: path.to_path_buf(),
        });
    }
    if let Some(binding) = table
        .iter()
        .find(|binding| binding.cost > GameConfig::MAX_ACTION_COST)
    {
        return Err(ConfigError::CostTooHigh {
            path: path.to_path_buf(),
            key: binding.key,
            cost: binding.cost,
            max: GameConfig::MAX_ACTION_COST,
        });
    }
    tracing::info!("Loaded {} key bindings from {}", table.len(), path.display());
    Ok(table)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

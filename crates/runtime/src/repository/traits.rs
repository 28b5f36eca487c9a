//! Repository contract for the byte-per-cell map files.

use game_core::{Map, MapSlot, OverlayReport};

use super::Result;

/// What a load actually did to the in-memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapLoadReport {
    /// No backing data existed. It was created from the in-memory map,
    /// which is therefore unchanged.
    Created,
    /// Backing data was overlaid onto the map.
    Loaded(OverlayReport),
}

impl MapLoadReport {
    /// The backing data ended before every cell was covered.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Loaded(report) if report.truncated)
    }
}

/// Storage for the default and custom maps.
///
/// Loading overlays stored bytes onto an existing map instead of replacing
/// it, so a short file only updates a prefix of the cells.
pub trait MapRepository: Send + Sync {
    /// Reads the map stored under `slot` into `map`, creating the backing
    /// data from `map` if none exists yet.
    fn load_into(&self, slot: MapSlot, map: &mut Map) -> Result<MapLoadReport>;

    /// Writes every cell of `map` under `slot`, replacing prior contents.
    fn save(&self, slot: MapSlot, map: &Map) -> Result<()>;

    /// Checks whether backing data exists for `slot`.
    fn exists(&self, slot: MapSlot) -> bool;
}

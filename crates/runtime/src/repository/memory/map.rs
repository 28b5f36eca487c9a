use std::collections::HashMap;
use std::sync::RwLock;

use game_core::{Map, MapSlot};

use crate::repository::{MapLoadReport, MapRepository, RepositoryError, Result};

/// In-memory implementation of MapRepository.
#[derive(Default)]
pub struct InMemoryMapRepository {
    slots: RwLock<HashMap<MapSlot, Vec<u8>>>,
}

impl InMemoryMapRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `slot` with raw bytes, as if a file with that content existed.
    pub fn with_bytes(self, slot: MapSlot, bytes: Vec<u8>) -> Self {
        if let Ok(mut slots) = self.slots.write() {
            slots.insert(slot, bytes);
        }
        self
    }

    /// Raw bytes stored under `slot`.
    pub fn bytes(&self, slot: MapSlot) -> Result<Option<Vec<u8>>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(&slot).cloned())
    }
}

impl MapRepository for InMemoryMapRepository {
    fn load_into(&self, slot: MapSlot, map: &mut Map) -> Result<MapLoadReport> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match slots.get(&slot) {
            Some(bytes) => Ok(MapLoadReport::Loaded(map.overlay_bytes(bytes))),
            None => {
                slots.insert(slot, map.to_bytes());
                Ok(MapLoadReport::Created)
            }
        }
    }

    fn save(&self, slot: MapSlot, map: &Map) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot, map.to_bytes());
        Ok(())
    }

    fn exists(&self, slot: MapSlot) -> bool {
        self.slots
            .read()
            .map(|slots| slots.contains_key(&slot))
            .unwrap_or(false)
    }
}

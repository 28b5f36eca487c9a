//! File-based MapRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use game_core::{Map, MapSlot};

use crate::repository::{MapLoadReport, MapRepository, RepositoryError, Result};

/// Stores each map slot as a raw file of `width * height` tile indices.
pub struct FileMapRepository {
    default_path: PathBuf,
    custom_path: PathBuf,
}

impl FileMapRepository {
    pub fn new(default_path: impl Into<PathBuf>, custom_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            custom_path: custom_path.into(),
        }
    }

    pub fn path(&self, slot: MapSlot) -> &Path {
        match slot {
            MapSlot::Default => &self.default_path,
            MapSlot::Custom => &self.custom_path,
        }
    }

    fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut temp_path = path.as_os_str().to_owned();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        fs::write(&temp_path, bytes).map_err(|e| RepositoryError::io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| RepositoryError::io(path, e))?;
        Ok(())
    }
}

impl MapRepository for FileMapRepository {
    fn load_into(&self, slot: MapSlot, map: &mut Map) -> Result<MapLoadReport> {
        let path = self.path(slot);

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Map {} does not exist, creating it", path.display());
                Self::write_bytes(path, &map.to_bytes())?;
                return Ok(MapLoadReport::Created);
            }
            Err(e) => return Err(RepositoryError::io(path, e)),
        };

        let report = map.overlay_bytes(&bytes);
        if report.truncated {
            tracing::warn!(
                "Map {} ended early: {} of {} cells read",
                path.display(),
                report.cells_read,
                map.area()
            );
        }
        if report.invalid_cells > 0 {
            tracing::warn!(
                "Map {} has {} unknown tile bytes",
                path.display(),
                report.invalid_cells
            );
        }
        tracing::debug!("Loaded {} map from {}", slot, path.display());

        Ok(MapLoadReport::Loaded(report))
    }

    fn save(&self, slot: MapSlot, map: &Map) -> Result<()> {
        let path = self.path(slot);
        Self::write_bytes(path, &map.to_bytes())?;
        tracing::debug!("Saved {} map to {}", slot, path.display());
        Ok(())
    }

    fn exists(&self, slot: MapSlot) -> bool {
        self.path(slot).exists()
    }
}

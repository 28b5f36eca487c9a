/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the playfield in tiles.
    pub map_width: u32,
    /// Height of the playfield in tiles.
    pub map_height: u32,
    /// Number of slots in the entity registry.
    pub max_entities: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const MAP_WIDTH: u32 = 20;
    pub const MAP_HEIGHT: u32 = 20;
    pub const MAX_ENTITIES: usize = 400;
    /// Longest creature name kept; longer names are truncated on attach.
    pub const NAME_LENGTH: usize = 50;
    /// Largest turn cost a configured binding may carry.
    pub const MAX_ACTION_COST: u64 = 1_000;

    pub fn new() -> Self {
        Self {
            map_width: Self::MAP_WIDTH,
            map_height: Self::MAP_HEIGHT,
            max_entities: Self::MAX_ENTITIES,
        }
    }

    pub fn with_map_size(mut self, width: u32, height: u32) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }

    pub fn with_max_entities(mut self, max_entities: usize) -> Self {
        self.max_entities = max_entities;
        self
    }

    /// Number of cells in the configured map.
    pub fn map_area(&self) -> usize {
        self.map_width as usize * self.map_height as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

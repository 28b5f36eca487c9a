//! World state: the map, the entity registry and the process-wide cells
//! (mode, turn clock, camera) gathered into one [`World`] value.

mod common;
mod map;
mod mode;
mod registry;
mod world;

pub use common::{Delta, EntityId, Position, Turn};
pub use map::{Map, OverlayReport, TileAttributes, TileDescriptor, TileGlyph, TileKind};
pub use mode::Mode;
pub use registry::{
    Behavior, Creature, EntityAttributes, EntityRecord, EntityRegistry, RegistryError,
};
pub use world::{Camera, DefaultCast, TurnState, World, populate_default};

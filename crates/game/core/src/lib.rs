//! Deterministic simulation core for a turn-based grid game.
//!
//! `game-core` owns the rules: the tile map and its wall-junction glyphs, the
//! entity registry, the mode bitmask, the key-binding dispatcher, movement,
//! combat, creature behaviors and the catch-up turn scheduler. It performs no
//! I/O. Persistence, terminal drawing and the log store are collaborators
//! reached through [`env::Journal`], [`view::Canvas`] and the
//! [`engine::Effect`] values returned from dispatch.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod view;

pub use action::{
    Action, AttackOutcome, BindingTable, CombatError, KeyBinding, KeyCode, MoveError, attack,
    shift, try_move, validate_move,
};
pub use config::GameConfig;
pub use engine::{Dispatch, Effect, GameEngine, MapSlot};
pub use env::{Journal, MemoryJournal, RngState};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Behavior, Camera, Creature, DefaultCast, Delta, EntityAttributes, EntityId, EntityRecord,
    EntityRegistry, Map, Mode, OverlayReport, Position, RegistryError, TileKind, Turn, TurnState,
    World, populate_default,
};
pub use view::{Canvas, draw_world};

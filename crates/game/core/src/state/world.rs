use super::{
    Behavior, Creature, Delta, EntityAttributes, EntityId, EntityRegistry, Map, Mode, Position,
    RegistryError, Turn,
};
use crate::config::GameConfig;
use crate::env::RngState;

/// View scroll offset subtracted from world coordinates when drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
}

impl Camera {
    pub fn shift(&mut self, delta: Delta) {
        self.x += delta.dx;
        self.y += delta.dy;
    }

    /// World position to view-space (column, row).
    pub fn project(&self, position: Position) -> (i32, i32) {
        (position.x - self.x, position.y - self.y)
    }
}

/// World clock and the point up to which behaviors have run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TurnState {
    /// Advanced only by the cost of fired bindings.
    pub clock: Turn,
    /// Last turn whose behavior pass has completed.
    pub processed: Turn,
}

impl TurnState {
    /// Behavior passes still owed before the next input wait.
    pub fn pending(&self) -> u64 {
        self.clock.0.saturating_sub(self.processed.0)
    }
}

/// The whole mutable simulation, passed explicitly to every operation.
#[derive(Clone, Debug)]
pub struct World {
    pub map: Map,
    pub registry: EntityRegistry,
    pub mode: Mode,
    pub turn: TurnState,
    pub camera: Camera,
    pub rng: RngState,
    /// Times the counter binding has fired.
    pub press_count: u32,
    /// Clock value when `DEAD` was raised.
    pub died_on: Option<Turn>,
}

impl World {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            map: Map::walled_room(config.map_width, config.map_height),
            registry: EntityRegistry::with_capacity(config.max_entities),
            mode: Mode::default(),
            turn: TurnState::default(),
            camera: Camera::default(),
            rng: RngState::new(seed),
            press_count: 0,
            died_on: None,
        }
    }

    /// Creates an entity and attaches a creature payload to it.
    pub fn spawn_creature(
        &mut self,
        glyph: char,
        position: Position,
        attributes: EntityAttributes,
        creature: Creature,
    ) -> Result<EntityId, RegistryError> {
        let id = self.registry.create(glyph, position, attributes)?;
        self.registry.attach_creature(id, creature);
        Ok(id)
    }

    pub fn player(&self) -> Option<EntityId> {
        self.registry.player()
    }

    /// Raises `DEAD` once no player remains. Returns true when newly raised.
    pub fn check_dead(&mut self) -> bool {
        if self.mode.is_dead() || self.player().is_some() {
            return false;
        }
        self.mode.insert(Mode::DEAD);
        self.died_on = Some(self.turn.clock);
        true
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(&GameConfig::default(), 0)
    }
}

/// Ids of the entities placed by [`populate_default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultCast {
    pub cursor: EntityId,
    pub player: EntityId,
    pub hounds: [EntityId; 2],
}

/// Seeds a fresh world with the cursor, the player and two hounds.
///
/// The cursor must be created first so it lands in slot 0.
pub fn populate_default(world: &mut World) -> Result<DefaultCast, RegistryError> {
    let cursor = world.registry.create(
        '@',
        Position::ORIGIN,
        EntityAttributes::HIDDEN | EntityAttributes::GHOST,
    )?;

    let player = world.spawn_creature(
        '@',
        Position::new(7, 7),
        EntityAttributes::PLAYER,
        Creature::new("Christian", 50, 10, 10),
    )?;

    let mut hounds = [EntityId::CURSOR; 2];
    let specs = [
        ('D', Position::new(10, 10), "Mr. Dog"),
        ('d', Position::new(11, 11), "Mrs. Dog"),
    ];
    for (slot, (glyph, position, name)) in hounds.iter_mut().zip(specs) {
        let id = world.spawn_creature(
            glyph,
            position,
            EntityAttributes::empty(),
            Creature::new(name, 10, 10, 10),
        )?;
        world.registry.set_behavior(id, Behavior::Hound);
        *slot = id;
    }

    Ok(DefaultCast {
        cursor,
        player,
        hounds,
    })
}

use bitflags::bitflags;

use super::{EntityId, Position};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

bitflags! {
    /// Per-entity attribute bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EntityAttributes: u8 {
        /// Exempt from solidity and occupancy checks.
        const GHOST  = 1 << 7;
        /// Not drawn.
        const HIDDEN = 1 << 6;
        /// Controlled by the user and targeted by hostile behaviors.
        const PLAYER = 1;
    }
}

/// Closed set of per-turn entity policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    #[default]
    None,
    /// One random cardinal step per turn.
    RandomWander,
    /// Bite an adjacent player, otherwise wander.
    Hound,
    /// Bite an adjacent player, otherwise step toward the nearest one.
    SeekAndMelee,
}

/// RPG stats for the subset of entities that can fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    /// May dip to zero or below during a single attack; the entity is
    /// removed before the next behavior pass.
    pub health: i32,
    /// Exclusive upper bound of the damage roll.
    pub attack: i32,
    pub speed: i32,
}

impl Creature {
    pub fn new(name: impl Into<String>, health: i32, attack: i32, speed: i32) -> Self {
        let mut name = name.into();
        if let Some((cut, _)) = name.char_indices().nth(GameConfig::NAME_LENGTH) {
            name.truncate(cut);
        }
        Self {
            name,
            health,
            attack,
            speed,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Any actor or object occupying a map cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRecord {
    pub glyph: char,
    pub position: Position,
    pub attributes: EntityAttributes,
    pub behavior: Behavior,
    creature: Option<Creature>,
}

impl EntityRecord {
    fn new(glyph: char, position: Position, attributes: EntityAttributes) -> Self {
        Self {
            glyph,
            position,
            attributes,
            behavior: Behavior::None,
            creature: None,
        }
    }

    pub fn is_ghost(&self) -> bool {
        self.attributes.contains(EntityAttributes::GHOST)
    }

    pub fn is_hidden(&self) -> bool {
        self.attributes.contains(EntityAttributes::HIDDEN)
    }

    pub fn is_player(&self) -> bool {
        self.attributes.contains(EntityAttributes::PLAYER)
    }

    pub fn creature(&self) -> Option<&Creature> {
        self.creature.as_ref()
    }

    pub fn creature_mut(&mut self) -> Option<&mut Creature> {
        self.creature.as_mut()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("entity registry is full ({capacity} slots)")]
    Full { capacity: usize },
}

impl GameError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "REGISTRY_FULL",
        }
    }
}

/// Fixed-capacity slot table owning every entity record.
///
/// The slot index is the entity's identity. Lookups by position are linear
/// scans in slot order, which keeps tie-breaking deterministic (lowest id wins).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRegistry {
    slots: Vec<Option<EntityRecord>>,
}

impl EntityRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Places a new entity in the lowest free slot.
    ///
    /// New entities have no behavior and no creature payload. A full
    /// registry is left untouched.
    pub fn create(
        &mut self,
        glyph: char,
        position: Position,
        attributes: EntityAttributes,
    ) -> Result<EntityId, RegistryError> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(RegistryError::Full {
                capacity: self.capacity(),
            })?;

        self.slots[index] = Some(EntityRecord::new(glyph, position, attributes));
        Ok(EntityId(index as u32))
    }

    /// Frees the slot together with its creature payload.
    ///
    /// Returns the removed record; destroying a free slot is a no-op.
    pub fn destroy(&mut self, id: EntityId) -> Option<EntityRecord> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    /// Releases every entity.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        for slot in &mut self.slots {
            if slot.take().is_some() {
                released += 1;
            }
        }
        released
    }

    /// Attaches (or replaces) the creature payload. Returns false for a free slot.
    pub fn attach_creature(&mut self, id: EntityId, creature: Creature) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.creature = Some(creature);
                true
            }
            None => false,
        }
    }

    pub fn set_behavior(&mut self, id: EntityId, behavior: Behavior) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.behavior = behavior;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: EntityId) -> Option<Position> {
        self.get(id).map(|record| record.position)
    }

    pub fn is_creature(&self, id: EntityId) -> bool {
        self.creature(id).is_some()
    }

    pub fn creature(&self, id: EntityId) -> Option<&Creature> {
        self.get(id).and_then(EntityRecord::creature)
    }

    pub fn creature_mut(&mut self, id: EntityId) -> Option<&mut Creature> {
        self.get_mut(id).and_then(EntityRecord::creature_mut)
    }

    /// Lowest-id live entity at `position`, ghosts included.
    pub fn at(&self, position: Position) -> Option<EntityId> {
        self.find(|record| record.position == position)
    }

    /// Lowest-id non-ghost entity at `position`.
    pub fn occupant_at(&self, position: Position) -> Option<EntityId> {
        self.find(|record| record.position == position && !record.is_ghost())
    }

    /// Lowest-id live entity flagged as player.
    pub fn player(&self) -> Option<EntityId> {
        self.find(EntityRecord::is_player)
    }

    /// Live entities in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &EntityRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|record| (EntityId(index as u32), record)))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Destroys every creature whose health dropped to zero or below.
    pub fn reap_dead(&mut self) -> Vec<EntityId> {
        let dead: Vec<EntityId> = self
            .iter()
            .filter(|(_, record)| record.creature().is_some_and(|c| !c.is_alive()))
            .map(|(id, _)| id)
            .collect();

        for id in &dead {
            self.destroy(*id);
        }
        dead
    }

    fn find(&self, predicate: impl Fn(&EntityRecord) -> bool) -> Option<EntityId> {
        self.iter()
            .find(|(_, record)| predicate(record))
            .map(|(id, _)| id)
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::with_capacity(GameConfig::MAX_ENTITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EntityRegistry {
        EntityRegistry::with_capacity(8)
    }

    #[test]
    fn create_fills_lowest_free_slot() {
        let mut reg = registry();
        let a = reg.create('a', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        let b = reg.create('b', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        let c = reg.create('c', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        assert_eq!((a, b, c), (EntityId(0), EntityId(1), EntityId(2)));

        reg.destroy(b);
        let d = reg.create('d', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        assert_eq!(d, EntityId(1));
    }

    #[test]
    fn new_entities_have_no_payload_or_behavior() {
        let mut reg = registry();
        let id = reg.create('x', Position::new(2, 3), EntityAttributes::GHOST).unwrap();
        let record = reg.get(id).unwrap();
        assert_eq!(record.behavior, Behavior::None);
        assert!(record.creature().is_none());
        assert!(!reg.is_creature(id));
        assert!(record.is_ghost());
    }

    #[test]
    fn full_registry_is_unchanged() {
        let mut reg = EntityRegistry::with_capacity(2);
        reg.create('a', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        reg.create('b', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        let before = reg.clone();

        let err = reg
            .create('c', Position::ORIGIN, EntityAttributes::empty())
            .unwrap_err();
        assert_eq!(err, RegistryError::Full { capacity: 2 });
        assert_eq!(err.error_code(), "REGISTRY_FULL");
        assert_eq!(reg, before);
    }

    #[test]
    fn destroy_is_noop_for_free_slot() {
        let mut reg = registry();
        assert!(reg.destroy(EntityId(3)).is_none());
        assert!(reg.destroy(EntityId(100)).is_none());
    }

    #[test]
    fn destroy_releases_creature_payload() {
        let mut reg = registry();
        let id = reg.create('d', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        reg.attach_creature(id, Creature::new("Dog", 5, 3, 1));
        assert!(reg.is_creature(id));

        let removed = reg.destroy(id).unwrap();
        assert_eq!(removed.creature().map(|c| c.name.as_str()), Some("Dog"));
        assert!(!reg.is_creature(id));
        assert!(reg.creature(id).is_none());
    }

    #[test]
    fn attach_overwrites_previous_payload() {
        let mut reg = registry();
        let id = reg.create('d', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        reg.attach_creature(id, Creature::new("First", 5, 3, 1));
        reg.attach_creature(id, Creature::new("Second", 9, 1, 1));
        assert_eq!(reg.creature(id).unwrap().name, "Second");
        assert_eq!(reg.creature(id).unwrap().health, 9);
        assert!(!reg.attach_creature(EntityId(7), Creature::new("Nobody", 1, 1, 1)));
    }

    #[test]
    fn at_prefers_lowest_id_and_occupant_skips_ghosts() {
        let mut reg = registry();
        let here = Position::new(4, 4);
        let ghost = reg.create('@', here, EntityAttributes::GHOST).unwrap();
        let solid = reg.create('D', here, EntityAttributes::empty()).unwrap();

        assert_eq!(reg.at(here), Some(ghost));
        assert_eq!(reg.occupant_at(here), Some(solid));
        assert_eq!(reg.at(Position::new(0, 0)), None);
    }

    #[test]
    fn player_lookup_finds_flagged_entity() {
        let mut reg = registry();
        reg.create('@', Position::ORIGIN, EntityAttributes::GHOST).unwrap();
        let player = reg
            .create('@', Position::new(7, 7), EntityAttributes::PLAYER)
            .unwrap();
        assert_eq!(reg.player(), Some(player));
    }

    #[test]
    fn reap_removes_only_dead_creatures() {
        let mut reg = registry();
        let alive = reg.create('a', Position::ORIGIN, EntityAttributes::empty()).unwrap();
        let dead = reg.create('b', Position::new(1, 0), EntityAttributes::empty()).unwrap();
        let plain = reg.create('c', Position::new(2, 0), EntityAttributes::empty()).unwrap();
        reg.attach_creature(alive, Creature::new("Alive", 1, 1, 1));
        reg.attach_creature(dead, Creature::new("Dead", 0, 1, 1));

        assert_eq!(reg.reap_dead(), vec![dead]);
        assert!(reg.contains(alive));
        assert!(reg.contains(plain));
        assert!(!reg.contains(dead));
    }

    #[test]
    fn creature_names_are_truncated() {
        let long = "x".repeat(GameConfig::NAME_LENGTH + 10);
        assert_eq!(Creature::new(long, 1, 1, 1).name.len(), GameConfig::NAME_LENGTH);
    }
}

//! Reactive creature policies run once per behavior pass.

use crate::action::{attack, shift};
use crate::env::Journal;
use crate::env::rng::context;
use crate::state::{Behavior, Delta, EntityId, Position, World};

/// Runs the behavior attached to `id`. Returns false if the entity is gone.
pub fn run_behavior(world: &mut World, id: EntityId, journal: &mut dyn Journal) -> bool {
    let Some(behavior) = world.registry.get(id).map(|record| record.behavior) else {
        return false;
    };

    match behavior {
        Behavior::None => {}
        Behavior::RandomWander => wander(world, id),
        Behavior::Hound => {
            if !strike_adjacent_player(world, id, journal) {
                wander(world, id);
            }
        }
        Behavior::SeekAndMelee => {
            if !strike_adjacent_player(world, id, journal) {
                approach_nearest_player(world, id);
            }
        }
    }
    true
}

/// Attacks the first player found in the 3x3 surround, row-major from the
/// north-west corner.
fn strike_adjacent_player(world: &mut World, id: EntityId, journal: &mut dyn Journal) -> bool {
    let Some(origin) = world.registry.position(id) else {
        return false;
    };

    let target = origin
        .surrounding()
        .into_iter()
        .filter_map(|cell| world.registry.occupant_at(cell))
        .find(|&other| {
            other != id
                && world
                    .registry
                    .get(other)
                    .is_some_and(|record| record.is_player())
        });

    match target {
        Some(player) => {
            // A non-creature on either side still spends the turn.
            let _ = attack(&mut world.registry, &mut world.rng, journal, id, player);
            true
        }
        None => false,
    }
}

fn wander(world: &mut World, id: EntityId) {
    let roll = world
        .rng
        .roll_below(id, context::WANDER, Delta::CARDINALS.len() as u32);
    let delta = Delta::CARDINALS[roll as usize];
    shift(&mut world.registry, &world.map, id, delta);
}

/// One greedy step toward the closest player; no pathfinding.
fn approach_nearest_player(world: &mut World, id: EntityId) {
    let Some(origin) = world.registry.position(id) else {
        return;
    };
    let Some(goal) = nearest_player(world, id, origin) else {
        return;
    };

    let dx = (goal.x - origin.x).signum();
    let dy = (goal.y - origin.y).signum();
    let horizontal = Delta::new(dx, 0);
    let vertical = Delta::new(0, dy);
    let (first, second) = if (goal.x - origin.x).abs() >= (goal.y - origin.y).abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };

    for step in [first, second] {
        if step == Delta::new(0, 0) {
            continue;
        }
        if shift(&mut world.registry, &world.map, id, step) {
            return;
        }
    }
}

fn nearest_player(world: &World, id: EntityId, origin: Position) -> Option<Position> {
    world
        .registry
        .iter()
        .filter(|(other, record)| *other != id && record.is_player())
        .min_by_key(|(other, record)| (origin.manhattan(record.position), *other))
        .map(|(_, record)| record.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryJournal;
    use crate::state::{Creature, EntityAttributes, Map, TileKind};

    fn open_world() -> World {
        let mut world = World::default();
        world.map = Map::filled(20, 20, TileKind::Floor);
        world
    }

    fn spawn(world: &mut World, glyph: char, at: Position, attrs: EntityAttributes) -> EntityId {
        world
            .spawn_creature(glyph, at, attrs, Creature::new("c", 100, 5, 1))
            .unwrap()
    }

    #[test]
    fn hound_bites_diagonal_player_instead_of_moving() {
        let mut world = open_world();
        let player = spawn(&mut world, '@', Position::new(5, 5), EntityAttributes::PLAYER);
        let hound = spawn(&mut world, 'D', Position::new(6, 6), EntityAttributes::empty());
        world.registry.set_behavior(hound, Behavior::Hound);
        let mut journal = MemoryJournal::default();

        assert!(run_behavior(&mut world, hound, &mut journal));

        assert_eq!(world.registry.position(hound), Some(Position::new(6, 6)));
        assert_eq!(journal.records.len(), 1);
        assert!(journal.records[0].contains(&format!("({})", player.0)));
    }

    #[test]
    fn hound_ignores_non_players_and_wanders() {
        let mut world = open_world();
        spawn(&mut world, 'x', Position::new(5, 4), EntityAttributes::empty());
        let hound = spawn(&mut world, 'D', Position::new(5, 5), EntityAttributes::empty());
        world.registry.set_behavior(hound, Behavior::Hound);
        let mut journal = MemoryJournal::default();

        run_behavior(&mut world, hound, &mut journal);

        assert!(journal.records.is_empty());
        let moved_to = world.registry.position(hound).unwrap();
        assert!(moved_to.manhattan(Position::new(5, 5)) <= 1);
    }

    #[test]
    fn wander_stays_put_when_boxed_in() {
        let mut world = World::default();
        world.map = Map::filled(3, 3, TileKind::Wall);
        world.map.set(Position::new(1, 1), TileKind::Floor);
        let wanderer = spawn(&mut world, 'w', Position::new(1, 1), EntityAttributes::empty());
        world.registry.set_behavior(wanderer, Behavior::RandomWander);
        let mut journal = MemoryJournal::default();

        for _ in 0..10 {
            run_behavior(&mut world, wanderer, &mut journal);
        }
        assert_eq!(world.registry.position(wanderer), Some(Position::new(1, 1)));
        assert_eq!(world.rng.nonce, 10);
    }

    #[test]
    fn seeker_closes_on_larger_axis_first() {
        let mut world = open_world();
        spawn(&mut world, '@', Position::new(10, 2), EntityAttributes::PLAYER);
        let seeker = spawn(&mut world, 's', Position::new(2, 4), EntityAttributes::empty());
        world.registry.set_behavior(seeker, Behavior::SeekAndMelee);
        let mut journal = MemoryJournal::default();

        run_behavior(&mut world, seeker, &mut journal);
        assert_eq!(world.registry.position(seeker), Some(Position::new(3, 4)));
    }

    #[test]
    fn seeker_falls_back_to_other_axis_when_blocked() {
        let mut world = open_world();
        spawn(&mut world, '@', Position::new(10, 2), EntityAttributes::PLAYER);
        world.map.set(Position::new(3, 4), TileKind::Fountain);
        let seeker = spawn(&mut world, 's', Position::new(2, 4), EntityAttributes::empty());
        world.registry.set_behavior(seeker, Behavior::SeekAndMelee);
        let mut journal = MemoryJournal::default();

        run_behavior(&mut world, seeker, &mut journal);
        assert_eq!(world.registry.position(seeker), Some(Position::new(2, 3)));
    }

    #[test]
    fn missing_entity_reports_false() {
        let mut world = open_world();
        let mut journal = MemoryJournal::default();
        assert!(!run_behavior(&mut world, EntityId(7), &mut journal));
    }
}

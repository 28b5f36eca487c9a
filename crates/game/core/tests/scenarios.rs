//! End-to-end scenarios over the public core API.

use game_core::{
    Action, Behavior, BindingTable, Creature, Delta, Dispatch, EntityAttributes, EntityRegistry,
    GameConfig, GameEngine, KeyBinding, KeyCode, Map, MemoryJournal, Mode, Position,
    RegistryError, TileKind, Turn, World, populate_default,
};

fn key(ch: char) -> KeyCode {
    KeyCode::from_char(ch)
}

#[test]
fn registry_fills_to_capacity_then_refuses() {
    let mut reg = EntityRegistry::with_capacity(GameConfig::MAX_ENTITIES);

    for expected in 0..400u32 {
        let id = reg
            .create('.', Position::new(0, 0), EntityAttributes::GHOST)
            .unwrap();
        assert_eq!(id.0, expected);
    }

    let before = reg.clone();
    assert_eq!(
        reg.create('!', Position::new(1, 1), EntityAttributes::empty()),
        Err(RegistryError::Full { capacity: 400 })
    );
    assert_eq!(reg, before);
}

#[test]
fn edit_toggle_is_an_involution() {
    let mut mode = Mode::default();
    assert_eq!(mode, Mode::GAME);
    mode.toggle(Mode::EDIT);
    assert_eq!(mode, Mode::GAME | Mode::EDIT);
    mode.toggle(Mode::EDIT);
    assert_eq!(mode, Mode::GAME);
}

#[test]
fn first_declared_binding_wins_and_only_its_cost_counts() {
    let mut world = World::default();
    populate_default(&mut world).unwrap();
    let table = BindingTable::new(vec![
        KeyBinding::new('m', Mode::GAME | Mode::EDIT, Action::ShiftCamera(Delta::LEFT), 2),
        KeyBinding::new('m', Mode::GAME, Action::ShiftCamera(Delta::RIGHT), 9),
    ]);
    let mut journal = MemoryJournal::default();

    let outcome = GameEngine::new(&mut world).dispatch(&table, key('m'), &mut journal);

    assert_eq!(
        outcome,
        Dispatch::Fired {
            action: Action::ShiftCamera(Delta::LEFT),
            cost: 2,
            effect: game_core::Effect::None,
        }
    );
    assert_eq!(world.camera.x, -1);
    assert_eq!(world.turn.clock, Turn(2));
}

/// Each pass sees the previous pass's world: a walker boxed into a corridor
/// advances exactly one cell per elapsed turn.
#[test]
fn cost_k_means_k_sequential_passes() {
    let mut world = World::default();
    world.map = Map::filled(20, 3, TileKind::Wall);
    for x in 1..19 {
        world.map.set(Position::new(x, 1), TileKind::Floor);
    }
    world
        .spawn_creature(
            '@',
            Position::new(18, 1),
            EntityAttributes::PLAYER,
            Creature::new("target", 100, 0, 1),
        )
        .unwrap();
    let seeker = world
        .spawn_creature(
            's',
            Position::new(1, 1),
            EntityAttributes::empty(),
            Creature::new("seeker", 10, 0, 1),
        )
        .unwrap();
    world.registry.set_behavior(seeker, Behavior::SeekAndMelee);

    let table = BindingTable::new(vec![KeyBinding::new(
        '.',
        Mode::GAME,
        Action::ShiftCamera(Delta::new(0, 0)),
        5,
    )]);
    let mut journal = MemoryJournal::default();
    let mut engine = GameEngine::new(&mut world);

    engine.dispatch(&table, key('.'), &mut journal);
    assert_eq!(engine.catch_up(&mut journal), 5);

    assert_eq!(world.registry.position(seeker), Some(Position::new(6, 1)));
    assert_eq!(world.turn.processed, Turn(5));
}

#[test]
fn losing_the_last_player_raises_dead_after_catch_up() {
    let mut world = World::default();
    let player = world
        .spawn_creature(
            '@',
            Position::new(5, 5),
            EntityAttributes::PLAYER,
            Creature::new("p", 10, 1, 1),
        )
        .unwrap();
    world.registry.creature_mut(player).unwrap().health = 0;
    let table = BindingTable::new(vec![KeyBinding::new(
        '.',
        Mode::GAME,
        Action::ShiftCamera(Delta::new(0, 0)),
        1,
    )]);
    let mut journal = MemoryJournal::default();

    let mut engine = GameEngine::new(&mut world);
    engine.dispatch(&table, key('.'), &mut journal);
    engine.catch_up(&mut journal);

    assert_eq!(world.registry.at(Position::new(5, 5)), None);
    assert!(world.mode.contains(Mode::GAME | Mode::DEAD));
    assert_eq!(world.died_on, Some(Turn(1)));
}

#[test]
fn reap_sweeps_creatures_left_at_zero() {
    let mut world = World::default();
    let weak = world
        .spawn_creature(
            'w',
            Position::new(3, 3),
            EntityAttributes::empty(),
            Creature::new("weak", 5, 0, 1),
        )
        .unwrap();
    world.registry.creature_mut(weak).unwrap().health = 0;
    let mut journal = MemoryJournal::default();

    GameEngine::new(&mut world).run_pass(&mut journal);

    assert!(!world.registry.contains(weak));
}

use std::fs;

use game_core::{
    Action, Behavior, BindingTable, Creature, Delta, EntityAttributes, KeyBinding, KeyCode,
    MapSlot, Mode, Position, TileKind, Turn,
};
use runtime::{Flow, InMemoryMapRepository, MapRepository, RuntimeConfig, Session};
use tempfile::TempDir;

fn key(ch: char) -> KeyCode {
    KeyCode::from_char(ch)
}

fn file_session(dir: &TempDir) -> Session {
    let config = RuntimeConfig::default().rooted_at(dir.path()).with_seed(7);
    Session::start(&config).unwrap()
}

#[test]
fn first_start_creates_default_map_file() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);

    let bytes = fs::read(dir.path().join("map1.map")).unwrap();
    assert_eq!(bytes, session.world().map.to_bytes());
    assert!(
        session
            .log()
            .entries()
            .iter()
            .any(|entry| entry == "Map does not exist, creating...")
    );
}

#[test]
fn quit_releases_entities_and_dumps_log() {
    let dir = TempDir::new().unwrap();
    let mut session = file_session(&dir);

    assert_eq!(session.handle_key(key('q')).unwrap(), Flow::Quit);

    assert!(session.is_shut_down());
    assert!(session.world().registry.is_empty());
    let dumped = fs::read_to_string(dir.path().join("log")).unwrap();
    let lines: Vec<_> = dumped.lines().collect();
    assert_eq!(lines.first(), Some(&"Beginning setup..."));
    assert_eq!(lines.last(), Some(&"Saving log..."));
    let freeing = lines.iter().position(|l| *l == "Freeing memory...").unwrap();
    assert_eq!(freeing, lines.len() - 2);

    // Further keys are ignored.
    assert_eq!(session.handle_key(key('d')).unwrap(), Flow::Quit);
}

#[test]
fn edit_mode_round_trip_persists_custom_map() {
    let dir = TempDir::new().unwrap();
    let mut session = file_session(&dir);

    session.handle_key(key('p')).unwrap();
    assert_eq!(session.active_map(), MapSlot::Custom);
    assert_eq!(session.world().mode, Mode::CURSOR | Mode::EDIT);

    // Cursor starts at the origin; step to (3, 3) and drop a wall.
    for _ in 0..3 {
        session.handle_key(key('d')).unwrap();
        session.handle_key(key('s')).unwrap();
    }
    session.handle_key(key('e')).unwrap();
    session.handle_key(key('r')).unwrap();
    assert_eq!(session.log().notice(), Some("Map saved."));

    let saved = fs::read(dir.path().join("custom.map")).unwrap();
    let map = &session.world().map;
    let index = map.index_of(Position::new(3, 3)).unwrap();
    assert_eq!(saved[index], TileKind::Wall.index());
    // Editing never costs a turn.
    assert_eq!(session.turn(), Turn::ZERO);

    session.handle_key(key('p')).unwrap();
    assert_eq!(session.active_map(), MapSlot::Default);
    assert_eq!(session.world().mode, Mode::GAME);
    assert_eq!(
        session.world().map.tile(Position::new(3, 3)),
        Some(TileKind::Floor)
    );
}

#[test]
fn truncated_map_keeps_tail_and_logs_warning() {
    let config = RuntimeConfig::default();
    let area = config.game_config.map_area();
    let repo = InMemoryMapRepository::new()
        .with_bytes(MapSlot::Default, vec![TileKind::Floor.index(); area - 20]);

    let session =
        Session::with_repository(&config, BindingTable::defaults(), Box::new(repo)).unwrap();

    let map = &session.world().map;
    // The last row was not covered and keeps the walled-room default (floor
    // outside the ring); the ring's bottom edge on row 18 was overwritten.
    assert_eq!(map.tile(Position::new(5, 18)), Some(TileKind::Floor));
    assert!(
        session
            .log()
            .entries()
            .iter()
            .any(|entry| entry == "Map file ended early!")
    );
}

#[test]
fn cost_k_runs_k_behavior_passes() {
    let config = RuntimeConfig::default().with_seed(3);
    let bindings = BindingTable::new(vec![
        KeyBinding::new('z', Mode::GAME, Action::ShiftCamera(Delta::RIGHT), 4),
        KeyBinding::new('q', Mode::ALL, Action::Quit, 0),
    ]);
    let mut session = Session::with_repository(
        &config,
        bindings,
        Box::new(InMemoryMapRepository::new()),
    )
    .unwrap();

    // Park a wanderer far from everyone; every pass rolls once for it and
    // once for each hound.
    let world = session.world_mut();
    let wanderer = world
        .spawn_creature(
            'w',
            Position::new(3, 15),
            EntityAttributes::empty(),
            Creature::new("w", 5, 0, 1),
        )
        .unwrap();
    world.registry.set_behavior(wanderer, Behavior::RandomWander);
    let nonce_before = world.rng.nonce;

    session.handle_key(key('z')).unwrap();

    let world = session.world();
    assert_eq!(world.turn.clock, Turn(4));
    assert_eq!(world.turn.processed, Turn(4));
    assert_eq!(world.rng.nonce - nonce_before, 4 * 3);
}

#[test]
fn hounds_eventually_kill_a_frail_player() {
    let config = RuntimeConfig::default().with_seed(11);
    let bindings = BindingTable::new(vec![
        KeyBinding::new('.', Mode::ALL, Action::ShiftCamera(Delta::new(0, 0)), 1),
    ]);
    let mut session = Session::with_repository(
        &config,
        bindings,
        Box::new(InMemoryMapRepository::new()),
    )
    .unwrap();

    let world = session.world_mut();
    let player = world.player().unwrap();
    world.registry.creature_mut(player).unwrap().health = 1;
    world.registry.get_mut(player).unwrap().position = Position::new(9, 10);

    for _ in 0..200 {
        session.handle_key(key('.')).unwrap();
        if session.world().mode.is_dead() {
            break;
        }
    }

    let world = session.world();
    assert!(world.mode.contains(Mode::DEAD | Mode::GAME));
    assert!(world.player().is_none());
    assert!(session.status_line().starts_with("You died on turn "));
    // Dead does not gate dispatch.
    let before = session.turn();
    session.handle_key(key('.')).unwrap();
    assert_eq!(session.turn(), before + 1);
}

#[test]
fn unmatched_keys_are_silent() {
    let mut session = Session::with_repository(
        &RuntimeConfig::default(),
        BindingTable::defaults(),
        Box::new(InMemoryMapRepository::new()),
    )
    .unwrap();
    let entries_before = session.log().entries().len();

    assert_eq!(session.handle_key(key('~')).unwrap(), Flow::Continue);
    assert_eq!(session.log().entries().len(), entries_before);
    assert_eq!(session.turn(), Turn::ZERO);
}

#[test]
fn show_log_and_notice_lifetime() {
    let mut session = Session::with_repository(
        &RuntimeConfig::default(),
        BindingTable::defaults(),
        Box::new(InMemoryMapRepository::new()),
    )
    .unwrap();

    session.handle_key(key('n')).unwrap();
    assert_eq!(
        session.log().notice(),
        Some("You've pressed that button 0 times!")
    );
    assert_eq!(session.handle_key(key('b')).unwrap(), Flow::ShowLog);
    assert_eq!(session.log().notice(), None);
}

#[test]
fn save_map_goes_to_custom_slot() {
    let repo = InMemoryMapRepository::new();
    let mut session = Session::with_repository(
        &RuntimeConfig::default(),
        BindingTable::new(vec![KeyBinding::new('r', Mode::ALL, Action::SaveMap, 0)]),
        Box::new(repo),
    )
    .unwrap();

    session.handle_key(key('r')).unwrap();

    assert!(
        session
            .log()
            .entries()
            .iter()
            .any(|entry| entry == "Saved custom map")
    );
}

#[test]
fn in_memory_repository_reports_created_then_loaded() {
    let repo = InMemoryMapRepository::new();
    let mut map = game_core::Map::default();

    assert!(!repo.exists(MapSlot::Custom));
    repo.load_into(MapSlot::Custom, &mut map).unwrap();
    assert!(repo.exists(MapSlot::Custom));
    assert_eq!(repo.bytes(MapSlot::Custom).unwrap(), Some(map.to_bytes()));
}

#[test]
fn status_line_follows_configured_template() {
    let config = RuntimeConfig {
        status_template: "HP %h on %s".to_string(),
        ..RuntimeConfig::default()
    };
    let session = Session::with_repository(
        &config,
        BindingTable::defaults(),
        Box::new(InMemoryMapRepository::new()),
    )
    .unwrap();

    assert_eq!(session.status_line(), "HP 50 on 0");
}

//! One play session: the world, its bindings, its log and its map store.
//!
//! [`Session::handle_key`] runs one input cycle: dispatch the key, carry out
//! the I/O the action asked for, then run the owed behavior passes. The
//! quit binding triggers [`Session::shutdown`] before it returns.
use std::path::PathBuf;

use game_core::{
    BindingTable, Dispatch, Effect, GameEngine, Journal, KeyCode, MapSlot, Turn, World,
    populate_default,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::log::GameLog;
use crate::repository::{FileMapRepository, MapLoadReport, MapRepository};
use crate::status::format_status;

/// What the caller should do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Show the durable log until the next key, then continue.
    ShowLog,
    /// The session has shut down; stop reading input.
    Quit,
}

pub struct Session {
    world: World,
    bindings: BindingTable,
    log: GameLog,
    maps: Box<dyn MapRepository>,
    active_map: MapSlot,
    log_path: PathBuf,
    status_template: String,
    shut_down: bool,
}

impl Session {
    /// Builds a session backed by the map files named in `config`.
    pub fn start(config: &RuntimeConfig) -> Result<Self> {
        let bindings = config.load_bindings()?;
        let maps = FileMapRepository::new(&config.map_path, &config.custom_map_path);
        Self::with_repository(config, bindings, Box::new(maps))
    }

    /// Builds a session over any map store.
    ///
    /// The world gets the default cast, then the default map is loaded.
    pub fn with_repository(
        config: &RuntimeConfig,
        bindings: BindingTable,
        maps: Box<dyn MapRepository>,
    ) -> Result<Self> {
        let mut log = GameLog::new(config.log_capacity);
        log.record("Beginning setup...".to_string());

        let mut world = World::new(&config.game_config, config.seed);
        let cast = populate_default(&mut world).map_err(RuntimeError::Populate)?;
        tracing::debug!(
            "Populated world: cursor={} player={} hounds={:?}",
            cast.cursor,
            cast.player,
            cast.hounds
        );

        let mut session = Self {
            world,
            bindings,
            log,
            maps,
            active_map: MapSlot::Default,
            log_path: config.log_path.clone(),
            status_template: config.status_template.clone(),
            shut_down: false,
        };
        session.load_map(MapSlot::Default);
        session.log.record("Beginning main loop.".to_string());
        tracing::info!("Session started with seed {}", config.seed);

        Ok(session)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn active_map(&self) -> MapSlot {
        self.active_map
    }

    pub fn turn(&self) -> Turn {
        self.world.turn.clock
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn status_line(&self) -> String {
        format_status(&self.status_template, &self.world)
    }

    /// Runs one input cycle for `key`.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Flow> {
        if self.shut_down {
            return Ok(Flow::Quit);
        }
        self.log.clear_notice();

        let dispatch =
            GameEngine::new(&mut self.world).dispatch(&self.bindings, key, &mut self.log);
        let effect = match &dispatch {
            Dispatch::Unmatched => {
                tracing::trace!("No binding for {} in {:?}", key, self.world.mode);
                return Ok(Flow::Continue);
            }
            Dispatch::Fired {
                action,
                cost,
                effect,
            } => {
                tracing::debug!("{} fired {} (cost {})", key, action.name(), cost);
                *effect
            }
        };

        let flow = self.perform(effect)?;
        if flow == Flow::Quit {
            return Ok(flow);
        }

        let was_dead = self.world.mode.is_dead();
        let passes = GameEngine::new(&mut self.world).catch_up(&mut self.log);
        if passes > 0 {
            tracing::trace!("Ran {} behavior passes, now at turn {}", passes, self.turn());
        }
        if !was_dead && self.world.mode.is_dead() {
            self.log
                .record(format!("Player died on turn {}", self.turn()));
            tracing::info!("Player died on turn {}", self.turn());
        }

        Ok(flow)
    }

    fn perform(&mut self, effect: Effect) -> Result<Flow> {
        match effect {
            Effect::None => {}
            Effect::SaveMap => self.save_map(),
            Effect::SwapMap(slot) => {
                self.active_map = slot;
                self.load_map(slot);
            }
            Effect::ShowLog => return Ok(Flow::ShowLog),
            Effect::Quit => {
                self.shutdown()?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Loads `slot` into the world map. Failures are logged, never fatal.
    fn load_map(&mut self, slot: MapSlot) {
        self.log.record(format!("Loading {slot} map"));

        match self.maps.load_into(slot, &mut self.world.map) {
            Ok(MapLoadReport::Created) => {
                self.log
                    .record("Map does not exist, creating...".to_string());
            }
            Ok(MapLoadReport::Loaded(report)) => {
                if report.truncated {
                    self.log.record("Map file ended early!".to_string());
                }
                if report.invalid_cells > 0 {
                    self.log.record(format!(
                        "Skipped {} unknown tiles in {slot} map",
                        report.invalid_cells
                    ));
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load {} map: {}", slot, e);
                self.log.record(format!("Could not load {slot} map: {e}"));
            }
        }
    }

    fn save_map(&mut self) {
        match self.maps.save(MapSlot::Custom, &self.world.map) {
            Ok(()) => {
                self.log.record("Saved custom map".to_string());
                self.log.notify("Map saved.".to_string());
            }
            Err(e) => {
                tracing::warn!("Failed to save custom map: {}", e);
                self.log.record(format!("Could not save custom map: {e}"));
                self.log.notify("Map could not be saved.".to_string());
            }
        }
    }

    /// Ordered shutdown: release every entity, then dump the log.
    ///
    /// Safe to call more than once; only the first call does anything.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;

        self.log.record("Freeing memory...".to_string());
        let released = self.world.registry.clear();
        tracing::info!("Released {} entities", released);

        self.log.record("Saving log...".to_string());
        self.log
            .dump(&self.log_path)
            .map_err(|source| RuntimeError::LogDump {
                path: self.log_path.clone(),
                source,
            })?;
        tracing::info!("Log saved to {}", self.log_path.display());

        Ok(())
    }
}

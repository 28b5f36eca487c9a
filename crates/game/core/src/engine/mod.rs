//! Input dispatch and turn scheduling.
//!
//! The [`GameEngine`] borrows the [`World`] for the duration of one input
//! cycle. [`GameEngine::dispatch`] resolves a key against the binding table,
//! applies the bound action and charges its cost to the clock;
//! [`GameEngine::catch_up`] then runs the owed behavior passes. Actions that
//! need I/O (saving or swapping maps, showing the log, quitting) are
//! returned as an [`Effect`] for the caller to carry out.

mod behavior;
mod turns;

pub use behavior::run_behavior;

use crate::action::{Action, BindingTable, KeyCode, attack, shift};
use crate::env::Journal;
use crate::state::{Delta, EntityAttributes, EntityId, Mode, TileKind, World};

/// Which backing map file is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapSlot {
    /// The map the game is played on.
    Default,
    /// The user-editable copy.
    Custom,
}

/// Follow-up the caller must perform after an action ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Write the active map to the custom map file.
    SaveMap,
    /// Load the given map file into the world.
    SwapMap(MapSlot),
    /// Show the durable log until the next key.
    ShowLog,
    /// Run the ordered shutdown.
    Quit,
}

/// Outcome of feeding one key to the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// No binding matched; the key is discarded.
    Unmatched,
    Fired {
        action: Action,
        cost: u64,
        effect: Effect,
    },
}

impl Dispatch {
    pub fn effect(&self) -> Effect {
        match self {
            Dispatch::Unmatched => Effect::None,
            Dispatch::Fired { effect, .. } => *effect,
        }
    }
}

/// Applies actions to a borrowed world.
pub struct GameEngine<'a> {
    world: &'a mut World,
}

impl<'a> GameEngine<'a> {
    pub fn new(world: &'a mut World) -> Self {
        Self { world }
    }

    /// Resolves `key` under the current mode and fires the first matching
    /// binding, adding its cost to the clock.
    pub fn dispatch(
        &mut self,
        table: &BindingTable,
        key: KeyCode,
        journal: &mut dyn Journal,
    ) -> Dispatch {
        let Some(binding) = table.resolve(key, self.world.mode) else {
            return Dispatch::Unmatched;
        };

        let effect = self.apply(&binding.action, journal);
        self.advance(binding.cost);

        Dispatch::Fired {
            action: binding.action.clone(),
            cost: binding.cost,
            effect,
        }
    }

    /// Runs one action against the world. Costs are not charged here.
    pub fn apply(&mut self, action: &Action, journal: &mut dyn Journal) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::ShiftPlayer(delta) => self.shift_player(*delta, journal),
            Action::ShiftCursor(delta) => {
                shift(
                    &mut self.world.registry,
                    &self.world.map,
                    EntityId::CURSOR,
                    *delta,
                );
            }
            Action::ShiftCamera(delta) => self.world.camera.shift(*delta),
            Action::Count => {
                journal.notify(format!(
                    "You've pressed that button {} times!",
                    self.world.press_count
                ));
                self.world.press_count = self.world.press_count.wrapping_add(1);
            }
            Action::PlaceWall => {
                if let Some(at) = self.world.registry.position(EntityId::CURSOR) {
                    self.world.map.set(at, TileKind::Wall);
                }
            }
            Action::SaveMap => return Effect::SaveMap,
            Action::ToggleEdit => {
                self.toggle_cursor();
                self.world.mode.toggle(Mode::EDIT);
                let slot = if self.world.mode.contains(Mode::EDIT) {
                    MapSlot::Custom
                } else {
                    MapSlot::Default
                };
                return Effect::SwapMap(slot);
            }
            Action::ToggleCursor => self.toggle_cursor(),
            Action::ShowLog => return Effect::ShowLog,
            Action::Error(text) => {
                journal.record(format!(
                    "Error: {text} on turn {}",
                    self.world.turn.clock
                ));
            }
            Action::TestMessage => journal.notify("This is a test message.".to_string()),
            Action::PrintCreature => self.print_creature(journal),
        }
        Effect::None
    }

    /// Bump-attacks whatever stands in the way, then tries to step.
    fn shift_player(&mut self, delta: Delta, journal: &mut dyn Journal) {
        let Some(player) = self.world.player() else {
            return;
        };
        let Some(origin) = self.world.registry.position(player) else {
            return;
        };

        let target = self
            .world
            .registry
            .occupant_at(origin.offset(delta))
            .filter(|&other| other != player);
        if let Some(defender) = target {
            let _ = attack(
                &mut self.world.registry,
                &mut self.world.rng,
                journal,
                player,
                defender,
            );
        }

        shift(&mut self.world.registry, &self.world.map, player, delta);
    }

    /// Flips between game and cursor mode; the cursor is drawn only while
    /// cursor mode is on.
    fn toggle_cursor(&mut self) {
        let mode = &mut self.world.mode;
        mode.toggle(Mode::CURSOR);
        mode.toggle(Mode::GAME);
        let show = mode.contains(Mode::CURSOR);

        if let Some(cursor) = self.world.registry.get_mut(EntityId::CURSOR) {
            cursor.attributes.set(EntityAttributes::HIDDEN, !show);
        }
    }

    fn print_creature(&mut self, journal: &mut dyn Journal) {
        let Some(at) = self.world.registry.position(EntityId::CURSOR) else {
            return;
        };
        let creature = self
            .world
            .registry
            .occupant_at(at)
            .and_then(|id| self.world.registry.creature(id));
        if let Some(creature) = creature {
            journal.notify(format!("{} has {} health", creature.name, creature.health));
        }
    }
}

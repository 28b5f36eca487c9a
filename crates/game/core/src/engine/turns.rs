use crate::env::Journal;
use crate::state::{EntityId, Turn};

use super::GameEngine;
use super::behavior::run_behavior;

/// Turn scheduling methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Returns the world clock.
    pub fn clock(&self) -> Turn {
        self.world.turn.clock
    }

    /// Returns the last turn whose behavior pass has run.
    pub fn processed(&self) -> Turn {
        self.world.turn.processed
    }

    /// Advances the clock by the cost of a fired binding.
    pub fn advance(&mut self, cost: u64) {
        self.world.turn.clock = self.world.turn.clock + cost;
    }

    /// Runs one behavior pass per turn elapsed since the last catch-up.
    ///
    /// Each pass sees the world left by the previous one. Dead creatures are
    /// swept after every pass, and the `DEAD` mode bit is raised at the end
    /// if no player survives. Returns the number of passes run.
    pub fn catch_up(&mut self, journal: &mut dyn Journal) -> u64 {
        let owed = self.world.turn.pending();
        for _ in 0..owed {
            self.run_pass(journal);
            self.world.turn.processed = self.world.turn.processed + 1;
        }
        self.world.check_dead();
        owed
    }

    /// Runs every live entity's behavior once, in slot order.
    ///
    /// Creatures already at health <= 0 are swept before anyone acts. Ids
    /// are snapshotted up front; an entity destroyed earlier in the pass is
    /// skipped, and an entity created mid-pass waits for the next one.
    pub fn run_pass(&mut self, journal: &mut dyn Journal) {
        self.world.registry.reap_dead();
        let ids: Vec<EntityId> = self.world.registry.ids();
        for id in ids {
            run_behavior(self.world, id, journal);
        }
        self.world.registry.reap_dead();
    }
}

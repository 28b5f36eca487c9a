//! Actions reachable from key bindings, plus the movement validator and
//! combat resolver they are built on.
//!
//! Each [`Action`] variant carries exactly the payload its handler needs:
//! nothing, a [`Delta`], or a message string.

mod binding;
pub mod combat;
pub mod movement;

pub use binding::{BindingTable, KeyBinding, KeyCode};
pub use combat::{AttackOutcome, CombatError, attack};
pub use movement::{MoveError, shift, try_move, validate_move};

use crate::state::Delta;

/// Everything a binding can trigger.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Ordered shutdown of the session.
    Quit,
    /// Bump-attack whatever stands at player+delta, then step there.
    ShiftPlayer(Delta),
    /// Move the cursor entity; it is a ghost and goes anywhere.
    ShiftCursor(Delta),
    /// Scroll the view.
    ShiftCamera(Delta),
    /// Count how many times this binding fired.
    Count,
    /// Turn the tile under the cursor into a wall.
    PlaceWall,
    /// Persist the active map to the editable map file.
    SaveMap,
    /// Toggle cursor mode and edit mode together, swapping the active map.
    ToggleEdit,
    /// Toggle between game and cursor mode.
    ToggleCursor,
    /// Show the durable log until the next key.
    ShowLog,
    /// Record an error line in the durable log.
    Error(String),
    TestMessage,
    /// Report the health of the creature under the cursor.
    PrintCreature,
}

impl Action {
    /// Variant name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

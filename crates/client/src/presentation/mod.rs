//! Drawing the session onto the terminal.

pub mod terminal;
pub mod ui;
mod widgets;

pub use terminal::{TerminalGuard, Tui};
pub use ui::{RenderContext, render};

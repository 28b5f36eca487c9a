//! Status-line template expansion.
//!
//! Escapes: `%h` player health, `%s` current turn, `%%` a literal percent.
//! Anything else after a `%` is copied through unchanged.
use std::fmt::Write;

use game_core::World;

use crate::log::MESSAGE_LENGTH;

pub const DEFAULT_STATUS: &str = "Health: %h";

/// Renders the status line for `world`.
pub fn format_status(template: &str, world: &World) -> String {
    if world.mode.is_dead() {
        let turn = world.died_on.unwrap_or(world.turn.clock);
        return format!("You died on turn {turn}.");
    }

    let health = world
        .player()
        .and_then(|id| world.registry.creature(id))
        .map(|creature| creature.health);

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('h') => match health {
                Some(health) => {
                    let _ = write!(out, "{health}");
                }
                None => out.push('-'),
            },
            Some('s') => {
                let _ = write!(out, "{}", world.turn.clock);
            }
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }

    if let Some((cut, _)) = out.char_indices().nth(MESSAGE_LENGTH) {
        out.truncate(cut);
    }
    out
}

#[cfg(test)]
mod tests {
    use game_core::{Mode, Turn, populate_default};

    use super::*;

    fn world() -> World {
        let mut world = World::default();
        populate_default(&mut world).unwrap();
        world
    }

    #[test]
    fn default_template_shows_health() {
        assert_eq!(format_status(DEFAULT_STATUS, &world()), "Health: 50");
    }

    #[test]
    fn escapes_expand() {
        let mut world = world();
        world.turn.clock = Turn(9);
        assert_eq!(
            format_status("T%s H%h 100%% %q%", &world),
            "T9 H50 100% %q%"
        );
    }

    #[test]
    fn missing_player_renders_dash() {
        let mut world = World::default();
        world.mode = Mode::GAME;
        assert_eq!(format_status("HP %h", &world), "HP -");
    }

    #[test]
    fn dead_overrides_template() {
        let mut world = world();
        let player = world.player().unwrap();
        world.registry.destroy(player);
        world.turn.clock = Turn(31);
        world.check_dead();
        world.turn.clock = Turn(40);

        assert_eq!(format_status(DEFAULT_STATUS, &world), "You died on turn 31.");
    }

    #[test]
    fn output_is_capped() {
        let template = "x".repeat(400);
        assert_eq!(format_status(&template, &world()).len(), MESSAGE_LENGTH);
    }
}

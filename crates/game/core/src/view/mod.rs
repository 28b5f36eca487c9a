//! Projection of the world onto a character grid.
//!
//! The core knows nothing about the drawing surface beyond [`Canvas`]:
//! place one glyph at a view-space (column, row).

pub mod wall;

pub use wall::{Links, WallGlyph, glyph_for, tile_char};

use crate::state::World;

/// Display collaborator.
pub trait Canvas {
    /// Draws `glyph` at view-space `(col, row)`. Coordinates may be negative
    /// or past the surface edge when the camera has scrolled; implementors
    /// clip.
    fn put(&mut self, col: i32, row: i32, glyph: char);
}

/// Draws every map cell, then every visible entity, shifted by the camera.
///
/// Entities are drawn in slot order, so a higher id overdraws a lower one
/// sharing its cell.
pub fn draw_world(world: &World, canvas: &mut dyn Canvas) {
    for (position, _) in world.map.cells() {
        if let Some(glyph) = tile_char(&world.map, position) {
            let (col, row) = world.camera.project(position);
            canvas.put(col, row, glyph);
        }
    }

    for (_, record) in world.registry.iter() {
        if record.is_hidden() {
            continue;
        }
        let (col, row) = world.camera.project(record.position);
        canvas.put(col, row, record.glyph);
    }
}

use bitflags::bitflags;
use strum::{Display, EnumIter, FromRepr};

use super::Position;
use crate::config::GameConfig;

bitflags! {
    /// Static attributes carried by every tile type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TileAttributes: u8 {
        /// Blocks non-ghost movement.
        const SOLID      = 1 << 7;
        /// Merges visually with connective neighbours.
        const CONNECTIVE = 1 << 6;
    }
}

/// How a tile type is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileGlyph {
    /// Drawn as-is.
    Literal(char),
    /// Drawn as a box-drawing junction chosen from the connective neighbours.
    Junction,
}

/// Entry in the static tile table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileDescriptor {
    pub glyph: TileGlyph,
    pub attributes: TileAttributes,
}

/// Terrain types. The discriminant is the byte stored in map files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Floor = 0,
    Wall = 1,
    Door = 2,
    Fountain = 3,
}

impl TileKind {
    pub const fn descriptor(self) -> TileDescriptor {
        match self {
            TileKind::Floor => TileDescriptor {
                glyph: TileGlyph::Literal(' '),
                attributes: TileAttributes::empty(),
            },
            TileKind::Wall => TileDescriptor {
                glyph: TileGlyph::Junction,
                attributes: TileAttributes::SOLID.union(TileAttributes::CONNECTIVE),
            },
            TileKind::Door => TileDescriptor {
                glyph: TileGlyph::Literal('+'),
                attributes: TileAttributes::CONNECTIVE,
            },
            TileKind::Fountain => TileDescriptor {
                glyph: TileGlyph::Literal('#'),
                attributes: TileAttributes::SOLID,
            },
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    pub const fn is_solid(self) -> bool {
        self.descriptor().attributes.contains(TileAttributes::SOLID)
    }

    pub const fn is_connective(self) -> bool {
        self.descriptor()
            .attributes
            .contains(TileAttributes::CONNECTIVE)
    }
}

/// Outcome of overlaying raw map bytes onto an existing map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OverlayReport {
    /// Number of bytes consumed from the input.
    pub cells_read: usize,
    /// Bytes that did not name a tile type; those cells were left unchanged.
    pub invalid_cells: usize,
    /// The input ended before every cell was covered.
    pub truncated: bool,
}

/// Fixed-size playfield of tile types stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    width: u32,
    height: u32,
    cells: Vec<TileKind>,
}

impl Map {
    /// Creates a map with every cell set to `kind`.
    pub fn filled(width: u32, height: u32, kind: TileKind) -> Self {
        Self {
            width,
            height,
            cells: vec![kind; width as usize * height as usize],
        }
    }

    /// Floor map with a one-tile wall ring inset by one cell from the edge.
    pub fn walled_room(width: u32, height: u32) -> Self {
        let mut map = Self::filled(width, height, TileKind::Floor);
        let (w, h) = (width as i32, height as i32);
        for x in 1..w - 1 {
            map.set(Position::new(x, 1), TileKind::Wall);
            map.set(Position::new(x, h - 2), TileKind::Wall);
        }
        for y in 1..h - 1 {
            map.set(Position::new(1, y), TileKind::Wall);
            map.set(Position::new(w - 2, y), TileKind::Wall);
        }
        map
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn position_of(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Replaces the tile at `position`. Returns false when out of bounds.
    pub fn set(&mut self, position: Position, kind: TileKind) -> bool {
        match self.index_of(position) {
            Some(index) => {
                self.cells[index] = kind;
                true
            }
            None => false,
        }
    }

    /// Out-of-bounds cells count as solid.
    pub fn is_solid(&self, position: Position) -> bool {
        self.tile(position).is_none_or(TileKind::is_solid)
    }

    /// Out-of-bounds cells are never connective.
    pub fn is_connective(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_connective)
    }

    /// Iterates cells as `(position, kind)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, TileKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, kind)| (self.position_of(index), *kind))
    }

    /// One byte per cell, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|kind| kind.index()).collect()
    }

    /// Overwrites cells from `bytes` in row-major order.
    ///
    /// At most `area()` bytes are consumed. When `bytes` is shorter, the
    /// remaining cells keep their current value.
    pub fn overlay_bytes(&mut self, bytes: &[u8]) -> OverlayReport {
        let mut report = OverlayReport {
            truncated: bytes.len() < self.cells.len(),
            ..OverlayReport::default()
        };

        for (cell, byte) in self.cells.iter_mut().zip(bytes) {
            report.cells_read += 1;
            match TileKind::from_index(*byte) {
                Some(kind) => *cell = kind,
                None => report.invalid_cells += 1,
            }
        }

        report
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::walled_room(GameConfig::MAP_WIDTH, GameConfig::MAP_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tile_table_matches_byte_indices() {
        for kind in TileKind::iter() {
            assert_eq!(TileKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(TileKind::from_index(4), None);
    }

    #[test]
    fn wall_is_solid_and_connective_door_only_connective() {
        assert!(TileKind::Wall.is_solid());
        assert!(TileKind::Wall.is_connective());
        assert!(!TileKind::Door.is_solid());
        assert!(TileKind::Door.is_connective());
        assert!(TileKind::Fountain.is_solid());
        assert!(!TileKind::Fountain.is_connective());
        assert!(!TileKind::Floor.is_solid());
    }

    #[test]
    fn default_map_has_inset_wall_ring() {
        let map = Map::default();
        assert_eq!(map.area(), 400);
        assert_eq!(map.tile(Position::new(0, 0)), Some(TileKind::Floor));
        assert_eq!(map.tile(Position::new(1, 1)), Some(TileKind::Wall));
        assert_eq!(map.tile(Position::new(18, 18)), Some(TileKind::Wall));
        assert_eq!(map.tile(Position::new(10, 1)), Some(TileKind::Wall));
        assert_eq!(map.tile(Position::new(7, 7)), Some(TileKind::Floor));
        assert_eq!(map.tile(Position::new(19, 19)), Some(TileKind::Floor));
    }

    #[test]
    fn out_of_bounds_is_solid_and_not_connective() {
        let map = Map::default();
        assert!(map.is_solid(Position::new(-1, 0)));
        assert!(map.is_solid(Position::new(0, 20)));
        assert!(!map.is_connective(Position::new(20, 5)));
    }

    #[test]
    fn short_overlay_keeps_tail_cells() {
        let mut map = Map::filled(4, 2, TileKind::Fountain);
        let report = map.overlay_bytes(&[0, 1, 2]);

        assert!(report.truncated);
        assert_eq!(report.cells_read, 3);
        assert_eq!(
            map.to_bytes(),
            vec![0, 1, 2, 3, 3, 3, 3, 3],
            "cells past the input must be untouched"
        );
    }

    #[test]
    fn overlay_skips_unknown_tile_bytes() {
        let mut map = Map::filled(2, 1, TileKind::Door);
        let report = map.overlay_bytes(&[9, 1]);

        assert_eq!(report.invalid_cells, 1);
        assert!(!report.truncated);
        assert_eq!(map.to_bytes(), vec![2, 1]);
    }

    #[test]
    fn overlay_ignores_extra_bytes() {
        let mut map = Map::filled(2, 1, TileKind::Floor);
        let report = map.overlay_bytes(&[1, 1, 1, 1]);

        assert_eq!(report.cells_read, 2);
        assert_eq!(map.to_bytes(), vec![1, 1]);
    }
}

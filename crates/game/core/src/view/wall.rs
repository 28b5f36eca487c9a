//! Wall-junction glyph selection.
//!
//! A junction tile is drawn with the box-drawing piece that links it to its
//! connective orthogonal neighbours. Neighbours outside the map count as
//! non-connective, so edge walls never wrap around to the opposite side.

use crate::state::{Map, Position, TileGlyph};

/// Box-drawing pieces a junction tile can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallGlyph {
    Cross,
    /// Open to N, S and E.
    LeftTee,
    /// Open to N, S and W.
    RightTee,
    /// Open to N, E and W.
    BottomTee,
    /// Open to S, E and W.
    TopTee,
    Vertical,
    Horizontal,
    /// Open to N and E.
    CornerSw,
    /// Open to N and W.
    CornerSe,
    /// Open to S and E.
    CornerNw,
    /// Open to S and W.
    CornerNe,
}

impl WallGlyph {
    pub const fn as_char(self) -> char {
        match self {
            WallGlyph::Cross => '┼',
            WallGlyph::LeftTee => '├',
            WallGlyph::RightTee => '┤',
            WallGlyph::BottomTee => '┴',
            WallGlyph::TopTee => '┬',
            WallGlyph::Vertical => '│',
            WallGlyph::Horizontal => '─',
            WallGlyph::CornerSw => '└',
            WallGlyph::CornerSe => '┘',
            WallGlyph::CornerNw => '┌',
            WallGlyph::CornerNe => '┐',
        }
    }

    /// Decision table over which orthogonal neighbours connect.
    pub const fn from_links(links: Links) -> Self {
        let Links {
            north,
            east,
            south,
            west,
        } = links;

        if north {
            if south {
                return match (east, west) {
                    (true, true) => WallGlyph::Cross,
                    (true, false) => WallGlyph::LeftTee,
                    (false, true) => WallGlyph::RightTee,
                    (false, false) => WallGlyph::Vertical,
                };
            }
            return match (east, west) {
                (true, true) => WallGlyph::BottomTee,
                (true, false) => WallGlyph::CornerSw,
                (false, true) => WallGlyph::CornerSe,
                (false, false) => WallGlyph::Vertical,
            };
        }
        if south {
            return match (east, west) {
                (true, true) => WallGlyph::TopTee,
                (true, false) => WallGlyph::CornerNw,
                (false, true) => WallGlyph::CornerNe,
                (false, false) => WallGlyph::Vertical,
            };
        }
        if east || west {
            return WallGlyph::Horizontal;
        }
        // An isolated junction tile still draws as a junction.
        WallGlyph::Cross
    }
}

/// Connectivity of the four orthogonal neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Links {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Links {
    pub fn around(map: &Map, position: Position) -> Self {
        let Position { x, y } = position;
        Self {
            north: map.is_connective(Position::new(x, y - 1)),
            east: map.is_connective(Position::new(x + 1, y)),
            south: map.is_connective(Position::new(x, y + 1)),
            west: map.is_connective(Position::new(x - 1, y)),
        }
    }
}

/// Junction piece for the cell at `position`, from its neighbours.
pub fn glyph_for(map: &Map, position: Position) -> WallGlyph {
    WallGlyph::from_links(Links::around(map, position))
}

/// Character to draw for the tile at `position`.
///
/// Literal tiles draw their own glyph; junction tiles go through
/// [`glyph_for`]. Returns `None` outside the map.
pub fn tile_char(map: &Map, position: Position) -> Option<char> {
    let kind = map.tile(position)?;
    Some(match kind.descriptor().glyph {
        TileGlyph::Literal(ch) => ch,
        TileGlyph::Junction => glyph_for(map, position).as_char(),
    })
}

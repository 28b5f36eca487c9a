use std::fmt;

/// Registry slot index identifying an entity for as long as it lives.
///
/// Ids are only meaningful between creation and the next `destroy` of the
/// same slot; a freed slot may be handed out again by a later `create`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Slot reserved by convention for the cursor entity created at setup.
    pub const CURSOR: Self = Self(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `delta`.
    pub const fn offset(self, delta: Delta) -> Self {
        Self::new(self.x + delta.dx, self.y + delta.dy)
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The eight surrounding cells plus the cell itself, row-major starting
    /// at the north-west corner.
    pub fn surrounding(self) -> [Position; 9] {
        let mut cells = [self; 9];
        for (n, cell) in cells.iter_mut().enumerate() {
            let dx = (n % 3) as i32 - 1;
            let dy = (n / 3) as i32 - 1;
            *cell = Position::new(self.x + dx, self.y + dy);
        }
        cells
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative displacement used by movement and camera actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const UP: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);

    /// The four cardinal steps in the order behaviors roll them.
    pub const CARDINALS: [Delta; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Discrete unit of world time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

/// Saturates at `u64::MAX`; the clock never wraps backwards.
impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

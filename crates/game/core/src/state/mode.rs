use bitflags::bitflags;

bitflags! {
    /// Interaction modes. Bits are independent and may be combined.
    ///
    /// `DEAD` is a terminal condition raised when no player remains; it is
    /// reported by the UI but never consulted by dispatch on its own.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Mode: u8 {
        const GAME   = 1 << 7;
        const CURSOR = 1 << 6;
        const EDIT   = 1 << 5;
        const DEAD   = 1 << 0;
        /// Mask matching every mode, used by bindings that always apply.
        const ALL    = u8::MAX;
    }
}

impl Mode {
    /// True when the two masks share at least one bit.
    pub fn overlaps(self, other: Mode) -> bool {
        self.intersects(other)
    }

    pub fn is_dead(self) -> bool {
        self.contains(Mode::DEAD)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::GAME
    }
}

//! Deterministic random number generation.
//!
//! Every roll is derived from the session seed, a running nonce, the acting
//! entity and a per-roll context, so a session replays identically from the
//! same seed and input sequence.

use crate::state::EntityId;

/// RNG oracle for deterministic random number generation.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Value in `[0, bound)`; a bound of zero always yields zero.
    fn below(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32(seed) % bound
    }
}

/// PCG-XSH-RR: 64-bit state, 32-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Mixes the roll inputs into a single seed.
///
/// `context` separates independent rolls made for the same actor and nonce.
pub fn compute_seed(game_seed: u64, nonce: u64, actor: EntityId, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor.0 as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Roll contexts used by the core.
pub mod context {
    pub const DAMAGE: u32 = 0;
    pub const WANDER: u32 = 1;
}

/// Session seed plus the nonce advanced by every roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RngState {
    pub seed: u64,
    pub nonce: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    /// Draws a value in `[0, bound)` and advances the nonce.
    pub fn roll_below(&mut self, actor: EntityId, context: u32, bound: u32) -> u32 {
        let seed = compute_seed(self.seed, self.nonce, actor, context);
        self.nonce = self.nonce.wrapping_add(1);
        PcgRng.below(seed, bound)
    }
}

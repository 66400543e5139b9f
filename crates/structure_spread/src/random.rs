//! Deterministic random sources reproducing the host engine's generator.
//!
//! [`SpreadRandom`] is the 48-bit linear congruential generator the host grid
//! algorithm draws from. Cell-level sources ([`SpreadRandom::for_cell`]) must
//! stay bit-compatible with the engine, since predicted placements are only
//! useful if they match what the engine generated. Chunk-level sources
//! ([`SpreadRandom::for_chunk`]) drive candidate selection and only need to be
//! stable within this crate.
use rand::RngCore;

use crate::chunk::{self, ChunkPos};

/// 48-bit linear congruential generator with the host engine's constants.
#[derive(Debug, Clone)]
pub struct SpreadRandom {
    state: u64,
}

impl SpreadRandom {
    /// Multiplier of the host generator.
    pub const MULTIPLIER: u64 = 0x5DEECE66D;
    /// Increment of the host generator.
    pub const INCREMENT: u64 = 0xB;
    const MASK: u64 = (1 << 48) - 1;

    /// Cell-seed multiplier applied to the x cell coordinate.
    pub const CELL_X_MULTIPLIER: i64 = 341_873_128_712;
    /// Cell-seed multiplier applied to the z cell coordinate.
    pub const CELL_Z_MULTIPLIER: i64 = 132_897_987_541;

    /// Creates a generator from a raw seed, scrambled the way the host does.
    pub fn from_seed(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ Self::MULTIPLIER) & Self::MASK,
        }
    }

    /// Generator for one placement-grid cell.
    ///
    /// Must reproduce the host's region seed exactly: both coordinate
    /// multipliers, the world seed, and the salt combine with wrapping
    /// arithmetic before scrambling.
    pub fn for_cell(world_seed: i64, salt: i64, cell_x: i32, cell_z: i32) -> Self {
        let seed = (cell_x as i64)
            .wrapping_mul(Self::CELL_X_MULTIPLIER)
            .wrapping_add((cell_z as i64).wrapping_mul(Self::CELL_Z_MULTIPLIER))
            .wrapping_add(world_seed)
            .wrapping_add(salt);
        Self::from_seed(seed)
    }

    /// Generator for per-chunk candidate selection.
    pub fn for_chunk(world_seed: i64, chunk: ChunkPos) -> Self {
        Self::from_seed(chunk::seed_for_chunk(world_seed as u64, chunk) as i64)
    }

    fn next_bits(&mut self, bits: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            & Self::MASK;
        (self.state >> (48 - bits)) as u32
    }

    /// Uniform fraction in `[0, 1)` built from 53 bits, as the host does.
    pub fn next_fraction(&mut self) -> f64 {
        let hi = (self.next_bits(26) as u64) << 27;
        let lo = self.next_bits(27) as u64;
        (hi | lo) as f64 / (1u64 << 53) as f64
    }
}

impl RngCore for SpreadRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_bits(32) as i32 as i64;
        let lo = self.next_bits(32) as i32 as i64;
        ((hi << 32).wrapping_add(lo)) as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for word in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            word.copy_from_slice(&bytes[..word.len()]);
        }
    }
}

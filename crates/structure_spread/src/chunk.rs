//! Chunk coordinates and per-chunk seed derivation.
//!
//! [`ChunkPos`] addresses one chunk of the host grid ([`CHUNK_SIZE`] world
//! units per side). Helpers convert between block space and chunk space and
//! derive deterministic per-chunk seeds for candidate selection.
use glam::IVec2;

/// World units per chunk side in the host grid.
pub const CHUNK_SIZE: i32 = 16;

/// Addresses a single chunk of the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the given block position.
    pub fn containing_block(block: IVec2) -> Self {
        Self {
            x: block.x.div_euclid(CHUNK_SIZE),
            z: block.y.div_euclid(CHUNK_SIZE),
        }
    }

    /// Block position of the chunk's minimum corner.
    pub fn min_block(&self) -> IVec2 {
        IVec2::new(self.x * CHUNK_SIZE, self.z * CHUNK_SIZE)
    }

    /// Block position of the chunk's center.
    pub fn block_center(&self) -> IVec2 {
        self.min_block() + IVec2::splat(CHUNK_SIZE / 2)
    }

    /// Chebyshev distance to another chunk, in chunks.
    pub fn chebyshev_distance(&self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

impl From<mint::Point2<i32>> for ChunkPos {
    fn from(point: mint::Point2<i32>) -> Self {
        Self {
            x: point.x,
            z: point.y,
        }
    }
}

impl From<ChunkPos> for mint::Point2<i32> {
    fn from(chunk: ChunkPos) -> Self {
        mint::Point2 {
            x: chunk.x,
            y: chunk.z,
        }
    }
}

/// Euclidean distance between two block positions.
pub fn block_distance(a: IVec2, b: IVec2) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dz = (a.y - b.y) as f64;
    (dx * dx + dz * dz).sqrt()
}

/// Creates a deterministic seed for a chunk from a world seed.
pub fn seed_for_chunk(world_seed: u64, chunk: ChunkPos) -> u64 {
    let cx = chunk.x as i64 as u64;
    let cz = chunk.z as i64 as u64;
    let mixed =
        world_seed ^ cx.wrapping_mul(0x9E3779B97F4A7C15) ^ cz.wrapping_mul(0xBF58476D1CE4E5B9);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

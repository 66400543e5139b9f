//! The deterministic placement grid.
//!
//! Reproduces the host engine's per-cell winner derivation. Any deviation here
//! silently breaks prediction of engine-generated worlds while still producing
//! valid-looking chunk coordinates, so the arithmetic is pinned by golden-value
//! regression tests rather than checked at runtime.
use glam::IVec2;

use crate::chunk::ChunkPos;
use crate::error::{Error, Result};
use crate::placement::spread::Spread;
use crate::random::SpreadRandom;

/// Keep-out rule: a grid refuses to win where another grid has a candidate
/// chunk nearby.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionZone {
    /// The already-resolved grid whose candidates push this one away.
    pub other: Box<PlacementGrid>,
    /// Chebyshev radius around a candidate, in chunks.
    pub chunk_radius: i32,
}

impl ExclusionZone {
    pub fn new(other: PlacementGrid, chunk_radius: i32) -> Self {
        Self {
            other: Box::new(other),
            chunk_radius,
        }
    }
}

/// Immutable placement parameters of one structure family.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementGrid {
    /// Cell size in chunks.
    pub spacing: i32,
    /// Margin of each cell kept clear of winners, in chunks.
    pub separation: i32,
    /// Per-family seed offset, decorrelating families that share a world seed.
    pub salt: i64,
    /// Distribution of winners inside their cells.
    pub spread: Spread,
    /// World-space displacement applied to reported positions only.
    pub locate_offset: IVec2,
    /// Optional keep-out rule against another grid.
    pub exclusion: Option<ExclusionZone>,
}

impl PlacementGrid {
    /// Creates a grid with the given spacing, no separation, zero salt, and
    /// linear spread.
    pub fn new(spacing: i32) -> Self {
        Self {
            spacing,
            separation: 0,
            salt: 0,
            spread: Spread::default(),
            locate_offset: IVec2::ZERO,
            exclusion: None,
        }
    }

    /// Sets the separation margin.
    pub fn with_separation(mut self, separation: i32) -> Self {
        self.separation = separation;
        self
    }

    /// Sets the per-family salt.
    pub fn with_salt(mut self, salt: i64) -> Self {
        self.salt = salt;
        self
    }

    /// Sets the spread distribution.
    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.spread = spread;
        self
    }

    /// Sets the reporting displacement.
    pub fn with_locate_offset(mut self, locate_offset: IVec2) -> Self {
        self.locate_offset = locate_offset;
        self
    }

    /// Sets the keep-out rule.
    pub fn with_exclusion(mut self, exclusion: ExclusionZone) -> Self {
        self.exclusion = Some(exclusion);
        self
    }

    /// Validates grid parameters, including any exclusion grid.
    pub fn validate(&self) -> Result<()> {
        if self.spacing <= 0 {
            return Err(Error::InvalidConfig("spacing must be > 0".into()));
        }
        if self.separation < 0 || self.separation >= self.spacing {
            return Err(Error::InvalidConfig(
                "separation must be in 0..spacing".into(),
            ));
        }
        if let Some(exclusion) = &self.exclusion {
            if exclusion.chunk_radius < 0 {
                return Err(Error::InvalidConfig(
                    "exclusion chunk_radius must be >= 0".into(),
                ));
            }
            exclusion.other.validate()?;
        }
        Ok(())
    }

    /// Cell containing the given chunk.
    pub fn cell_for(&self, chunk: ChunkPos) -> (i32, i32) {
        (
            chunk.x.div_euclid(self.spacing),
            chunk.z.div_euclid(self.spacing),
        )
    }

    /// Chunk offset of the cell's winner from the cell origin, per axis in
    /// `0..spacing`.
    pub fn winning_offset_in_cell(&self, cell_x: i32, cell_z: i32, world_seed: i64) -> (i32, i32) {
        let mut rng = SpreadRandom::for_cell(world_seed, self.salt, cell_x, cell_z);
        let range = (self.spacing - self.separation) as f64;
        let margin = self.separation as f64 / 2.0;
        let dx = (margin + self.spread.sample_offset(&mut rng, range)).floor() as i32;
        let dz = (margin + self.spread.sample_offset(&mut rng, range)).floor() as i32;
        // An offset at the very top of the range can round up to the next
        // cell; pin it so every cell keeps exactly one winner.
        (dx.min(self.spacing - 1), dz.min(self.spacing - 1))
    }

    /// The winning chunk of the given cell.
    pub fn winning_chunk_for_cell(&self, cell_x: i32, cell_z: i32, world_seed: i64) -> ChunkPos {
        let (dx, dz) = self.winning_offset_in_cell(cell_x, cell_z, world_seed);
        ChunkPos::new(cell_x * self.spacing + dx, cell_z * self.spacing + dz)
    }

    /// True iff the chunk is its cell's winner and no exclusion applies.
    pub fn is_winning_chunk(&self, chunk: ChunkPos, world_seed: i64) -> bool {
        let (cell_x, cell_z) = self.cell_for(chunk);
        if self.winning_chunk_for_cell(cell_x, cell_z, world_seed) != chunk {
            return false;
        }
        !self.is_excluded(chunk, world_seed)
    }

    /// True iff the configured exclusion zone suppresses this chunk.
    pub fn is_excluded(&self, chunk: ChunkPos, world_seed: i64) -> bool {
        match &self.exclusion {
            Some(exclusion) => {
                exclusion
                    .other
                    .has_winner_in_range(chunk, exclusion.chunk_radius, world_seed)
            }
            None => false,
        }
    }

    /// True iff any chunk in the square `[center ± radius]` is a candidate
    /// chunk of this grid.
    ///
    /// Candidates are tested raw, without this grid's own exclusion rule, so
    /// the check stays independent of evaluation order. Only cells overlapping
    /// the square are visited; the result matches a full chunk-by-chunk scan.
    pub fn has_winner_in_range(&self, center: ChunkPos, radius: i32, world_seed: i64) -> bool {
        let min_cell_x = (center.x - radius).div_euclid(self.spacing);
        let max_cell_x = (center.x + radius).div_euclid(self.spacing);
        let min_cell_z = (center.z - radius).div_euclid(self.spacing);
        let max_cell_z = (center.z + radius).div_euclid(self.spacing);
        for cell_x in min_cell_x..=max_cell_x {
            for cell_z in min_cell_z..=max_cell_z {
                let winner = self.winning_chunk_for_cell(cell_x, cell_z, world_seed);
                if (winner.x - center.x).abs() <= radius && (winner.z - center.z).abs() <= radius {
                    return true;
                }
            }
        }
        false
    }

    /// World position reported for a chunk, with the locate offset applied.
    pub fn world_position_for(&self, chunk: ChunkPos) -> IVec2 {
        chunk.block_center() + self.locate_offset
    }
}

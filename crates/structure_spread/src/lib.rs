#![forbid(unsafe_code)]
//! structure_spread: Deterministic structure placement and weighted candidate selection for chunked worlds.
//!
//! Modules:
//! - chunk: chunk-grid coordinates and per-chunk seed derivation
//! - random: engine-parity 48-bit LCG random source
//! - rule: id/tag patterns, subjects, and weight tables resolved by specificity
//! - pool: candidate pools and seed-stable weighted selection
//! - placement: spacing/separation grids, spread distributions, exclusion zones
//! - locate: outward ring search for the nearest placed structures
//! - normalize: weight rescaling across structure groups and spacings
//!
//! For examples and docs, see README and docs.rs.
pub mod chunk;
pub mod error;
pub mod locate;
pub mod normalize;
pub mod placement;
pub mod pool;
pub mod random;
pub mod rule;

/// Convenient re-exports for common types. Import with `use structure_spread::prelude::*;`.
pub mod prelude {
    pub use crate::chunk::{seed_for_chunk, ChunkPos, CHUNK_SIZE};
    pub use crate::error::{Error, Result};
    pub use crate::locate::{
        BiomeLookup, FnBiomes, LocateConfig, LocateMatch, LocateTarget, Locator, UniformBiomes,
    };
    pub use crate::normalize::{normalize, normalize_with_spacing, NormalizeConfig};
    pub use crate::placement::{ExclusionZone, PlacementGrid, Spread};
    pub use crate::pool::select::{
        pick_for_chunk, pick_for_chunk_with_stats, pick_weighted_random,
        pick_weighted_random_with_stats, SelectionStats,
    };
    pub use crate::pool::{Candidate, CandidateKind, CandidatePool, StructureId};
    pub use crate::random::SpreadRandom;
    pub use crate::rule::{Pattern, Subject, WeightTable};
}

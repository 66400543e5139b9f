//! Grid-based placement: which chunks host a structure candidate.
//!
//! A [`PlacementGrid`] partitions the chunk plane into `spacing x spacing`
//! cells and derives exactly one winning chunk per cell from the world seed.
//! [`Spread`] shapes where winners land inside their cells, and
//! [`ExclusionZone`] lets one grid veto winners near another grid's
//! candidates.
pub mod grid;
pub mod spread;

pub use grid::{ExclusionZone, PlacementGrid};
pub use spread::Spread;

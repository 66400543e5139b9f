//! Outward ring search for the nearest placed structures.
//!
//! A [`Locator`] walks grid cells in rings of increasing Chebyshev distance
//! from a start chunk, derives each cell's winning chunk, resolves the
//! candidate pool there, and collects matches until the radius or result cap
//! is reached. The search stops at the end of the first ring that satisfies
//! the result cap, so a ring is always scanned completely before results are
//! ranked by true Euclidean distance.
mod ring;

use glam::IVec2;
use tracing::debug;

use crate::chunk::{block_distance, ChunkPos};
use crate::error::{Error, Result};
use crate::placement::PlacementGrid;
use crate::pool::select::pick_weighted_random;
use crate::pool::{CandidatePool, StructureId};
use crate::random::SpreadRandom;
use crate::rule::Subject;

/// Resolves the biome subject at a world position.
///
/// Lookups must be pure: repeated queries at the same position have to return
/// the same subject, or searches lose their determinism guarantee.
pub trait BiomeLookup: Send + Sync {
    fn biome_at(&self, position: IVec2) -> Subject;
}

/// A biome lookup that returns the same subject everywhere.
#[derive(Debug, Clone)]
pub struct UniformBiomes {
    subject: Subject,
}

impl UniformBiomes {
    pub fn new(subject: Subject) -> Self {
        Self { subject }
    }
}

impl BiomeLookup for UniformBiomes {
    fn biome_at(&self, _position: IVec2) -> Subject {
        self.subject.clone()
    }
}

/// A biome lookup that forwards to a user-provided closure.
pub struct FnBiomes<F>
where
    F: Fn(IVec2) -> Subject + Send + Sync,
{
    f: F,
}

impl<F> FnBiomes<F>
where
    F: Fn(IVec2) -> Subject + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> BiomeLookup for FnBiomes<F>
where
    F: Fn(IVec2) -> Subject + Send + Sync,
{
    fn biome_at(&self, position: IVec2) -> Subject {
        (self.f)(position)
    }
}

/// What a search is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocateTarget {
    /// Any chunk whose selection is a structure.
    Any,
    /// Only chunks whose selection is the given structure.
    Structure(StructureId),
}

impl LocateTarget {
    /// Creates a target for a specific structure.
    pub fn structure(id: impl Into<StructureId>) -> Self {
        Self::Structure(id.into())
    }

    /// True iff a selection of `structure_id` satisfies this target.
    pub fn matches(&self, structure_id: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Structure(id) => id == structure_id,
        }
    }
}

/// Configuration for a ring search.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocateConfig {
    /// Maximum number of matches to return.
    pub max_results: usize,
    /// Chebyshev radius around the start chunk, in chunks.
    pub max_radius: i32,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            max_results: 1,
            max_radius: 100,
        }
    }
}

impl LocateConfig {
    /// Creates the default configuration: one result within 100 chunks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the search radius in chunks.
    pub fn with_max_radius(mut self, max_radius: i32) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig("max_results must be > 0".into()));
        }
        if self.max_radius < 0 {
            return Err(Error::InvalidConfig("max_radius must be >= 0".into()));
        }

        Ok(())
    }
}

/// One structure found by a search.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct LocateMatch {
    /// Selected structure.
    pub structure: StructureId,
    /// Winning chunk hosting the structure.
    pub chunk: ChunkPos,
    /// Reported world position, locate offset included.
    pub position: IVec2,
    /// Euclidean world distance from the start chunk's block center.
    pub distance: f64,
    /// Biome subject sampled at the reported position.
    pub biome: Subject,
}

/// Searches one placement grid for structures from its candidate pool.
pub struct Locator<'a> {
    /// Placement grid being searched.
    pub grid: PlacementGrid,
    /// Candidate pool resolved at each winning chunk.
    pub pool: &'a CandidatePool,
    /// Biome lookup consulted at reported positions.
    pub biomes: &'a dyn BiomeLookup,
}

impl<'a> Locator<'a> {
    pub fn try_new(
        grid: PlacementGrid,
        pool: &'a CandidatePool,
        biomes: &'a dyn BiomeLookup,
    ) -> Result<Self> {
        grid.validate()?;
        pool.validate()?;
        Ok(Self { grid, pool, biomes })
    }

    pub fn new(grid: PlacementGrid, pool: &'a CandidatePool, biomes: &'a dyn BiomeLookup) -> Self {
        debug_assert!(grid.spacing > 0, "spacing must be > 0");
        debug_assert!(!pool.is_empty(), "pool must not be empty");

        Self { grid, pool, biomes }
    }

    /// Finds matching structures around `start`, nearest first.
    ///
    /// Rings of cells are scanned outward until a completed ring leaves at
    /// least `max_results` matches or the radius box is exhausted. Matches are
    /// sorted by distance, with ties broken by chunk x then z, and truncated
    /// to `max_results`. An empty result is a legitimate outcome.
    pub fn find_matches(
        &self,
        start: ChunkPos,
        world_seed: i64,
        target: &LocateTarget,
        config: &LocateConfig,
    ) -> Vec<LocateMatch> {
        let origin = start.block_center();
        let (center_x, center_z) = self.grid.cell_for(start);
        // One ring past the radius box catches winners of partially covered
        // cells.
        let max_ring = config.max_radius / self.grid.spacing + 1;

        let mut matches = Vec::new();
        let mut rings_scanned = 0;
        for radius in 0..=max_ring {
            for (cell_x, cell_z) in ring::ring_cells(center_x, center_z, radius) {
                let chunk = self.grid.winning_chunk_for_cell(cell_x, cell_z, world_seed);
                if start.chebyshev_distance(chunk) > config.max_radius {
                    continue;
                }
                if self.grid.is_excluded(chunk, world_seed) {
                    continue;
                }

                let position = self.grid.world_position_for(chunk);
                let biome = self.biomes.biome_at(position);
                let mut rng = SpreadRandom::for_chunk(world_seed, chunk);
                let Some(candidate) = pick_weighted_random(self.pool, &biome, &mut rng) else {
                    continue;
                };
                let Some(structure) = candidate.structure_id() else {
                    continue;
                };
                if !target.matches(structure) {
                    continue;
                }

                matches.push(LocateMatch {
                    structure: structure.to_owned(),
                    chunk,
                    position,
                    distance: block_distance(position, origin),
                    biome,
                });
            }
            rings_scanned += 1;
            if matches.len() >= config.max_results {
                break;
            }
        }

        debug!(
            "Ring search at ({}, {}) | rings: {} | matches: {}.",
            start.x,
            start.z,
            rings_scanned,
            matches.len()
        );

        matches.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.chunk.x.cmp(&b.chunk.x))
                .then_with(|| a.chunk.z.cmp(&b.chunk.z))
        });
        matches.truncate(config.max_results);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Candidate;
    use crate::rule::WeightTable;

    const WORLD: i64 = 777;

    fn test_grid() -> PlacementGrid {
        PlacementGrid::new(8).with_separation(2).with_salt(3)
    }

    fn anywhere() -> WeightTable {
        WeightTable::new().with_entry("*:*", 1)
    }

    fn village_pool() -> CandidatePool {
        CandidatePool::new().with_candidate(Candidate::structure("village", anywhere()))
    }

    fn mixed_pool() -> CandidatePool {
        CandidatePool::new()
            .with_candidate(Candidate::empty(anywhere()))
            .with_candidate(Candidate::structure("village", anywhere()))
    }

    fn plains() -> UniformBiomes {
        UniformBiomes::new(Subject::new("base:plains"))
    }

    #[test]
    fn matches_come_back_nearest_first() {
        let pool = village_pool();
        let biomes = plains();
        let locator = Locator::try_new(test_grid(), &pool, &biomes).expect("valid locator");
        let config = LocateConfig::new().with_max_results(3).with_max_radius(30);

        let matches =
            locator.find_matches(ChunkPos::new(0, 0), WORLD, &LocateTarget::Any, &config);

        let chunks: Vec<_> = matches.iter().map(|m| m.chunk).collect();
        assert_eq!(
            chunks,
            vec![
                ChunkPos::new(-3, 5),
                ChunkPos::new(6, -3),
                ChunkPos::new(5, 5)
            ]
        );
        let expected = [93.295230, 107.331263, 113.137085];
        for (found, want) in matches.iter().zip(expected) {
            assert!((found.distance - want).abs() < 1e-6, "{}", found.distance);
            assert_eq!(found.structure, "village");
            assert_eq!(found.biome.id, "base:plains");
        }
    }

    #[test]
    fn result_cap_is_checked_after_each_completed_ring() {
        let pool = village_pool();
        let biomes = plains();
        let locator = Locator::new(test_grid(), &pool, &biomes);
        let config = LocateConfig::new().with_max_results(1).with_max_radius(30);

        // The start cell's own winner satisfies the cap, so the search never
        // expands to the ring holding the globally nearer (-3, 5).
        let matches =
            locator.find_matches(ChunkPos::new(0, 0), WORLD, &LocateTarget::Any, &config);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].chunk, ChunkPos::new(5, 5));
    }

    #[test]
    fn target_filters_to_the_requested_structure() {
        let pool = mixed_pool();
        let biomes = plains();
        let locator = Locator::try_new(test_grid(), &pool, &biomes).expect("valid locator");
        let config = LocateConfig::new().with_max_results(3).with_max_radius(30);

        let matches = locator.find_matches(
            ChunkPos::new(0, 0),
            WORLD,
            &LocateTarget::structure("village"),
            &config,
        );

        let chunks: Vec<_> = matches.iter().map(|m| m.chunk).collect();
        assert_eq!(
            chunks,
            vec![
                ChunkPos::new(-3, 10),
                ChunkPos::new(6, 9),
                ChunkPos::new(12, -3)
            ]
        );
        let expected = [167.044904, 173.066461, 197.909070];
        for (found, want) in matches.iter().zip(expected) {
            assert!((found.distance - want).abs() < 1e-6, "{}", found.distance);
        }
    }

    #[test]
    fn radius_box_bounds_every_match() {
        let pool = village_pool();
        let biomes = plains();
        let locator = Locator::new(test_grid(), &pool, &biomes);
        let config = LocateConfig::new().with_max_results(16).with_max_radius(10);

        let start = ChunkPos::new(0, 0);
        let matches = locator.find_matches(start, WORLD, &LocateTarget::Any, &config);

        assert_eq!(matches.len(), 6);
        for pair in matches.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        for found in &matches {
            assert!(start.chebyshev_distance(found.chunk) <= 10);
        }
    }

    #[test]
    fn absent_structure_yields_no_matches() {
        let pool = village_pool();
        let biomes = plains();
        let locator = Locator::new(test_grid(), &pool, &biomes);
        let config = LocateConfig::new().with_max_results(4).with_max_radius(40);

        let matches = locator.find_matches(
            ChunkPos::new(0, 0),
            WORLD,
            &LocateTarget::structure("stronghold"),
            &config,
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn searches_are_deterministic() {
        let pool = mixed_pool();
        let biomes = plains();
        let locator = Locator::new(test_grid(), &pool, &biomes);
        let config = LocateConfig::new().with_max_results(8).with_max_radius(50);

        let first =
            locator.find_matches(ChunkPos::new(-9, 14), WORLD, &LocateTarget::Any, &config);
        let second =
            locator.find_matches(ChunkPos::new(-9, 14), WORLD, &LocateTarget::Any, &config);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn biome_rules_gate_matches() {
        let pool = CandidatePool::new().with_candidate(Candidate::structure(
            "village",
            WeightTable::new().with_entry("#biome:plains", 1),
        ));
        let config = LocateConfig::new().with_max_results(2).with_max_radius(30);

        let tagged = UniformBiomes::new(Subject::new("base:meadow").with_tag("biome:plains"));
        let locator = Locator::new(test_grid(), &pool, &tagged);
        let matches =
            locator.find_matches(ChunkPos::new(0, 0), WORLD, &LocateTarget::Any, &config);
        assert!(!matches.is_empty());

        let untagged = FnBiomes::new(|_| Subject::new("base:desert"));
        let locator = Locator::new(test_grid(), &pool, &untagged);
        let matches =
            locator.find_matches(ChunkPos::new(0, 0), WORLD, &LocateTarget::Any, &config);
        assert!(matches.is_empty());
    }

    #[test]
    fn reported_positions_include_the_locate_offset() {
        let pool = village_pool();
        let biomes = plains();
        let grid = test_grid().with_locate_offset(IVec2::new(4, -4));
        let locator = Locator::new(grid, &pool, &biomes);
        let config = LocateConfig::new().with_max_results(1).with_max_radius(30);

        let matches =
            locator.find_matches(ChunkPos::new(0, 0), WORLD, &LocateTarget::Any, &config);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].chunk, ChunkPos::new(5, 5));
        assert_eq!(matches[0].position, IVec2::new(92, 84));

        let expected = (84.0f64 * 84.0 + 76.0 * 76.0).sqrt();
        assert!((matches[0].distance - expected).abs() < 1e-9);
    }

    #[test]
    fn config_validation_rejects_bad_values() {
        assert!(LocateConfig::new().validate().is_ok());
        assert!(LocateConfig::new().with_max_results(0).validate().is_err());
        assert!(LocateConfig::new().with_max_radius(-1).validate().is_err());
        assert!(LocateConfig::new().with_max_radius(0).validate().is_ok());
    }
}

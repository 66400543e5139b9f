//! Selection of a candidate from a pool.
//!
//! This module provides helpers to pick a candidate for a chunk:
//! - [pick_weighted_random]: draws proportionally to each eligible candidate's
//!   resolved weight for a subject.
//! - [pick_for_chunk]: the generation-hook entry point, gating on
//!   [crate::placement::PlacementGrid] before drawing with the chunk's own
//!   deterministic source.
//!
//! Eligibility comes from resolving each candidate's [crate::rule::WeightTable]
//! against the subject with a default of zero; candidates that resolve to zero
//! never participate. When randomness is required, pass an RNG that implements
//! [rand::RngCore].
use rand::RngCore;
use tracing::warn;

use crate::chunk::ChunkPos;
use crate::placement::PlacementGrid;
use crate::pool::{Candidate, CandidatePool};
use crate::random::SpreadRandom;
use crate::rule::Subject;

/// Pool shape observed during one selection.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Candidates in the pool before eligibility filtering.
    pub pool_size: usize,
    /// Candidates whose resolved weight was positive.
    pub eligible: usize,
    /// Sum of resolved weights over eligible candidates.
    pub total_weight: u64,
}

/// Draws one candidate proportionally to resolved weights, or `None` when no
/// candidate is eligible for the subject.
pub fn pick_weighted_random<'a, R>(
    pool: &'a CandidatePool,
    subject: &Subject,
    rng: &mut R,
) -> Option<&'a Candidate>
where
    R: RngCore + ?Sized,
{
    pick_weighted_random_with_stats(pool, subject, rng).0
}

/// [pick_weighted_random] plus the [`SelectionStats`] observed on the way.
///
/// The stats never influence the draw; both entry points select identically
/// for the same rng state.
pub fn pick_weighted_random_with_stats<'a, R>(
    pool: &'a CandidatePool,
    subject: &Subject,
    rng: &mut R,
) -> (Option<&'a Candidate>, SelectionStats)
where
    R: RngCore + ?Sized,
{
    let eligible: Vec<(&Candidate, u64)> = pool
        .candidates
        .iter()
        .filter_map(|candidate| {
            let weight = candidate.weights.resolve(subject, 0);
            (weight > 0).then_some((candidate, u64::from(weight)))
        })
        .collect();

    let total_weight: u64 = eligible.iter().map(|(_, weight)| weight).sum();
    let stats = SelectionStats {
        pool_size: pool.len(),
        eligible: eligible.len(),
        total_weight,
    };

    if eligible.is_empty() {
        return (None, stats);
    }
    if total_weight == 0 {
        // Degenerate case: select uniformly instead of refusing.
        warn!(
            "Eligible weights sum to zero | eligible: {} | picking uniformly.",
            eligible.len()
        );
        let index = (rng.next_u64() % eligible.len() as u64) as usize;
        return (Some(eligible[index].0), stats);
    }

    let mut roll = rng.next_u64() % total_weight;
    for &(candidate, weight) in &eligible {
        if roll < weight {
            return (Some(candidate), stats);
        }
        roll -= weight;
    }

    (eligible.first().map(|(candidate, _)| *candidate), stats)
}

/// Generation-hook entry point: placement gate plus per-chunk draw.
///
/// Returns `None` when the chunk is not its cell's winning chunk, when the
/// grid is excluded there, or when no candidate is eligible for the subject.
/// Offline prediction reuses exactly this path, so live worlds and tooling
/// agree on every decision.
pub fn pick_for_chunk<'a>(
    grid: &PlacementGrid,
    pool: &'a CandidatePool,
    subject: &Subject,
    world_seed: i64,
    chunk: ChunkPos,
) -> Option<&'a Candidate> {
    pick_for_chunk_with_stats(grid, pool, subject, world_seed, chunk).0
}

/// [`pick_for_chunk`] plus the [`SelectionStats`] of the draw.
///
/// A chunk that fails the placement gate reports the pool size with zero
/// eligible candidates.
pub fn pick_for_chunk_with_stats<'a>(
    grid: &PlacementGrid,
    pool: &'a CandidatePool,
    subject: &Subject,
    world_seed: i64,
    chunk: ChunkPos,
) -> (Option<&'a Candidate>, SelectionStats) {
    if !grid.is_winning_chunk(chunk, world_seed) {
        let stats = SelectionStats {
            pool_size: pool.len(),
            ..Default::default()
        };
        return (None, stats);
    }
    let mut rng = SpreadRandom::for_chunk(world_seed, chunk);
    pick_weighted_random_with_stats(pool, subject, &mut rng)
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structure_spread::prelude::*;
use structure_spread_examples::{init_tracing, ChunkMap, MapConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let world_seed = 98765;
    let keep_out = PlacementGrid::new(24).with_separation(6).with_salt(165745296);
    let dense = PlacementGrid::new(6)
        .with_separation(2)
        .with_salt(14357617)
        .with_exclusion(ExclusionZone::new(keep_out.clone(), 6));
    dense.validate()?;

    let radius = 72;
    let mut map = ChunkMap::new(
        MapConfig::new(radius)
            .with_chunk_px(4)
            .with_grid_lines([38, 40, 48], dense.spacing),
    );

    // Dense winners in blue, vetoed candidates as red outlines, keep-out
    // winners in amber.
    let mut placed = 0usize;
    let mut vetoed = 0usize;
    for cell_x in -12..=11 {
        for cell_z in -12..=11 {
            let candidate = dense.winning_chunk_for_cell(cell_x, cell_z, world_seed);
            if dense.is_excluded(candidate, world_seed) {
                map.outline_chunk(candidate, [220, 80, 70]);
                vetoed += 1;
            } else {
                map.fill_chunk(candidate, [110, 170, 250]);
                placed += 1;
            }
        }
    }
    for cell_x in -3..=2 {
        for cell_z in -3..=2 {
            let winner = keep_out.winning_chunk_for_cell(cell_x, cell_z, world_seed);
            map.fill_chunk(winner, [250, 180, 70]);
        }
    }
    info!("{placed} dense winners placed, {vetoed} vetoed by the keep-out grid.");

    // Spot-check a few random probes the way a feature generator would.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let probe = ChunkPos::new(
            rng.random_range(-radius..=radius),
            rng.random_range(-radius..=radius),
        );
        let blocked = keep_out.has_winner_in_range(probe, 6, world_seed);
        info!(
            "Probe ({}, {}) | keep-out winner within 6 chunks: {}.",
            probe.x, probe.z, blocked
        );
    }

    map.save("exclusion-zones.png")?;
    Ok(())
}

use glam::IVec2;
use structure_spread::prelude::*;
use structure_spread_examples::{init_tracing, ChunkMap, MapConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let world_seed = 8675309;
    let grid = PlacementGrid::new(32)
        .with_separation(8)
        .with_salt(10387312)
        .with_spread(Spread::Triangular)
        .with_locate_offset(IVec2::new(8, 8));

    let pool = CandidatePool::new()
        .with_candidate(Candidate::structure(
            "base:village",
            WeightTable::new()
                .with_entry("#biome:is_plains", 10)
                .with_entry("#biome:is_desert", 4),
        ))
        .with_candidate(Candidate::structure(
            "base:outpost",
            WeightTable::new().with_entry("*:*", 2),
        ))
        .with_candidate(Candidate::empty(WeightTable::new().with_entry("*:*", 6)));

    // Checkerboard of plains and desert provinces, 256 blocks on a side.
    let biomes = FnBiomes::new(|position: IVec2| {
        let province = (position.x.div_euclid(256) + position.y.div_euclid(256)).rem_euclid(2);
        if province == 0 {
            Subject::new("base:plains").with_tag("biome:is_plains")
        } else {
            Subject::new("base:desert").with_tag("biome:is_desert")
        }
    });

    let locator = Locator::try_new(grid.clone(), &pool, &biomes)?;
    let config = LocateConfig::new().with_max_results(5).with_max_radius(200);

    let start = ChunkPos::new(0, 0);
    let matches = locator.find_matches(
        start,
        world_seed,
        &LocateTarget::structure("base:village"),
        &config,
    );
    for found in &matches {
        info!(
            "{} at chunk ({}, {}) | position ({}, {}) | distance {:.1} | biome {}.",
            found.structure,
            found.chunk.x,
            found.chunk.z,
            found.position.x,
            found.position.y,
            found.distance,
            found.biome.id
        );
    }

    // Winners in gray, village matches in green, the start chunk in white.
    let mut map = ChunkMap::new(
        MapConfig::new(96)
            .with_chunk_px(5)
            .with_grid_lines([40, 44, 54], grid.spacing),
    );
    for cell_x in -4..=3 {
        for cell_z in -4..=3 {
            let winner = grid.winning_chunk_for_cell(cell_x, cell_z, world_seed);
            map.fill_chunk(winner, [110, 110, 120]);
        }
    }
    for found in &matches {
        map.fill_chunk(found.chunk, [90, 200, 90]);
        map.outline_chunk(found.chunk, [240, 240, 240]);
    }
    map.fill_chunk(start, [250, 250, 250]);
    map.save("locate-nearest-structure.png")?;

    Ok(())
}

use structure_spread::prelude::*;
use structure_spread_examples::{init_tracing, ChunkMap, MapConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let world_seed = 424242;
    let spreads = [
        (Spread::Linear, "linear"),
        (Spread::Triangular, "triangular"),
        (Spread::Gaussian, "gaussian"),
        (Spread::EdgeBiased, "edge_biased"),
        (Spread::CornerBiased, "corner_biased"),
        (Spread::FixedCenter, "fixed_center"),
    ];

    // One map per spread over the same seed makes the in-cell bias visible:
    // compare how winners cluster toward centers, edges, or corners.
    for (spread, name) in spreads {
        let grid = PlacementGrid::new(16).with_separation(4).with_spread(spread);
        let mut map = ChunkMap::new(
            MapConfig::new(96)
                .with_chunk_px(3)
                .with_background([18, 20, 26])
                .with_grid_lines([36, 40, 50], grid.spacing),
        );

        let mut winners = 0usize;
        for cell_x in -6..6 {
            for cell_z in -6..6 {
                let winner = grid.winning_chunk_for_cell(cell_x, cell_z, world_seed);
                map.fill_chunk(winner, [120, 190, 255]);
                winners += 1;
            }
        }

        let path = format!("placement-density-{name}.png");
        map.save(&path)?;
        info!("{winners} winners rendered to {path}.");
    }

    Ok(())
}

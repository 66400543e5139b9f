//! Square-ring cell enumeration for outward searches.

/// Cells at exact Chebyshev distance `radius` from the center cell.
///
/// Radius zero (or below) yields the center itself. Rows are emitted before
/// the side columns; within a row or column, coordinates ascend.
pub(crate) fn ring_cells(center_x: i32, center_z: i32, radius: i32) -> Vec<(i32, i32)> {
    if radius <= 0 {
        return vec![(center_x, center_z)];
    }
    let mut cells = Vec::with_capacity(8 * radius as usize);
    for x in (center_x - radius)..=(center_x + radius) {
        cells.push((x, center_z - radius));
        cells.push((x, center_z + radius));
    }
    for z in (center_z - radius + 1)..(center_z + radius) {
        cells.push((center_x - radius, z));
        cells.push((center_x + radius, z));
    }
    cells
}

//! Spread distributions shaping where a cell's winner lands.
use crate::random::SpreadRandom;

/// How winning chunks distribute inside their grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Spread {
    /// Uniform over the cell.
    #[default]
    Linear,
    /// Mean of two draws; mass leans toward the cell center.
    Triangular,
    /// Mean of four draws; tighter center bias.
    Gaussian,
    /// Mass pushed toward both edges of each axis.
    EdgeBiased,
    /// The edge push applied twice, concentrating mass at cell corners.
    CornerBiased,
    /// Always the exact cell center; consumes no draws.
    FixedCenter,
}

impl Spread {
    /// Samples one axis offset within the cell's free span.
    ///
    /// The draw count per axis is fixed per variant, keeping x and z offsets
    /// aligned with the host generator's draw order. All transforms are
    /// algebraic so results are bit-identical across platforms.
    pub fn sample_offset(self, rng: &mut SpreadRandom, range: f64) -> f64 {
        match self {
            Spread::Linear => rng.next_fraction() * range,
            Spread::Triangular => (rng.next_fraction() + rng.next_fraction()) / 2.0 * range,
            Spread::Gaussian => {
                (rng.next_fraction()
                    + rng.next_fraction()
                    + rng.next_fraction()
                    + rng.next_fraction())
                    / 4.0
                    * range
            }
            Spread::EdgeBiased => edge_push(rng.next_fraction()) * range,
            Spread::CornerBiased => edge_push(edge_push(rng.next_fraction())) * range,
            Spread::FixedCenter => range / 2.0,
        }
    }
}

/// Piecewise-quadratic map pushing a uniform fraction toward 0 and 1.
fn edge_push(fraction: f64) -> f64 {
    if fraction < 0.5 {
        2.0 * fraction * fraction
    } else {
        1.0 - 2.0 * (1.0 - fraction) * (1.0 - fraction)
    }
}

//! Weight normalization across structure groups of different sizes.
//!
//! Packs that add many structures to one group dilute each authored weight,
//! and grids spaced wider than the baseline produce fewer winners per area.
//! Normalization rescales every weight class in a group so the group's
//! average lands on a configured target, discounted by how much rarer the
//! group's spacing makes each placement.
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};

/// Tuning for [`normalize_with_spacing`].
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeConfig {
    /// Average weight a group is rescaled to.
    pub target_average: f64,
    /// Upper bound on the rarity discount.
    pub rarity_cap: f64,
    /// Spacing the target average is calibrated against, in chunks.
    pub baseline_spacing: i32,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            target_average: 10.0,
            rarity_cap: 10.0,
            baseline_spacing: 34,
        }
    }
}

impl NormalizeConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target average weight.
    pub fn with_target_average(mut self, target_average: f64) -> Self {
        self.target_average = target_average;
        self
    }

    /// Sets the rarity discount cap.
    pub fn with_rarity_cap(mut self, rarity_cap: f64) -> Self {
        self.rarity_cap = rarity_cap;
        self
    }

    /// Sets the baseline spacing in chunks.
    pub fn with_baseline_spacing(mut self, baseline_spacing: i32) -> Self {
        self.baseline_spacing = baseline_spacing;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.target_average.is_finite() || self.target_average <= 0.0 {
            return Err(Error::InvalidConfig(
                "target_average must be finite and > 0".into(),
            ));
        }
        if !self.rarity_cap.is_finite() || self.rarity_cap < 1.0 {
            return Err(Error::InvalidConfig(
                "rarity_cap must be finite and >= 1".into(),
            ));
        }
        if self.baseline_spacing <= 0 {
            return Err(Error::InvalidConfig("baseline_spacing must be > 0".into()));
        }

        Ok(())
    }
}

/// Normalizes a baseline-spacing group with the default configuration.
///
/// See [`normalize_with_spacing`].
pub fn normalize(group: &[(u32, usize)]) -> BTreeMap<u32, u32> {
    normalize_with_spacing(group, None, &NormalizeConfig::default())
}

/// Rescales a group of weight classes to the configured target average.
///
/// `group` pairs each distinct authored weight with how many entries carry
/// it. `spacing` is the group's grid spacing; `None` marks the baseline
/// group whose authored weights are taken as already calibrated. Returns a
/// map from each input weight class to its rescaled weight, every entry at
/// least 1. Relative ratios inside the group are preserved up to rounding.
///
/// An empty group, or one whose weights sum to zero, yields an empty map.
pub fn normalize_with_spacing(
    group: &[(u32, usize)],
    spacing: Option<i32>,
    config: &NormalizeConfig,
) -> BTreeMap<u32, u32> {
    let total_count: usize = group.iter().map(|(_, count)| count).sum();
    let total_weight: u64 = group
        .iter()
        .map(|(weight, count)| u64::from(*weight) * *count as u64)
        .sum();
    if total_count == 0 || total_weight == 0 {
        return BTreeMap::new();
    }

    let original_average = total_weight as f64 / total_count as f64;
    let rarity_factor = match spacing {
        Some(spacing) => {
            let ratio = f64::from(spacing) / f64::from(config.baseline_spacing);
            (ratio * ratio).min(config.rarity_cap)
        }
        None => 1.0,
    };
    let multiplier = config.target_average / original_average / rarity_factor;

    debug!(
        "Normalizing {} weight classes | average: {:.3} | rarity: {:.3} | multiplier: {:.3}.",
        group.len(),
        original_average,
        rarity_factor,
        multiplier
    );

    let mut normalized = BTreeMap::new();
    for (weight, _) in group {
        normalized
            .entry(*weight)
            .or_insert_with(|| (f64::from(*weight) * multiplier).ceil().max(1.0) as u32);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> Vec<(u32, usize)> {
        vec![(10, 2), (4, 2), (1, 1)]
    }

    #[test]
    fn baseline_group_rescales_to_the_target_average() {
        let normalized = normalize(&sample_group());
        // Average 5.8 against target 10, multiplier ~1.724.
        let expected: BTreeMap<u32, u32> = [(1, 2), (4, 7), (10, 18)].into_iter().collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn wider_spacing_discounts_the_group() {
        let config = NormalizeConfig::default();
        let normalized = normalize_with_spacing(&sample_group(), Some(68), &config);
        // Spacing ratio 2 squares to a rarity factor of 4.
        let expected: BTreeMap<u32, u32> = [(1, 1), (4, 2), (10, 5)].into_iter().collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn rarity_discount_is_capped() {
        let config = NormalizeConfig::default();
        let normalized = normalize_with_spacing(&sample_group(), Some(340), &config);
        // Ratio 10 squares to 100 but the cap holds it at 10.
        let expected: BTreeMap<u32, u32> = [(1, 1), (4, 1), (10, 2)].into_iter().collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn baseline_spacing_equals_no_spacing() {
        let config = NormalizeConfig::default();
        assert_eq!(
            normalize_with_spacing(&sample_group(), Some(34), &config),
            normalize_with_spacing(&sample_group(), None, &config)
        );
    }

    #[test]
    fn empty_and_zero_weight_groups_yield_empty_maps() {
        assert!(normalize(&[]).is_empty());
        assert!(normalize(&[(0, 3)]).is_empty());
    }

    #[test]
    fn rescaled_weights_never_drop_to_zero() {
        let config = NormalizeConfig::new().with_target_average(0.1);
        let normalized = normalize_with_spacing(&[(1, 1)], None, &config);
        let expected: BTreeMap<u32, u32> = [(1, 1)].into_iter().collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn duplicate_weight_classes_collapse_to_one_entry() {
        // Average (5 + 10) / 3 = 5, multiplier 2.
        let normalized = normalize(&[(5, 1), (5, 2)]);
        let expected: BTreeMap<u32, u32> = [(5, 10)].into_iter().collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn ratios_survive_rescaling_up_to_rounding() {
        let normalized = normalize(&[(20, 1), (10, 1), (5, 1), (1, 1)]);
        let twenty = normalized[&20] as f64;
        let ten = normalized[&10] as f64;
        assert!((twenty / ten - 2.0).abs() < 0.1);
    }

    #[test]
    fn validation_rejects_bad_tuning() {
        assert!(NormalizeConfig::new().validate().is_ok());
        assert!(NormalizeConfig::new().with_target_average(0.0).validate().is_err());
        assert!(NormalizeConfig::new().with_target_average(f64::NAN).validate().is_err());
        assert!(NormalizeConfig::new().with_rarity_cap(0.5).validate().is_err());
        assert!(NormalizeConfig::new().with_baseline_spacing(0).validate().is_err());
    }
}

use structure_spread::prelude::*;
use structure_spread_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Authored weights of three structure groups, as (weight, count) classes.
    let base_group = [(10, 2), (4, 2), (1, 1)];
    let sprawling_pack = [(2000, 3), (500, 5), (100, 12)];
    let rare_pack = [(3, 1), (1, 2)];

    let config = NormalizeConfig::new();
    config.validate()?;

    report("base", &base_group, None, &config);
    report("sprawling_pack", &sprawling_pack, Some(34), &config);
    report("rare_pack", &rare_pack, Some(96), &config);

    // A tighter cap keeps very wide grids from flattening to all ones.
    let tight = NormalizeConfig::new().with_rarity_cap(4.0);
    report("rare_pack/tight_cap", &rare_pack, Some(96), &tight);

    Ok(())
}

fn report(label: &str, group: &[(u32, usize)], spacing: Option<i32>, config: &NormalizeConfig) {
    let normalized = normalize_with_spacing(group, spacing, config);
    for (weight, count) in group {
        info!(
            "{label}: weight {weight} x{count} -> {}.",
            normalized.get(weight).copied().unwrap_or(*weight)
        );
    }
}

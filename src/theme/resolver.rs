use crate::domain::palette::{LevelTier, Palette, ProfileCardConfig};

/// Picks the palette for a simulated level.
///
/// Tiers are scanned from the highest threshold down and the first one whose
/// threshold is at or below `level` wins. Tiers sharing a threshold keep
/// their document order (stable sort), so the earlier one wins. With no
/// matching tier the default palette is used, which may itself be absent.
pub fn resolve_palette(level: u32, config: Option<&ProfileCardConfig>) -> Option<&Palette> {
    let config = config?;

    let mut tiers: Vec<&LevelTier> = config.tiers().iter().collect();
    tiers.sort_by(|a, b| b.level.total_cmp(&a.level));

    tiers
        .into_iter()
        .find(|tier| f64::from(level) >= tier.level)
        .map(|tier| &tier.palette)
        .or(config.default_palette.as_ref())
}

use crate::core::contract::HedgeContract;
use rust_decimal::Decimal;

/// Fixed palette of display colors assigned to baseline rates.
pub const COLOR_PALETTE: [&str; 8] = [
    "#3B82F6", // Blue
    "#10B981", // Green
    "#F59E0B", // Yellow
    "#EF4444", // Red
    "#8B5CF6", // Purple
    "#06B6D4", // Cyan
    "#84CC16", // Lime
    "#F97316", // Orange
];

/// Pick a consistent color for a baseline rate.
///
/// Contracts sharing a baseline share its color. A new baseline takes the
/// first palette color not used by any currently-held contract; once the
/// palette is exhausted, colors cycle by position.
pub fn color_for_baseline(baseline_rate: Decimal, existing: &[HedgeContract]) -> String {
    if let Some(contract) = existing.iter().find(|c| c.baseline_rate() == baseline_rate) {
        return contract.color().to_string();
    }

    COLOR_PALETTE
        .iter()
        .find(|color| !existing.iter().any(|c| c.color() == **color))
        .copied()
        .map(|color| color.to_string())
        .unwrap_or_else(|| COLOR_PALETTE[existing.len() % COLOR_PALETTE.len()].to_string())
}

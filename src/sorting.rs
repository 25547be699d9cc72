//! Deterministic ordering of plan results.

use std::cmp::Ordering;

use crate::models::ProductionNode;

/// Sorts nodes by depth, then output item, then `used_for`, then target rate.
///
/// The sort is stable, so nodes equal on all four keys keep their relative
/// order. Works on raw and aggregated sequences alike.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dsp_planner::models::ProductionNode;
/// use dsp_planner::sorting::sort_nodes;
///
/// let node = |item: &str, depth: u32| ProductionNode {
///     output_item: item.to_string(),
///     facility: "Smelting facility".to_string(),
///     facilities_needed: 1.0,
///     input_rates: BTreeMap::new(),
///     craft_time_seconds: 1.0,
///     target_rate_per_second: 1.0,
///     used_for: String::new(),
///     depth,
/// };
///
/// let mut nodes = vec![node("Magnet", 2), node("Iron ingot", 2), node("Magnetic coil", 1)];
/// sort_nodes(&mut nodes);
///
/// let order: Vec<&str> = nodes.iter().map(|n| n.output_item.as_str()).collect();
/// assert_eq!(order, ["Magnetic coil", "Iron ingot", "Magnet"]);
/// ```
pub fn sort_nodes(nodes: &mut [ProductionNode]) {
    nodes.sort_by(compare_nodes);
}

/// The comparator used by [`sort_nodes`].
pub fn compare_nodes(a: &ProductionNode, b: &ProductionNode) -> Ordering {
    a.depth
        .cmp(&b.depth)
        .then_with(|| a.output_item.cmp(&b.output_item))
        .then_with(|| a.used_for.cmp(&b.used_for))
        .then_with(|| a.target_rate_per_second.total_cmp(&b.target_rate_per_second))
}

//! Folding duplicate demands into one entry per item.
//!
//! An expansion usually visits shared intermediates (gears, circuit boards,
//! ingots) many times, once per parent that needs them. [`combine`] merges
//! those visits so each item appears once with its total demand.
//!
//! Sums and the maximum depth do not depend on the order nodes are folded
//! in. The weighted craft time and the `used_for` text do, so callers that
//! need reproducible output should fold a sorted sequence.

use std::collections::HashMap;

use crate::expansion::finite_or_zero;
use crate::models::{AggregatedNode, ProductionNode};

/// Merges nodes that share an `output_item`.
///
/// Entries are returned in the order their item first appears in `nodes`.
/// Sort the result with [`sort_nodes`](crate::sorting::sort_nodes) before
/// presenting it.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dsp_planner::aggregation::combine;
/// use dsp_planner::models::ProductionNode;
///
/// let gear = |used_for: &str, rate: f64| ProductionNode {
///     output_item: "Gear".to_string(),
///     facility: "Assembling machine".to_string(),
///     facilities_needed: rate,
///     input_rates: BTreeMap::from([("Iron ingot".to_string(), rate)]),
///     craft_time_seconds: 1.0,
///     target_rate_per_second: rate,
///     used_for: used_for.to_string(),
///     depth: 2,
/// };
///
/// let merged = combine(vec![gear("Electric motor", 1.0), gear("Conveyor belt MK.I", 0.5)]);
///
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].facilities_needed, 1.5);
/// assert_eq!(
///     merged[0].used_for,
///     "Electric motor (Uses 1.00/s) | Conveyor belt MK.I (Uses 0.50/s)"
/// );
/// ```
pub fn combine(nodes: Vec<ProductionNode>) -> Vec<AggregatedNode> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<AggregatedNode> = Vec::new();

    for node in nodes {
        match index.get(&node.output_item).copied() {
            Some(i) => merge_into(&mut merged[i], node),
            None => {
                index.insert(node.output_item.clone(), merged.len());
                merged.push(first_entry(node));
            }
        }
    }

    merged
}

fn first_entry(mut node: ProductionNode) -> AggregatedNode {
    if !node.used_for.is_empty() {
        node.used_for = annotate(&node.used_for, node.target_rate_per_second);
    }
    node
}

fn merge_into(acc: &mut AggregatedNode, node: ProductionNode) {
    let old_count = acc.facilities_needed;
    let new_count = node.facilities_needed;

    for (input, rate) in &node.input_rates {
        *acc.input_rates.entry(input.clone()).or_insert(0.0) += rate;
    }

    let weighted = acc.craft_time_seconds * old_count + node.craft_time_seconds * new_count;
    acc.craft_time_seconds = finite_or_zero(weighted / (old_count + new_count));
    acc.target_rate_per_second += node.target_rate_per_second;
    acc.used_for = format!(
        "{} | {}",
        acc.used_for,
        annotate(&node.used_for, node.target_rate_per_second)
    );
    acc.facilities_needed = old_count + new_count;
    acc.depth = acc.depth.max(node.depth);
}

fn annotate(label: &str, rate: f64) -> String {
    format!("{} (Uses {:.2}/s)", label, rate)
}

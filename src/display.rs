//! Display and formatting utilities.
//!
//! This module renders plans as an indented text table for the terminal, or
//! as pretty-printed JSON for other tools to consume.

use std::collections::BTreeMap;

use crate::models::ProductionNode;

/// Formats a per-second rate with two decimals.
///
/// # Example
///
/// ```
/// use dsp_planner::display::format_rate;
///
/// assert_eq!(format_rate(0.5), "0.50/s");
/// assert_eq!(format_rate(12.0), "12.00/s");
/// ```
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}/s", rate)
}

/// Renders a plan as a text table, one line per node plus one line per
/// input, indented by depth.
///
/// Nodes are printed in the order given; sort them first.
///
/// # Arguments
///
/// * `nodes` - The plan to render, already sorted
///
/// # Returns
///
/// The table as a newline-terminated string, empty when `nodes` is empty.
/// Indentation is relative to the shallowest node.
pub fn render_table(nodes: &[ProductionNode]) -> String {
    let mut out = String::new();
    let base_depth = nodes.iter().map(|n| n.depth).min().unwrap_or(0);

    for node in nodes {
        let indent = "  ".repeat((node.depth - base_depth) as usize);
        out.push_str(&format!(
            "{}{} @ {}  [{:.2}x {}, {}s/craft]\n",
            indent,
            node.output_item,
            format_rate(node.target_rate_per_second),
            node.facilities_needed,
            node.facility,
            node.craft_time_seconds
        ));
        for (input, rate) in &node.input_rates {
            out.push_str(&format!("{}    <- {} @ {}\n", indent, input, format_rate(*rate)));
        }
        if !node.used_for.is_empty() {
            out.push_str(&format!("{}    for {}\n", indent, node.used_for));
        }
    }

    out
}

/// Displays a plan to stdout with a short header and totals per facility.
///
/// # Arguments
///
/// * `item` - The requested item, shown in the header
/// * `rate` - The requested rate in items per second
/// * `nodes` - The plan to display
pub fn display_plan(item: &str, rate: f64, nodes: &[ProductionNode]) {
    println!();
    println!("[PRODUCTION CHAIN] {} @ {}", item, format_rate(rate));
    println!("----------------------------------------------------------------");

    if nodes.is_empty() {
        println!("  No recipe found for '{}'; it is a raw material.", item);
        println!();
        return;
    }

    print!("{}", render_table(nodes));

    println!();
    println!("[FACILITIES]");
    println!("----------------------------------------------------------------");
    for (facility, count) in facility_totals(nodes) {
        println!("  {:<30} {:>10.2}", facility, count);
    }
    println!();
}

/// Sums `facilities_needed` per facility type, sorted by facility name.
pub fn facility_totals(nodes: &[ProductionNode]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for node in nodes {
        *totals.entry(node.facility.clone()).or_default() += node.facilities_needed;
    }
    totals.into_iter().collect()
}

/// Serializes a plan as indented JSON.
pub fn to_json(nodes: &[ProductionNode]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}

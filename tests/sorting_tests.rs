//! Tests for deterministic result ordering.

use std::collections::BTreeMap;

use dsp_planner::models::ProductionNode;
use dsp_planner::sorting::sort_nodes;

fn node(item: &str, used_for: &str, rate: f64, depth: u32, facility: &str) -> ProductionNode {
    ProductionNode {
        output_item: item.to_string(),
        facility: facility.to_string(),
        facilities_needed: 1.0,
        input_rates: BTreeMap::new(),
        craft_time_seconds: 1.0,
        target_rate_per_second: rate,
        used_for: used_for.to_string(),
        depth,
    }
}

fn keys(nodes: &[ProductionNode]) -> Vec<(u32, &str, &str, f64)> {
    nodes
        .iter()
        .map(|n| (n.depth, n.output_item.as_str(), n.used_for.as_str(), n.target_rate_per_second))
        .collect()
}

#[test]
fn test_sort_priority() {
    let mut nodes = vec![
        node("Gear", "Electric motor", 2.0, 3, "A"),
        node("Gear", "Conveyor belt MK.I", 1.0, 3, "A"),
        node("Iron ingot", "Gear", 1.0, 2, "A"),
        node("Gear", "Electric motor", 0.5, 3, "A"),
        node("Conveyor belt MK.II", "", 1.0, 1, "A"),
        node("Copper ingot", "Magnetic coil", 1.0, 3, "A"),
    ];

    sort_nodes(&mut nodes);

    assert_eq!(
        keys(&nodes),
        vec![
            (1, "Conveyor belt MK.II", "", 1.0),
            (2, "Iron ingot", "Gear", 1.0),
            (3, "Copper ingot", "Magnetic coil", 1.0),
            (3, "Gear", "Conveyor belt MK.I", 1.0),
            (3, "Gear", "Electric motor", 0.5),
            (3, "Gear", "Electric motor", 2.0),
        ]
    );
}

#[test]
fn test_sort_is_byte_order_on_names() {
    let mut nodes = vec![node("gear", "", 1.0, 1, "A"), node("Magnet", "", 1.0, 1, "A")];

    sort_nodes(&mut nodes);

    // Uppercase sorts before lowercase
    assert_eq!(nodes[0].output_item, "Magnet");
}

#[test]
fn test_sort_is_stable_on_full_ties() {
    let mut nodes = vec![
        node("Gear", "Electric motor", 1.0, 2, "first"),
        node("Gear", "Electric motor", 1.0, 2, "second"),
        node("Gear", "Electric motor", 1.0, 1, "root"),
        node("Gear", "Electric motor", 1.0, 2, "third"),
    ];

    sort_nodes(&mut nodes);

    let facilities: Vec<&str> = nodes.iter().map(|n| n.facility.as_str()).collect();
    assert_eq!(facilities, ["root", "first", "second", "third"]);
}

#[test]
fn test_sort_twice_is_identical() {
    let nodes = vec![
        node("Magnet", "Magnetic coil", 1.0, 3, "x"),
        node("Magnet", "Magnetic coil", 1.0, 3, "y"),
        node("Copper ingot", "Magnetic coil", 0.5, 3, "z"),
        node("Magnetic coil", "Electric motor", 1.0, 2, "w"),
    ];

    let mut first = nodes.clone();
    let mut second = nodes;
    sort_nodes(&mut first);
    sort_nodes(&mut second);
    assert_eq!(first, second);

    // Sorting an already sorted sequence changes nothing
    let mut again = first.clone();
    sort_nodes(&mut again);
    assert_eq!(again, first);
}

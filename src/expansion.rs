//! Recursive expansion of a production request.
//!
//! Starting from a root item and a target rate, the engine walks the recipe
//! catalog depth-first and emits one [`ProductionNode`] per visited step, in
//! pre-order: a node always comes before all of its descendants.
//!
//! Two outcomes end a branch without being errors:
//!
//! - the item has no recipe (a raw material), or
//! - the item already appears on the path from the root (a cycle).
//!
//! Cycle detection is path-relative. An item may appear under several sibling
//! branches; it is only cut off when it would repeat one of its own ancestors.

use std::collections::HashSet;

use tracing::trace;

use crate::catalog::{normalize_item, RecipeCatalog};
use crate::models::{ProductionNode, VariantSelection};

/// Expands requests against one catalog with a fixed set of variant
/// overrides.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dsp_planner::catalog::RecipeCatalog;
/// use dsp_planner::expansion::Expander;
/// use dsp_planner::models::{RecipeDefinition, VariantSelection};
///
/// let catalog = RecipeCatalog::from_recipes(vec![RecipeDefinition {
///     output: "Gear".to_string(),
///     output_count: 1.0,
///     facility: "Assembling machine".to_string(),
///     craft_time: 1.0,
///     inputs: BTreeMap::from([("Iron ingot".to_string(), 1.0)]),
///     image: None,
/// }])
/// .unwrap();
///
/// let variants = VariantSelection::new();
/// let nodes = Expander::new(&catalog, &variants).expand("Gear", 3.0, "", 1);
///
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].facilities_needed, 3.0);
/// assert_eq!(nodes[0].input_rates["Iron ingot"], 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    catalog: &'a RecipeCatalog,
    variants: &'a VariantSelection,
}

impl<'a> Expander<'a> {
    pub fn new(catalog: &'a RecipeCatalog, variants: &'a VariantSelection) -> Self {
        Expander { catalog, variants }
    }

    /// Expands `item` at `rate` items per second with an empty ancestor path.
    ///
    /// `parent_label` becomes the root node's `used_for`; `depth` is the
    /// root node's depth.
    pub fn expand(
        &self,
        item: &str,
        rate: f64,
        parent_label: &str,
        depth: u32,
    ) -> Vec<ProductionNode> {
        let mut path = HashSet::new();
        let mut nodes = Vec::new();
        self.visit(item, rate, parent_label, &mut path, depth, &mut nodes);
        nodes
    }

    /// Expands `item` treating the names in `visited_on_path` as ancestors.
    ///
    /// The caller's set is only read; path state for the descent is kept
    /// separately.
    pub fn expand_on_path(
        &self,
        item: &str,
        rate: f64,
        parent_label: &str,
        visited_on_path: &HashSet<String>,
        depth: u32,
    ) -> Vec<ProductionNode> {
        // Callers may hand in raw names; path membership is by canonical name.
        let mut path: HashSet<String> =
            visited_on_path.iter().map(|n| normalize_item(n)).collect();
        let mut nodes = Vec::new();
        self.visit(item, rate, parent_label, &mut path, depth, &mut nodes);
        nodes
    }

    fn visit(
        &self,
        item: &str,
        rate: f64,
        parent_label: &str,
        path: &mut HashSet<String>,
        depth: u32,
        out: &mut Vec<ProductionNode>,
    ) {
        let key = normalize_item(item);
        if path.contains(&key) {
            trace!(item, parent = parent_label, depth, "cycle on path, branch truncated");
            return;
        }

        let Some(recipe) = self.catalog.lookup(item, self.variants.get(item)) else {
            return;
        };

        path.insert(key.clone());

        let facilities_needed = finite_or_zero(recipe.craft_time * rate / recipe.output_count);
        let input_rates = recipe
            .inputs
            .iter()
            .map(|(input, quantity)| {
                let consumed = finite_or_zero(quantity * facilities_needed / recipe.craft_time);
                (input.clone(), consumed)
            })
            .collect();

        let node = ProductionNode {
            output_item: recipe.output.clone(),
            facility: recipe.facility.clone(),
            facilities_needed,
            input_rates,
            craft_time_seconds: recipe.craft_time,
            target_rate_per_second: rate,
            used_for: parent_label.to_string(),
            depth,
        };

        let demands: Vec<(String, f64)> = node
            .input_rates
            .iter()
            .filter(|(_, r)| **r > 0.0)
            .map(|(input, r)| (input.clone(), *r))
            .collect();
        out.push(node);

        for (input, input_rate) in demands {
            // Depth stops at u32::MAX rather than overflowing.
            let child_depth = depth.saturating_add(1);
            self.visit(&input, input_rate, &recipe.output, path, child_depth, out);
        }

        path.remove(&key);
    }
}

/// Expands `root_item` at `target_rate` against `catalog`.
///
/// Free-function form of [`Expander::expand_on_path`].
pub fn expand(
    catalog: &RecipeCatalog,
    root_item: &str,
    target_rate: f64,
    parent_label: &str,
    visited_on_path: &HashSet<String>,
    depth: u32,
    variants: &VariantSelection,
) -> Vec<ProductionNode> {
    Expander::new(catalog, variants).expand_on_path(
        root_item,
        target_rate,
        parent_label,
        visited_on_path,
        depth,
    )
}

/// Replaces NaN and infinities with zero.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

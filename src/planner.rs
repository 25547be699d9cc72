//! High-level planning API.
//!
//! A [`Planner`] owns a built [`RecipeCatalog`] and turns a [`PlanRequest`]
//! into a sorted production plan: expand, combine duplicates, sort.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::combine;
use crate::catalog::RecipeCatalog;
use crate::data::load_catalog;
use crate::error::CatalogError;
use crate::expansion::Expander;
use crate::models::{AggregatedNode, ItemName, ProductionNode, VariantSelection};
use crate::sorting::sort_nodes;

/// Where the planner reads its recipe table from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Path to a `.json` or `.csv` recipe table
    pub data_source: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            data_source: PathBuf::from("data/items.json"),
        }
    }
}

/// A request for the production chain of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Item to produce
    pub item: ItemName,
    /// Desired output in items per second
    pub rate: f64,
    /// Recipe variant overrides
    #[serde(default)]
    pub variants: VariantSelection,
    /// Depth assigned to the root node
    #[serde(default = "default_start_depth")]
    pub start_depth: u32,
}

fn default_start_depth() -> u32 {
    1
}

impl PlanRequest {
    /// A request for `rate` items per second of `item` with default recipes.
    pub fn new(item: impl Into<ItemName>, rate: f64) -> Self {
        PlanRequest {
            item: item.into(),
            rate,
            variants: VariantSelection::new(),
            start_depth: default_start_depth(),
        }
    }

    /// Uses recipe variant `index` for `item` in this request.
    pub fn with_variant(mut self, item: &str, index: usize) -> Self {
        self.variants.set(item, index);
        self
    }
}

/// Computes production plans against one catalog.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dsp_planner::catalog::RecipeCatalog;
/// use dsp_planner::models::RecipeDefinition;
/// use dsp_planner::planner::{PlanRequest, Planner};
///
/// let recipe = |output: &str, inputs: &[(&str, f64)]| RecipeDefinition {
///     output: output.to_string(),
///     output_count: 1.0,
///     facility: "Assembling machine".to_string(),
///     craft_time: 1.0,
///     inputs: inputs.iter().map(|(n, q)| (n.to_string(), *q)).collect::<BTreeMap<_, _>>(),
///     image: None,
/// };
///
/// let catalog = RecipeCatalog::from_recipes(vec![
///     recipe("Electric motor", &[("Gear", 1.0), ("Iron ingot", 2.0)]),
///     recipe("Gear", &[("Iron ingot", 1.0)]),
///     recipe("Iron ingot", &[("Iron ore", 1.0)]),
/// ])
/// .unwrap();
///
/// let plan = Planner::new(catalog).plan(&PlanRequest::new("Electric motor", 1.0));
///
/// // Iron ingot is needed by both the motor and the gear, but listed once.
/// let ingots = plan.iter().find(|n| n.output_item == "Iron ingot").unwrap();
/// assert_eq!(ingots.target_rate_per_second, 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: RecipeCatalog,
}

impl Planner {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Planner { catalog }
    }

    /// Loads the recipe table named by `config` and builds a planner.
    pub fn from_config(config: &PlannerConfig) -> Result<Self, CatalogError> {
        Ok(Planner::new(load_catalog(&config.data_source)?))
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Expands `request` without merging duplicates, in pre-order.
    pub fn expand(&self, request: &PlanRequest) -> Vec<ProductionNode> {
        Expander::new(&self.catalog, &request.variants).expand(
            &request.item,
            request.rate,
            "",
            request.start_depth,
        )
    }

    /// Expands `request` and returns the unmerged nodes, sorted.
    pub fn plan_raw(&self, request: &PlanRequest) -> Vec<ProductionNode> {
        let mut nodes = self.expand(request);
        sort_nodes(&mut nodes);
        debug!(
            item = %request.item,
            rate = request.rate,
            nodes = nodes.len(),
            "raw plan computed"
        );
        nodes
    }

    /// Expands `request`, merges duplicate items and returns them sorted.
    ///
    /// # Arguments
    ///
    /// * `request` - Item, rate, variant overrides and root depth
    ///
    /// # Returns
    ///
    /// One node per distinct item, ordered by depth, then item name, then
    /// `used_for`, then rate. An unknown item yields an empty plan. Depths
    /// stop at `u32::MAX` when `start_depth` is that large.
    pub fn plan(&self, request: &PlanRequest) -> Vec<AggregatedNode> {
        let nodes = self.expand(request);
        let visited = nodes.len();
        let mut merged = combine(nodes);
        sort_nodes(&mut merged);
        debug!(
            item = %request.item,
            rate = request.rate,
            visited,
            items = merged.len(),
            "plan computed"
        );
        merged
    }
}

//! Data models and structures for the planner.
//!
//! This module contains the recipe definitions loaded from a data file,
//! the per-request variant overrides, and the production nodes produced by
//! the expansion engine.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::normalize_item;

/// Name of an item, as written in the recipe table.
pub type ItemName = String;

/// A single way of producing an item.
///
/// Several definitions may share the same `output`; they are recipe variants
/// and keep the order in which they were loaded. Variant 0 is the default.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use dsp_planner::models::RecipeDefinition;
///
/// let magnet = RecipeDefinition {
///     output: "Magnet".to_string(),
///     output_count: 1.0,
///     facility: "Smelting facility".to_string(),
///     craft_time: 1.5,
///     inputs: BTreeMap::from([("Iron ore".to_string(), 1.0)]),
///     image: None,
/// };
///
/// assert_eq!(magnet.inputs["Iron ore"], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    /// The item produced (e.g., "Magnetic coil")
    #[serde(rename = "OutputItem")]
    pub output: ItemName,
    /// Number of items produced per craft cycle
    #[serde(rename = "OutputItemCount")]
    pub output_count: f64,
    /// The facility type that runs this recipe (e.g., "Assembling machine")
    #[serde(rename = "Facility")]
    pub facility: String,
    /// Seconds per craft cycle
    #[serde(rename = "Time")]
    pub craft_time: f64,
    /// Quantity of each input consumed per craft cycle
    #[serde(rename = "Materials", default)]
    pub inputs: BTreeMap<ItemName, f64>,
    /// Icon path from the data file, passed through untouched
    #[serde(rename = "Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Caller-supplied recipe variant overrides.
///
/// Items are matched case-insensitively, the same way the catalog matches
/// them. Items without an override use variant 0.
///
/// # Example
///
/// ```
/// use dsp_planner::models::VariantSelection;
///
/// let mut variants = VariantSelection::new();
/// variants.set("Graphene", 1);
///
/// assert_eq!(variants.get("graphene"), 1);
/// assert_eq!(variants.get("Iron ingot"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<ItemName, usize>", into = "HashMap<ItemName, usize>")]
pub struct VariantSelection {
    overrides: HashMap<ItemName, usize>,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `index` as the recipe variant for `item`.
    pub fn set(&mut self, item: &str, index: usize) {
        self.overrides.insert(normalize_item(item), index);
    }

    /// Returns the requested variant index for `item`, or 0 when unset.
    pub fn get(&self, item: &str) -> usize {
        self.overrides
            .get(&normalize_item(item))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, usize)> for VariantSelection {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut selection = VariantSelection::new();
        for (item, index) in iter {
            selection.set(item.as_ref(), index);
        }
        selection
    }
}

impl From<HashMap<ItemName, usize>> for VariantSelection {
    fn from(map: HashMap<ItemName, usize>) -> Self {
        map.into_iter().collect()
    }
}

impl From<VariantSelection> for HashMap<ItemName, usize> {
    fn from(selection: VariantSelection) -> Self {
        selection.overrides
    }
}

/// One step of an expanded production chain.
///
/// The expansion engine emits one node per visit. After aggregation the same
/// shape describes the merged demand for an item (see [`AggregatedNode`]).
/// Field names in serialized output follow the original tool's JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionNode {
    /// The item produced at this step
    #[serde(rename = "OutputItem")]
    pub output_item: ItemName,
    /// Facility type running the recipe
    #[serde(rename = "Facility")]
    pub facility: String,
    /// Number of facilities needed to sustain `target_rate_per_second`
    #[serde(rename = "NumFacilitiesNeeded")]
    pub facilities_needed: f64,
    /// Items consumed per second, by input
    #[serde(rename = "ItemsConsumedPerSec")]
    pub input_rates: BTreeMap<ItemName, f64>,
    /// Seconds per craft cycle
    #[serde(rename = "SecondsSpentPerCraft")]
    pub craft_time_seconds: f64,
    /// Items per second this step must produce
    #[serde(rename = "CraftingPerSec")]
    pub target_rate_per_second: f64,
    /// Which parent demand(s) this step feeds
    #[serde(rename = "UsedFor")]
    pub used_for: String,
    /// Distance from the root of the expansion
    #[serde(rename = "Depth")]
    pub depth: u32,
}

/// A production node after duplicate demands have been merged.
///
/// `facilities_needed`, `input_rates` and `target_rate_per_second` are sums,
/// `craft_time_seconds` is a facility-weighted average, `depth` is the
/// deepest contributor and `used_for` lists every contributor with its rate.
pub type AggregatedNode = ProductionNode;

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for recipe tables.
#[derive(Debug, Deserialize)]
pub struct RecipeRow {
    /// Item produced
    pub output_item: String,
    /// Items produced per cycle
    pub output_item_count: f64,
    /// Facility type
    pub facility: String,
    /// Seconds per cycle
    pub time: f64,
    /// `name:qty` pairs separated by `;` (may be empty)
    #[serde(default)]
    pub materials: String,
    /// Icon path (optional column)
    #[serde(default)]
    pub image: Option<String>,
}

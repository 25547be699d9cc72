//! The recipe catalog.
//!
//! A [`RecipeCatalog`] maps each item to the recipe variants that produce it.
//! It is built once from a list of [`RecipeDefinition`]s and is read-only
//! afterward, so a single catalog can serve any number of plans, including
//! from several threads at once.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::{ItemName, RecipeDefinition};

/// Canonical form of an item name used for catalog keys.
pub fn normalize_item(name: &str) -> String {
    name.to_lowercase()
}

/// Immutable item → recipe variants lookup.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: HashMap<ItemName, Vec<RecipeDefinition>>,
}

impl RecipeCatalog {
    /// Builds a catalog, validating each definition.
    ///
    /// Definitions for the same output (compared case-insensitively) become
    /// variants in the order they appear in `recipes`.
    ///
    /// A zero `output_count` or `craft_time` is accepted; the engine clamps
    /// the resulting rates to zero.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecipe`] for empty names or for
    /// negative / non-finite quantities.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use dsp_planner::catalog::RecipeCatalog;
    /// use dsp_planner::models::RecipeDefinition;
    ///
    /// let catalog = RecipeCatalog::from_recipes(vec![RecipeDefinition {
    ///     output: "Iron ingot".to_string(),
    ///     output_count: 1.0,
    ///     facility: "Smelting facility".to_string(),
    ///     craft_time: 1.0,
    ///     inputs: BTreeMap::from([("Iron ore".to_string(), 1.0)]),
    ///     image: None,
    /// }])
    /// .unwrap();
    ///
    /// assert!(catalog.lookup("IRON INGOT", 0).is_some());
    /// assert!(catalog.lookup("Iron ore", 0).is_none());
    /// ```
    pub fn from_recipes(recipes: Vec<RecipeDefinition>) -> Result<Self, CatalogError> {
        let mut map: HashMap<ItemName, Vec<RecipeDefinition>> = HashMap::new();

        for recipe in recipes {
            validate(&recipe)?;
            map.entry(normalize_item(&recipe.output))
                .or_default()
                .push(recipe);
        }

        Ok(RecipeCatalog { recipes: map })
    }

    /// Finds the recipe for `item`, using `variant` when it exists and
    /// variant 0 otherwise.
    ///
    /// Returns `None` when nothing produces `item`, which marks it as a raw
    /// material.
    pub fn lookup(&self, item: &str, variant: usize) -> Option<&RecipeDefinition> {
        let variants = self.recipes.get(&normalize_item(item))?;
        variants.get(variant).or_else(|| variants.first())
    }

    /// All variants for `item`, in load order. Empty for raw materials.
    pub fn variants(&self, item: &str) -> &[RecipeDefinition] {
        self.recipes
            .get(&normalize_item(item))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Producible item names as written in their first recipe, sorted.
    pub fn items(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .recipes
            .values()
            .filter_map(|v| v.first())
            .map(|r| r.output.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Iterates over every recipe definition. Order across items is
    /// unspecified; variants of one item stay in load order.
    pub fn iter(&self) -> impl Iterator<Item = &RecipeDefinition> {
        self.recipes.values().flatten()
    }

    /// Number of distinct producible items.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate(recipe: &RecipeDefinition) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecipe {
        item: recipe.output.clone(),
        reason,
    };

    if recipe.output.trim().is_empty() {
        return Err(invalid("output item name is empty".to_string()));
    }
    if recipe.facility.trim().is_empty() {
        return Err(invalid("facility name is empty".to_string()));
    }
    check_quantity(recipe.output_count, "output count").map_err(&invalid)?;
    check_quantity(recipe.craft_time, "craft time").map_err(&invalid)?;

    for (input, quantity) in &recipe.inputs {
        if input.trim().is_empty() {
            return Err(invalid("input item name is empty".to_string()));
        }
        check_quantity(*quantity, &format!("quantity of '{}'", input)).map_err(&invalid)?;
    }

    Ok(())
}

fn check_quantity(value: f64, what: &str) -> Result<(), String> {
    if !value.is_finite() {
        Err(format!("{} is not a finite number", what))
    } else if value < 0.0 {
        Err(format!("{} is negative ({})", what, value))
    } else {
        Ok(())
    }
}

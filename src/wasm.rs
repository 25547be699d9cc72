//! WebAssembly bindings.
//!
//! This module provides JavaScript-accessible functions for the planner.
//! Inputs and outputs are JSON strings so the web front end can pass the
//! recipe table it already has loaded.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::catalog::RecipeCatalog;
use crate::data::parse_recipes_json;
use crate::models::{AggregatedNode, VariantSelection};
use crate::planner::{PlanRequest, Planner};

/// JavaScript-friendly plan request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsPlanInput {
    pub item: String,
    pub rate: f64,
    #[serde(default)]
    pub variants: VariantSelection,
    #[serde(default)]
    pub raw: bool,
}

/// JavaScript-friendly plan result.
#[derive(Debug, Clone, Serialize)]
pub struct JsPlanResult {
    pub success: bool,
    pub error: Option<String>,
    pub nodes: Vec<AggregatedNode>,
}

impl JsPlanResult {
    fn failure(message: String) -> Self {
        JsPlanResult {
            success: false,
            error: Some(message),
            nodes: vec![],
        }
    }
}

fn build_catalog(catalog_json: &str) -> Result<RecipeCatalog, String> {
    parse_recipes_json(catalog_json)
        .and_then(RecipeCatalog::from_recipes)
        .map_err(|e| format!("Invalid recipe table: {}", e))
}

/// Run a plan against a recipe table.
///
/// `catalog_json` is the recipe table in the data file format;
/// `input_json` is a [`JsPlanInput`]. Returns a [`JsPlanResult`] as JSON.
#[wasm_bindgen]
pub fn plan(catalog_json: &str, input_json: &str) -> String {
    serde_json::to_string(&run_plan(catalog_json, input_json)).unwrap_or_default()
}

fn run_plan(catalog_json: &str, input_json: &str) -> JsPlanResult {
    let input: JsPlanInput = match serde_json::from_str(input_json) {
        Ok(i) => i,
        Err(e) => return JsPlanResult::failure(format!("Invalid input: {}", e)),
    };

    let catalog = match build_catalog(catalog_json) {
        Ok(c) => c,
        Err(e) => return JsPlanResult::failure(e),
    };

    let planner = Planner::new(catalog);
    let request = PlanRequest {
        item: input.item,
        rate: input.rate,
        variants: input.variants,
        start_depth: 1,
    };

    let nodes = if input.raw {
        planner.plan_raw(&request)
    } else {
        planner.plan(&request)
    };

    JsPlanResult {
        success: true,
        error: None,
        nodes,
    }
}

/// Get the version of the planner.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// List producible items in a recipe table.
/// Returns a JSON array of item names with their variant counts, or an
/// empty array if the table is invalid.
#[wasm_bindgen]
pub fn list_items(catalog_json: &str) -> String {
    #[derive(Serialize)]
    struct ItemInfo<'a> {
        name: &'a str,
        variants: usize,
    }

    let Ok(catalog) = build_catalog(catalog_json) else {
        return "[]".to_string();
    };

    let items: Vec<ItemInfo> = catalog
        .items()
        .into_iter()
        .map(|name| ItemInfo {
            name,
            variants: catalog.variants(name).len(),
        })
        .collect();

    serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
}

//! Tests for recipe catalog construction and lookup.

use std::collections::BTreeMap;

use dsp_planner::catalog::RecipeCatalog;
use dsp_planner::error::CatalogError;
use dsp_planner::models::RecipeDefinition;

fn recipe(
    output: &str,
    facility: &str,
    time: f64,
    count: f64,
    inputs: &[(&str, f64)],
) -> RecipeDefinition {
    RecipeDefinition {
        output: output.to_string(),
        output_count: count,
        facility: facility.to_string(),
        craft_time: time,
        inputs: inputs
            .iter()
            .map(|(n, q)| (n.to_string(), *q))
            .collect::<BTreeMap<_, _>>(),
        image: None,
    }
}

fn graphene_catalog() -> RecipeCatalog {
    RecipeCatalog::from_recipes(vec![
        recipe("Graphene", "Chemical plant", 3.0, 2.0, &[("Energetic graphite", 3.0)]),
        recipe("Iron ingot", "Smelting facility", 1.0, 1.0, &[("Iron ore", 1.0)]),
        recipe("graphene", "Chemical plant", 2.0, 2.0, &[("Fire ice", 2.0)]),
    ])
    .expect("valid catalog")
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = graphene_catalog();

    let recipe = catalog.lookup("IRON INGOT", 0).expect("recipe exists");
    assert_eq!(recipe.output, "Iron ingot");
    assert!(catalog.lookup("iron ingot", 0).is_some());
}

#[test]
fn test_lookup_unknown_item_is_none() {
    let catalog = graphene_catalog();

    assert!(catalog.lookup("Iron ore", 0).is_none());
    assert!(catalog.variants("Iron ore").is_empty());
}

#[test]
fn test_variants_keep_load_order() {
    let catalog = graphene_catalog();

    let variants = catalog.variants("Graphene");
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].craft_time, 3.0);
    assert_eq!(variants[1].craft_time, 2.0);
    // Casing of each definition is preserved as loaded
    assert_eq!(variants[1].output, "graphene");

    assert_eq!(catalog.lookup("Graphene", 1).unwrap().inputs["Fire ice"], 2.0);
}

#[test]
fn test_out_of_range_variant_falls_back_to_default() {
    let catalog = graphene_catalog();

    let recipe = catalog.lookup("Graphene", 7).expect("falls back");
    assert_eq!(recipe.craft_time, 3.0);
    assert_eq!(catalog.lookup("Iron ingot", 1).unwrap().output, "Iron ingot");
}

#[test]
fn test_items_and_len() {
    let catalog = graphene_catalog();

    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.items(), vec!["Graphene", "Iron ingot"]);
    assert_eq!(catalog.iter().count(), 3);
}

#[test]
fn test_empty_catalog() {
    let catalog = RecipeCatalog::from_recipes(vec![]).expect("empty is valid");
    assert!(catalog.is_empty());
    assert!(catalog.lookup("Anything", 0).is_none());
}

#[test]
fn test_zero_count_and_time_are_accepted() {
    let catalog = RecipeCatalog::from_recipes(vec![
        recipe("Broken", "Assembling machine", 1.0, 0.0, &[("Iron ingot", 1.0)]),
        recipe("Instant", "Assembling machine", 0.0, 1.0, &[("Iron ingot", 1.0)]),
    ]);
    assert!(catalog.is_ok());
}

#[test]
fn test_rejects_empty_output_name() {
    let result = RecipeCatalog::from_recipes(vec![recipe(" ", "Smelting facility", 1.0, 1.0, &[])]);
    assert!(matches!(result, Err(CatalogError::InvalidRecipe { .. })));
}

#[test]
fn test_rejects_empty_facility() {
    let result = RecipeCatalog::from_recipes(vec![recipe("Gear", "", 1.0, 1.0, &[])]);
    assert!(matches!(result, Err(CatalogError::InvalidRecipe { .. })));
}

#[test]
fn test_rejects_negative_and_non_finite_values() {
    let negative_time = recipe("Gear", "Assembling machine", -1.0, 1.0, &[]);
    let nan_count = recipe("Gear", "Assembling machine", 1.0, f64::NAN, &[]);
    let infinite_input = recipe(
        "Gear",
        "Assembling machine",
        1.0,
        1.0,
        &[("Iron ingot", f64::INFINITY)],
    );

    for bad in [negative_time, nan_count, infinite_input] {
        match RecipeCatalog::from_recipes(vec![bad]) {
            Err(CatalogError::InvalidRecipe { item, .. }) => assert_eq!(item, "Gear"),
            other => panic!("expected InvalidRecipe, got {:?}", other),
        }
    }
}

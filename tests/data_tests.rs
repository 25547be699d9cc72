//! Tests for recipe table loading.

use std::path::Path;

use dsp_planner::data::{load_catalog, load_recipes, parse_recipes_csv, parse_recipes_json};
use dsp_planner::error::CatalogError;

#[test]
fn test_load_bundled_data() {
    let data_path = Path::new("data/items.json");
    if !data_path.exists() {
        // Skip test if the data file isn't shipped (e.g., packaged crate)
        return;
    }

    let catalog = load_catalog(data_path).expect("Failed to load data");
    assert_eq!(catalog.len(), 16);
    assert_eq!(catalog.variants("Graphene").len(), 2);
    assert_eq!(catalog.variants("Hydrogen").len(), 2);

    let coil = catalog.lookup("magnetic coil", 0).expect("coil recipe");
    assert_eq!(coil.output_count, 2.0);
    assert_eq!(coil.image.as_deref(), Some("img/magnetic_coil.png"));
}

#[test]
fn test_loaded_recipes_have_valid_data() {
    let recipes = load_recipes(Path::new("data/items.json")).expect("Failed to load data");

    for recipe in &recipes {
        assert!(!recipe.output.is_empty(), "Output name should not be empty");
        assert!(!recipe.facility.is_empty(), "Facility should not be empty");
        assert!(recipe.craft_time > 0.0, "Craft time should be positive");
        assert!(recipe.output_count > 0.0, "Output count should be positive");
    }
}

#[test]
fn test_load_csv_fixture() {
    let recipes = load_recipes(Path::new("tests/data/recipes.csv")).expect("Failed to load CSV");

    assert_eq!(recipes.len(), 4);
    assert_eq!(recipes[0].output, "Iron ingot");
    assert_eq!(recipes[0].image.as_deref(), Some("img/iron_ingot.png"));
    assert_eq!(recipes[1].image, None);

    let coil = &recipes[2];
    assert_eq!(coil.output_count, 2.0);
    assert_eq!(coil.inputs.len(), 2);
    assert_eq!(coil.inputs["Magnet"], 2.0);
    assert_eq!(coil.inputs["Copper ingot"], 1.0);

    assert!(recipes[3].inputs.is_empty());
}

#[test]
fn test_csv_without_image_column() {
    let csv = "output_item,output_item_count,facility,time,materials\n\
               Gear,1,Assembling machine,1,Iron ingot:1\n";

    let recipes = parse_recipes_csv(csv.as_bytes()).expect("valid CSV");
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].image, None);
}

#[test]
fn test_csv_malformed_materials() {
    for cell in ["Iron ingot", "Iron ingot:lots", ":1", "Iron ingot:1;Iron ingot:2"] {
        let csv = format!(
            "output_item,output_item_count,facility,time,materials\n\
             Gear,1,Assembling machine,1,{}\n",
            cell
        );
        let result = parse_recipes_csv(csv.as_bytes());
        assert!(
            matches!(result, Err(CatalogError::MalformedMaterials { .. })),
            "'{}' should be rejected",
            cell
        );
    }
}

#[test]
fn test_csv_bad_number() {
    let csv = "output_item,output_item_count,facility,time,materials\n\
               Gear,one,Assembling machine,1,\n";

    assert!(matches!(parse_recipes_csv(csv.as_bytes()), Err(CatalogError::Csv(_))));
}

#[test]
fn test_json_missing_materials_defaults_to_empty() {
    let recipes = parse_recipes_json(
        r#"[{"OutputItem": "Stone", "OutputItemCount": 1,
             "Facility": "Mining machine", "Time": 2}]"#,
    )
    .expect("valid JSON");

    assert!(recipes[0].inputs.is_empty());
}

#[test]
fn test_json_malformed() {
    assert!(matches!(parse_recipes_json("[{"), Err(CatalogError::Json(_))));
}

#[test]
fn test_unsupported_format() {
    let result = load_recipes(Path::new("data/items.txt"));
    assert!(matches!(result, Err(CatalogError::UnsupportedFormat { .. })));
}

#[test]
fn test_missing_file() {
    let result = load_catalog(Path::new("tests/data/does_not_exist.json"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

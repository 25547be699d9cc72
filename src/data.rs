//! Data loading functionality.
//!
//! Recipe tables are read from JSON (the format the game data is published
//! in) or CSV (easier to edit by hand). Both produce a list of
//! [`RecipeDefinition`]s, which [`load_catalog`] turns into a
//! [`RecipeCatalog`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::catalog::RecipeCatalog;
use crate::error::CatalogError;
use crate::models::{RecipeDefinition, RecipeRow};

/// Parses a JSON recipe table held in memory.
///
/// # JSON Format
///
/// An array of objects with `OutputItem`, `OutputItemCount`, `Facility`,
/// `Time`, `Materials` (object of item → quantity) and an optional `Image`.
///
/// # Example
///
/// ```
/// use dsp_planner::data::parse_recipes_json;
///
/// let recipes = parse_recipes_json(r#"[
///     {"OutputItem": "Magnet", "OutputItemCount": 1, "Facility": "Smelting facility",
///      "Time": 1.5, "Materials": {"Iron ore": 1}}
/// ]"#).unwrap();
///
/// assert_eq!(recipes[0].craft_time, 1.5);
/// ```
pub fn parse_recipes_json(json: &str) -> Result<Vec<RecipeDefinition>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a CSV recipe table from any reader.
///
/// # CSV Format
///
/// Expected columns: `output_item, output_item_count, facility, time, materials, image`
///
/// `materials` holds `name:qty` pairs separated by `;`, e.g.
/// `Iron ingot:1;Copper ingot:1`. It may be empty for recipes without inputs.
/// `image` is optional.
///
/// # Arguments
///
/// * `reader` - Source of the CSV text, header row included
pub fn parse_recipes_csv<R: Read>(reader: R) -> Result<Vec<RecipeDefinition>, CatalogError> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut recipes = Vec::new();
    for result in rdr.deserialize() {
        let row: RecipeRow = result?;
        let inputs = parse_materials(&row.output_item, &row.materials)?;
        recipes.push(RecipeDefinition {
            output: row.output_item,
            output_count: row.output_item_count,
            facility: row.facility,
            craft_time: row.time,
            inputs,
            image: row.image.filter(|i| !i.is_empty()),
        });
    }
    Ok(recipes)
}

/// Parses a `name:qty;name:qty` materials cell.
fn parse_materials(item: &str, cell: &str) -> Result<BTreeMap<String, f64>, CatalogError> {
    let malformed = |entry: &str| CatalogError::MalformedMaterials {
        item: item.to_string(),
        entry: entry.to_string(),
    };

    let mut inputs = BTreeMap::new();
    for entry in cell.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        // Item names may contain ':' themselves, so split on the last one.
        let (name, qty) = entry.rsplit_once(':').ok_or_else(|| malformed(entry))?;
        let qty: f64 = qty.trim().parse().map_err(|_| malformed(entry))?;
        let name = name.trim();
        if name.is_empty() || inputs.insert(name.to_string(), qty).is_some() {
            return Err(malformed(entry));
        }
    }
    Ok(inputs)
}

/// Loads recipe definitions from a `.json` or `.csv` file.
///
/// # Arguments
///
/// * `path` - Path to the recipe table; the extension picks the format
///
/// # Returns
///
/// Every recipe definition in file order, not yet validated as a catalog.
///
/// # Errors
///
/// Fails if the file cannot be read, cannot be parsed, or has another
/// extension.
pub fn load_recipes(path: &Path) -> Result<Vec<RecipeDefinition>, CatalogError> {
    let io_err = |source: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let mut json = String::new();
            File::open(path)
                .and_then(|mut f| f.read_to_string(&mut json))
                .map_err(io_err)?;
            parse_recipes_json(&json)
        }
        Some("csv") => parse_recipes_csv(File::open(path).map_err(io_err)?),
        _ => Err(CatalogError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads a recipe table and builds the catalog from it.
///
/// # Returns
///
/// A validated [`RecipeCatalog`], or the first loading or validation error.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use dsp_planner::data::load_catalog;
///
/// let catalog = load_catalog(Path::new("data/items.json")).unwrap();
/// println!("Loaded recipes for {} items", catalog.len());
/// ```
pub fn load_catalog(path: &Path) -> Result<RecipeCatalog, CatalogError> {
    let recipes = load_recipes(path)?;
    let count = recipes.len();
    let catalog = RecipeCatalog::from_recipes(recipes)?;
    info!(
        source = %path.display(),
        recipes = count,
        items = catalog.len(),
        "recipe catalog loaded"
    );
    Ok(catalog)
}

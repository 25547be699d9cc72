//! Error types for catalog construction and loading.
//!
//! Building a [`RecipeCatalog`](crate::catalog::RecipeCatalog) is the only
//! fallible step in the crate. Everything downstream of a built catalog
//! (expansion, aggregation, sorting) always produces a result.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or validating a recipe table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The recipe file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON recipe table could not be parsed.
    #[error("invalid JSON recipe table: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV recipe table could not be parsed.
    #[error("invalid CSV recipe table: {0}")]
    Csv(#[from] csv::Error),

    /// The file extension is not one we know how to load.
    #[error("unsupported recipe table format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// A recipe definition carries a value the engine cannot work with.
    #[error("invalid recipe for '{item}': {reason}")]
    InvalidRecipe { item: String, reason: String },

    /// A `materials` cell in a CSV row is not a list of `name:qty` pairs.
    #[error("malformed materials entry '{entry}' for '{item}'")]
    MalformedMaterials { item: String, entry: String },
}

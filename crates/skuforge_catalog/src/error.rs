//! Error types for catalog management.

use thiserror::Error;

use skuforge_codec::Dimension;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while building or querying a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate {dimension} code: {code}")]
    DuplicateCode { dimension: Dimension, code: String },

    #[error("Invalid {dimension} code '{code}': expected exactly {expected_width} digit(s)")]
    InvalidCode {
        dimension: Dimension,
        code: String,
        expected_width: usize,
    },

    #[error("Subcategory '{subcategory}' references unknown category: {category}")]
    UnknownCategory {
        subcategory: String,
        category: String,
    },

    #[error("Invalid hex color value '{0}': expected #RRGGBB")]
    InvalidHexColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

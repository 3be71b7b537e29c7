//! Error types for SKU generation.

use thiserror::Error;

use skuforge_catalog::CatalogError;
use skuforge_codec::{CodecError, Dimension};

use crate::key::CombinationKey;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while generating or decoding a SKU.
///
/// None of these trigger an internal retry: every kind is surfaced to the
/// caller, who either fixes the request or picks a different combination.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{dimension} code '{code}' is unknown or inactive in the catalog")]
    UnknownOrInactiveSegment { dimension: Dimension, code: String },

    #[error(
        "Subcategory '{subcategory}' belongs to category '{expected_category}', not '{supplied_category}'"
    )]
    SubcategoryCategoryMismatch {
        subcategory: String,
        expected_category: String,
        supplied_category: String,
    },

    #[error("All {max} sequence numbers are used for combination {key}; choose a different combination")]
    SequenceExhausted { key: CombinationKey, max: u16 },
}

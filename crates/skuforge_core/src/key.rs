//! Combination keys.

use serde::{Deserialize, Serialize};

use skuforge_codec::SkuSegments;

/// The ordered six-tuple of classification codes that identifies one
/// family of sibling products.
///
/// Products sharing all six codes draw from one consecutive sequence;
/// products differing in any code are independent combinations, each
/// restarting at 1. Keys are only ever built from validated codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinationKey {
    pub type_code: String,
    pub category: String,
    pub subcategory: String,
    pub size: String,
    pub color: String,
    pub season: String,
}

impl CombinationKey {
    pub fn new(
        type_code: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            type_code: type_code.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            size: size.into(),
            color: color.into(),
            season: season.into(),
        }
    }
}

impl From<&SkuSegments> for CombinationKey {
    fn from(segments: &SkuSegments) -> Self {
        Self::new(
            &segments.type_code,
            &segments.category,
            &segments.subcategory,
            &segments.size,
            &segments.color,
            &segments.season,
        )
    }
}

impl std::fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}-{}",
            self.type_code, self.category, self.subcategory, self.size, self.color, self.season
        )
    }
}

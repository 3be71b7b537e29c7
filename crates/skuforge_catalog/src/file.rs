//! YAML catalog documents.
//!
//! A catalog file is the administration hand-off format: it lists the
//! entries of all six dimensions and, optionally, sequence floors for
//! combinations imported out of band (so the allocator can be seeded past
//! codes that already exist).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogResult;
use crate::models::{ClassificationEntry, Color, Season, SizeEntry, Subcategory};
use crate::store::InMemoryCatalog;

use skuforge_codec::SkuLayout;

/// One sequence floor for a previously imported combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEntry {
    #[serde(rename = "type")]
    pub type_code: String,
    pub category: String,
    pub subcategory: String,
    pub size: String,
    pub color: String,
    pub season: String,
    pub sequence: u16,
}

/// Serialized form of a full catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub types: Vec<ClassificationEntry>,
    #[serde(default)]
    pub categories: Vec<ClassificationEntry>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub sizes: Vec<SizeEntry>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seed_sequences: Vec<SeedEntry>,
}

impl CatalogFile {
    /// Parse a catalog document from YAML.
    pub fn from_yaml(yaml: &str) -> CatalogResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a catalog document from a file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file = Self::from_yaml(&content)?;
        info!(
            "Loaded catalog from {}: {} types, {} categories, {} subcategories, {} sizes, {} colors, {} seasons",
            path.as_ref().display(),
            file.types.len(),
            file.categories.len(),
            file.subcategories.len(),
            file.sizes.len(),
            file.colors.len(),
            file.seasons.len(),
        );
        Ok(file)
    }

    /// Materialize an in-memory catalog from this document.
    ///
    /// Categories are registered before subcategories so ownership checks
    /// hold regardless of document order.
    pub fn build_catalog(&self, layout: SkuLayout) -> CatalogResult<InMemoryCatalog> {
        let catalog = InMemoryCatalog::new(layout);
        for entry in &self.types {
            catalog.add_type(entry.clone())?;
        }
        for entry in &self.categories {
            catalog.add_category(entry.clone())?;
        }
        for sub in &self.subcategories {
            catalog.add_subcategory(sub.clone())?;
        }
        for size in &self.sizes {
            catalog.add_size(size.clone())?;
        }
        for color in &self.colors {
            catalog.add_color(color.clone())?;
        }
        for season in &self.seasons {
            catalog.add_season(season.clone())?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
types:
  - code: "1"
    name: Garment
categories:
  - code: "10"
    name: Tops
subcategories:
  - code: "1"
    name: Basic tees
    category_code: "10"
sizes:
  - code: "02"
    name: 2T
    age_range: 2-3 years
colors:
  - code: "05"
    name: Red
    hex_value: "#FF0000"
    family: basic
seasons:
  - code: "1"
    name: Spring/Summer
    kind: spring_summer
seed_sequences:
  - type: "1"
    category: "10"
    subcategory: "1"
    size: "02"
    color: "05"
    season: "1"
    sequence: 7
"##;

    #[tokio::test]
    async fn test_parse_and_build() {
        use crate::lookup::CatalogLookup;
        use skuforge_codec::Dimension;

        let file = CatalogFile::from_yaml(SAMPLE).unwrap();
        assert_eq!(file.seed_sequences.len(), 1);
        assert_eq!(file.seed_sequences[0].sequence, 7);

        let catalog = file.build_catalog(SkuLayout::default()).unwrap();
        let res = catalog.resolve(Dimension::Color, "05").await.unwrap();
        assert!(res.is_usable());
        assert_eq!(
            catalog.parent_categories("1").await.unwrap(),
            vec!["10".to_string()]
        );
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let file = CatalogFile::from_yaml("types: []").unwrap();
        assert!(file.categories.is_empty());
        assert!(file.seed_sequences.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, SAMPLE).unwrap();
        let file = CatalogFile::load(&path).unwrap();
        assert_eq!(file.types.len(), 1);
    }
}

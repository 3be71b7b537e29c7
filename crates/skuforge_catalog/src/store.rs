//! In-memory catalog store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use skuforge_codec::{Dimension, SkuCodec, SkuLayout};

use crate::error::{CatalogError, CatalogResult};
use crate::lookup::{CatalogLookup, Resolution};
use crate::models::{ClassificationEntry, Color, Season, SizeEntry, Subcategory};

/// Catalog held entirely in memory.
///
/// Registration enforces the fixed-width numeric code format per dimension
/// and rejects duplicates. Subcategories are keyed by `(category, code)`,
/// so the same digit may exist under different categories.
pub struct InMemoryCatalog {
    codec: SkuCodec,
    hex_pattern: Regex,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    types: BTreeMap<String, ClassificationEntry>,
    categories: BTreeMap<String, ClassificationEntry>,
    subcategories: BTreeMap<(String, String), Subcategory>,
    sizes: BTreeMap<String, SizeEntry>,
    colors: BTreeMap<String, Color>,
    seasons: BTreeMap<String, Season>,
}

impl InMemoryCatalog {
    pub fn new(layout: SkuLayout) -> Self {
        Self {
            codec: SkuCodec::new(layout),
            hex_pattern: Regex::new("^#[0-9A-Fa-f]{6}$")
                .unwrap_or_else(|_| unreachable!("static pattern is valid")),
            inner: RwLock::new(Inner::default()),
        }
    }

    fn check_code(&self, dimension: Dimension, code: &str) -> CatalogResult<()> {
        if self.codec.validate_format(dimension, code) {
            Ok(())
        } else {
            Err(CatalogError::InvalidCode {
                dimension,
                code: code.to_string(),
                expected_width: self.codec.layout().segment_width(dimension),
            })
        }
    }

    pub fn add_type(&self, entry: ClassificationEntry) -> CatalogResult<()> {
        self.check_code(Dimension::Type, &entry.code)?;
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        if inner.types.contains_key(&entry.code) {
            return Err(CatalogError::DuplicateCode {
                dimension: Dimension::Type,
                code: entry.code,
            });
        }
        debug!("Registering product type: {} ({})", entry.code, entry.name);
        inner.types.insert(entry.code.clone(), entry);
        Ok(())
    }

    pub fn add_category(&self, entry: ClassificationEntry) -> CatalogResult<()> {
        self.check_code(Dimension::Category, &entry.code)?;
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        if inner.categories.contains_key(&entry.code) {
            return Err(CatalogError::DuplicateCode {
                dimension: Dimension::Category,
                code: entry.code,
            });
        }
        debug!("Registering category: {} ({})", entry.code, entry.name);
        inner.categories.insert(entry.code.clone(), entry);
        Ok(())
    }

    /// Register a subcategory under its owning category. The category must
    /// already be registered.
    pub fn add_subcategory(&self, sub: Subcategory) -> CatalogResult<()> {
        self.check_code(Dimension::Subcategory, &sub.entry.code)?;
        self.check_code(Dimension::Category, &sub.category_code)?;
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        if !inner.categories.contains_key(&sub.category_code) {
            return Err(CatalogError::UnknownCategory {
                subcategory: sub.entry.code,
                category: sub.category_code,
            });
        }
        let key = (sub.category_code.clone(), sub.entry.code.clone());
        if inner.subcategories.contains_key(&key) {
            return Err(CatalogError::DuplicateCode {
                dimension: Dimension::Subcategory,
                code: sub.entry.code,
            });
        }
        debug!(
            "Registering subcategory: {}/{} ({})",
            sub.category_code, sub.entry.code, sub.entry.name
        );
        inner.subcategories.insert(key, sub);
        Ok(())
    }

    pub fn add_size(&self, size: SizeEntry) -> CatalogResult<()> {
        self.check_code(Dimension::Size, &size.entry.code)?;
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        if inner.sizes.contains_key(&size.entry.code) {
            return Err(CatalogError::DuplicateCode {
                dimension: Dimension::Size,
                code: size.entry.code,
            });
        }
        inner.sizes.insert(size.entry.code.clone(), size);
        Ok(())
    }

    pub fn add_color(&self, color: Color) -> CatalogResult<()> {
        self.check_code(Dimension::Color, &color.entry.code)?;
        if let Some(hex) = &color.hex_value {
            if !self.hex_pattern.is_match(hex) {
                return Err(CatalogError::InvalidHexColor(hex.clone()));
            }
        }
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        if inner.colors.contains_key(&color.entry.code) {
            return Err(CatalogError::DuplicateCode {
                dimension: Dimension::Color,
                code: color.entry.code,
            });
        }
        inner.colors.insert(color.entry.code.clone(), color);
        Ok(())
    }

    pub fn add_season(&self, season: Season) -> CatalogResult<()> {
        self.check_code(Dimension::Season, &season.entry.code)?;
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        if inner.seasons.contains_key(&season.entry.code) {
            return Err(CatalogError::DuplicateCode {
                dimension: Dimension::Season,
                code: season.entry.code,
            });
        }
        inner.seasons.insert(season.entry.code.clone(), season);
        Ok(())
    }

    /// Soft-delete an entry. Returns false if the code is unknown.
    pub fn deactivate(&self, dimension: Dimension, code: &str) -> bool {
        let mut inner = self.inner.write().expect("catalog lock poisoned");
        match dimension {
            Dimension::Type => inner.types.get_mut(code).map(|e| e.deactivate()),
            Dimension::Category => inner.categories.get_mut(code).map(|e| e.deactivate()),
            Dimension::Subcategory => {
                let key = inner
                    .subcategories
                    .keys()
                    .find(|(_, sub)| sub.as_str() == code)
                    .cloned();
                key.and_then(|k| inner.subcategories.get_mut(&k))
                    .map(|s| s.entry.deactivate())
            }
            Dimension::Size => inner.sizes.get_mut(code).map(|s| s.entry.deactivate()),
            Dimension::Color => inner.colors.get_mut(code).map(|c| c.entry.deactivate()),
            Dimension::Season => inner.seasons.get_mut(code).map(|s| s.entry.deactivate()),
        }
        .is_some()
    }

    /// Snapshot the entries of one dimension as `(code, name, active)`
    /// rows in code order, for listings.
    pub fn entries(&self, dimension: Dimension) -> Vec<(String, String, bool)> {
        let inner = self.inner.read().expect("catalog lock poisoned");
        match dimension {
            Dimension::Type => inner
                .types
                .values()
                .map(|e| (e.code.clone(), e.name.clone(), e.active))
                .collect(),
            Dimension::Category => inner
                .categories
                .values()
                .map(|e| (e.code.clone(), e.name.clone(), e.active))
                .collect(),
            Dimension::Subcategory => inner
                .subcategories
                .values()
                .map(|s| {
                    (
                        format!("{}/{}", s.category_code, s.entry.code),
                        s.entry.name.clone(),
                        s.entry.active,
                    )
                })
                .collect(),
            Dimension::Size => inner
                .sizes
                .values()
                .map(|s| (s.entry.code.clone(), s.entry.name.clone(), s.entry.active))
                .collect(),
            Dimension::Color => inner
                .colors
                .values()
                .map(|c| (c.entry.code.clone(), c.entry.name.clone(), c.entry.active))
                .collect(),
            Dimension::Season => inner
                .seasons
                .values()
                .map(|s| (s.entry.code.clone(), s.entry.name.clone(), s.entry.active))
                .collect(),
        }
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn resolve(&self, dimension: Dimension, code: &str) -> CatalogResult<Resolution> {
        let inner = self.inner.read().expect("catalog lock poisoned");
        let resolution = match dimension {
            Dimension::Type => inner.types.get(code).map(|e| Resolution::found(e.active)),
            Dimension::Category => inner
                .categories
                .get(code)
                .map(|e| Resolution::found(e.active)),
            Dimension::Subcategory => {
                // The SKU only carries the digit, so any owning category
                // counts for existence; an active pair wins over inactive.
                let mut best = None;
                for sub in inner.subcategories.values() {
                    if sub.entry.code == code {
                        let res = Resolution::found(sub.entry.active);
                        if res.active {
                            best = Some(res);
                            break;
                        }
                        best.get_or_insert(res);
                    }
                }
                best
            }
            Dimension::Size => inner
                .sizes
                .get(code)
                .map(|s| Resolution::found(s.entry.active)),
            Dimension::Color => inner
                .colors
                .get(code)
                .map(|c| Resolution::found(c.entry.active)),
            Dimension::Season => inner
                .seasons
                .get(code)
                .map(|s| Resolution::found(s.entry.active)),
        };
        Ok(resolution.unwrap_or_else(Resolution::absent))
    }

    async fn parent_categories(&self, subcategory_code: &str) -> CatalogResult<Vec<String>> {
        let inner = self.inner.read().expect("catalog lock poisoned");
        // BTreeMap iteration gives owners in ascending category order.
        Ok(inner
            .subcategories
            .values()
            .filter(|sub| sub.entry.code == subcategory_code)
            .map(|sub| sub.category_code.clone())
            .collect())
    }
}

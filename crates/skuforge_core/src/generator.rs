//! SKU generation orchestration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use skuforge_catalog::CatalogLookup;
use skuforge_codec::{DecodedSku, Dimension, SkuCodec, SkuLayout, SkuSegments};

use crate::allocator::SequenceAllocator;
use crate::error::{CoreError, CoreResult};
use crate::key::CombinationKey;

/// The six classification codes supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRequest {
    #[serde(flatten)]
    pub segments: SkuSegments,
}

impl SkuRequest {
    pub fn new(
        type_code: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            segments: SkuSegments::new(type_code, category, subcategory, size, color, season),
        }
    }
}

/// Orchestrates validation, sequence allocation and encoding.
pub struct SkuGenerator {
    codec: SkuCodec,
    catalog: Arc<dyn CatalogLookup>,
    allocator: Arc<dyn SequenceAllocator>,
}

impl SkuGenerator {
    pub fn new(
        layout: SkuLayout,
        catalog: Arc<dyn CatalogLookup>,
        allocator: Arc<dyn SequenceAllocator>,
    ) -> Self {
        Self {
            codec: SkuCodec::new(layout),
            catalog,
            allocator,
        }
    }

    /// Pure pattern check for one dimension, reusable by administration
    /// surfaces without touching the catalog.
    pub fn validate_format(&self, dimension: Dimension, code: &str) -> bool {
        self.codec.validate_format(dimension, code)
    }

    /// Generate the next SKU for the supplied classification codes.
    ///
    /// Checks run cheapest first and short-circuit: local format checks
    /// before any catalog I/O, referential checks only on well-formed
    /// input, and sequence allocation only once everything passed —
    /// sequences are never consumed by invalid requests.
    pub async fn generate(&self, request: &SkuRequest) -> CoreResult<String> {
        let segments = &request.segments;

        for dim in Dimension::ALL {
            self.codec.check_segment(dim, segments.get(dim))?;
        }

        for dim in Dimension::ALL {
            let code = segments.get(dim);
            let resolution = self.catalog.resolve(dim, code).await?;
            if !resolution.is_usable() {
                debug!("Rejecting {} code '{}': unknown or inactive", dim, code);
                return Err(CoreError::UnknownOrInactiveSegment {
                    dimension: dim,
                    code: code.to_string(),
                });
            }
        }

        let owners = self
            .catalog
            .parent_categories(&segments.subcategory)
            .await?;
        if owners.is_empty() {
            // Resolution already proved the subcategory exists; a missing
            // owner would be a catalog inconsistency, treated as unknown.
            return Err(CoreError::UnknownOrInactiveSegment {
                dimension: Dimension::Subcategory,
                code: segments.subcategory.clone(),
            });
        }
        if !owners.iter().any(|owner| *owner == segments.category) {
            return Err(CoreError::SubcategoryCategoryMismatch {
                subcategory: segments.subcategory.clone(),
                expected_category: owners.join(", "),
                supplied_category: segments.category.clone(),
            });
        }

        let key = CombinationKey::from(segments);
        let sequence = self.allocator.allocate_next(&key).await?;
        let sku = self.codec.encode(segments, sequence)?;
        info!("Generated SKU {} (combination {}, sequence {})", sku, key, sequence);
        Ok(sku)
    }

    /// Decode a SKU into its classification codes and sequence.
    ///
    /// Purely structural: the catalog is never consulted, so historical
    /// codes decode even after their entries were deactivated or renamed.
    pub fn decode(&self, code: &str) -> CoreResult<DecodedSku> {
        Ok(self.codec.decode(code)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::mock;
    use skuforge_catalog::{CatalogResult, Resolution};

    mock! {
        Catalog {}

        #[async_trait::async_trait]
        impl CatalogLookup for Catalog {
            async fn resolve(&self, dimension: Dimension, code: &str) -> CatalogResult<Resolution>;
            async fn parent_categories(&self, subcategory_code: &str) -> CatalogResult<Vec<String>>;
        }
    }

    mock! {
        Allocator {}

        #[async_trait::async_trait]
        impl SequenceAllocator for Allocator {
            async fn allocate_next(&self, key: &CombinationKey) -> CoreResult<u16>;
            async fn seed(&self, key: &CombinationKey, floor: u16) -> CoreResult<()>;
            async fn current(&self, key: &CombinationKey) -> Option<u16>;
        }
    }

    fn generator(catalog: MockCatalog, allocator: MockAllocator) -> SkuGenerator {
        SkuGenerator::new(SkuLayout::default(), Arc::new(catalog), Arc::new(allocator))
    }

    #[tokio::test]
    async fn test_malformed_input_fails_before_any_collaborator_call() {
        let mut catalog = MockCatalog::new();
        catalog.expect_resolve().never();
        catalog.expect_parent_categories().never();
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().never();

        let generator = generator(catalog, allocator);
        let err = generator
            .generate(&SkuRequest::new("X", "10", "1", "02", "05", "1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Codec(skuforge_codec::CodecError::InvalidSegment {
                dimension: Dimension::Type,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_unknown_code_fails_without_allocation() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_resolve()
            .returning(|dim, _| {
                Ok(if dim == Dimension::Color {
                    Resolution::absent()
                } else {
                    Resolution::found(true)
                })
            });
        catalog.expect_parent_categories().never();
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().never();

        let generator = generator(catalog, allocator);
        let err = generator
            .generate(&SkuRequest::new("1", "10", "1", "02", "99", "1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownOrInactiveSegment {
                dimension: Dimension::Color,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_inactive_code_rejected() {
        let mut catalog = MockCatalog::new();
        catalog.expect_resolve().returning(|dim, _| {
            Ok(if dim == Dimension::Season {
                Resolution::found(false)
            } else {
                Resolution::found(true)
            })
        });
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().never();

        let generator = generator(catalog, allocator);
        let err = generator
            .generate(&SkuRequest::new("1", "10", "1", "02", "05", "9"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownOrInactiveSegment {
                dimension: Dimension::Season,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_subcategory_category_mismatch() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_resolve()
            .returning(|_, _| Ok(Resolution::found(true)));
        catalog
            .expect_parent_categories()
            .returning(|_| Ok(vec!["20".to_string()]));
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().never();

        let generator = generator(catalog, allocator);
        let err = generator
            .generate(&SkuRequest::new("1", "10", "9", "02", "05", "1"))
            .await
            .unwrap_err();
        match err {
            CoreError::SubcategoryCategoryMismatch {
                subcategory,
                expected_category,
                supplied_category,
            } => {
                assert_eq!(subcategory, "9");
                assert_eq!(expected_category, "20");
                assert_eq!(supplied_category, "10");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_subcategory_shared_across_categories_accepts_each_owner() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_resolve()
            .returning(|_, _| Ok(Resolution::found(true)));
        catalog
            .expect_parent_categories()
            .returning(|_| Ok(vec!["10".to_string(), "20".to_string()]));
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().once().returning(|_| Ok(1));

        let generator = generator(catalog, allocator);
        let sku = generator
            .generate(&SkuRequest::new("1", "20", "1", "02", "05", "1"))
            .await
            .unwrap();
        assert_eq!(sku, "120102051001");
    }

    #[tokio::test]
    async fn test_subcategory_without_owner_treated_as_unknown() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_resolve()
            .returning(|_, _| Ok(Resolution::found(true)));
        catalog.expect_parent_categories().returning(|_| Ok(Vec::new()));
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().never();

        let generator = generator(catalog, allocator);
        let err = generator
            .generate(&SkuRequest::new("1", "10", "1", "02", "05", "1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownOrInactiveSegment {
                dimension: Dimension::Subcategory,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_happy_path_encodes_allocated_sequence() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_resolve()
            .returning(|_, _| Ok(Resolution::found(true)));
        catalog
            .expect_parent_categories()
            .returning(|_| Ok(vec!["10".to_string()]));
        let mut allocator = MockAllocator::new();
        allocator.expect_allocate_next().once().returning(|_| Ok(1));

        let generator = generator(catalog, allocator);
        let sku = generator
            .generate(&SkuRequest::new("1", "10", "1", "02", "05", "1"))
            .await
            .unwrap();
        assert_eq!(sku, "110102051001");
    }

    #[tokio::test]
    async fn test_decode_never_touches_the_catalog() {
        let mut catalog = MockCatalog::new();
        catalog.expect_resolve().never();
        catalog.expect_parent_categories().never();
        let allocator = MockAllocator::new();

        let generator = generator(catalog, allocator);
        let decoded = generator.decode("110102051001").unwrap();
        assert_eq!(decoded.segments.type_code, "1");
        assert_eq!(decoded.segments.category, "10");
        assert_eq!(decoded.segments.subcategory, "1");
        assert_eq!(decoded.segments.size, "02");
        assert_eq!(decoded.segments.color, "05");
        assert_eq!(decoded.segments.season, "1");
        assert_eq!(decoded.sequence, 1);
    }
}

//! # skuforge_core
//!
//! Sequence allocation and SKU generation orchestration.
//!
//! [`SkuGenerator`] ties the pieces together: it validates the six
//! supplied classification codes (format first, then catalog resolution,
//! then the subcategory/category relationship), reserves the next
//! per-combination sequence through a [`SequenceAllocator`], and encodes
//! the final 12-digit code. Sequences are a scarce, non-reusable resource:
//! invalid requests never consume one, and a reserved number that was
//! never stored stays burned rather than rolled back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use skuforge_catalog::InMemoryCatalog;
//! use skuforge_codec::SkuLayout;
//! use skuforge_core::{InMemorySequenceAllocator, SkuGenerator, SkuRequest};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = SkuLayout::default();
//! let catalog = Arc::new(InMemoryCatalog::new(layout.clone()));
//! let allocator = Arc::new(InMemorySequenceAllocator::new(layout.max_sequence));
//!
//! let generator = SkuGenerator::new(layout, catalog, allocator);
//! let request = SkuRequest::new("1", "10", "1", "02", "05", "1");
//! let sku = generator.generate(&request).await?;
//! assert_eq!(sku.len(), 12);
//! # Ok(())
//! # }
//! ```

pub mod allocator;
pub mod error;
pub mod generator;
pub mod key;

pub use allocator::{InMemorySequenceAllocator, SequenceAllocator};
pub use error::{CoreError, CoreResult};
pub use generator::{SkuGenerator, SkuRequest};
pub use key::CombinationKey;

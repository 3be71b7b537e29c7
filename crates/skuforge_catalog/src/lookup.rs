//! The lookup contract consumed by the SKU generator.

use async_trait::async_trait;

use skuforge_codec::Dimension;

use crate::error::CatalogResult;

/// Outcome of resolving a code in one dimension.
///
/// Absence is a normal outcome, not a fault: a code that is not in the
/// catalog resolves to [`Resolution::absent`], never to an error. Errors
/// are reserved for infrastructure failures of a real backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub exists: bool,
    pub active: bool,
}

impl Resolution {
    pub fn absent() -> Self {
        Self {
            exists: false,
            active: false,
        }
    }

    pub fn found(active: bool) -> Self {
        Self { exists: true, active }
    }

    /// Known to the catalog and not soft-deleted.
    pub fn is_usable(&self) -> bool {
        self.exists && self.active
    }
}

/// Read-only catalog access.
///
/// Implementations must be `Send + Sync`; the generator holds one behind
/// an `Arc<dyn CatalogLookup>` and may call it from concurrent tasks.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Resolve a code within one classification dimension.
    async fn resolve(&self, dimension: Dimension, code: &str) -> CatalogResult<Resolution>;

    /// Every category that owns a subcategory with this code, in code
    /// order. Empty when the code is unknown.
    ///
    /// Subcategory codes are scoped to their category, so the same digit
    /// may be registered under several categories; the generator accepts
    /// a combination only when the supplied category is among the owners.
    async fn parent_categories(&self, subcategory_code: &str) -> CatalogResult<Vec<String>>;
}

//! # skuforge_catalog
//!
//! Classification catalog models and the lookup contract consumed by the
//! SKU generator.
//!
//! Six independent catalogs exist: product type, category, subcategory,
//! size, color and season. Each entry carries a fixed-width numeric code
//! (the digits that end up inside the SKU), a descriptive name, an active
//! flag for soft deletion, and audit stamps. Subcategory codes are unique
//! only within their owning category, not globally.
//!
//! The generator core consumes only the [`CatalogLookup`] trait; the
//! in-memory store here is one implementation of it, suitable for tests,
//! the CLI, and seeding. Display metadata (color hex values, season kinds)
//! never crosses that boundary — the core only ever sees code strings.

pub mod error;
pub mod file;
pub mod lookup;
pub mod models;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use file::CatalogFile;
pub use lookup::{CatalogLookup, Resolution};
pub use models::{
    ClassificationEntry, Color, ColorFamily, Season, SeasonKind, SizeEntry, Subcategory,
};
pub use store::InMemoryCatalog;

//! Classification catalog models.
//!
//! Entries are created and edited by catalog administration and only read
//! by the generator. Audit stamps live here, in the collaborator layer,
//! never in the codec or allocator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Common fields shared by every catalog entry.
///
/// `code` holds the digits that appear inside the SKU; its exact width
/// depends on the dimension and is enforced by the store on registration.
/// `active` implements soft deletion: inactive entries stay resolvable
/// (historical SKUs still decode) but are rejected for new products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub modified_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl ClassificationEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            code: code.into(),
            name: name.into(),
            description: None,
            active: true,
            display_order: 0,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_display_order(mut self, order: u32) -> Self {
        self.display_order = order;
        self
    }

    /// Soft-delete the entry. The code is never freed for reuse.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.modified_at = Utc::now();
    }
}

/// A subcategory, owned by exactly one category. Its single-digit code is
/// unique within the owning category only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(flatten)]
    pub entry: ClassificationEntry,
    pub category_code: String,
}

impl Subcategory {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category_code: impl Into<String>,
    ) -> Self {
        Self {
            entry: ClassificationEntry::new(code, name),
            category_code: category_code.into(),
        }
    }
}

/// A size entry, optionally labelled with the age range it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    #[serde(flatten)]
    pub entry: ClassificationEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
}

impl SizeEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entry: ClassificationEntry::new(code, name),
            age_range: None,
        }
    }

    pub fn with_age_range(mut self, range: impl Into<String>) -> Self {
        self.age_range = Some(range.into());
        self
    }
}

/// Broad grouping of colors for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFamily {
    Basic,
    Pattern,
}

/// A color entry with optional display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(flatten)]
    pub entry: ClassificationEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<ColorFamily>,
}

impl Color {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entry: ClassificationEntry::new(code, name),
            hex_value: None,
            family: None,
        }
    }

    pub fn with_hex(mut self, hex: impl Into<String>) -> Self {
        self.hex_value = Some(hex.into());
        self
    }

    pub fn with_family(mut self, family: ColorFamily) -> Self {
        self.family = Some(family);
        self
    }
}

/// Which part of the year a season entry covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonKind {
    SpringSummer,
    FallWinter,
    YearRound,
}

/// A season entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(flatten)]
    pub entry: ClassificationEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeasonKind>,
}

impl Season {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entry: ClassificationEntry::new(code, name),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: SeasonKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_active() {
        let entry = ClassificationEntry::new("10", "Tops");
        assert!(entry.active);
        assert_eq!(entry.code, "10");
    }

    #[test]
    fn test_deactivate_keeps_code() {
        let mut entry = ClassificationEntry::new("10", "Tops");
        entry.deactivate();
        assert!(!entry.active);
        assert_eq!(entry.code, "10");
    }

    #[test]
    fn test_subcategory_carries_owner() {
        let sub = Subcategory::new("1", "Basic tees", "10");
        assert_eq!(sub.category_code, "10");
        assert_eq!(sub.entry.code, "1");
    }
}

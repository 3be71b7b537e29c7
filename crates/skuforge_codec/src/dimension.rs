//! Classification dimension identifiers.

use serde::{Deserialize, Serialize};

/// One of the six independent classification catalogs a product draws a
/// code from. The declaration order is the field order of the SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Type,
    Category,
    Subcategory,
    Size,
    Color,
    Season,
}

impl Dimension {
    /// All dimensions in SKU field order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Type,
        Dimension::Category,
        Dimension::Subcategory,
        Dimension::Size,
        Dimension::Color,
        Dimension::Season,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Type => "type",
            Dimension::Category => "category",
            Dimension::Subcategory => "subcategory",
            Dimension::Size => "size",
            Dimension::Color => "color",
            Dimension::Season => "season",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "type" => Ok(Dimension::Type),
            "category" => Ok(Dimension::Category),
            "subcategory" => Ok(Dimension::Subcategory),
            "size" => Ok(Dimension::Size),
            "color" => Ok(Dimension::Color),
            "season" => Ok(Dimension::Season),
            other => Err(format!(
                "Unknown dimension '{}' (expected one of: type, category, subcategory, size, color, season)",
                other
            )),
        }
    }
}

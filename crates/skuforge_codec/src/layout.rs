//! Segment layout configuration.
//!
//! The layout is an explicit configuration value passed into [`SkuCodec`]
//! and the generator at construction, never a global. The default matches
//! the children's clothing catalog: `1 + 2 + 1 + 2 + 2 + 1` classification
//! digits plus a 3-digit sequence, 12 characters total.
//!
//! [`SkuCodec`]: crate::codec::SkuCodec

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Fixed-width layout of a SKU code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuLayout {
    pub type_width: usize,
    pub category_width: usize,
    pub subcategory_width: usize,
    pub size_width: usize,
    pub color_width: usize,
    pub season_width: usize,
    pub sequence_width: usize,
    /// Highest sequence a combination may be assigned.
    pub max_sequence: u16,
}

impl Default for SkuLayout {
    fn default() -> Self {
        Self {
            type_width: 1,
            category_width: 2,
            subcategory_width: 1,
            size_width: 2,
            color_width: 2,
            season_width: 1,
            sequence_width: 3,
            max_sequence: 999,
        }
    }
}

impl SkuLayout {
    /// Width of one classification segment.
    pub fn segment_width(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Type => self.type_width,
            Dimension::Category => self.category_width,
            Dimension::Subcategory => self.subcategory_width,
            Dimension::Size => self.size_width,
            Dimension::Color => self.color_width,
            Dimension::Season => self.season_width,
        }
    }

    /// Byte range of one classification segment within the code.
    pub fn segment_range(&self, dimension: Dimension) -> Range<usize> {
        let mut offset = 0;
        for dim in Dimension::ALL {
            let width = self.segment_width(dim);
            if dim == dimension {
                return offset..offset + width;
            }
            offset += width;
        }
        unreachable!("Dimension::ALL covers every variant");
    }

    /// Byte range of the sequence suffix.
    pub fn sequence_range(&self) -> Range<usize> {
        let start = Dimension::ALL.iter().map(|d| self.segment_width(*d)).sum();
        start..start + self.sequence_width
    }

    /// Total length of an encoded code.
    pub fn total_len(&self) -> usize {
        self.sequence_range().end
    }
}

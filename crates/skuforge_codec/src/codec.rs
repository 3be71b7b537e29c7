//! Fixed-offset SKU encoding and decoding.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dimension::Dimension;
use crate::error::{CodecError, CodecResult};
use crate::layout::SkuLayout;

/// The six classification codes of one product, in SKU field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuSegments {
    #[serde(rename = "type")]
    pub type_code: String,
    pub category: String,
    pub subcategory: String,
    pub size: String,
    pub color: String,
    pub season: String,
}

impl SkuSegments {
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

    /// The code for one dimension.
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Type => &self.type_code,
            Dimension::Category => &self.category,
            Dimension::Subcategory => &self.subcategory,
            Dimension::Size => &self.size,
            Dimension::Color => &self.color,
            Dimension::Season => &self.season,
        }
    }
}

/// A SKU broken back into its classification codes and sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSku {
    #[serde(flatten)]
    pub segments: SkuSegments,
    pub sequence: u16,
}

/// Encoder/decoder for fixed-layout SKU codes.
///
/// Both directions are pure string operations: decoding a historical code
/// succeeds even if the originating classification entry was later
/// deactivated or renamed.
pub struct SkuCodec {
    layout: SkuLayout,
    patterns: HashMap<Dimension, Regex>,
}

impl SkuCodec {
    /// Build a codec for a layout, compiling one fixed-width digit pattern
    /// per dimension.
    pub fn new(layout: SkuLayout) -> Self {
        let patterns = Dimension::ALL
            .iter()
            .map(|dim| {
                let width = layout.segment_width(*dim);
                let pattern = format!("^[0-9]{{{}}}$", width);
                let regex = Regex::new(&pattern)
                    .unwrap_or_else(|_| unreachable!("fixed-width digit pattern is always valid"));
                (*dim, regex)
            })
            .collect();
        Self { layout, patterns }
    }

    pub fn layout(&self) -> &SkuLayout {
        &self.layout
    }

    /// Pure pattern check: does `code` match the dimension's exact width
    /// and all-digit charset?
    pub fn validate_format(&self, dimension: Dimension, code: &str) -> bool {
        self.patterns[&dimension].is_match(code)
    }

    /// Check one segment, naming the offending dimension on failure.
    pub fn check_segment(&self, dimension: Dimension, code: &str) -> CodecResult<()> {
        if self.validate_format(dimension, code) {
            Ok(())
        } else {
            Err(CodecError::InvalidSegment {
                dimension,
                code: code.to_string(),
                expected_width: self.layout.segment_width(dimension),
            })
        }
    }

    /// Encode six classification codes and a sequence into a SKU.
    pub fn encode(&self, segments: &SkuSegments, sequence: u16) -> CodecResult<String> {
        for dim in Dimension::ALL {
            self.check_segment(dim, segments.get(dim))?;
        }
        if sequence < 1 || sequence > self.layout.max_sequence {
            return Err(CodecError::SequenceOutOfRange {
                sequence: sequence as u32,
                max: self.layout.max_sequence,
            });
        }

        let mut code = String::with_capacity(self.layout.total_len());
        for dim in Dimension::ALL {
            code.push_str(segments.get(dim));
        }
        code.push_str(&format!(
            "{:0width$}",
            sequence,
            width = self.layout.sequence_width
        ));

        debug!("Encoded SKU: {}", code);
        Ok(code)
    }

    /// Decode a SKU back into its segments by slicing fixed offsets.
    pub fn decode(&self, code: &str) -> CodecResult<DecodedSku> {
        let expected = self.layout.total_len();
        if code.len() != expected {
            return Err(CodecError::InvalidLength {
                expected,
                actual: code.len(),
            });
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidCharacters {
                code: code.to_string(),
            });
        }

        let segments = SkuSegments::new(
            &code[self.layout.segment_range(Dimension::Type)],
            &code[self.layout.segment_range(Dimension::Category)],
            &code[self.layout.segment_range(Dimension::Subcategory)],
            &code[self.layout.segment_range(Dimension::Size)],
            &code[self.layout.segment_range(Dimension::Color)],
            &code[self.layout.segment_range(Dimension::Season)],
        );
        let sequence: u16 = code[self.layout.sequence_range()]
            .parse()
            .unwrap_or_else(|_| unreachable!("all-digit sequence of width <= 3 fits in u16"));
        if sequence < 1 || sequence > self.layout.max_sequence {
            return Err(CodecError::SequenceOutOfRange {
                sequence: sequence as u32,
                max: self.layout.max_sequence,
            });
        }

        Ok(DecodedSku { segments, sequence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> SkuCodec {
        SkuCodec::new(SkuLayout::default())
    }

    fn segments() -> SkuSegments {
        SkuSegments::new("1", "10", "1", "02", "05", "1")
    }

    #[test]
    fn test_worked_example() {
        let code = codec().encode(&segments(), 1).unwrap();
        assert_eq!(code, "110102051001");

        let second = codec().encode(&segments(), 2).unwrap();
        assert_eq!(second, "110102051002");
    }

    #[test]
    fn test_decode_worked_example() {
        let decoded = codec().decode("110102051001").unwrap();
        assert_eq!(decoded.segments, segments());
        assert_eq!(decoded.sequence, 1);
    }

    #[test]
    fn test_round_trip() {
        let codec = codec();
        let tuples = [
            SkuSegments::new("0", "00", "0", "00", "00", "0"),
            SkuSegments::new("9", "99", "9", "99", "99", "9"),
            SkuSegments::new("2", "31", "4", "08", "12", "3"),
        ];
        for segs in &tuples {
            for seq in [1u16, 42, 999] {
                let code = codec.encode(segs, seq).unwrap();
                let decoded = codec.decode(&code).unwrap();
                assert_eq!(&decoded.segments, segs);
                assert_eq!(decoded.sequence, seq);
            }
        }
    }

    #[test]
    fn test_encode_rejects_bad_width() {
        let err = codec()
            .encode(&SkuSegments::new("1", "100", "1", "02", "05", "1"), 1)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidSegment {
                dimension: Dimension::Category,
                code: "100".into(),
                expected_width: 2,
            }
        );
    }

    #[test]
    fn test_encode_rejects_non_digit() {
        let err = codec()
            .encode(&SkuSegments::new("X", "10", "1", "02", "05", "1"), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidSegment {
                dimension: Dimension::Type,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_rejects_sequence_out_of_range() {
        assert_eq!(
            codec().encode(&segments(), 0).unwrap_err(),
            CodecError::SequenceOutOfRange { sequence: 0, max: 999 }
        );
        assert_eq!(
            codec().encode(&segments(), 1000).unwrap_err(),
            CodecError::SequenceOutOfRange { sequence: 1000, max: 999 }
        );
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(
            codec().decode("1101020510").unwrap_err(),
            CodecError::InvalidLength { expected: 12, actual: 10 }
        );
        assert_eq!(
            codec().decode("1101020510011").unwrap_err(),
            CodecError::InvalidLength { expected: 12, actual: 13 }
        );
    }

    #[test]
    fn test_decode_rejects_non_digit() {
        let err = codec().decode("11010205100A").unwrap_err();
        assert!(matches!(err, CodecError::InvalidCharacters { .. }));
    }

    #[test]
    fn test_decode_rejects_zero_sequence() {
        let err = codec().decode("110102051000").unwrap_err();
        assert!(matches!(err, CodecError::SequenceOutOfRange { sequence: 0, .. }));
    }

    #[test]
    fn test_validate_format() {
        let codec = codec();
        assert!(codec.validate_format(Dimension::Type, "7"));
        assert!(codec.validate_format(Dimension::Category, "42"));
        assert!(!codec.validate_format(Dimension::Type, "10"));
        assert!(!codec.validate_format(Dimension::Category, "4"));
        assert!(!codec.validate_format(Dimension::Size, "a2"));
        assert!(!codec.validate_format(Dimension::Season, ""));
    }
}

//! # skuforge_codec
//!
//! Segment layout configuration and fixed-offset SKU encoding/decoding.
//!
//! A SKU is a 12-character all-digit string built from six classification
//! codes plus a zero-padded sequence number:
//!
//! ```text
//! position:  T CC S TT CC S ###
//! field:     type, category, subcategory, size, color, season, sequence
//! widths:    1  2  1  2  2  1  3
//! ```
//!
//! This crate is pure: encoding and decoding never touch a catalog or any
//! other collaborator. Stored historical codes must remain decodable under
//! this fixed-offset scheme indefinitely, so the layout is a compatibility
//! contract.
//!
//! ## Example
//!
//! ```rust
//! use skuforge_codec::{SkuCodec, SkuLayout, SkuSegments};
//!
//! let codec = SkuCodec::new(SkuLayout::default());
//! let segments = SkuSegments::new("1", "10", "1", "02", "05", "1");
//!
//! let code = codec.encode(&segments, 1).unwrap();
//! assert_eq!(code, "110102051001");
//!
//! let decoded = codec.decode(&code).unwrap();
//! assert_eq!(decoded.sequence, 1);
//! assert_eq!(decoded.segments.category, "10");
//! ```

pub mod codec;
pub mod dimension;
pub mod error;
pub mod layout;

pub use codec::{DecodedSku, SkuCodec, SkuSegments};
pub use dimension::Dimension;
pub use error::{CodecError, CodecResult};
pub use layout::SkuLayout;

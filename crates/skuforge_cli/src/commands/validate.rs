//! Validate command - pure format check of one code.

use anyhow::Result;
use clap::Args;

use skuforge_codec::{Dimension, SkuCodec, SkuLayout};

#[derive(Args)]
pub struct ValidateArgs {
    /// Dimension to check against (type, category, subcategory, size, color, season)
    pub dimension: Dimension,

    /// The code to check
    pub code: String,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let codec = SkuCodec::new(SkuLayout::default());

    if codec.validate_format(args.dimension, &args.code) {
        println!("'{}' is a valid {} code", args.code, args.dimension);
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid {} code '{}': expected exactly {} digit(s)",
            args.dimension,
            args.code,
            codec.layout().segment_width(args.dimension)
        );
    }
}

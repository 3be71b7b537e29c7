//! Decode command - break a SKU back into its fields.

use anyhow::Result;
use clap::Args;

use skuforge_codec::{SkuCodec, SkuLayout};

#[derive(Args)]
pub struct DecodeArgs {
    /// The 12-digit SKU to decode
    pub code: String,

    /// Emit JSON instead of a field table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DecodeArgs) -> Result<()> {
    let codec = SkuCodec::new(SkuLayout::default());
    let decoded = codec.decode(&args.code)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        println!("type:        {}", decoded.segments.type_code);
        println!("category:    {}", decoded.segments.category);
        println!("subcategory: {}", decoded.segments.subcategory);
        println!("size:        {}", decoded.segments.size);
        println!("color:       {}", decoded.segments.color);
        println!("season:      {}", decoded.segments.season);
        println!("sequence:    {}", decoded.sequence);
    }

    Ok(())
}

//! CLI command definitions.
//!
//! Each subcommand maps to one operation of the SKU core: generation,
//! decoding, pure format validation, and catalog inspection.

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod decode;
pub mod generate;
pub mod validate;

/// SkuForge - structured product code generation
#[derive(Parser)]
#[command(name = "skuforge")]
#[command(version, about = "SkuForge - structured product code generation")]
#[command(long_about = r#"
SkuForge assigns unique, structurally meaningful 12-digit product codes
(SKUs) to items in a children's clothing catalog, and decodes such codes
back into their classifying attributes.

COMMANDS:
  generate  → Validate six classification codes and issue the next SKU
  decode    → Break a 12-digit SKU back into its seven fields
  validate  → Pure format check of one code against its dimension
  catalog   → Inspect the entries of a catalog file

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the next SKU for six classification codes
    Generate(generate::GenerateArgs),

    /// Decode a 12-digit SKU into its classification codes and sequence
    Decode(decode::DecodeArgs),

    /// Check one code against its dimension's format pattern
    Validate(validate::ValidateArgs),

    /// Inspect a catalog file
    Catalog(catalog::CatalogArgs),
}

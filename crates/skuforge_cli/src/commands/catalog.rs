//! Catalog command - inspect a catalog file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skuforge_catalog::CatalogFile;
use skuforge_codec::{Dimension, SkuLayout};

#[derive(Args)]
pub struct CatalogArgs {
    /// Path to the catalog YAML file
    #[arg(short = 'f', long)]
    pub catalog: PathBuf,

    /// Restrict the listing to one dimension
    #[arg(short, long)]
    pub dimension: Option<Dimension>,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let file = CatalogFile::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let catalog = file.build_catalog(SkuLayout::default())?;

    let dimensions: Vec<Dimension> = match args.dimension {
        Some(dim) => vec![dim],
        None => Dimension::ALL.to_vec(),
    };

    for dim in dimensions {
        let entries = catalog.entries(dim);
        println!("{} ({} entries)", dim, entries.len());
        for (code, name, active) in entries {
            let marker = if active { " " } else { "x" };
            println!("  [{}] {}  {}", marker, code, name);
        }
    }

    if !file.seed_sequences.is_empty() {
        println!("seed sequences ({} entries)", file.seed_sequences.len());
        for seed in &file.seed_sequences {
            println!(
                "      {}-{}-{}-{}-{}-{}  -> {}",
                seed.type_code,
                seed.category,
                seed.subcategory,
                seed.size,
                seed.color,
                seed.season,
                seed.sequence
            );
        }
    }

    Ok(())
}

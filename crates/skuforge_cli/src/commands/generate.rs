//! Generate command - issue the next SKU for a classification combination.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use skuforge_catalog::CatalogFile;
use skuforge_codec::SkuLayout;
use skuforge_core::{
    CombinationKey, InMemorySequenceAllocator, SequenceAllocator, SkuGenerator, SkuRequest,
};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the catalog YAML file
    #[arg(short = 'f', long)]
    pub catalog: PathBuf,

    /// Product type code (1 digit)
    #[arg(short = 't', long = "type")]
    pub type_code: String,

    /// Category code (2 digits)
    #[arg(short = 'c', long)]
    pub category: String,

    /// Subcategory code (1 digit, scoped to the category)
    #[arg(short = 'u', long)]
    pub subcategory: String,

    /// Size code (2 digits)
    #[arg(short = 's', long)]
    pub size: String,

    /// Color code (2 digits)
    #[arg(short = 'o', long)]
    pub color: String,

    /// Season code (1 digit)
    #[arg(short = 'e', long)]
    pub season: String,

    /// Number of sibling codes to issue
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub count: u16,

    /// Emit JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let layout = SkuLayout::default();

    let file = CatalogFile::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let catalog = Arc::new(file.build_catalog(layout.clone())?);

    let allocator = Arc::new(InMemorySequenceAllocator::new(layout.max_sequence));
    // Seed counters past combinations imported out of band, so the next
    // allocation never collides with an existing code.
    for seed in &file.seed_sequences {
        let key = CombinationKey::new(
            &seed.type_code,
            &seed.category,
            &seed.subcategory,
            &seed.size,
            &seed.color,
            &seed.season,
        );
        allocator.seed(&key, seed.sequence).await?;
        info!("Seeded combination {} to sequence {}", key, seed.sequence);
    }

    let generator = SkuGenerator::new(layout, catalog, allocator);
    let request = SkuRequest::new(
        &args.type_code,
        &args.category,
        &args.subcategory,
        &args.size,
        &args.color,
        &args.season,
    );

    let mut codes = Vec::with_capacity(args.count as usize);
    for _ in 0..args.count {
        codes.push(generator.generate(&request).await?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        for code in &codes {
            println!("{}", code);
        }
    }

    Ok(())
}

//! `daytona brands`: list catalog brands.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliResult};

/// List every brand in the catalog
#[derive(Debug, Clone, Args)]
pub struct BrandsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct BrandOutput {
    id: String,
    name: String,
    logo: String,
    models: usize,
    displacements: Vec<u32>,
}

#[derive(Serialize, Debug)]
struct BrandsOutput {
    fallback: bool,
    brands: Vec<BrandOutput>,
}

impl BrandsArgs {
    /// Execute the brands command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let store = ctx.load_store();
        let brands: Vec<BrandOutput> = store
            .catalog()
            .iter()
            .map(|(id, brand)| BrandOutput {
                id: id.to_string(),
                name: brand.name.clone(),
                logo: brand.logo_path.clone(),
                models: brand.models.len(),
                displacements: brand.displacements(),
            })
            .collect();

        if self.json {
            return print_json(&BrandsOutput {
                fallback: store.is_fallback(),
                brands,
            });
        }

        if store.is_fallback() {
            eprintln!("Warning: catalog unavailable, showing fallback data");
        }
        if brands.is_empty() {
            println!("No brands in catalog");
            return Ok(());
        }
        for brand in &brands {
            let displacements: Vec<String> =
                brand.displacements.iter().map(|cc| format!("{cc}cc")).collect();
            println!(
                "{:<12} {:<16} {:>2} models  {}",
                brand.id,
                brand.name,
                brand.models,
                displacements.join(", ")
            );
        }
        Ok(())
    }
}

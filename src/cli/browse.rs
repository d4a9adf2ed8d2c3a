//! `daytona browse`: a brand's displacement filters and models.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::services::browser::{NO_MODELS_MESSAGE, SELECT_PROMPT};
use crate::services::{CatalogBrowser, PanelContent};

/// Show a brand panel: its displacement filters and, with --cc, the models
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Brand identifier or display name
    #[arg(value_name = "BRAND")]
    pub brand: String,

    /// Displacement filter in cc
    #[arg(long, value_name = "CC")]
    pub cc: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct CardOutput {
    model: String,
    displacement: u32,
    colors: Vec<String>,
    image: String,
}

#[derive(Serialize, Debug)]
struct PanelOutput {
    brand_id: String,
    title: String,
    filters: Vec<u32>,
    active_filter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    models: Vec<CardOutput>,
}

impl BrowseArgs {
    /// Execute the browse command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let store = ctx.load_store();
        let catalog = store.catalog();
        let brand_id = catalog
            .resolve_brand_id(&self.brand)
            .ok_or_else(|| CliError::validation(format!("Unknown brand: {}", self.brand)))?
            .to_string();

        let mut browser = CatalogBrowser::new();
        browser.open_brand(catalog, &brand_id);
        if let Some(cc) = self.cc {
            browser.select_displacement(catalog, cc);
        }
        let panel = browser
            .panel()
            .ok_or_else(|| CliError::validation(format!("Unknown brand: {}", self.brand)))?;

        let message = match panel.content {
            PanelContent::Prompt => Some(SELECT_PROMPT),
            PanelContent::Empty => Some(NO_MODELS_MESSAGE),
            PanelContent::Models(_) => None,
        };
        let models: Vec<CardOutput> = panel
            .content
            .cards()
            .iter()
            .filter_map(|card| {
                let model = catalog.model(&card.key)?;
                Some(CardOutput {
                    model: model.name.clone(),
                    displacement: model.displacement,
                    colors: model.colors.clone(),
                    image: card.image.clone(),
                })
            })
            .collect();

        let output = PanelOutput {
            brand_id: panel.brand_id.clone(),
            title: panel.title.clone(),
            filters: panel.filters.clone(),
            active_filter: panel.active_filter,
            message,
            models,
        };

        if self.json {
            return print_json(&output);
        }

        println!("{}", output.title);
        let filters: Vec<String> = output
            .filters
            .iter()
            .map(|cc| {
                if output.active_filter == Some(*cc) {
                    format!("[{cc}cc]")
                } else {
                    format!("{cc}cc")
                }
            })
            .collect();
        println!("Cilindradas: {}", filters.join("  "));
        if let Some(message) = output.message {
            println!("{message}");
        }
        for card in &output.models {
            println!(
                "  {} ({}cc)  {}  {}",
                card.model,
                card.displacement,
                card.colors.join("/"),
                card.image
            );
        }
        Ok(())
    }
}

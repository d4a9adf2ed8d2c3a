//! `daytona lead`: build the advice-request message and deep link.

use clap::Args;
use tracing::info;

use crate::app::link::{LinkOpener, SystemLinkOpener};
use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::services::{Contact, LeadForm};

/// Build a WhatsApp advice request for a model
#[derive(Debug, Clone, Args)]
pub struct LeadArgs {
    /// Brand identifier or display name
    #[arg(value_name = "BRAND")]
    pub brand: String,

    /// Model name (case-insensitive)
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Customer name; blank becomes "Cliente"
    #[arg(long, default_value = "")]
    pub name: String,

    /// Customer phone (kept out of the message)
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Color; defaults to the model's first color
    #[arg(long)]
    pub color: Option<String>,

    /// Receiving contact
    #[arg(long, default_value = "owner", value_parser = parse_contact)]
    pub contact: Contact,

    /// Open the link with the system handler
    #[arg(long)]
    pub open: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_contact(value: &str) -> Result<Contact, String> {
    value.parse()
}

impl LeadArgs {
    /// Execute the lead command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let store = ctx.load_store();
        let catalog = store.catalog();
        let brand_id = catalog
            .resolve_brand_id(&self.brand)
            .ok_or_else(|| CliError::validation(format!("Unknown brand: {}", self.brand)))?;
        let brand = catalog
            .get(brand_id)
            .ok_or_else(|| CliError::validation(format!("Unknown brand: {}", self.brand)))?;

        let wanted = self.model.to_lowercase();
        let model = brand
            .models
            .iter()
            .find(|m| m.name.to_lowercase() == wanted)
            .ok_or_else(|| {
                CliError::validation(format!("Unknown model for {}: {}", brand.name, self.model))
            })?;

        if let Some(color) = &self.color {
            if model.color_index(color).is_none() {
                return Err(CliError::validation(format!(
                    "Unknown color for {}: {color} (available: {})",
                    model.name,
                    model.colors.join(", ")
                )));
            }
        }

        let mut form = LeadForm::new();
        form.open(&brand.name, model, self.color.as_deref());
        form.name.clone_from(&self.name);
        form.phone.clone_from(&self.phone);
        let lead = form
            .submit(self.contact)
            .ok_or_else(|| CliError::io("Lead form did not open"))?;
        info!(contact = %self.contact, "Lead for {} {}", lead.brand, lead.model);

        if self.open {
            SystemLinkOpener
                .open(&lead.link)
                .map_err(|e| CliError::io(format!("Failed to open link: {e:#}")))?;
        }

        if self.json {
            return print_json(&lead);
        }
        println!("{}", lead.message);
        println!("{}", lead.link);
        Ok(())
    }
}

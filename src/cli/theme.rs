//! `daytona theme`: show or change the stored theme preference.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::config::ThemePreference;
use crate::services::{FilePreferenceStore, ThemeController};

/// Theme preference commands
#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommand>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum ThemeCommand {
    /// Display the stored theme (default)
    Show,
    /// Switch between light and dark
    Toggle,
    /// Store a specific theme
    Set {
        /// light or dark
        #[arg(value_name = "THEME")]
        theme: String,
    },
}

#[derive(Serialize, Debug)]
struct ThemeOutput {
    theme: ThemePreference,
    icon: &'static str,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let preferences = FilePreferenceStore::in_config_dir()
            .map_err(|e| CliError::io(format!("Failed to locate config directory: {e:#}")))?;
        let store = ctx.load_store();
        let mut controller = ThemeController::new(Box::new(preferences), store.catalog());
        controller.initialize();

        match &self.command {
            None | Some(ThemeCommand::Show) => {}
            Some(ThemeCommand::Toggle) => {
                controller.toggle();
            }
            Some(ThemeCommand::Set { theme }) => {
                let preference: ThemePreference =
                    theme.parse().map_err(CliError::validation)?;
                controller.set(preference);
            }
        }

        let output = ThemeOutput {
            theme: controller.preference(),
            icon: controller.icon(),
        };
        if self.json {
            return print_json(&output);
        }
        println!("{}", output.theme);
        Ok(())
    }
}

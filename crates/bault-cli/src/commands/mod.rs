//! CLI command definitions and dispatch.

pub mod run;
pub mod shell;
pub mod tree;

use clap::{Parser, Subcommand};

use bault_core::config::AppConfig;
use bault_core::result::AppResult;
use bault_service::Dashboard;

use crate::output::OutputFormat;

use shell::Session;

/// Bault: an in-memory file manager dashboard
#[derive(Debug, Parser)]
#[command(name = "bault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard shell
    Shell,
    /// Run shell commands from a script file
    Run(run::RunArgs),
    /// Print the folder tree of a fresh dashboard
    Tree,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let dashboard = Dashboard::new(config)?;

        match &self.command {
            Commands::Shell => {
                let mut session = Session::new(dashboard, self.format, true);
                shell::run_interactive(&mut session).await
            }
            Commands::Run(args) => {
                let mut session = Session::new(dashboard, self.format, false);
                run::execute(args, &mut session).await
            }
            Commands::Tree => {
                tree::print_tree(&dashboard.folder_tree(), self.format);
                Ok(())
            }
        }
    }
}

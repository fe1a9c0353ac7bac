use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashpilot::config::{paths::CashpilotPaths, settings::Settings};
use cashpilot::store::{demo::seed_demo_data, Store};
use cashpilot::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "cashpilot",
    version,
    about = "Terminal-based personal finance dashboard",
    long_about = "Cashpilot is a single-screen personal finance dashboard for the \
                  terminal. Log expenses and income, set budget guardrails, and let \
                  the built-in agents surface what needs attention this month."
)]
struct Cli {
    /// Start with a set of sample expenses, budgets, and income streams
    #[arg(long)]
    demo: bool,

    /// Override the config directory
    #[arg(long, value_name = "DIR", env = "CASHPILOT_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.config_dir {
        Some(dir) => CashpilotPaths::with_base_dir(dir),
        None => CashpilotPaths::new()?,
    };
    let first_run = !paths.settings_file().exists();
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Cashpilot Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        None => {
            // Persist defaults on first launch so they can be edited
            if first_run {
                settings.save(&paths)?;
            }

            let store = Store::new();
            if cli.demo {
                seed_demo_data(&store)?;
            }

            run_tui(&store, &settings)?;
        }
    }

    Ok(())
}

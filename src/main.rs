use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod commands;
mod config;

use app::App;
use commands::{
    ConfigCommand, FavoriteCommand, PlanCommand, PrefsCommand, RecipeCommand, ShoppingCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "mealplan")]
#[command(version)]
#[command(about = "Plan a week of meals and build the shopping list", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and view recipes
    Recipe(RecipeCommand),

    /// Manage the weekly meal plan
    Plan(PlanCommand),

    /// Manage the shopping list
    Shopping(ShoppingCommand),

    /// Manage favorite recipes
    Favorite(FavoriteCommand),

    /// Manage search preferences
    Prefs(PrefsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cli_config_path = cli.config.clone();
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Recipe(cmd)) => {
            cmd.run(&App::open(&config)?)?;
        }
        Some(Commands::Plan(cmd)) => {
            cmd.run(&App::open(&config)?)?;
        }
        Some(Commands::Shopping(cmd)) => {
            cmd.run(&App::open(&config)?)?;
        }
        Some(Commands::Favorite(cmd)) => {
            cmd.run(&App::open(&config)?)?;
        }
        Some(Commands::Prefs(cmd)) => {
            cmd.run(&App::open(&config)?)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli_config_path)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::commands::OutputFormat;
use crate::config::Config;

/// Commented config file with the platform data directory filled in.
fn default_config_contents() -> String {
    format!(
        "\
# Meal planner configuration
#
# Relative paths are resolved against this file's directory.

# Directory holding the meal plan, shopping list, favorites and preferences
data_dir: {}

# JSON file with the recipe catalog (defaults to <data_dir>/recipes.json)
# recipes_path: recipes.json
",
        Config::default_data_dir().display()
    )
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn run(
        &self,
        config: &Config,
        cli_config_path: Option<PathBuf>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                cli_config_path
                                    .unwrap_or_else(Config::default_config_path)
                                    .display()
                            );
                        }
                        println!();

                        println!("data_dir: {}", config.data_dir.value.display());
                        println!("  source: {}", config.data_dir.source);
                        println!();

                        println!("recipes_path: {}", config.recipes_path.value.display());
                        println!("  source: {}", config.recipes_path.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init { force } => {
                let path = cli_config_path.unwrap_or_else(Config::default_config_path);
                write_default_config(&path, *force)?;
                println!("Wrote {}", path.display());
                Ok(())
            }
        }
    }
}

fn write_default_config(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, default_config_contents())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.yaml");

        write_default_config(&path, false).unwrap();

        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config.config_file, Some(path));
        assert_eq!(config.data_dir.value, Config::default_data_dir());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "data_dir: /keep\n").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "data_dir: /keep\n");

        write_default_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("# Meal planner"));
    }
}

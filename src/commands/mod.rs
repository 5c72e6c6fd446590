mod config_cmd;
mod favorite;
mod plan;
mod prefs;
mod recipe;
mod shopping;

pub use config_cmd::ConfigCommand;
pub use favorite::FavoriteCommand;
pub use plan::PlanCommand;
pub use prefs::PrefsCommand;
pub use recipe::RecipeCommand;
pub use shopping::ShoppingCommand;

use clap::ValueEnum;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

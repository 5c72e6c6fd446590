//! Shopping list CLI commands.
//!
//! Items are added by hand or generated from the weekly meal plan.

use clap::{Args, Subcommand};
use uuid::Uuid;

use meal_planner_core::{categorize, generate_from_plan, group_by_category, Category};

use crate::app::App;
use crate::commands::OutputFormat;

#[derive(Args)]
pub struct ShoppingCommand {
    #[command(subcommand)]
    pub command: ShoppingSubcommand,
}

#[derive(Subcommand)]
pub enum ShoppingSubcommand {
    /// List shopping items grouped by category
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add an item by hand
    Add {
        /// Item name
        name: String,

        /// Category (produce, meat, dairy, grains, pantry, spices, other);
        /// guessed from the name when omitted
        #[arg(long, short)]
        category: Option<Category>,
    },

    /// Check or uncheck an item
    Toggle {
        /// Item ID (a unique prefix is enough)
        id: String,
    },

    /// Remove an item
    Remove {
        /// Item ID (a unique prefix is enough)
        id: String,
    },

    /// Remove every item
    Clear,

    /// Remove checked items
    ClearChecked,

    /// Build the list from the meal plan
    Generate {
        /// Keep existing items and add only new names
        #[arg(long)]
        merge: bool,

        /// Print the generated list without saving it
        #[arg(long)]
        dry_run: bool,
    },
}

impl ShoppingCommand {
    pub fn run(&self, app: &App) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ShoppingSubcommand::List { format } => {
                let items = app.shopping.list();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&items)?);
                    }
                    OutputFormat::Text => {
                        println!("Shopping List");
                        println!("{}", "=".repeat(44));

                        if items.is_empty() {
                            println!("No items on the list.");
                            return Ok(());
                        }

                        for (category, group) in group_by_category(&items) {
                            println!("\n{}:", category.as_str().to_uppercase());
                            for item in group {
                                println!("  {}  {}", short_id(&item.id), item);
                            }
                        }

                        let checked = items.iter().filter(|i| i.checked).count();
                        println!("{}", "-".repeat(44));
                        println!("{} of {} items checked", checked, items.len());
                    }
                }
                Ok(())
            }

            ShoppingSubcommand::Add { name, category } => {
                let category = category.unwrap_or_else(|| categorize(Some(name)));
                let item = app.shopping.add(name, category)?;
                println!(
                    "Added '{}' [{}] ({})",
                    item.name,
                    item.category,
                    short_id(&item.id)
                );
                Ok(())
            }

            ShoppingSubcommand::Toggle { id } => {
                let id = resolve_item_id(app, id)?;
                match app.shopping.toggle(id)? {
                    Some(true) => println!("Checked {}", short_id(&id)),
                    Some(false) => println!("Unchecked {}", short_id(&id)),
                    None => return Err(format!("Item not found: {}", id).into()),
                }
                Ok(())
            }

            ShoppingSubcommand::Remove { id } => {
                let id = resolve_item_id(app, id)?;
                if app.shopping.remove(id)? {
                    println!("Removed {}", short_id(&id));
                    Ok(())
                } else {
                    Err(format!("Item not found: {}", id).into())
                }
            }

            ShoppingSubcommand::Clear => {
                app.shopping.clear()?;
                println!("Cleared shopping list");
                Ok(())
            }

            ShoppingSubcommand::ClearChecked => {
                let removed = app.shopping.clear_checked()?;
                println!("Removed {} checked item(s)", removed);
                Ok(())
            }

            ShoppingSubcommand::Generate { merge, dry_run } => {
                let generated = generate_from_plan(&app.plan.get());

                if *dry_run {
                    if generated.is_empty() {
                        println!("No ingredients in the meal plan.");
                    }
                    for ingredient in &generated {
                        println!("  {}", ingredient);
                    }
                    return Ok(());
                }

                if !*merge {
                    app.shopping.clear()?;
                }
                let summary = app.shopping.commit_generated(&generated)?;
                println!(
                    "Added {} item(s) from the meal plan ({} skipped)",
                    summary.added, summary.skipped
                );
                Ok(())
            }
        }
    }
}

fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Find the item whose id is `input` or starts with it.
fn resolve_item_id(app: &App, input: &str) -> Result<Uuid, Box<dyn std::error::Error>> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let prefix = input.to_lowercase();
    let matches: Vec<Uuid> = app
        .shopping
        .list()
        .into_iter()
        .map(|i| i.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("Item not found: {}", input).into()),
        _ => Err(format!("Ambiguous item ID: {}", input).into()),
    }
}

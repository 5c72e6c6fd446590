use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::recipe::Recipe;

/// A recipe the user starred, with the time it was starred.
///
/// The recipe fields are stored inline alongside `addedAt`, so a favorite
/// reads back as the recipe record with one extra field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecipe {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            recipe: recipe.clone(),
            added_at: Utc::now(),
        }
    }
}

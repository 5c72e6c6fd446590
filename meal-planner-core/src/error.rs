//! Errors reported by the planner services.

use thiserror::Error;

use crate::storage::StorageError;

/// Why a planner operation was rejected or could not be saved.
///
/// Rejected operations leave stored state untouched.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid day '{0}'. Valid options: monday, tuesday, wednesday, thursday, friday, saturday, sunday")]
    InvalidDay(String),

    #[error("Invalid meal type '{0}'. Valid options: breakfast, lunch, dinner")]
    InvalidMealType(String),

    #[error("'{0}' is already on the shopping list")]
    DuplicateItem(String),

    #[error("Item name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

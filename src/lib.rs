//! Spendlog is the persistence core of a small personal-finance ledger.
//!
//! The ledger records spending categories and the transactions booked
//! against them in SQLite, and computes per-category, per-currency spending
//! summaries. All writes happen inside a [UnitOfWork] scope that commits on
//! success and rolls back on every other exit path.

#![warn(missing_docs)]

pub mod category;
pub mod currency;
pub mod db;
pub mod scope;
pub mod summary;
pub mod transaction;

mod database_id;

pub use currency::Currency;
pub use database_id::DatabaseId;
pub use db::{initialize, open_ledger, open_ledger_in_memory};
pub use scope::UnitOfWork;

use crate::category::CategoryId;

/// The errors that may occur in the ledger.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A string longer than the name column allows was used to create a
    /// category name.
    #[error(
        "category names are limited to {} characters",
        crate::category::MAX_CATEGORY_NAME_LENGTH
    )]
    CategoryNameTooLong,

    /// The specified category name already exists in the database.
    #[error("the category \"{0}\" already exists in the database")]
    DuplicateCategoryName(String),

    /// The category ID used to create or update a transaction did not match
    /// a valid category.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// Tried to delete a category that still has transactions booked
    /// against it. The transactions must be deleted first.
    #[error("cannot delete a category that still has transactions")]
    CategoryInUse,

    /// The requested resource was not found.
    ///
    /// Callers should check that the parameters (e.g., ID) are correct and
    /// that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

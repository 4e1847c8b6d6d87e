//! Spending categories that transactions are classified into.

mod db;
mod domain;

pub use db::{create_category, create_category_table, delete_category, get_all_categories};
pub use domain::{Category, CategoryId, CategoryName, MAX_CATEGORY_NAME_LENGTH};

//! Core transaction domain types.

use serde::{Deserialize, Serialize};

use crate::{category::CategoryId, currency::Currency, database_id::DatabaseId};

/// Database identifier for a transaction.
pub type TransactionId = i64;

/// A single monetary movement attributed to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// The ID of the category the transaction is booked against.
    pub category_id: CategoryId,
    /// The amount of money moved. Signed; no currency-specific scaling is
    /// applied.
    pub amount: i64,
    /// The currency the amount is denominated in.
    pub currency: Currency,
}

/// The caller-controlled fields of a transaction.
///
/// Used both to create a transaction and to replace one wholesale on
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The ID of the category to book the transaction against.
    pub category_id: CategoryId,
    /// The amount of money moved.
    pub amount: i64,
    /// The currency the amount is denominated in.
    pub currency: Currency,
}

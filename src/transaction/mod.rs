//! Transactions booked against categories, and queries over them.

mod db;
mod domain;
mod query;

pub use db::{
    create_transaction, create_transaction_table, delete_transaction, get_all_transactions,
    get_transaction, update_transaction,
};
pub use domain::{NewTransaction, Transaction, TransactionId};
pub use query::{TransactionFilter, search_transactions};

//! Connection bootstrap and schema initialization for the ledger database.

use std::{path::Path, time::Duration};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Open the ledger database at `path` and apply the connection pragmas the
/// ledger relies on.
///
/// # Errors
/// Returns an [Error::SqlError] if the database cannot be opened.
pub fn open_ledger(path: impl AsRef<Path>) -> Result<Connection, Error> {
    let connection = Connection::open(&path)?;
    bootstrap_connection(&connection)?;

    tracing::debug!("opened ledger database at {}", path.as_ref().display());

    Ok(connection)
}

/// Open an in-memory ledger database, mainly for tests and demos.
///
/// # Errors
/// Returns an [Error::SqlError] if the database cannot be opened.
pub fn open_ledger_in_memory() -> Result<Connection, Error> {
    let connection = Connection::open_in_memory()?;
    bootstrap_connection(&connection)?;

    Ok(connection)
}

/// SQLite ships with foreign key enforcement off; the ledger requires it on
/// for every connection.
fn bootstrap_connection(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;
    connection.busy_timeout(Duration::from_secs(5))?;

    Ok(())
}

/// Create the ledger schema.
///
/// Safe to call on a database that already has the schema.
///
/// # Errors
/// Returns an [Error::SqlError] if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

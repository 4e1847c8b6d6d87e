//! Database operations for transactions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Create a transaction and return it with its generated ID.
///
/// The insert is attempted directly; referential integrity is left to the
/// storage engine rather than a pre-check query.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidCategory] if `category_id` does not refer to a real
///   category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "INSERT INTO transactions (category_id, amount, currency)
             VALUES (?1, ?2, ?3)
             RETURNING id, category_id, amount, currency",
        )?
        .query_row(
            (
                new_transaction.category_id,
                new_transaction.amount,
                new_transaction.currency,
            ),
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                },
                _,
            ) => Error::InvalidCategory(new_transaction.category_id),
            error => error.into(),
        })
}

/// Retrieve a transaction by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare("SELECT id, category_id, amount, currency FROM transactions WHERE id = :id;")?
        .query_row(&[(":id", &transaction_id)], map_transaction_row)
        .map_err(|error| error.into())
}

/// Replace every caller-controlled field of the transaction `transaction_id`.
///
/// The mutation runs inside the caller's write scope, where SQLite admits a
/// single writer, so two concurrent updates of the same row cannot
/// interleave and silently lose one of the writes.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if no transaction with
///   `transaction_id` exists,
/// - or [Error::InvalidCategory] if the new `category_id` does not refer to
///   a real category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    transaction_id: TransactionId,
    update: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection
        .execute(
            "UPDATE transactions SET category_id = ?1, amount = ?2, currency = ?3 WHERE id = ?4",
            (update.category_id, update.amount, update.currency, transaction_id),
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                },
                _,
            ) => Error::InvalidCategory(update.category_id),
            error => error.into(),
        })?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction);
    }

    Ok(Transaction {
        id: transaction_id,
        category_id: update.category_id,
        amount: update.amount,
        currency: update.currency,
    })
}

/// Delete a transaction by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if no transaction with
///   `transaction_id` exists,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM transactions WHERE id = ?1", [transaction_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Retrieve all transactions, ascending by ID.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, category_id, amount, currency FROM transactions ORDER BY id ASC;")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Initialize the transactions table and its category index.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY,
            category_id INTEGER NOT NULL,
            amount INTEGER NOT NULL,
            currency TEXT NOT NULL,
            FOREIGN KEY(category_id) REFERENCES categories(id)
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category_id);",
    )?;

    Ok(())
}

/// Map a database row to a [Transaction].
pub(super) fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let category_id = row.get(1)?;
    let amount = row.get(2)?;
    let currency = row.get(3)?;

    Ok(Transaction {
        id,
        category_id,
        amount,
        currency,
    })
}

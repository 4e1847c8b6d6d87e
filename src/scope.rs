//! The unit of work that scopes all repository calls for one request.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::Error;

/// One unit of work against the ledger database.
///
/// All repository calls made on behalf of a single external request share
/// one `UnitOfWork`. The scope opens an immediate-mode SQLite transaction,
/// so concurrent writers serialize at [UnitOfWork::begin]. Writes become
/// durable only through [UnitOfWork::commit]; dropping the scope on any
/// other path rolls everything back.
#[derive(Debug)]
pub struct UnitOfWork<'conn> {
    transaction: SqlTransaction<'conn>,
}

impl<'conn> UnitOfWork<'conn> {
    /// Begin a unit of work on `connection`.
    ///
    /// Foreign key enforcement is re-enabled before the transaction starts,
    /// because SQLite ignores the pragma once a transaction is open.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the write transaction cannot be
    /// started, e.g. when another writer holds the database past the busy
    /// timeout.
    pub fn begin(connection: &'conn mut Connection) -> Result<Self, Error> {
        connection.pragma_update(None, "foreign_keys", true)?;

        let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tracing::debug!("began unit of work");

        Ok(Self { transaction })
    }

    /// The connection to pass into repository calls made within this scope.
    pub fn connection(&self) -> &Connection {
        &self.transaction
    }

    /// Commit the unit of work, making its writes durable.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the commit fails; the transaction is
    /// rolled back in that case.
    pub fn commit(self) -> Result<(), Error> {
        self.transaction.commit()?;
        tracing::debug!("committed unit of work");

        Ok(())
    }
}

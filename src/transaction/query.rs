//! Filtered search over transactions.

use rusqlite::{Connection, ToSql, params_from_iter};

use crate::{Error, category::CategoryId, currency::Currency, transaction::Transaction};

use super::db::map_transaction_row;

/// Filters for searching transactions.
///
/// Present filters combine with logical AND; an absent filter imposes no
/// constraint. The amount bounds are inclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Only match transactions booked against this category.
    pub category_id: Option<CategoryId>,
    /// Only match transactions of at least this amount.
    pub min_amount: Option<i64>,
    /// Only match transactions of at most this amount.
    pub max_amount: Option<i64>,
    /// Only match transactions denominated in this currency.
    pub currency: Option<Currency>,
}

/// Search transactions matching every present filter, ascending by ID.
///
/// A filter combination matching nothing returns an empty vector, the same
/// as [get_all_transactions](crate::transaction::get_all_transactions) on
/// an empty table.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn search_transactions(
    filter: &TransactionFilter,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let mut clauses = Vec::new();
    let mut parameters: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(category_id) = filter.category_id {
        parameters.push(Box::new(category_id));
        clauses.push(format!("category_id = ?{}", parameters.len()));
    }

    if let Some(min_amount) = filter.min_amount {
        parameters.push(Box::new(min_amount));
        clauses.push(format!("amount >= ?{}", parameters.len()));
    }

    if let Some(max_amount) = filter.max_amount {
        parameters.push(Box::new(max_amount));
        clauses.push(format!("amount <= ?{}", parameters.len()));
    }

    if let Some(currency) = filter.currency {
        parameters.push(Box::new(currency));
        clauses.push(format!("currency = ?{}", parameters.len()));
    }

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {} ", clauses.join(" AND "))
    };

    let query = format!(
        "SELECT id, category_id, amount, currency FROM transactions {}ORDER BY id ASC",
        where_clause
    );

    connection
        .prepare(&query)?
        .query_map(params_from_iter(parameters), map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

#[cfg(test)]
mod search_tests {
    use rusqlite::Connection;

    use crate::{
        category::{CategoryId, CategoryName, create_category},
        currency::Currency,
        db::{initialize, open_ledger_in_memory},
        transaction::{NewTransaction, Transaction, create_transaction},
    };

    use super::{TransactionFilter, search_transactions};

    fn get_test_connection() -> (Connection, CategoryId, CategoryId) {
        let connection = open_ledger_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize schema");

        let groceries = create_category(CategoryName::new_unchecked("groceries"), &connection)
            .expect("Could not create test category");
        let entertainment =
            create_category(CategoryName::new_unchecked("entertainment"), &connection)
                .expect("Could not create test category");

        (connection, groceries.id, entertainment.id)
    }

    fn insert(
        category_id: CategoryId,
        amount: i64,
        currency: Currency,
        connection: &Connection,
    ) -> Transaction {
        create_transaction(
            NewTransaction {
                category_id,
                amount,
                currency,
            },
            connection,
        )
        .expect("Could not create test transaction")
    }

    #[test]
    fn search_without_filters_returns_everything() {
        let (connection, groceries, entertainment) = get_test_connection();
        let expected = vec![
            insert(groceries, 100, Currency::Euro, &connection),
            insert(entertainment, 2500, Currency::Lira, &connection),
        ];

        let results = search_transactions(&TransactionFilter::default(), &connection)
            .expect("Could not search transactions");

        assert_eq!(results, expected);
    }

    #[test]
    fn search_combines_category_and_min_amount() {
        let (connection, groceries, _entertainment) = get_test_connection();
        insert(groceries, 100, Currency::Euro, &connection);
        let large = insert(groceries, 200, Currency::Euro, &connection);

        let results = search_transactions(
            &TransactionFilter {
                category_id: Some(groceries),
                min_amount: Some(150),
                ..Default::default()
            },
            &connection,
        )
        .expect("Could not search transactions");

        assert_eq!(results, vec![large]);
    }

    #[test]
    fn search_amount_bounds_are_inclusive() {
        let (connection, groceries, _entertainment) = get_test_connection();
        insert(groceries, 99, Currency::Euro, &connection);
        let lower = insert(groceries, 100, Currency::Euro, &connection);
        let upper = insert(groceries, 200, Currency::Euro, &connection);
        insert(groceries, 201, Currency::Euro, &connection);

        let results = search_transactions(
            &TransactionFilter {
                min_amount: Some(100),
                max_amount: Some(200),
                ..Default::default()
            },
            &connection,
        )
        .expect("Could not search transactions");

        assert_eq!(results, vec![lower, upper]);
    }

    #[test]
    fn search_by_currency() {
        let (connection, groceries, entertainment) = get_test_connection();
        insert(groceries, 100, Currency::Euro, &connection);
        let roubles = insert(entertainment, 4500, Currency::Rouble, &connection);

        let results = search_transactions(
            &TransactionFilter {
                currency: Some(Currency::Rouble),
                ..Default::default()
            },
            &connection,
        )
        .expect("Could not search transactions");

        assert_eq!(results, vec![roubles]);
    }

    #[test]
    fn search_with_no_matches_returns_an_empty_vector() {
        let (connection, groceries, _entertainment) = get_test_connection();
        insert(groceries, 100, Currency::Euro, &connection);

        let results = search_transactions(
            &TransactionFilter {
                category_id: Some(groceries),
                currency: Some(Currency::SyrianPound),
                ..Default::default()
            },
            &connection,
        )
        .expect("Could not search transactions");

        assert_eq!(results, vec![]);
    }
}

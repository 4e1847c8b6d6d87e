//! Per-category, per-currency spending totals.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryId, currency::Currency};

/// The total amount booked in one currency within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    /// The currency the total is denominated in.
    pub currency: Currency,
    /// The sum of all transaction amounts in this currency.
    pub total: i64,
}

/// The spending totals of one category, broken down by currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The ID of the category the totals belong to.
    #[serde(rename = "id")]
    pub category_id: CategoryId,
    /// Totals per currency, ascending by currency code.
    pub currencies: Vec<CurrencyTotal>,
}

/// Compute the spending summary: every category with at least one
/// transaction, ascending by ID, each with its per-currency totals
/// ascending by currency code.
///
/// Categories without transactions never appear; the aggregation is driven
/// from the transactions side of the join.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn summary_per_category(connection: &Connection) -> Result<Vec<CategorySummary>, Error> {
    let rows = connection
        .prepare(
            "SELECT categories.id, transactions.currency, SUM(transactions.amount) \
             FROM transactions \
             INNER JOIN categories ON categories.id = transactions.category_id \
             GROUP BY categories.id, transactions.currency \
             ORDER BY categories.id ASC, transactions.currency ASC",
        )?
        .query_map([], |row| {
            Ok((
                row.get::<_, CategoryId>(0)?,
                CurrencyTotal {
                    currency: row.get(1)?,
                    total: row.get(2)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    // The query orders by (category id, currency), so folding rows with
    // equal adjacent category IDs yields complete, ordered summaries.
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for (category_id, currency_total) in rows {
        match summaries.last_mut() {
            Some(summary) if summary.category_id == category_id => {
                summary.currencies.push(currency_total)
            }
            _ => summaries.push(CategorySummary {
                category_id,
                currencies: vec![currency_total],
            }),
        }
    }

    Ok(summaries)
}

#[cfg(test)]
mod summary_tests {
    use rusqlite::Connection;

    use crate::{
        category::{CategoryId, CategoryName, create_category},
        currency::Currency,
        db::{initialize, open_ledger_in_memory},
        transaction::{NewTransaction, create_transaction},
    };

    use super::{CategorySummary, CurrencyTotal, summary_per_category};

    fn get_test_connection() -> Connection {
        let connection = open_ledger_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize schema");
        connection
    }

    fn insert_category(name: &str, connection: &Connection) -> CategoryId {
        create_category(CategoryName::new_unchecked(name), connection)
            .expect("Could not create test category")
            .id
    }

    fn insert_transaction(
        category_id: CategoryId,
        amount: i64,
        currency: Currency,
        connection: &Connection,
    ) {
        create_transaction(
            NewTransaction {
                category_id,
                amount,
                currency,
            },
            connection,
        )
        .expect("Could not create test transaction");
    }

    #[test]
    fn summary_of_empty_ledger_is_empty() {
        let connection = get_test_connection();

        let summaries = summary_per_category(&connection).expect("Could not compute summary");

        assert_eq!(summaries, []);
    }

    #[test]
    fn summary_sums_amounts_per_category_and_currency() {
        let connection = get_test_connection();
        let groceries = insert_category("groceries", &connection);
        insert_transaction(groceries, 100, Currency::Euro, &connection);
        insert_transaction(groceries, 200, Currency::Euro, &connection);

        let summaries = summary_per_category(&connection).expect("Could not compute summary");

        assert_eq!(
            summaries,
            vec![CategorySummary {
                category_id: groceries,
                currencies: vec![CurrencyTotal {
                    currency: Currency::Euro,
                    total: 300,
                }],
            }]
        );
    }

    #[test]
    fn summary_orders_currencies_within_a_category() {
        let connection = get_test_connection();
        insert_category("groceries", &connection);
        let entertainment = insert_category("entertainment", &connection);
        // Insert the rouble transaction first to show the ordering comes
        // from the currency code, not from insertion order.
        insert_transaction(entertainment, 4500, Currency::Rouble, &connection);
        insert_transaction(entertainment, 2500, Currency::Lira, &connection);

        let summaries = summary_per_category(&connection).expect("Could not compute summary");

        assert_eq!(
            summaries,
            vec![CategorySummary {
                category_id: entertainment,
                currencies: vec![
                    CurrencyTotal {
                        currency: Currency::Lira,
                        total: 2500,
                    },
                    CurrencyTotal {
                        currency: Currency::Rouble,
                        total: 4500,
                    },
                ],
            }]
        );
    }

    #[test]
    fn summary_orders_categories_by_id_and_skips_empty_ones() {
        let connection = get_test_connection();
        let groceries = insert_category("groceries", &connection);
        let entertainment = insert_category("entertainment", &connection);
        insert_category("never used", &connection);
        // Book against the higher category ID first.
        insert_transaction(entertainment, 2500, Currency::Lira, &connection);
        insert_transaction(groceries, 100, Currency::Euro, &connection);
        insert_transaction(groceries, -40, Currency::UkPound, &connection);

        let summaries = summary_per_category(&connection).expect("Could not compute summary");

        assert_eq!(
            summaries,
            vec![
                CategorySummary {
                    category_id: groceries,
                    currencies: vec![
                        CurrencyTotal {
                            currency: Currency::Euro,
                            total: 100,
                        },
                        CurrencyTotal {
                            currency: Currency::UkPound,
                            total: -40,
                        },
                    ],
                },
                CategorySummary {
                    category_id: entertainment,
                    currencies: vec![CurrencyTotal {
                        currency: Currency::Lira,
                        total: 2500,
                    }],
                },
            ]
        );
    }

    #[test]
    fn summary_serializes_with_the_wire_shape() {
        let connection = get_test_connection();
        let groceries = insert_category("groceries", &connection);
        insert_transaction(groceries, 100, Currency::Euro, &connection);
        insert_transaction(groceries, 200, Currency::Euro, &connection);

        let summaries = summary_per_category(&connection).expect("Could not compute summary");
        let serialized = serde_json::to_value(&summaries).expect("Could not serialize summary");

        assert_eq!(
            serialized,
            serde_json::json!([
                {
                    "id": groceries,
                    "currencies": [{ "currency": "EURO", "total": 300 }],
                }
            ])
        );
    }
}

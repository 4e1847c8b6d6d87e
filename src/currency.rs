//! The closed set of currencies the ledger records amounts in.

use std::fmt::Display;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

/// A currency accepted by the ledger.
///
/// Currencies are stored in the database as their textual code. The
/// variants are declared in the lexicographic order of their codes so that
/// the derived ordering agrees with SQL `ORDER BY currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    /// The Canadian dollar.
    CanadianDolar,
    /// The euro.
    Euro,
    /// The Turkish lira.
    Lira,
    /// The Russian rouble.
    Rouble,
    /// The Indian rupee.
    Rupee,
    /// The Syrian pound.
    SyrianPound,
    /// The British pound.
    UkPound,
    /// The United States dollar.
    UsDolar,
}

impl Currency {
    /// The textual code the currency is stored and serialized as.
    pub fn as_code(&self) -> &'static str {
        match self {
            Currency::CanadianDolar => "CANADIAN_DOLAR",
            Currency::Euro => "EURO",
            Currency::Lira => "LIRA",
            Currency::Rouble => "ROUBLE",
            Currency::Rupee => "RUPEE",
            Currency::SyrianPound => "SYRIAN_POUND",
            Currency::UkPound => "UK_POUND",
            Currency::UsDolar => "US_DOLAR",
        }
    }

    /// Look up a currency by its textual code.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "CANADIAN_DOLAR" => Some(Currency::CanadianDolar),
            "EURO" => Some(Currency::Euro),
            "LIRA" => Some(Currency::Lira),
            "ROUBLE" => Some(Currency::Rouble),
            "RUPEE" => Some(Currency::Rupee),
            "SYRIAN_POUND" => Some(Currency::SyrianPound),
            "UK_POUND" => Some(Currency::UkPound),
            "US_DOLAR" => Some(Currency::UsDolar),
            _ => None,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl ToSql for Currency {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_code()))
    }
}

impl FromSql for Currency {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_str()?;

        Currency::from_code(code).ok_or_else(|| {
            FromSqlError::Other(format!("unknown currency code \"{code}\"").into())
        })
    }
}

//! Transaction operations

use chrono::NaiveDate;
use rusqlite::{params, Row};

use super::{parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

const TX_COLUMNS: &str = "id, owner, title, amount, kind, category, date, status, created_at";

impl Store {
    /// Insert a transaction for the given owner
    ///
    /// The ledger is append-only: there is no update or delete counterpart.
    pub fn insert_transaction(&self, owner: &str, tx: &NewTransaction) -> Result<i64> {
        if tx.amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Transaction amount must be positive, got {}",
                tx.amount
            )));
        }
        if tx.title.trim().is_empty() {
            return Err(Error::InvalidData("Transaction title is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO transactions (owner, title, amount, kind, category, date, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                owner,
                tx.title,
                tx.amount,
                tx.kind.as_str(),
                tx.category,
                tx.date.to_string(),
                tx.status.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List every transaction for an owner, newest first
    pub fn list_transactions(&self, owner: &str) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions WHERE owner = ?1 ORDER BY date DESC, id DESC",
            TX_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner], row_to_transaction)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// The `limit` most recent transactions for an owner
    pub fn recent_transactions(&self, owner: &str, limit: i64) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions WHERE owner = ?1 ORDER BY date DESC, id DESC LIMIT ?2",
            TX_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner, limit], row_to_transaction)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Expense transactions dated on or after `since` (used for budget math)
    pub fn expenses_since(&self, owner: &str, since: NaiveDate) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions
             WHERE owner = ?1 AND kind = 'expense' AND date >= ?2
             ORDER BY date DESC, id DESC",
            TX_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner, since.to_string()], row_to_transaction)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

/// Map a database row to a Transaction
///
/// Column order: id, owner, title, amount, kind, category, date, status, created_at
fn row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    let kind_str: String = row.get(4)?;
    let date_str: String = row.get(6)?;
    let status_str: String = row.get(7)?;
    let created_at_str: String = row.get(8)?;

    Ok(Transaction {
        id: row.get(0)?,
        owner: row.get(1)?,
        title: row.get(2)?,
        amount: row.get(3)?,
        kind: kind_str.parse().map_err(|e: String| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?,
        category: row.get(5)?,
        date: parse_date(&date_str),
        status: status_str.parse().unwrap_or_default(),
        created_at: parse_datetime(&created_at_str),
    })
}

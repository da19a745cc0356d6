//! Budget operations

use rusqlite::{params, Row};

use super::{parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::Budget;

impl Store {
    /// Create or replace the budget for (owner, category)
    ///
    /// The unique constraint on (owner, category) makes this an upsert: a
    /// second write for the same pair updates the limit in place.
    pub fn upsert_budget(&self, owner: &str, category: &str, limit_amount: f64) -> Result<i64> {
        validate_limit(limit_amount)?;
        if category.trim().is_empty() {
            return Err(Error::InvalidData("Budget category is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO budgets (owner, category, limit_amount)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(owner, category) DO UPDATE SET limit_amount = excluded.limit_amount
            "#,
            params![owner, category, limit_amount],
        )?;

        let id: i64 = conn.query_row(
            "SELECT id FROM budgets WHERE owner = ?1 AND category = ?2",
            params![owner, category],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Change the limit of an existing budget
    pub fn update_budget_limit(&self, owner: &str, id: i64, limit_amount: f64) -> Result<()> {
        validate_limit(limit_amount)?;

        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE budgets SET limit_amount = ?3 WHERE id = ?1 AND owner = ?2",
            params![id, owner, limit_amount],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("Budget not found: {}", id)));
        }
        Ok(())
    }

    /// List budgets for an owner in creation order
    pub fn list_budgets(&self, owner: &str) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, category, limit_amount, created_at
             FROM budgets WHERE owner = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![owner], row_to_budget)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn validate_limit(limit_amount: f64) -> Result<()> {
    if limit_amount <= 0.0 {
        return Err(Error::InvalidData(format!(
            "Budget limit must be positive, got {}",
            limit_amount
        )));
    }
    Ok(())
}

fn row_to_budget(row: &Row) -> rusqlite::Result<Budget> {
    let created_at_str: String = row.get(4)?;
    Ok(Budget {
        id: row.get(0)?,
        owner: row.get(1)?,
        category: row.get(2)?,
        limit_amount: row.get(3)?,
        created_at: parse_datetime(&created_at_str),
    })
}

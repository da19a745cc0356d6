//! Savings goal operations

use chrono::NaiveDate;
use rusqlite::{params, Row};

use super::{parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::SavingsGoal;

impl Store {
    /// Create a savings goal with a zero starting balance
    pub fn insert_goal(
        &self,
        owner: &str,
        name: &str,
        target_amount: f64,
        target_date: NaiveDate,
    ) -> Result<i64> {
        if target_amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Goal target must be positive, got {}",
                target_amount
            )));
        }
        if name.trim().is_empty() {
            return Err(Error::InvalidData("Goal name is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO savings_goals (owner, name, target_amount, target_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![owner, name, target_amount, target_date.to_string()],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Add funds to a goal as a single atomic increment
    ///
    /// The increment happens inside the UPDATE statement, so two concurrent
    /// deposits both land instead of the later read-modify-write clobbering
    /// the earlier one.
    pub fn add_funds(&self, owner: &str, goal_id: i64, amount: f64) -> Result<SavingsGoal> {
        if amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Deposit amount must be positive, got {}",
                amount
            )));
        }

        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE savings_goals SET current_amount = current_amount + ?3
             WHERE id = ?1 AND owner = ?2",
            params![goal_id, owner, amount],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("Savings goal not found: {}", goal_id)));
        }

        conn.query_row(
            "SELECT id, owner, name, target_amount, current_amount, target_date, created_at
             FROM savings_goals WHERE id = ?1",
            params![goal_id],
            row_to_goal,
        )
        .map_err(Into::into)
    }

    /// List goals for an owner in creation order
    pub fn list_goals(&self, owner: &str) -> Result<Vec<SavingsGoal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, name, target_amount, current_amount, target_date, created_at
             FROM savings_goals WHERE owner = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![owner], row_to_goal)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn row_to_goal(row: &Row) -> rusqlite::Result<SavingsGoal> {
    let target_date_str: String = row.get(5)?;
    let created_at_str: String = row.get(6)?;
    Ok(SavingsGoal {
        id: row.get(0)?,
        owner: row.get(1)?,
        name: row.get(2)?,
        target_amount: row.get(3)?,
        current_amount: row.get(4)?,
        target_date: parse_date(&target_date_str),
        created_at: parse_datetime(&created_at_str),
    })
}

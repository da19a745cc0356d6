//! Bill split operations

use rusqlite::{params, Row};

use super::{parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{BillSplit, SplitStatus};
use crate::split::{round_cents, split_evenly};

impl Store {
    /// Create a bill split; the per-person share is computed and stored
    pub fn insert_split(
        &self,
        owner: &str,
        name: &str,
        total_amount: f64,
        participants: i64,
    ) -> Result<i64> {
        if name.trim().is_empty() {
            return Err(Error::InvalidData("Split name is required".to_string()));
        }
        // Validates total >= 0 and participants >= 1 before dividing
        let per_person = round_cents(split_evenly(total_amount, participants)?);

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO bill_splits (owner, name, total_amount, participants, per_person)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![owner, name, total_amount, participants, per_person],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Mark a split as paid
    pub fn mark_split_paid(&self, owner: &str, split_id: i64) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE bill_splits SET status = 'paid' WHERE id = ?1 AND owner = ?2",
            params![split_id, owner],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("Bill split not found: {}", split_id)));
        }
        Ok(())
    }

    /// List splits for an owner, newest first
    pub fn list_splits(&self, owner: &str) -> Result<Vec<BillSplit>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, name, total_amount, participants, per_person, status, created_at
             FROM bill_splits WHERE owner = ?1 ORDER BY id DESC",
        )?;

        let rows = stmt.query_map(params![owner], row_to_split)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn row_to_split(row: &Row) -> rusqlite::Result<BillSplit> {
    let status_str: String = row.get(6)?;
    let created_at_str: String = row.get(7)?;
    Ok(BillSplit {
        id: row.get(0)?,
        owner: row.get(1)?,
        name: row.get(2)?,
        total_amount: row.get(3)?,
        participants: row.get(4)?,
        per_person: row.get(5)?,
        status: status_str.parse::<SplitStatus>().unwrap_or_default(),
        created_at: parse_datetime(&created_at_str),
    })
}

//! Subscription operations

use chrono::NaiveDate;
use rusqlite::{params, Row};

use super::{parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{BillingCycle, Subscription};

impl Store {
    /// Add a tracked subscription
    pub fn insert_subscription(
        &self,
        owner: &str,
        name: &str,
        price: f64,
        cycle: BillingCycle,
        next_payment_date: NaiveDate,
    ) -> Result<i64> {
        if price <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Subscription price must be positive, got {}",
                price
            )));
        }
        if name.trim().is_empty() {
            return Err(Error::InvalidData("Subscription name is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO subscriptions (owner, name, price, cycle, next_payment_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![owner, name, price, cycle.as_str(), next_payment_date.to_string()],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List subscriptions for an owner ordered by next payment date
    pub fn list_subscriptions(&self, owner: &str) -> Result<Vec<Subscription>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, name, price, cycle, next_payment_date, created_at
             FROM subscriptions WHERE owner = ?1 ORDER BY next_payment_date ASC, id ASC",
        )?;

        let rows = stmt.query_map(params![owner], row_to_subscription)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn row_to_subscription(row: &Row) -> rusqlite::Result<Subscription> {
    let cycle_str: String = row.get(4)?;
    let next_payment_str: String = row.get(5)?;
    let created_at_str: String = row.get(6)?;
    Ok(Subscription {
        id: row.get(0)?,
        owner: row.get(1)?,
        name: row.get(2)?,
        price: row.get(3)?,
        cycle: cycle_str.parse::<BillingCycle>().unwrap_or(BillingCycle::Monthly),
        next_payment_date: parse_date(&next_payment_str),
        created_at: parse_datetime(&created_at_str),
    })
}

//! Dashboard view: lifetime totals, recent activity, latest transactions

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::aggregate::{self, DayPoint, LedgerTotals};
use crate::models::Transaction;
use crate::session::Session;
use crate::store::Store;

/// How many days the spending-activity bar chart covers
const ACTIVITY_DAYS: u32 = 7;

/// How many recent transactions the dashboard lists
const RECENT_LIMIT: i64 = 5;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardView {
    pub totals: LedgerTotals,
    /// Last-7-days expense buckets, oldest first
    pub activity: Vec<DayPoint>,
    /// Most recent transactions, newest first
    pub recent: Vec<Transaction>,
}

impl DashboardView {
    /// Load the dashboard for the signed-in user.
    ///
    /// `today` anchors the activity window. Query failures degrade to the
    /// empty view rather than surfacing an error.
    pub fn load(store: &Store, session: &Session, today: NaiveDate) -> Self {
        let Some(owner) = super::owner_of(session) else {
            return Self::default();
        };

        let transactions = match store.list_transactions(&owner) {
            Ok(txs) => txs,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Dashboard ledger fetch failed");
                return Self::default();
            }
        };

        let recent = match store.recent_transactions(&owner, RECENT_LIMIT) {
            Ok(txs) => txs,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Recent transactions fetch failed");
                Vec::new()
            }
        };

        Self {
            totals: aggregate::ledger_totals(&transactions),
            activity: aggregate::daily_activity(&transactions, today, ACTIVITY_DAYS),
            recent,
        }
    }
}

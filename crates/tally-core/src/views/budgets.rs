//! Budgets view: per-category utilization for the current month

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::aggregate::{self, BudgetUtilization};
use crate::session::Session;
use crate::store::Store;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BudgetsView {
    pub budgets: Vec<BudgetUtilization>,
    /// Sum of all configured limits
    pub total_budget: f64,
    /// Sum of month-to-date spending across budgeted categories
    pub total_spent: f64,
    /// Overall utilization, capped at 100
    pub total_percentage: f64,
}

impl BudgetsView {
    /// Load budgets with month-to-date spending, anchored on `today`.
    pub fn load(store: &Store, session: &Session, today: NaiveDate) -> Self {
        let Some(owner) = super::owner_of(session) else {
            return Self::default();
        };

        let budgets = match store.list_budgets(&owner) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Budget fetch failed");
                return Self::default();
            }
        };
        // Only current-month expenses matter for utilization, so fetch just those
        let month_start = today.with_day(1).unwrap_or(today);
        let expenses = match store.expenses_since(&owner, month_start) {
            Ok(txs) => txs,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Budget ledger fetch failed");
                return Self::default();
            }
        };

        let budgets = aggregate::budget_utilization(&budgets, &expenses, month_start);

        let total_budget: f64 = budgets.iter().map(|b| b.limit_amount).sum();
        let total_spent: f64 = budgets.iter().map(|b| b.spent).sum();
        let total_percentage = if total_budget > 0.0 {
            (total_spent / total_budget * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            budgets,
            total_budget,
            total_spent,
            total_percentage,
        }
    }
}

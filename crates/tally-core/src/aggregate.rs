//! Pure aggregation over the transaction ledger
//!
//! Every function here takes a finite slice of transactions and derives a
//! chart-ready summary without mutating the input. Nothing is cached or
//! updated incrementally: views re-run the aggregation from scratch whenever
//! the underlying ledger changes.
//!
//! Amounts accumulate as raw f64 values; two-decimal rounding happens only at
//! presentation via [`crate::split::round_cents`].

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Budget, Transaction, TransactionKind};

/// Fixed palette for category chart slices, assigned in first-seen order.
pub const CHART_COLORS: [&str; 5] = ["#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#06b6d4"];

/// Label used for expenses without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Summed expenses for one category, with its assigned chart color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Display label: the spelling of the category's first occurrence
    pub category: String,
    pub amount: f64,
    pub color: String,
}

/// One month of the income-vs-expense trend line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPoint {
    pub label: &'static str,
    pub income: f64,
    pub expense: f64,
}

/// Spent-vs-limit for one budget in the current month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUtilization {
    pub budget_id: i64,
    pub category: String,
    pub limit_amount: f64,
    pub spent: f64,
    /// Capped at 100 so progress bars saturate
    pub percentage: f64,
    /// Computed from the uncapped ratio: true even while the bar shows 100%
    pub over_limit: bool,
}

/// Lifetime income and expense sums for one owner's ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
}

impl LedgerTotals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// One day of the recent-spending bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    /// Weekday abbreviation ("Mon".."Sun")
    pub label: String,
    pub expense: f64,
}

/// Group expenses by category and sum their amounts.
///
/// Categories match case-insensitively; the label keeps the spelling of the
/// first occurrence and missing categories collapse into [`UNCATEGORIZED`].
/// Output order is insertion order of first occurrence, which keeps chart
/// colors stable across reloads.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<(String, CategoryTotal)> = Vec::new();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }

        let label = tx
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        let key = label.to_lowercase();

        match totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entry)) => entry.amount += tx.amount,
            None => {
                let color = CHART_COLORS[totals.len() % CHART_COLORS.len()];
                totals.push((
                    key,
                    CategoryTotal {
                        category: label.to_string(),
                        amount: tx.amount,
                        color: color.to_string(),
                    },
                ));
            }
        }
    }

    totals.into_iter().map(|(_, entry)| entry).collect()
}

/// Build the 12-bucket income/expense series for one calendar year.
///
/// The target year is explicit rather than implied by the clock, so the same
/// ledger produces the same series no matter when it is evaluated.
/// Transactions outside the year are excluded entirely; the result always has
/// exactly 12 entries, zero-filled for quiet months.
pub fn monthly_series(transactions: &[Transaction], year: i32) -> Vec<MonthPoint> {
    let mut months: Vec<MonthPoint> = MONTH_LABELS
        .iter()
        .map(|label| MonthPoint {
            label,
            income: 0.0,
            expense: 0.0,
        })
        .collect();

    for tx in transactions {
        if tx.date.year() != year {
            continue;
        }
        let bucket = &mut months[tx.date.month0() as usize];
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }

    months
}

/// Compute spent-vs-limit for each budget.
///
/// `month_start` is the first day of the month under review; only expense
/// transactions dated on or after it count. Category matching is
/// case-insensitive. The displayed percentage saturates at 100 while the
/// over-limit flag keeps tracking the uncapped ratio, so a user stays "over
/// budget" even though the progress bar is full. A non-positive limit yields
/// 0% rather than NaN, flagged over-limit as soon as anything is spent.
pub fn budget_utilization(
    budgets: &[Budget],
    transactions: &[Transaction],
    month_start: NaiveDate,
) -> Vec<BudgetUtilization> {
    budgets
        .iter()
        .map(|budget| {
            let category_lower = budget.category.to_lowercase();
            let spent: f64 = transactions
                .iter()
                .filter(|tx| {
                    tx.kind == TransactionKind::Expense
                        && tx.date >= month_start
                        && tx
                            .category
                            .as_deref()
                            .map(|c| c.trim().to_lowercase() == category_lower)
                            .unwrap_or(false)
                })
                .map(|tx| tx.amount)
                .sum();

            let (percentage, over_limit) = if budget.limit_amount > 0.0 {
                let raw = spent / budget.limit_amount * 100.0;
                (raw.min(100.0), raw > 100.0)
            } else {
                (0.0, spent > 0.0)
            };

            BudgetUtilization {
                budget_id: budget.id,
                category: budget.category.clone(),
                limit_amount: budget.limit_amount,
                spent,
                percentage,
                over_limit,
            }
        })
        .collect()
}

/// Sum lifetime income and expenses.
pub fn ledger_totals(transactions: &[Transaction]) -> LedgerTotals {
    let mut totals = LedgerTotals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => totals.income += tx.amount,
            TransactionKind::Expense => totals.expense += tx.amount,
        }
    }
    totals
}

/// Bucket the last `days` days of expenses by day, oldest first.
///
/// Always returns exactly `days` entries ending at `today`; days without
/// spending stay at zero.
pub fn daily_activity(transactions: &[Transaction], today: NaiveDate, days: u32) -> Vec<DayPoint> {
    if days == 0 {
        return Vec::new();
    }

    let start = today - Duration::days((days - 1) as i64);

    let mut buckets: Vec<(NaiveDate, DayPoint)> = (0..days)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);
            (
                date,
                DayPoint {
                    label: date.format("%a").to_string(),
                    expense: 0.0,
                },
            )
        })
        .collect();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        if tx.date < start || tx.date > today {
            continue;
        }
        let idx = (tx.date - start).num_days() as usize;
        buckets[idx].1.expense += tx.amount;
    }

    buckets.into_iter().map(|(_, point)| point).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionStatus;
    use chrono::Utc;

    fn tx(kind: TransactionKind, category: Option<&str>, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: 0,
            owner: "u1".to_string(),
            title: "test".to_string(),
            amount,
            kind,
            category: category.map(String::from),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status: TransactionStatus::Completed,
            created_at: Utc::now(),
        }
    }

    fn expense(category: Option<&str>, amount: f64, date: &str) -> Transaction {
        tx(TransactionKind::Expense, category, amount, date)
    }

    fn income(amount: f64, date: &str) -> Transaction {
        tx(TransactionKind::Income, None, amount, date)
    }

    #[test]
    fn test_category_totals_groups_and_sums() {
        let ledger = vec![
            expense(Some("Food"), 50.0, "2026-03-01"),
            expense(Some("Food"), 30.0, "2026-03-05"),
            expense(Some("Transport"), 20.0, "2026-03-07"),
        ];

        let totals = category_totals(&ledger);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].amount, 80.0);
        assert_eq!(totals[1].category, "Transport");
        assert_eq!(totals[1].amount, 20.0);
    }

    #[test]
    fn test_category_totals_preserve_first_seen_order_and_colors() {
        let ledger = vec![
            expense(Some("Bills"), 10.0, "2026-01-01"),
            expense(Some("Food"), 5.0, "2026-01-02"),
            expense(Some("Bills"), 1.0, "2026-01-03"),
        ];

        let totals = category_totals(&ledger);
        assert_eq!(totals[0].category, "Bills");
        assert_eq!(totals[0].color, CHART_COLORS[0]);
        assert_eq!(totals[1].category, "Food");
        assert_eq!(totals[1].color, CHART_COLORS[1]);
    }

    #[test]
    fn test_category_totals_case_insensitive_grouping() {
        let ledger = vec![
            expense(Some("food"), 10.0, "2026-01-01"),
            expense(Some("Food"), 15.0, "2026-01-02"),
            expense(Some("FOOD"), 5.0, "2026-01-03"),
        ];

        let totals = category_totals(&ledger);
        assert_eq!(totals.len(), 1);
        // Label keeps the first spelling encountered
        assert_eq!(totals[0].category, "food");
        assert_eq!(totals[0].amount, 30.0);
    }

    #[test]
    fn test_category_totals_uncategorized_and_income_excluded() {
        let ledger = vec![
            expense(None, 12.0, "2026-01-01"),
            expense(Some("  "), 3.0, "2026-01-02"),
            income(500.0, "2026-01-03"),
        ];

        let totals = category_totals(&ledger);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, UNCATEGORIZED);
        assert_eq!(totals[0].amount, 15.0);
    }

    #[test]
    fn test_per_category_sums_equal_total_expense() {
        let ledger = vec![
            expense(Some("Food"), 50.0, "2026-03-01"),
            expense(Some("food"), 30.0, "2026-03-05"),
            expense(None, 7.5, "2026-03-06"),
            expense(Some("Transport"), 20.0, "2026-03-07"),
            income(1000.0, "2026-03-08"),
        ];

        let category_sum: f64 = category_totals(&ledger).iter().map(|c| c.amount).sum();
        let expense_sum = ledger_totals(&ledger).expense;
        assert!((category_sum - expense_sum).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_series_always_twelve_entries() {
        assert_eq!(monthly_series(&[], 2026).len(), 12);

        let ledger = vec![expense(Some("Food"), 10.0, "2026-06-15")];
        let series = monthly_series(&ledger, 2026);
        assert_eq!(series.len(), 12);
        assert_eq!(series[5].label, "Jun");
        assert_eq!(series[5].expense, 10.0);
        assert_eq!(series[4].expense, 0.0);
    }

    #[test]
    fn test_monthly_series_excludes_other_years() {
        let ledger = vec![
            income(100.0, "2025-12-31"),
            income(200.0, "2026-01-01"),
            expense(Some("Food"), 50.0, "2027-01-01"),
        ];

        let series = monthly_series(&ledger, 2026);
        assert_eq!(series[0].income, 200.0);
        // Neither the prior December nor the next January bleeds in
        assert_eq!(series[11].income, 0.0);
        assert_eq!(series[0].expense, 0.0);
    }

    fn budget(id: i64, category: &str, limit: f64) -> Budget {
        Budget {
            id,
            owner: "u1".to_string(),
            category: category.to_string(),
            limit_amount: limit,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_budget_utilization_caps_percentage_but_not_flag() {
        let budgets = vec![budget(1, "Food", 100.0)];
        let ledger = vec![
            expense(Some("food"), 90.0, "2026-03-02"),
            expense(Some("FOOD"), 60.0, "2026-03-10"),
        ];
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let util = budget_utilization(&budgets, &ledger, month_start);
        assert_eq!(util.len(), 1);
        assert_eq!(util[0].spent, 150.0);
        assert_eq!(util[0].percentage, 100.0);
        assert!(util[0].over_limit);
    }

    #[test]
    fn test_budget_utilization_percentage_in_range() {
        let budgets = vec![budget(1, "Food", 200.0), budget(2, "Transport", 50.0)];
        let ledger = vec![
            expense(Some("Food"), 90.0, "2026-03-02"),
            expense(Some("Transport"), 80.0, "2026-03-03"),
        ];
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        for util in budget_utilization(&budgets, &ledger, month_start) {
            assert!(util.percentage >= 0.0 && util.percentage <= 100.0);
            assert_eq!(util.over_limit, util.spent > util.limit_amount);
        }
    }

    #[test]
    fn test_budget_utilization_ignores_prior_months() {
        let budgets = vec![budget(1, "Food", 100.0)];
        let ledger = vec![
            expense(Some("Food"), 40.0, "2026-02-28"),
            expense(Some("Food"), 25.0, "2026-03-05"),
        ];
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let util = budget_utilization(&budgets, &ledger, month_start);
        assert_eq!(util[0].spent, 25.0);
        assert!(!util[0].over_limit);
    }

    #[test]
    fn test_budget_utilization_no_matches_is_zero_not_nan() {
        let budgets = vec![budget(1, "Entertainment", 75.0)];
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let util = budget_utilization(&budgets, &[], month_start);
        assert_eq!(util[0].spent, 0.0);
        assert_eq!(util[0].percentage, 0.0);
        assert!(!util[0].over_limit);
    }

    #[test]
    fn test_budget_utilization_zero_limit_policy() {
        let budgets = vec![budget(1, "Food", 0.0)];
        let ledger = vec![expense(Some("Food"), 10.0, "2026-03-02")];
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let util = budget_utilization(&budgets, &ledger, month_start);
        assert_eq!(util[0].percentage, 0.0);
        assert!(util[0].percentage.is_finite());
        assert!(util[0].over_limit);
    }

    #[test]
    fn test_ledger_totals_and_balance() {
        let ledger = vec![
            income(4000.0, "2026-01-05"),
            expense(Some("Rent"), 1200.0, "2026-01-06"),
            expense(Some("Food"), 300.0, "2026-01-07"),
        ];

        let totals = ledger_totals(&ledger);
        assert_eq!(totals.income, 4000.0);
        assert_eq!(totals.expense, 1500.0);
        assert_eq!(totals.balance(), 2500.0);
    }

    #[test]
    fn test_daily_activity_seven_buckets() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let ledger = vec![
            expense(Some("Food"), 10.0, "2026-03-10"),
            expense(Some("Food"), 5.0, "2026-03-04"),
            // Out of window
            expense(Some("Food"), 99.0, "2026-03-03"),
            income(100.0, "2026-03-10"),
        ];

        let activity = daily_activity(&ledger, today, 7);
        assert_eq!(activity.len(), 7);
        assert_eq!(activity[0].expense, 5.0);
        assert_eq!(activity[6].expense, 10.0);
        assert_eq!(activity.iter().map(|d| d.expense).sum::<f64>(), 15.0);
    }

    #[test]
    fn test_daily_activity_zero_days_is_empty() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        // A transaction dated today must not be bucketed into a zero-day window
        let ledger = vec![expense(Some("Food"), 10.0, "2026-03-10")];

        assert!(daily_activity(&ledger, today, 0).is_empty());
    }
}

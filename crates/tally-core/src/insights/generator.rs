//! Insight sentence generation

use crate::aggregate::{CategoryTotal, LedgerTotals};

use super::types::{Insight, InsightKind};

/// Derive up to three insight sentences from aggregated ledger data.
///
/// `months_elapsed` is the 1-based index of the current month (January = 1);
/// it is passed in explicitly so the caller, not the clock, decides the
/// averaging window. The order of the returned insights is fixed:
///
/// 1. Top spending category (when any category total exists; ties keep the
///    first-encountered category).
/// 2. Savings rate, only when income is positive (never a division by zero).
/// 3. Average monthly spend, whenever any expense exists.
pub fn generate_insights(
    categories: &[CategoryTotal],
    totals: &LedgerTotals,
    months_elapsed: u32,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(top) = categories.iter().max_by(|a, b| {
        // max_by keeps the later element on ties; strict comparison keeps the
        // first-encountered category instead
        if a.amount >= b.amount {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Less
        }
    }) {
        insights.push(Insight::new(
            InsightKind::TopCategory,
            format!(
                "Your highest spending category is {} at ${:.0}.",
                top.category, top.amount
            ),
        ));
    }

    if totals.income > 0.0 {
        let rate = (totals.income - totals.expense) / totals.income * 100.0;
        let message = if rate > 0.0 {
            format!(
                "Great job! You've saved {:.0}% of your income this year.",
                rate
            )
        } else {
            format!(
                "Heads up: you've spent {:.0}% more than you earned this year.",
                rate.abs()
            )
        };
        insights.push(Insight::new(InsightKind::SavingsRate, message));
    }

    if totals.expense > 0.0 {
        let months = months_elapsed.max(1) as f64;
        insights.push(Insight::new(
            InsightKind::MonthlyAverage,
            format!(
                "You spend ${:.2} per month on average.",
                totals.expense / months
            ),
        ));
    }

    insights
}

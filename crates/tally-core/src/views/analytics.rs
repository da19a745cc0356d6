//! Analytics view: category breakdown, yearly trend, insights

use serde::Serialize;
use tracing::warn;

use crate::aggregate::{self, CategoryTotal, MonthPoint};
use crate::insights::{generate_insights, Insight};
use crate::session::Session;
use crate::store::Store;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsView {
    /// Expense totals per category, first-seen order
    pub spending: Vec<CategoryTotal>,
    /// Exactly 12 entries (Jan..Dec) for the requested year
    pub trend: Vec<MonthPoint>,
    /// 0-3 derived sentences, fixed order
    pub insights: Vec<Insight>,
}

impl AnalyticsView {
    /// Load analytics for the signed-in user.
    ///
    /// `year` is the trend's target calendar year and `months_elapsed` the
    /// 1-based index of the current month; both are explicit so the output
    /// does not silently change at a year boundary.
    pub fn load(store: &Store, session: &Session, year: i32, months_elapsed: u32) -> Self {
        let Some(owner) = super::owner_of(session) else {
            return Self::default();
        };

        let transactions = match store.list_transactions(&owner) {
            // The store returns newest first; aggregate oldest first so
            // first-seen category order (and chart colors) track the ledger
            // instead of reshuffling with each new transaction
            Ok(mut txs) => {
                txs.reverse();
                txs
            }
            Err(e) => {
                warn!(owner = %owner, error = %e, "Analytics ledger fetch failed");
                return Self::default();
            }
        };

        let spending = aggregate::category_totals(&transactions);
        let totals = aggregate::ledger_totals(&transactions);
        let insights = generate_insights(&spending, &totals, months_elapsed);

        Self {
            spending,
            trend: aggregate::monthly_series(&transactions, year),
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::InsightKind;
    use crate::models::{NewTransaction, TransactionKind, TransactionStatus};
    use crate::session::{AuthUser, Session};
    use chrono::NaiveDate;

    fn signed_in(store: &Store, id: &str) -> Session {
        Session::initialize(
            store,
            Some(AuthUser {
                id: id.to_string(),
                email: format!("{}@example.com", id),
            }),
        )
    }

    fn add(store: &Store, kind: TransactionKind, category: Option<&str>, amount: f64, date: &str) {
        store
            .insert_transaction(
                "u1",
                &NewTransaction {
                    title: "tx".to_string(),
                    amount,
                    kind,
                    category: category.map(String::from),
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                    status: TransactionStatus::Completed,
                },
            )
            .unwrap();
    }

    #[test]
    fn test_empty_ledger_view() {
        let store = Store::in_memory().unwrap();
        let session = signed_in(&store, "u1");

        let view = AnalyticsView::load(&store, &session, 2026, 3);
        assert!(view.spending.is_empty());
        assert_eq!(view.trend.len(), 12);
        assert!(view.insights.is_empty());
    }

    #[test]
    fn test_end_to_end_example() {
        let store = Store::in_memory().unwrap();
        let session = signed_in(&store, "u1");

        add(&store, TransactionKind::Expense, Some("Food"), 50.0, "2026-03-01");
        add(&store, TransactionKind::Expense, Some("Food"), 30.0, "2026-03-05");
        add(&store, TransactionKind::Expense, Some("Transport"), 20.0, "2026-03-07");

        let view = AnalyticsView::load(&store, &session, 2026, 3);

        assert_eq!(view.spending.len(), 2);
        assert_eq!(view.spending[0].category, "Food");
        assert_eq!(view.spending[0].amount, 80.0);
        assert_eq!(view.spending[1].category, "Transport");
        assert_eq!(view.spending[1].amount, 20.0);

        let top = view
            .insights
            .iter()
            .find(|i| i.kind == InsightKind::TopCategory)
            .unwrap();
        assert!(top.message.contains("Food"));
        assert!(top.message.contains("$80"));

        assert_eq!(view.trend.len(), 12);
        assert_eq!(view.trend[2].expense, 100.0);
    }

    #[test]
    fn test_category_colors_stable_as_ledger_grows() {
        let store = Store::in_memory().unwrap();
        let session = signed_in(&store, "u1");

        add(&store, TransactionKind::Expense, Some("Food"), 50.0, "2026-03-01");
        let before = AnalyticsView::load(&store, &session, 2026, 3);
        assert_eq!(before.spending[0].category, "Food");
        let food_color = before.spending[0].color.clone();

        // A newer transaction in a new category lands after Food, so Food
        // keeps its slot and color even though the store lists Transport first
        add(&store, TransactionKind::Expense, Some("Transport"), 20.0, "2026-03-07");
        let after = AnalyticsView::load(&store, &session, 2026, 3);
        assert_eq!(after.spending[0].category, "Food");
        assert_eq!(after.spending[0].color, food_color);
        assert_eq!(after.spending[1].category, "Transport");
    }

    #[test]
    fn test_trend_year_is_explicit() {
        let store = Store::in_memory().unwrap();
        let session = signed_in(&store, "u1");

        add(&store, TransactionKind::Income, None, 100.0, "2025-06-01");
        add(&store, TransactionKind::Income, None, 200.0, "2026-06-01");

        let view_2025 = AnalyticsView::load(&store, &session, 2025, 6);
        let view_2026 = AnalyticsView::load(&store, &session, 2026, 6);
        assert_eq!(view_2025.trend[5].income, 100.0);
        assert_eq!(view_2026.trend[5].income, 200.0);
    }
}

//! Subscriptions view

use serde::Serialize;
use tracing::warn;

use crate::models::{BillingCycle, Subscription};
use crate::session::Session;
use crate::store::Store;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionsView {
    /// Soonest renewal first
    pub subscriptions: Vec<Subscription>,
    /// Sum of monthly-cycle prices only; yearly plans are excluded rather
    /// than pro-rated
    pub total_monthly: f64,
}

impl SubscriptionsView {
    pub fn load(store: &Store, session: &Session) -> Self {
        let Some(owner) = super::owner_of(session) else {
            return Self::default();
        };

        let subscriptions = match store.list_subscriptions(&owner) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Subscriptions fetch failed");
                return Self::default();
            }
        };

        let total_monthly = subscriptions
            .iter()
            .filter(|s| s.cycle == BillingCycle::Monthly)
            .map(|s| s.price)
            .sum();

        Self {
            subscriptions,
            total_monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monthly_total_skips_yearly() {
        let store = Store::in_memory().unwrap();
        let session = signed_in(&store, "u1");

        store
            .insert_subscription("u1", "Streaming", 15.99, BillingCycle::Monthly, date("2026-04-01"))
            .unwrap();
        store
            .insert_subscription("u1", "Music", 9.99, BillingCycle::Monthly, date("2026-03-20"))
            .unwrap();
        store
            .insert_subscription("u1", "Domain", 12.0, BillingCycle::Yearly, date("2026-09-01"))
            .unwrap();

        let view = SubscriptionsView::load(&store, &session);
        assert_eq!(view.subscriptions.len(), 3);
        // Soonest renewal first
        assert_eq!(view.subscriptions[0].name, "Music");
        assert!((view.total_monthly - 25.98).abs() < 1e-9);
    }
}

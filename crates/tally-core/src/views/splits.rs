//! Bill splits view

use serde::Serialize;
use tracing::warn;

use crate::models::{BillSplit, SplitStatus};
use crate::session::Session;
use crate::store::Store;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitsView {
    /// Newest first
    pub splits: Vec<BillSplit>,
    /// Your share across splits still awaiting payment
    pub pending_total: f64,
}

impl SplitsView {
    pub fn load(store: &Store, session: &Session) -> Self {
        let Some(owner) = super::owner_of(session) else {
            return Self::default();
        };

        let splits = match store.list_splits(&owner) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Bill splits fetch failed");
                return Self::default();
            }
        };

        let pending_total = splits
            .iter()
            .filter(|s| s.status == SplitStatus::Pending)
            .map(|s| s.per_person)
            .sum();

        Self {
            splits,
            pending_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthUser, Session};

    fn signed_in(store: &Store, id: &str) -> Session {
        Session::initialize(
            store,
            Some(AuthUser {
                id: id.to_string(),
                email: format!("{}@example.com", id),
            }),
        )
    }

    #[test]
    fn test_pending_total_excludes_paid() {
        let store = Store::in_memory().unwrap();
        let session = signed_in(&store, "u1");

        let dinner_id = store.insert_split("u1", "Dinner", 100.0, 4).unwrap();
        store.insert_split("u1", "Cab", 30.0, 3).unwrap();
        store.mark_split_paid("u1", dinner_id).unwrap();

        let view = SplitsView::load(&store, &session);
        assert_eq!(view.splits.len(), 2);
        // Newest first
        assert_eq!(view.splits[0].name, "Cab");
        assert_eq!(view.pending_total, 10.0);
    }

    #[test]
    fn test_anonymous_is_empty() {
        let store = Store::in_memory().unwrap();
        let view = SplitsView::load(&store, &Session::new());
        assert!(view.splits.is_empty());
        assert_eq!(view.pending_total, 0.0);
    }
}

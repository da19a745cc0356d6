//! Per-screen view models
//!
//! Each view loader fetches the complete record set it needs for one signed-in
//! owner, runs the aggregator synchronously over the in-memory result, and
//! returns a plain struct for the presentation layer to render.
//!
//! Reads fail open: a query error is logged and the loader returns its empty
//! default instead of propagating. Writes are the opposite: they return the
//! error to the caller and leave prior state untouched, so the user can
//! re-submit.

mod analytics;
mod budgets;
mod dashboard;
mod savings;
mod splits;
mod subscriptions;

pub use analytics::AnalyticsView;
pub use budgets::BudgetsView;
pub use dashboard::DashboardView;
pub use savings::{GoalProgress, SavingsView};
pub use splits::SplitsView;
pub use subscriptions::SubscriptionsView;

use crate::session::Session;

/// Owner id for a signed-in session, or None for the anonymous empty state
pub(crate) fn owner_of(session: &Session) -> Option<String> {
    session.user().map(|u| u.id.clone())
}

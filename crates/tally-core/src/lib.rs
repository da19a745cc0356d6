//! Tally Core Library
//!
//! Shared functionality for the Tally personal budget tracker:
//! - SQLite-backed record store with per-owner isolation
//! - Pure ledger aggregation (category totals, trends, budget utilization)
//! - Plain-language spending insights
//! - Even bill splitting with cent rounding
//! - Auth session state with cached profiles
//! - Per-user settings with optimistic toggling
//! - Per-screen view models that assemble the above

pub mod aggregate;
pub mod error;
pub mod insights;
pub mod models;
pub mod session;
pub mod settings;
pub mod split;
pub mod store;
pub mod views;

pub use aggregate::{
    BudgetUtilization, CategoryTotal, DayPoint, LedgerTotals, MonthPoint, CHART_COLORS,
};
pub use error::{Error, Result};
pub use insights::{generate_insights, Insight, InsightKind};
pub use models::{
    BillSplit, BillingCycle, Budget, NewTransaction, Profile, SavingsGoal, SplitStatus,
    Subscription, Transaction, TransactionKind, TransactionStatus,
};
pub use session::{AuthEvent, AuthUser, Session};
pub use settings::{SettingKey, SettingsEditor, UserSettings};
pub use store::Store;
pub use views::{
    AnalyticsView, BudgetsView, DashboardView, GoalProgress, SavingsView, SplitsView,
    SubscriptionsView,
};

//! Domain models for Tally

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("Unknown transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger transaction
///
/// Amounts are always positive; `kind` decides the direction. Transactions
/// are append-only: once written they are never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// User identity that owns this transaction
    pub owner: String,
    pub title: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// A new transaction before insertion
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}

/// A per-category spending limit for the current month
///
/// At most one budget exists per (owner, category); writes go through an
/// upsert keyed on that pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub owner: String,
    pub category: String,
    pub limit_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// A savings goal with a running balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub target_amount: f64,
    /// Only ever grows, via the store's atomic add-funds increment
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// A goal is completed once the saved balance reaches the target.
    pub fn completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Payment status of a bill split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitStatus {
    #[default]
    Pending,
    Paid,
}

impl SplitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl std::str::FromStr for SplitStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(format!("Unknown split status: {}", s)),
        }
    }
}

impl std::fmt::Display for SplitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bill divided evenly across participants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillSplit {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub total_amount: f64,
    pub participants: i64,
    /// total / participants, rounded to cents at creation
    pub per_person: f64,
    pub status: SplitStatus,
    pub created_at: DateTime<Utc>,
}

/// Subscription billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown billing cycle: {}", s)),
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring payment the user tracks manually
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub price: f64,
    pub cycle: BillingCycle,
    pub next_payment_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Optional per-user profile row
///
/// Absence of the row is normal for fresh accounts and falls back to
/// `Profile::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(TransactionKind::from_str("expense").unwrap(), TransactionKind::Expense);
        assert_eq!(TransactionKind::Income.as_str(), "income");
        assert!(TransactionKind::from_str("transfer").is_err());
    }

    #[test]
    fn test_goal_completion() {
        let mut goal = SavingsGoal {
            id: 1,
            owner: "u1".to_string(),
            name: "Laptop".to_string(),
            target_amount: 2000.0,
            current_amount: 1500.0,
            target_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            created_at: Utc::now(),
        };
        assert!(!goal.completed());

        goal.current_amount = 2000.0;
        assert!(goal.completed());

        goal.current_amount = 2500.0;
        assert!(goal.completed());
    }

    #[test]
    fn test_cycle_parsing() {
        assert_eq!(BillingCycle::from_str("Monthly").unwrap(), BillingCycle::Monthly);
        assert_eq!(BillingCycle::Yearly.to_string(), "yearly");
    }
}

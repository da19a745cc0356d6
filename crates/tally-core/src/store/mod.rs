//! Ledger record store backed by SQLite with connection pooling
//!
//! This module is organized by table:
//! - `transactions` - Append-only ledger operations
//! - `budgets` - Per-category monthly limits (upsert on owner+category)
//! - `savings` - Savings goals and the atomic add-funds increment
//! - `splits` - Bill splits
//! - `subscriptions` - Recurring payment tracking
//! - `profiles` - Optional per-user profile rows
//! - `settings` - Per-user boolean preferences
//!
//! The rest of the crate consumes the store only through these insert /
//! select / update / upsert operations; a missing optional row surfaces as
//! `Error::NotFound` so callers can fall back to defaults.

use chrono::{DateTime, NaiveDate, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod budgets;
mod profiles;
mod savings;
mod settings;
mod splits;
mod subscriptions;
mod transactions;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Parse a SQLite DATE string into a NaiveDate
pub(crate) fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

/// Record store wrapper with connection pooling
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Store {
    /// Open (or create) a store at the given path and run migrations
    pub fn open(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let store = Self {
            pool,
            db_path: path.to_string(),
        };
        store.run_migrations()?;

        Ok(store)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway store (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because each pooled
    /// connection would otherwise see its own empty in-memory database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!("/tmp/tally_test_{}_{}.db", std::process::id(), id);

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::open(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Enable foreign keys
            PRAGMA foreign_keys = ON;

            -- WAL mode: readers don't block writers
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            -- Transactions (append-only ledger)
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                owner TEXT NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                kind TEXT NOT NULL,                        -- income, expense
                category TEXT,
                date DATE NOT NULL,
                status TEXT NOT NULL DEFAULT 'completed',  -- completed, pending
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_transactions_owner ON transactions(owner);
            CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
            CREATE INDEX IF NOT EXISTS idx_transactions_kind ON transactions(kind);

            -- Budgets (one per owner+category)
            CREATE TABLE IF NOT EXISTS budgets (
                id INTEGER PRIMARY KEY,
                owner TEXT NOT NULL,
                category TEXT NOT NULL,
                limit_amount REAL NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(owner, category)
            );

            CREATE INDEX IF NOT EXISTS idx_budgets_owner ON budgets(owner);

            -- Savings goals
            CREATE TABLE IF NOT EXISTS savings_goals (
                id INTEGER PRIMARY KEY,
                owner TEXT NOT NULL,
                name TEXT NOT NULL,
                target_amount REAL NOT NULL,
                current_amount REAL NOT NULL DEFAULT 0,
                target_date DATE NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_savings_goals_owner ON savings_goals(owner);

            -- Bill splits
            CREATE TABLE IF NOT EXISTS bill_splits (
                id INTEGER PRIMARY KEY,
                owner TEXT NOT NULL,
                name TEXT NOT NULL,
                total_amount REAL NOT NULL,
                participants INTEGER NOT NULL,
                per_person REAL NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',    -- pending, paid
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_bill_splits_owner ON bill_splits(owner);

            -- Subscriptions (manually tracked recurring payments)
            CREATE TABLE IF NOT EXISTS subscriptions (
                id INTEGER PRIMARY KEY,
                owner TEXT NOT NULL,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                cycle TEXT NOT NULL,                       -- monthly, yearly
                next_payment_date DATE NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_subscriptions_owner ON subscriptions(owner);
            CREATE INDEX IF NOT EXISTS idx_subscriptions_next_payment ON subscriptions(next_payment_date);

            -- Profiles (optional, one row per user)
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY,
                first_name TEXT,
                last_name TEXT,
                bio TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            -- User settings (optional, one row per user; defaults apply when absent)
            CREATE TABLE IF NOT EXISTS user_settings (
                user_id TEXT PRIMARY KEY,
                email_alerts BOOLEAN NOT NULL DEFAULT 1,
                push_alerts BOOLEAN NOT NULL DEFAULT 1,
                dark_mode BOOLEAN NOT NULL DEFAULT 1,
                weekly_summary BOOLEAN NOT NULL DEFAULT 0,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        info!("Store schema initialized");
        Ok(())
    }
}

//! Natural-language insight generation
//!
//! Insights are derived text only: they are recomputed from aggregator output
//! every time the ledger changes and carry no state of their own.

mod generator;
mod types;

pub use generator::generate_insights;
pub use types::{Insight, InsightKind};

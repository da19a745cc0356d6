//! Core types for insight generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of insight sentences the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Names the category with the highest summed expense
    TopCategory,
    /// Savings rate (or deficit) relative to income
    SavingsRate,
    /// Average spend per elapsed month
    MonthlyAverage,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::TopCategory => "top_category",
            InsightKind::SavingsRate => "savings_rate",
            InsightKind::MonthlyAverage => "monthly_average",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_category" => Ok(InsightKind::TopCategory),
            "savings_rate" => Ok(InsightKind::SavingsRate),
            "monthly_average" => Ok(InsightKind::MonthlyAverage),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// A generated insight sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

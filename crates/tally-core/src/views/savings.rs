//! Savings view: goals with progress percentages

use serde::Serialize;
use tracing::warn;

use crate::models::SavingsGoal;
use crate::session::Session;
use crate::store::Store;

/// A goal plus its display-ready progress
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    /// current / target, capped at 100
    pub percentage: f64,
    pub completed: bool,
}

impl GoalProgress {
    fn from_goal(goal: SavingsGoal) -> Self {
        let percentage = if goal.target_amount > 0.0 {
            (goal.current_amount / goal.target_amount * 100.0).min(100.0)
        } else {
            0.0
        };
        let completed = goal.completed();
        Self {
            goal,
            percentage,
            completed,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SavingsView {
    pub goals: Vec<GoalProgress>,
    pub total_saved: f64,
    pub total_target: f64,
}

impl SavingsView {
    pub fn load(store: &Store, session: &Session) -> Self {
        let Some(owner) = super::owner_of(session) else {
            return Self::default();
        };

        let goals = match store.list_goals(&owner) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Savings goals fetch failed");
                return Self::default();
            }
        };

        let total_saved = goals.iter().map(|g| g.current_amount).sum();
        let total_target = goals.iter().map(|g| g.target_amount).sum();

        Self {
            goals: goals.into_iter().map(GoalProgress::from_goal).collect(),
            total_saved,
            total_target,
        }
    }
}

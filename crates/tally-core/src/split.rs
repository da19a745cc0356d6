//! Even bill splitting

use crate::error::{Error, Result};

/// Round a currency amount to cents for display or storage.
///
/// Accumulation elsewhere stays unrounded; this is applied once at the edge.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Divide a bill total evenly across participants.
///
/// Validates before dividing: the total must be non-negative and there must
/// be at least one participant. Returns the exact quotient; use
/// [`round_cents`] for the displayed per-person amount.
pub fn split_evenly(total: f64, participants: i64) -> Result<f64> {
    if total < 0.0 {
        return Err(Error::InvalidData(format!(
            "Split total must be non-negative, got {}",
            total
        )));
    }
    if participants < 1 {
        return Err(Error::InvalidData(format!(
            "Split needs at least one participant, got {}",
            participants
        )));
    }

    Ok(total / participants as f64)
}

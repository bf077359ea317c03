//! Excess redistribution among the rows of a compound container.
//!
//! When some rows need more than their proportional share, they are granted exactly what they
//! require, largest over-request first, and the remaining space is re-split proportionally
//! among the rows not yet processed. The result is the notional reference height ("balanced"
//! height) against which the other rows compute their final share.

/// The inputs of one displayed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowShare {
    /// Proportional share of the container's height.
    pub desired: f64,
    /// Content-driven minimum height.
    pub required: f64,
    /// Proportional weight among the displayed rows.
    pub factor: f64,
}

impl RowShare {
    pub fn new(desired: f64, required: f64, factor: f64) -> Self {
        Self {
            desired,
            required,
            factor,
        }
    }

    pub fn excess(&self) -> f64 {
        self.required - self.desired
    }

    /// The row's final height against a balanced reference height.
    pub fn final_height(&self, balanced: f64) -> f64 {
        self.required.max(balanced * self.factor)
    }
}

/// One processed excessive row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceStep {
    /// Index of the row in the input slice.
    pub row: usize,
    pub remaining: f64,
    pub remaining_weight: f64,
    pub normalized: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceOutcome {
    pub balanced: f64,
    /// Excessive rows in processing order, up to and including the one that converged.
    pub steps: Vec<BalanceStep>,
    /// Whether a processed row fit inside its normalized share, ending the loop early.
    pub converged: bool,
}

/// Computes the balanced height of a container of `final_height` holding `rows`.
///
/// Once the unprocessed weight drops to `tolerance` or below, every row has been granted what
/// it requires and the loop stops.
pub fn balance(final_height: f64, rows: &[RowShare], tolerance: f64) -> BalanceOutcome {
    let mut outcome = BalanceOutcome {
        balanced: final_height,
        steps: Vec::new(),
        converged: false,
    };
    if rows.len() <= 1 {
        return outcome;
    }

    // Stable sort: equal excesses keep their discovery order.
    let mut excessive: Vec<usize> = (0..rows.len()).filter(|&i| rows[i].excess() > 0.0).collect();
    excessive.sort_by(|&a, &b| rows[b].excess().total_cmp(&rows[a].excess()));

    let mut remaining = final_height;
    let mut remaining_weight = 1.0;
    for index in excessive {
        let row = rows[index];
        remaining -= row.required;
        remaining_weight -= row.factor;
        if remaining_weight <= tolerance {
            // Every row is excessive; each is already granted what it requires.
            outcome.converged = true;
            break;
        }
        let normalized = remaining * (1.0 / remaining_weight);
        outcome.steps.push(BalanceStep {
            row: index,
            remaining,
            remaining_weight,
            normalized,
        });
        if row.required <= normalized * row.factor {
            outcome.converged = true;
            break;
        }
        outcome.balanced = normalized;
    }
    outcome
}

//! Threshold anomaly flags over the six-month derived series.
//!
//! Plain comparisons against fixed policy constants; no hysteresis, no
//! history.

/// Simulated balance below this value raises the low-balance warning.
pub const LOW_BALANCE_THRESHOLD: f64 = 200.0;

/// Expense share of total movements above this ratio raises the
/// expense-dominance warning.
pub const EXPENSE_DOMINANCE_RATIO: f64 = 0.8;

/// Outcome of the anomaly scan. Flags are independent and may co-occur.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertReport {
    /// Some simulated balance dipped under [`LOW_BALANCE_THRESHOLD`].
    pub low_balance: bool,
    /// Expenses exceed [`EXPENSE_DOMINANCE_RATIO`] of total movements.
    pub expense_dominance: bool,
    /// Display label of every month whose net flow is negative.
    pub negative_months: Vec<String>,
}

impl AlertReport {
    /// True only when no warning fired, so the view can render a single
    /// positive confirmation instead of silence.
    pub fn all_clear(&self) -> bool {
        !self.low_balance && !self.expense_dominance && self.negative_months.is_empty()
    }
}

/// Evaluate every flag over the derived series.
pub fn detect_anomalies(
    revenues: &[f64],
    expenses: &[f64],
    net_flow: &[f64],
    simulated_balance: &[f64],
    labels: &[String],
) -> AlertReport {
    let low_balance = simulated_balance.iter().any(|v| *v < LOW_BALANCE_THRESHOLD);

    let total_revenues: f64 = revenues.iter().sum();
    let total_expenses: f64 = expenses.iter().sum();
    let expense_dominance = total_expenses > 0.0
        && total_expenses / (total_revenues + total_expenses) > EXPENSE_DOMINANCE_RATIO;

    let negative_months = net_flow
        .iter()
        .zip(labels)
        .filter(|(flow, _)| **flow < 0.0)
        .map(|(_, label)| label.clone())
        .collect();

    AlertReport {
        low_balance,
        expense_dominance,
        negative_months,
    }
}

//! Local financial aggregator.
//!
//! Turns a flat transaction list into the trailing-six-month series the
//! analysis view renders: signed monthly buckets, a revenue/expense split,
//! net flow, and a simulated running balance. Pure and synchronous; derived
//! values are recomputed from scratch on every call and nothing is cached.

use chrono::NaiveDate;

use crate::alerts::{detect_anomalies, AlertReport};
use crate::model::Transaction;
use crate::months::{last_six_month_keys, month_label};

/// Seed for the simulated balance. A placeholder projection constant, not
/// the account's real opening balance.
pub const DEFAULT_STARTING_BALANCE: f64 = 1000.0;

/// Sum signed amounts into one bucket per month key.
///
/// Buckets are pre-seeded to zero so months with no activity stay present;
/// transactions dated outside the window are silently ignored. Returned
/// values align index-for-index with `keys` (chronological order).
pub fn bucket_by_month(txns: &[Transaction], keys: &[String]) -> Vec<f64> {
    let mut buckets = vec![0.0; keys.len()];
    for t in txns {
        if let Some(i) = keys.iter().position(|k| k == t.month_key()) {
            buckets[i] += t.amount;
        }
    }
    buckets
}

/// Bucket credits and debits independently per month.
///
/// Returns `(revenues, expenses)` aligned to `keys`. Transactions whose kind
/// is neither a credit nor a debit land in neither series.
pub fn split_by_kind(txns: &[Transaction], keys: &[String]) -> (Vec<f64>, Vec<f64>) {
    let mut revenues = vec![0.0; keys.len()];
    let mut expenses = vec![0.0; keys.len()];
    for t in txns {
        let Some(i) = keys.iter().position(|k| k == t.month_key()) else {
            continue;
        };
        if t.is_credit() {
            revenues[i] += t.amount;
        } else if t.is_debit() {
            expenses[i] += t.amount;
        }
    }
    (revenues, expenses)
}

/// Element-wise `revenues[i] - expenses[i]`.
///
/// Both slices come from the same month keys, so their lengths always agree.
pub fn net_flow(revenues: &[f64], expenses: &[f64]) -> Vec<f64> {
    debug_assert_eq!(revenues.len(), expenses.len());
    revenues
        .iter()
        .zip(expenses)
        .map(|(r, e)| r - e)
        .collect()
}

/// Cumulative sum of `net_flow` seeded with `starting_balance`.
///
/// A hypothetical projection meant to visualize shortfall risk; it may
/// decrease whenever a month's net flow is negative.
pub fn simulate_running_balance(net_flow: &[f64], starting_balance: f64) -> Vec<f64> {
    let mut balance = starting_balance;
    net_flow
        .iter()
        .map(|flow| {
            balance += flow;
            balance
        })
        .collect()
}

/// Derived six-month view of one account's (or all accounts') transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceAnalysis {
    /// `YYYY-MM`, oldest first
    pub keys: Vec<String>,
    /// Short display labels aligned to `keys`
    pub labels: Vec<String>,
    pub revenues: Vec<f64>,
    pub expenses: Vec<f64>,
    pub net_flow: Vec<f64>,
    pub simulated_balance: Vec<f64>,
    pub alerts: AlertReport,
}

impl FinanceAnalysis {
    /// Run the full aggregation for the six months ending at `today`.
    pub fn compute(txns: &[Transaction], today: NaiveDate, starting_balance: f64) -> Self {
        let keys = last_six_month_keys(today);
        let labels: Vec<String> = keys.iter().map(|k| month_label(k)).collect();

        let (revenues, expenses) = split_by_kind(txns, &keys);
        let net_flow = net_flow(&revenues, &expenses);
        let simulated_balance = simulate_running_balance(&net_flow, starting_balance);
        let alerts = detect_anomalies(&revenues, &expenses, &net_flow, &simulated_balance, &labels);

        Self {
            keys,
            labels,
            revenues,
            expenses,
            net_flow,
            simulated_balance,
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccountRef;

    fn tx(date: &str, amount: f64, kind: &str) -> Transaction {
        Transaction {
            id: 0,
            description: String::new(),
            amount,
            kind: kind.to_string(),
            category: None,
            date: date.to_string(),
            product: None,
            account: Some(AccountRef {
                id: 1,
                iban: None,
            }),
        }
    }

    fn keys() -> Vec<String> {
        last_six_month_keys(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    #[test]
    fn test_empty_input_yields_all_zero_buckets() {
        let buckets = bucket_by_month(&[], &keys());
        assert_eq!(buckets, vec![0.0; 6]);
    }

    #[test]
    fn test_bucket_sums_same_month() {
        let txns = vec![tx("2025-01-15", 100.0, "Crédit"), tx("2025-01-20", 50.0, "Crédit")];
        let keys = last_six_month_keys(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        let buckets = bucket_by_month(&txns, &keys);
        assert_eq!(buckets[5], 150.0);
        assert_eq!(buckets[..5], [0.0; 5]);
    }

    #[test]
    fn test_bucket_ignores_out_of_window_months() {
        let txns = vec![tx("2024-01-01", 999.0, "Débit"), tx("2025-06-01", -20.0, "Débit")];
        let buckets = bucket_by_month(&txns, &keys());
        assert_eq!(buckets.iter().sum::<f64>(), -20.0);
    }

    #[test]
    fn test_split_excludes_unclassified_kinds() {
        let txns = vec![
            tx("2025-06-01", 100.0, "Crédit"),
            tx("2025-06-02", 40.0, "Débit"),
            tx("2025-06-03", 77.0, "Virement interne"),
        ];
        let (revenues, expenses) = split_by_kind(&txns, &keys());
        assert_eq!(revenues[5], 100.0);
        assert_eq!(expenses[5], 40.0);
        // the unclassified amount appears in neither series
        assert_eq!(revenues.iter().sum::<f64>() + expenses.iter().sum::<f64>(), 140.0);
    }

    #[test]
    fn test_net_flow_is_elementwise_subtraction() {
        assert_eq!(net_flow(&[100.0, 0.0], &[30.0, 10.0]), vec![70.0, -10.0]);
    }

    #[test]
    fn test_running_balance_is_cumulative() {
        assert_eq!(
            simulate_running_balance(&[70.0, -10.0], 1000.0),
            vec![1070.0, 1060.0]
        );
    }

    #[test]
    fn test_running_balance_can_decrease() {
        let balances = simulate_running_balance(&[-300.0, -900.0, 50.0], DEFAULT_STARTING_BALANCE);
        assert_eq!(balances, vec![700.0, -200.0, -150.0]);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let txns = vec![
            tx("2025-05-01", 1200.0, "Crédit"),
            tx("2025-05-10", 800.0, "Débit"),
            tx("2025-06-02", 300.0, "Débit"),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let a = FinanceAnalysis::compute(&txns, today, DEFAULT_STARTING_BALANCE);
        let b = FinanceAnalysis::compute(&txns, today, DEFAULT_STARTING_BALANCE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compute_wires_series_together() {
        let txns = vec![
            tx("2025-05-01", 1000.0, "Crédit"),
            tx("2025-05-03", 400.0, "Débit"),
            tx("2025-06-07", 900.0, "Débit"),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let analysis = FinanceAnalysis::compute(&txns, today, 1000.0);

        assert_eq!(analysis.keys.len(), 6);
        assert_eq!(analysis.net_flow[4], 600.0); // 2025-05
        assert_eq!(analysis.net_flow[5], -900.0); // 2025-06
        assert_eq!(analysis.simulated_balance[5], 1000.0 + 600.0 - 900.0);
        assert!(analysis.alerts.negative_months.contains(&"juin".to_string()));
    }
}

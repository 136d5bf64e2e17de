//! Client-side derivations for the overview and browsing views: category
//! breakdowns, product usage, peak month, and list filtering.

use std::collections::HashMap;

use crate::model::{MonthlyPoint, Transaction};

/// Signed amount per category label, largest movements first.
pub fn category_totals(txns: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in txns {
        *totals.entry(t.category_label()).or_insert(0.0) += t.amount;
    }
    let mut out: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(cat, total)| (cat.to_string(), total))
        .collect();
    out.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Transaction count per banking product, most used first.
pub fn product_usage(txns: &[Transaction]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in txns {
        *counts.entry(t.product_label()).or_insert(0) += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(product, n)| (product.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// The product accounting for strictly more than half of all transactions,
/// if any.
pub fn dominant_product(usage: &[(String, usize)]) -> Option<&(String, usize)> {
    let total: usize = usage.iter().map(|(_, n)| n).sum();
    usage.iter().find(|(_, n)| n * 2 > total)
}

/// Month with the largest bucketed value.
pub fn peak_month(labels: &[String], values: &[f64]) -> Option<(String, f64)> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .and_then(|(i, v)| labels.get(i).map(|label| (label.clone(), *v)))
}

/// Monthly totals for one category, recomputed from the raw list over the
/// months of the server trend. With no category selected the server series
/// is used as-is.
pub fn trend_for_category(
    txns: &[Transaction],
    server_trend: &[MonthlyPoint],
    category: Option<&str>,
) -> Vec<MonthlyPoint> {
    let Some(cat) = category else {
        return server_trend.to_vec();
    };
    server_trend
        .iter()
        .map(|point| {
            let total = txns
                .iter()
                .filter(|t| t.date.starts_with(&point.month) && t.category_label() == cat)
                .map(|t| t.amount)
                .sum();
            MonthlyPoint {
                month: point.month.clone(),
                total,
            }
        })
        .collect()
}

/// Browse filter: by account, by exact category, and by case-insensitive
/// description search, combined.
pub fn filter_transactions<'a>(
    txns: &'a [Transaction],
    account: Option<i64>,
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Transaction> {
    let needle = search.map(|s| s.to_lowercase());
    txns.iter()
        .filter(|t| account.is_none_or(|id| t.account_id() == Some(id)))
        .filter(|t| category.is_none_or(|c| t.category_label() == c))
        .filter(|t| {
            needle
                .as_deref()
                .is_none_or(|n| t.description.to_lowercase().contains(n))
        })
        .collect()
}

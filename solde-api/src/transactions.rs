//! Transaction endpoints.

use anyhow::Result;
use solde_core::{MonthlyPoint, Transaction};

use crate::Session;

/// Every transaction of the authenticated user, across all accounts.
pub async fn list(session: &Session) -> Result<Vec<Transaction>> {
    session.get_json("/api/transactions/me").await
}

/// The server's "recent transactions" slice used on the overview.
pub async fn recent(session: &Session) -> Result<Vec<Transaction>> {
    session.get_json("/api/transactions/recentes").await
}

/// Server-computed monthly totals, sorted chronologically by month key.
pub async fn monthly_trend(session: &Session) -> Result<Vec<MonthlyPoint>> {
    let mut trend: Vec<MonthlyPoint> = session.get_json("/api/transactions/monthly").await?;
    trend.sort_by(|a, b| a.month.cmp(&b.month));
    Ok(trend)
}

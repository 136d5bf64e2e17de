//! Account endpoints.

use anyhow::Result;
use solde_core::Account;

use crate::Session;

/// All accounts of the authenticated user.
pub async fn list(session: &Session) -> Result<Vec<Account>> {
    session.get_json("/api/comptes/me").await
}

/// Combined balance across the user's accounts, server-computed.
pub async fn total_balance(session: &Session) -> Result<f64> {
    session.get_json("/api/comptes/solde/total").await
}

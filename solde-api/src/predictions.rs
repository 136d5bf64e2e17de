//! Remote prediction and recommendation endpoints. All the modeling lives
//! server-side; the client only fetches and renders.

use anyhow::Result;
use solde_core::PredictionBatch;

use crate::Session;

/// Next-month per-category spending predictions for one client.
pub async fn predict(session: &Session, client_id: i64) -> Result<PredictionBatch> {
    session
        .get_json(&format!("/api/test/predict-montant?clientId={client_id}"))
        .await
}

/// Top-N personalized product recommendations for one client.
pub async fn recommend(session: &Session, client_id: i64, top_n: usize) -> Result<Vec<String>> {
    session
        .get_json(&format!("/api/test/recommend?clientId={client_id}&topN={top_n}"))
        .await
}

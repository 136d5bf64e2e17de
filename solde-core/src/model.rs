//! Wire types for the remote banking API.
//!
//! The server schema is French (`montant`, `solde`, `devise`, ...); fields
//! carry `serde` renames so the Rust side stays English. Transaction dates
//! stay ISO-8601 strings: month bucketing only ever slices the `YYYY-MM`
//! prefix, which compares lexicographically in chronological order.

use serde::{Deserialize, Serialize};

/// Label used when the server sends no category/product for a transaction.
pub const DEFAULT_CATEGORY: &str = "Autre";

/// Evolution threshold (in currency units) separating a stable prediction
/// from a rising/falling one.
pub const TREND_DELTA: f64 = 5.0;

/// Reference to the account a transaction belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRef {
    pub id: i64,
    #[serde(default)]
    pub iban: Option<String>,
}

/// A single dated monetary movement, as served by `/api/transactions/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    /// Signed amount
    #[serde(rename = "montant")]
    pub amount: f64,
    /// Free-text movement kind ("Crédit", "Débit", "Revenu mensuel", ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "categorie", default)]
    pub category: Option<String>,
    /// Calendar day, `YYYY-MM-DD...`
    pub date: String,
    #[serde(rename = "produit", default)]
    pub product: Option<String>,
    #[serde(rename = "compteBancaire", default)]
    pub account: Option<AccountRef>,
}

impl Transaction {
    /// `YYYY-MM` prefix of the transaction date.
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    /// Case-insensitive substring match on the movement kind.
    pub fn is_credit(&self) -> bool {
        let kind = self.kind.to_lowercase();
        kind.contains("crédit") || kind.contains("revenu")
    }

    pub fn is_debit(&self) -> bool {
        self.kind.to_lowercase().contains("débit")
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn product_label(&self) -> &str {
        self.product.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn account_id(&self) -> Option<i64> {
        self.account.as_ref().map(|a| a.id)
    }
}

/// A bank account, as served by `/api/comptes/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub iban: String,
    #[serde(rename = "solde")]
    pub balance: f64,
    #[serde(rename = "devise")]
    pub currency: String,
    #[serde(rename = "dateOuverture", default)]
    pub opened_on: Option<String>,
}

impl Account {
    /// Case-insensitive search over IBAN and currency.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.iban.to_lowercase().contains(&q) || self.currency.to_lowercase().contains(&q)
    }
}

/// The authenticated user, as served by `/api/utilisateurs/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    /// Client identifier expected by the prediction endpoints.
    #[serde(rename = "cli")]
    pub client_id: i64,
}

/// One point of the server-computed monthly trend (`/api/transactions/monthly`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    /// `YYYY-MM`
    #[serde(rename = "mois")]
    pub month: String,
    pub total: f64,
}

/// Next-month spending prediction for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPrediction {
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "prediction")]
    pub predicted: f64,
    #[serde(rename = "historique", default)]
    pub historical: Option<f64>,
}

/// Direction of a prediction relative to its historical baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "Hausse",
            Trend::Falling => "Baisse",
            Trend::Stable => "Stable",
        }
    }
}

impl CategoryPrediction {
    /// Predicted minus historical; zero when the server sent no baseline.
    pub fn evolution(&self) -> f64 {
        self.historical.map(|h| self.predicted - h).unwrap_or(0.0)
    }

    pub fn trend(&self) -> Trend {
        let delta = self.evolution();
        if delta > TREND_DELTA {
            Trend::Rising
        } else if delta < -TREND_DELTA {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }
}

/// Full prediction response (`/api/test/predict-montant`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionBatch {
    #[serde(rename = "resultats")]
    pub results: Vec<CategoryPrediction>,
    #[serde(rename = "mois")]
    pub month: u32,
    #[serde(rename = "annee")]
    pub year: i32,
}

impl PredictionBatch {
    pub fn total_predicted(&self) -> f64 {
        self.results.iter().map(|p| p.predicted).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: &str) -> Transaction {
        Transaction {
            id: 1,
            description: "test".to_string(),
            amount: 10.0,
            kind: kind.to_string(),
            category: None,
            date: "2025-01-15".to_string(),
            product: None,
            account: None,
        }
    }

    #[test]
    fn test_kind_classification_is_case_insensitive() {
        assert!(tx("Crédit").is_credit());
        assert!(tx("CRÉDIT").is_credit());
        assert!(tx("Revenu mensuel").is_credit());
        assert!(tx("Débit").is_debit());
        assert!(tx("débit carte").is_debit());
    }

    #[test]
    fn test_unknown_kind_is_neither() {
        let t = tx("Virement");
        assert!(!t.is_credit());
        assert!(!t.is_debit());
    }

    #[test]
    fn test_month_key_slices_date_prefix() {
        let mut t = tx("Débit");
        t.date = "2025-01-15T09:30:00".to_string();
        assert_eq!(t.month_key(), "2025-01");

        // degenerate short date falls back to the whole string
        t.date = "2025".to_string();
        assert_eq!(t.month_key(), "2025");
    }

    #[test]
    fn test_category_defaults() {
        let t = tx("Débit");
        assert_eq!(t.category_label(), "Autre");
        assert_eq!(t.product_label(), "Autre");
    }

    #[test]
    fn test_transaction_deserializes_french_wire_format() {
        let json = r#"{
            "id": 42,
            "description": "Courses Carrefour",
            "montant": -85.5,
            "type": "Débit",
            "categorie": "Shopping",
            "date": "2025-03-02",
            "produit": "Carte Visa",
            "compteBancaire": { "id": 7, "iban": "TN5901000067123456789123" }
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.amount, -85.5);
        assert_eq!(t.category_label(), "Shopping");
        assert_eq!(t.account_id(), Some(7));
        assert!(t.is_debit());
    }

    #[test]
    fn test_transaction_tolerates_missing_optionals() {
        let json = r#"{ "id": 1, "montant": 12.0, "date": "2025-03-02" }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.kind, "");
        assert_eq!(t.category, None);
        assert_eq!(t.account_id(), None);
    }

    #[test]
    fn test_account_deserialization_and_search() {
        let json = r#"{
            "id": 3,
            "iban": "TN5904018104003691234567",
            "solde": 2450.75,
            "devise": "TND",
            "dateOuverture": "2021-06-01"
        }"#;
        let a: Account = serde_json::from_str(json).unwrap();
        assert_eq!(a.balance, 2450.75);
        assert!(a.matches("tnd"));
        assert!(a.matches("0401"));
        assert!(!a.matches("EUR"));
    }

    #[test]
    fn test_prediction_trend_thresholds() {
        let p = |predicted: f64, historical: Option<f64>| CategoryPrediction {
            category: "Alimentation".to_string(),
            predicted,
            historical,
        };
        assert_eq!(p(110.0, Some(100.0)).trend(), Trend::Rising);
        assert_eq!(p(90.0, Some(100.0)).trend(), Trend::Falling);
        assert_eq!(p(105.0, Some(100.0)).trend(), Trend::Stable); // delta == 5 is stable
        assert_eq!(p(100.0, None).trend(), Trend::Stable);
    }

    #[test]
    fn test_prediction_batch_total() {
        let json = r#"{
            "resultats": [
                { "categorie": "Transport", "prediction": 40.0, "historique": 30.0 },
                { "categorie": "Loisirs", "prediction": 60.0 }
            ],
            "mois": 8,
            "annee": 2025
        }"#;
        let batch: PredictionBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.total_predicted(), 100.0);
        assert_eq!(batch.month, 8);
        assert_eq!(batch.results[1].trend(), Trend::Stable);
    }
}

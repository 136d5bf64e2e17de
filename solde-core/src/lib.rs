//! solde-core: domain types and local finance analysis for the solde client

pub mod alerts;
pub mod analysis;
pub mod model;
pub mod months;
pub mod stats;

pub use alerts::{detect_anomalies, AlertReport, EXPENSE_DOMINANCE_RATIO, LOW_BALANCE_THRESHOLD};
pub use analysis::{
    bucket_by_month, net_flow, simulate_running_balance, split_by_kind, FinanceAnalysis,
    DEFAULT_STARTING_BALANCE,
};
pub use model::{
    Account, AccountRef, CategoryPrediction, MonthlyPoint, PredictionBatch, Transaction, Trend,
    UserProfile,
};
pub use months::{last_six_month_keys, month_label, WINDOW_MONTHS};
pub use stats::{
    category_totals, dominant_product, filter_transactions, peak_month, product_usage,
    trend_for_category,
};

//! Plain-text rendering of accounts, transactions, and the finance analysis.

use solde_core::{
    dominant_product, peak_month, Account, AlertReport, FinanceAnalysis, MonthlyPoint,
    PredictionBatch, Transaction, EXPENSE_DOMINANCE_RATIO, LOW_BALANCE_THRESHOLD,
};

pub fn print_accounts(accounts: &[Account]) {
    if accounts.is_empty() {
        println!("(aucun compte)");
        return;
    }
    for a in accounts {
        let opened = a.opened_on.as_deref().unwrap_or("-");
        println!(
            "#{:<4} {}  {:>12.2} {}  (ouvert le {})",
            a.id, a.iban, a.balance, a.currency, opened
        );
    }
}

pub fn print_transactions(txns: &[&Transaction]) {
    if txns.is_empty() {
        println!("(aucune transaction)");
        return;
    }
    for t in txns {
        println!(
            "{}  {:>10.2}  [{}] {} — {}",
            t.date,
            t.amount,
            t.kind,
            t.category_label(),
            t.description
        );
    }
}

pub fn print_trend(trend: &[MonthlyPoint]) {
    for p in trend {
        println!("{}  {:>12.2}", p.month, p.total);
    }
}

pub fn print_analysis(analysis: &FinanceAnalysis) {
    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>12}",
        "Mois", "Revenus", "Dépenses", "Flux net", "Solde simulé"
    );
    for i in 0..analysis.labels.len() {
        println!(
            "{:<6} {:>10.2} {:>10.2} {:>10.2} {:>12.2}",
            analysis.labels[i],
            analysis.revenues[i],
            analysis.expenses[i],
            analysis.net_flow[i],
            analysis.simulated_balance[i]
        );
    }

    if let Some((month, value)) = peak_month(&analysis.labels, &analysis.expenses) {
        println!("\nLe mois avec le plus de dépenses est {month} ({value:.2}).");
    }

    println!();
    print_alerts(&analysis.alerts);
}

pub fn print_alerts(alerts: &AlertReport) {
    for month in &alerts.negative_months {
        println!("Flux net négatif détecté en {month}.");
    }
    if alerts.low_balance {
        println!(
            "Votre solde prévisionnel pourrait passer sous {LOW_BALANCE_THRESHOLD:.0}."
        );
    }
    if alerts.expense_dominance {
        println!(
            "Vos dépenses représentent plus de {:.0}% de vos mouvements totaux.",
            EXPENSE_DOMINANCE_RATIO * 100.0
        );
    }
    if alerts.all_clear() {
        println!("Aucune anomalie détectée.");
    }
}

pub fn print_category_totals(totals: &[(String, f64)]) {
    for (category, total) in totals {
        println!("{:<24} {:>12.2}", category, total);
    }
}

pub fn print_product_usage(usage: &[(String, usize)]) {
    let total: usize = usage.iter().map(|(_, n)| n).sum();
    for (product, count) in usage {
        let pct = if total > 0 {
            *count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        println!("{:<24} {:>5}  {:>5.1}%", product, count, pct);
    }
    if let Some((product, _)) = dominant_product(usage) {
        println!("\nProduit dominant : {product}");
    }
}

pub fn print_predictions(batch: &PredictionBatch) {
    let total = batch.total_predicted();
    println!(
        "Prévisions pour {:02}/{} — total {:.2}\n",
        batch.month, batch.year, total
    );
    for p in &batch.results {
        let share = if total > 0.0 {
            p.predicted / total * 100.0
        } else {
            0.0
        };
        println!(
            "{:<28} {:>10.2}  {:>5.1}%  {}",
            p.category,
            p.predicted,
            share,
            p.trend().label()
        );
    }
}

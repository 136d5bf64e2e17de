//! Trailing-month window shared by every six-month series in the app.

use chrono::{Datelike, NaiveDate};

/// Number of calendar months covered by the analysis window.
pub const WINDOW_MONTHS: usize = 6;

/// The six `YYYY-MM` keys ending at `today`'s month, oldest first.
///
/// Always exactly six contiguous keys; the year decrements when stepping
/// back past January.
pub fn last_six_month_keys(today: NaiveDate) -> Vec<String> {
    let mut keys = Vec::with_capacity(WINDOW_MONTHS);
    for back in (0..WINDOW_MONTHS as i32).rev() {
        let mut year = today.year();
        let mut month = today.month() as i32 - back;
        while month < 1 {
            month += 12;
            year -= 1;
        }
        keys.push(format!("{year:04}-{month:02}"));
    }
    keys
}

/// Short French label for a `YYYY-MM` key, falling back to the key itself
/// when the month part doesn't parse.
pub fn month_label(key: &str) -> String {
    const LABELS: [&str; 12] = [
        "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov", "déc",
    ];
    match key.get(5..7).and_then(|m| m.parse::<usize>().ok()) {
        Some(m) if (1..=12).contains(&m) => LABELS[m - 1].to_string(),
        _ => key.to_string(),
    }
}

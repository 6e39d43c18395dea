//! Display formatting for currency amounts and timestamps.

use chrono::{Local, TimeZone};

/// Formats an amount as en-US dollars: `1234.5` -> `"$1,234.50"`.
///
/// Rounds to whole cents. Negative amounts get a leading minus sign.
pub fn usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${dollars}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a Unix timestamp as the dashboard's last-updated line,
/// e.g. `"Today at 3:45:12 PM"` in local time.
pub fn last_updated(timestamp: f64) -> String {
    let secs = timestamp.trunc() as i64;
    match Local.timestamp_opt(secs, 0).single() {
        Some(time) => format!("Today at {}", time.format("%-I:%M:%S %p")),
        None => "Today".to_string(),
    }
}

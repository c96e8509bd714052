//! Small formatting helpers shared by the report and the CLI.

/// Formats a distance for display: meters under a kilometer, one-decimal
/// kilometers above.
pub fn format_distance(km: f64) -> String {
    let meters = km * 1000.0;
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{km:.1}km")
    }
}

/// Thousands-separated KRW amount, e.g. `30,000원`.
pub fn format_krw(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    format!("{out}원")
}

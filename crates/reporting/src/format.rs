//! Display formatting for amounts, counts and rates.

/// Format `value` with `decimals` places and comma thousands separators.
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    let negative = value < 0.0 && formatted.bytes().any(|b| (b'1'..=b'9').contains(&b));
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `"RM 40,320.00"`
pub fn currency(symbol: &str, amount: f64) -> String {
    format!("{} {}", symbol, grouped(amount, 2))
}

/// Per-unit prices keep four decimals: `"RM 0.0270"`.
pub fn unit_price(symbol: &str, amount: f64) -> String {
    format!("{} {:.4}", symbol, amount)
}

/// Whole count, truncated toward zero: `1162.05` -> `"1,162"`.
pub fn count(value: f64) -> String {
    grouped(value.trunc(), 0)
}

/// Fraction rendered as a percentage: `0.0549` -> `"5.49%"`.
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

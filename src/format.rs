// src/format.rs
//
// Fixed en-US formatting for everything the screens display.

/// `$1,234,567`, whole dollars.
pub fn currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// `$288,000 – $312,000`
pub fn currency_range(min: i64, max: i64) -> String {
    format!("{} – {}", currency(min as f64), currency(max as f64))
}

/// Axis tick: `$300k`.
pub fn thousands_tick(amount: f64) -> String {
    format!("${}k", (amount / 1_000.0).round() as i64)
}

/// `+4.2%` / `-1.5%`
pub fn signed_pct(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{pct}%")
    } else {
        format!("{pct}%")
    }
}

/// Counter display: whole numbers bare, halves with one decimal.
pub fn counter_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
